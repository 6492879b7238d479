//! Feature tags a sync can be requested for.

use std::fmt;

/// A feature of the endpoint that syncs through the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Service {
    /// Server discovery; not carried by this envelope.
    Bootstrap,
    /// Endpoint profile.
    Profile,
    /// User-account linkage.
    User,
    /// Event exchange.
    Event,
    /// Log upload.
    Logging,
    /// Notifications; always absent.
    Notification,
    /// Configuration; always absent.
    Configuration,
}

impl Service {
    /// Feature name as used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bootstrap => "bootstrap",
            Self::Profile => "profile",
            Self::User => "user",
            Self::Event => "event",
            Self::Logging => "logging",
            Self::Notification => "notification",
            Self::Configuration => "configuration",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric service codes shared with the transport layer. Unknown codes
/// yield `Err` with the raw value so callers can skip them.
impl TryFrom<u8> for Service {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Bootstrap),
            1 => Ok(Self::Profile),
            2 => Ok(Self::User),
            3 => Ok(Self::Event),
            4 => Ok(Self::Logging),
            5 => Ok(Self::Configuration),
            6 => Ok(Self::Notification),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(Service::try_from(1), Ok(Service::Profile));
        assert_eq!(Service::try_from(4), Ok(Service::Logging));
        assert_eq!(Service::try_from(42), Err(42));
    }

    #[test]
    fn test_display() {
        assert_eq!(Service::Event.to_string(), "event");
    }
}
