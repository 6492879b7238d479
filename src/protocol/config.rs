//! Protocol configuration.

use crate::core::{ProtocolError, ProtocolResult};

/// What to do when the status store cannot be read while assembling request
/// metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusReadPolicy {
    /// Log the failure and send the hash as absent. The server then asks for
    /// a full resync, which repairs the stored value.
    #[default]
    TreatAsAbsent,
    /// Abort the request with [`ProtocolError::Status`].
    Propagate,
}

/// Configuration for a [`PlatformProtocol`](super::PlatformProtocol).
///
/// The timeout advertised to the server is fixed by the protocol
/// ([`SYNC_TIMEOUT_MS`](crate::core::SYNC_TIMEOUT_MS)) and is not configurable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolConfig {
    application_token: String,
    status_read_policy: StatusReadPolicy,
}

impl ProtocolConfig {
    /// Configuration with the default status policy. The application token
    /// must not be empty.
    pub fn new(application_token: impl Into<String>) -> ProtocolResult<Self> {
        Self::builder(application_token).build()
    }

    /// Start a builder for the given application.
    pub fn builder(application_token: impl Into<String>) -> ProtocolConfigBuilder {
        ProtocolConfigBuilder::new(application_token)
    }

    /// Application token sent in every request.
    pub fn application_token(&self) -> &str {
        &self.application_token
    }

    /// Handling of status read failures.
    pub fn status_read_policy(&self) -> StatusReadPolicy {
        self.status_read_policy
    }
}

/// Builder for [`ProtocolConfig`].
#[derive(Debug)]
pub struct ProtocolConfigBuilder {
    application_token: String,
    status_read_policy: StatusReadPolicy,
}

impl ProtocolConfigBuilder {
    /// Create a builder for the given application.
    pub fn new(application_token: impl Into<String>) -> Self {
        Self {
            application_token: application_token.into(),
            status_read_policy: StatusReadPolicy::default(),
        }
    }

    /// Set the status read failure policy.
    pub fn status_read_policy(mut self, policy: StatusReadPolicy) -> Self {
        self.status_read_policy = policy;
        self
    }

    /// Build the configuration. The application token must not be empty.
    pub fn build(self) -> ProtocolResult<ProtocolConfig> {
        if self.application_token.is_empty() {
            return Err(ProtocolError::BadParameter("application_token"));
        }
        Ok(ProtocolConfig {
            application_token: self.application_token,
            status_read_policy: self.status_read_policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProtocolConfig::new("token").unwrap();
        assert_eq!(config.application_token(), "token");
        assert_eq!(config.status_read_policy(), StatusReadPolicy::TreatAsAbsent);
    }

    #[test]
    fn test_builder() {
        let config = ProtocolConfig::builder("token")
            .status_read_policy(StatusReadPolicy::Propagate)
            .build()
            .unwrap();
        assert_eq!(config.status_read_policy(), StatusReadPolicy::Propagate);
    }

    #[test]
    fn test_empty_token_rejected() {
        let result = ProtocolConfigBuilder::new("").build();
        assert!(matches!(
            result,
            Err(ProtocolError::BadParameter("application_token"))
        ));
    }

    #[test]
    fn test_new_rejects_empty_token() {
        assert!(matches!(
            ProtocolConfig::new(""),
            Err(ProtocolError::BadParameter("application_token"))
        ));
    }
}
