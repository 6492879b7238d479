//! Two-state section slot.

use crate::codec::{Decode, Encode, Reader, Writer};
use crate::core::CodecError;

/// One feature's slot in the envelope.
///
/// On the wire this is a `[T, null]` union: `Absent` costs a single byte and
/// carries no nested content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Section<T> {
    /// No content for this feature in this round trip.
    #[default]
    Absent,
    /// Feature content.
    Present(T),
}

impl<T> Section<T> {
    /// Whether the slot carries content.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }
}

impl<T> From<Option<T>> for Section<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T: Encode> Encode for Section<T> {
    fn encoded_len(&self) -> usize {
        match self {
            Self::Present(value) => 1 + value.encoded_len(),
            Self::Absent => 1,
        }
    }

    fn encode(&self, writer: &mut Writer<'_>) -> Result<(), CodecError> {
        writer.put_union_branch(self.is_present())?;
        match self {
            Self::Present(value) => value.encode(writer),
            Self::Absent => Ok(()),
        }
    }
}

impl<T: Decode> Decode for Section<T> {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, CodecError> {
        Ok(Option::<T>::decode(reader)?.into())
    }
}
