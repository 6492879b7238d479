//! Core constants, error types, and collaborator traits.

mod constants;
mod error;
mod traits;

pub use constants::*;
pub use error::*;
pub use traits::*;
