//! Envelope model
//!
//! In-memory form of one outbound request and one inbound response. Every
//! feature owns one [`Section`] slot; presence is explicit in the type, so a
//! slot can never claim content it does not carry.

mod request;
mod response;
mod section;
mod service;

pub use request::*;
pub use response::*;
pub use section::*;
pub use service::*;
