//! Common types used across the Salt Edge client library.

pub mod envelope;
pub mod serde_helpers;

pub use envelope::{Envelope, PageMeta};
