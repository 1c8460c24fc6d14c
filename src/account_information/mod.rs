//! Salt Edge Account Information API client.
//!
//! Provides customer creation, connect sessions and connection listing.
//!
//! # Trait-based API
//!
//! The [`SaltEdgeApi`] trait maps each operation to its endpoint, taking and
//! returning `{"data": ...}` envelopes. [`SaltEdgeApiExt`] builds on it with
//! convenience methods that construct the request payload and unwrap the
//! response. Implement [`SaltEdgeApi`] on a mock to exercise code that uses
//! the convenience methods without a network.
//!
//! ```rust,ignore
//! use saltedge_client::account_information::{SaltEdgeApi, SaltEdgeApiExt};
//!
//! async fn list<C: SaltEdgeApi>(client: &C) -> Result<(), saltedge_client::SaltEdgeError> {
//!     for connection in client.get_connections("111111111111111111").await? {
//!         println!("{}: {:?}", connection.provider_name, connection.status);
//!     }
//!     Ok(())
//! }
//! ```

mod client;
pub mod connect_sessions;
pub mod connections;
pub mod customers;
mod endpoints;
mod traits;

pub use client::{SaltEdgeClient, SaltEdgeClientBuilder};
pub use endpoints::*;
pub use traits::{SaltEdgeApi, SaltEdgeApiExt};
