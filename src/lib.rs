//! # Salt Edge Client
//!
//! An async Rust client library for the Salt Edge Account Information API v5.
//!
//! ## Features
//!
//! - Customer creation
//! - Connect sessions for linking a customer's bank out of band
//! - Connection listing
//! - A single [`SaltEdgeError::Api`] variant carrying the service's error body
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use saltedge_client::account_information::{SaltEdgeApiExt, SaltEdgeClient};
//! use saltedge_client::auth::Credentials;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SaltEdgeClient::builder()
//!         .credentials(Arc::new(Credentials::new("app_id", "secret")))
//!         .build();
//!     let customer = client.create_customer("user-42").await?;
//!     println!("Customer: {}", customer.id);
//!     Ok(())
//! }
//! ```

pub mod account_information;
pub mod auth;
pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use account_information::{SaltEdgeApi, SaltEdgeApiExt, SaltEdgeClient};
pub use error::SaltEdgeError;
pub use types::Envelope;

/// Result type alias using SaltEdgeError
pub type Result<T> = std::result::Result<T, SaltEdgeError>;
