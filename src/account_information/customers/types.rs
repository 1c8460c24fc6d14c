//! Types for customer endpoints.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Request to create a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateCustomerRequest {
    /// Unique identifier of the customer on the caller's side.
    pub identifier: String,
}

impl CreateCustomerRequest {
    /// Create a new request for the given identifier.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}

/// A customer: one end user, scoped to the calling application.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Customer {
    /// Salt Edge customer id.
    pub id: String,
    /// The identifier given at creation.
    pub identifier: String,
    /// Customer secret, used by some widget flows.
    #[serde(default)]
    pub secret: Option<String>,
    /// When the customer was blocked, if it is.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub blocked_at: Option<OffsetDateTime>,
    /// Creation time.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    /// Last update time.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

impl Customer {
    /// Whether the customer has been blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked_at.is_some()
    }
}
