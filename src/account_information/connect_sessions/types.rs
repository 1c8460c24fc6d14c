//! Types for connect session endpoints.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use url::Url;

use crate::types::serde_helpers::date_only;

/// Data a customer can consent to share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsentScope {
    /// Account details (names, numbers, balances)
    AccountDetails,
    /// Transaction details
    TransactionsDetails,
}

impl std::fmt::Display for ConsentScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsentScope::AccountDetails => write!(f, "account_details"),
            ConsentScope::TransactionsDetails => write!(f, "transactions_details"),
        }
    }
}

/// Scopes requested by [`CreateConnectSessionRequest::new`].
pub const DEFAULT_SCOPES: [ConsentScope; 2] = [
    ConsentScope::AccountDetails,
    ConsentScope::TransactionsDetails,
];

/// Request to create a connect session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateConnectSessionRequest {
    /// The customer the connection will belong to.
    pub customer_id: String,
    /// What the customer is asked to consent to.
    pub consent: Consent,
    /// Options for the connection attempt.
    pub attempt: Attempt,
}

impl CreateConnectSessionRequest {
    /// Create a request for account and transaction details from `from_date`,
    /// redirecting the user to `return_to` when done.
    pub fn new(customer_id: impl Into<String>, return_to: Url, from_date: Date) -> Self {
        Self {
            customer_id: customer_id.into(),
            consent: Consent {
                scopes: DEFAULT_SCOPES.to_vec(),
                from_date,
            },
            attempt: Attempt { return_to },
        }
    }
}

/// Consent requested from the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Consent {
    /// Requested data scopes.
    pub scopes: Vec<ConsentScope>,
    /// First day of data access.
    #[serde(with = "date_only")]
    pub from_date: Date,
}

/// Connection attempt options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attempt {
    /// Where the user is redirected after the bank-linking flow.
    pub return_to: Url,
}

/// A connect session: a short-lived link for the end user to follow.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConnectSession {
    /// URL the end user should be sent to.
    pub connect_url: String,
    /// When the URL stops working.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub expires_at: Option<OffsetDateTime>,
}
