//! Types for connection endpoints.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// State of a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    /// Connection is usable and refreshes succeed
    Active,
    /// Last attempt failed or consent expired
    Inactive,
    /// Disabled by the client or by Salt Edge
    Disabled,
    /// A status this client does not know yet
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ConnectionStatus::Active => "active",
            ConnectionStatus::Inactive => "inactive",
            ConnectionStatus::Disabled => "disabled",
            ConnectionStatus::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// A link between a customer and one provider (bank).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Connection {
    /// Connection id.
    pub id: String,
    /// Owning customer id.
    pub customer_id: String,
    /// Provider id.
    #[serde(default)]
    pub provider_id: Option<String>,
    /// Provider code (e.g., "fakebank_simple_xf").
    #[serde(default)]
    pub provider_code: String,
    /// Provider display name.
    #[serde(default)]
    pub provider_name: String,
    /// ISO country code of the provider.
    #[serde(default)]
    pub country_code: Option<String>,
    /// Current status.
    #[serde(default = "unknown_status")]
    pub status: ConnectionStatus,
    /// Connection secret.
    #[serde(default)]
    pub secret: Option<String>,
    /// Categorization type ("none", "personal", "business").
    #[serde(default)]
    pub categorization: Option<String>,
    /// Whether Salt Edge refreshes the connection daily.
    #[serde(default)]
    pub daily_refresh: bool,
    /// Whether credentials are stored for background refresh.
    #[serde(default)]
    pub store_credentials: bool,
    /// Id of the consent last given.
    #[serde(default)]
    pub last_consent_id: Option<String>,
    /// Time of the last successful attempt.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_success_at: Option<OffsetDateTime>,
    /// Earliest time a manual refresh is allowed.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub next_refresh_possible_at: Option<OffsetDateTime>,
    /// Creation time.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    /// Last update time.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    /// Last attempt, kept as raw JSON.
    #[serde(default)]
    pub last_attempt: Option<serde_json::Value>,
}

fn unknown_status() -> ConnectionStatus {
    ConnectionStatus::Unknown
}

impl Connection {
    /// Whether the connection is active.
    pub fn is_active(&self) -> bool {
        self.status == ConnectionStatus::Active
    }
}
