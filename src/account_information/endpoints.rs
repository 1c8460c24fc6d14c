//! Salt Edge Account Information API endpoint constants.

/// Base URL for the Salt Edge Account Information API v5.
pub const SALTEDGE_BASE_URL: &str = "https://www.saltedge.com/api/v5";

/// Create a customer.
pub const CUSTOMERS: &str = "/customers";

/// Create a connect session.
pub const CONNECT_SESSIONS_CREATE: &str = "/connect_sessions/create";

/// List connections.
pub const CONNECTIONS: &str = "/connections";
