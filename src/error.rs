//! Error types for the Salt Edge client library.

use serde::Deserialize;
use thiserror::Error;

/// The main error type for all Salt Edge client operations.
#[derive(Error, Debug)]
pub enum SaltEdgeError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Salt Edge answered with an error payload
    #[error("Salt Edge API error (HTTP {status}): {response}")]
    Api {
        /// HTTP status code of the failed response
        status: u16,
        /// The parsed error body
        response: ErrorResponse,
    },

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Missing required credentials
    #[error("Missing credentials: App-id and Secret are required")]
    MissingCredentials,

    /// Credentials cannot be sent as headers
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(&'static str),
}

impl SaltEdgeError {
    /// The parsed error body, if this is an API error.
    pub fn api_response(&self) -> Option<&ErrorResponse> {
        match self {
            SaltEdgeError::Api { response, .. } => Some(response),
            _ => None,
        }
    }
}

/// Error body returned by Salt Edge on a failed request.
///
/// ```json
/// {
///   "error": {
///     "class": "CustomerNotFound",
///     "message": "Customer with id: '123' was not found.",
///     "documentation_url": "https://docs.saltedge.com/account_information/v5/#errors-customer_not_found"
///   },
///   "request": { "customer_id": "123" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorResponse {
    /// Error details.
    pub error: ErrorDetail,
    /// Echo of the request parameters, when the service includes it.
    #[serde(default)]
    pub request: Option<serde_json::Value>,
}

/// The `error` object of an [`ErrorResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorDetail {
    /// Error class name (e.g., "CustomerNotFound")
    pub class: String,
    /// Human-readable error message
    pub message: String,
    /// Link to the error's documentation
    #[serde(default)]
    pub documentation_url: Option<String>,
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error.class, self.error.message)
    }
}

impl ErrorResponse {
    /// Create an error response from class and message.
    pub fn new(class: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                class: class.into(),
                message: message.into(),
                documentation_url: None,
            },
            request: None,
        }
    }

    /// The error class name.
    pub fn class(&self) -> &str {
        &self.error.class
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.error.message
    }

    /// Check if the referenced customer does not exist.
    pub fn is_customer_not_found(&self) -> bool {
        self.error.class == error_classes::CUSTOMER_NOT_FOUND
    }

    /// Check if a customer with the same identifier already exists.
    pub fn is_duplicated_customer(&self) -> bool {
        self.error.class == error_classes::DUPLICATED_CUSTOMER
    }

    /// Check if the referenced connection does not exist.
    pub fn is_connection_not_found(&self) -> bool {
        self.error.class == error_classes::CONNECTION_NOT_FOUND
    }

    /// Check if the request was rejected because of the App-id/Secret pair.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self.error.class.as_str(),
            error_classes::API_KEY_NOT_FOUND
                | error_classes::CLIENT_DISABLED
                | error_classes::CLIENT_NOT_FOUND
                | error_classes::ACCESS_DENIED
        )
    }
}

/// Known Salt Edge error classes for pattern matching.
pub mod error_classes {
    /// Client errors
    pub const API_KEY_NOT_FOUND: &str = "ApiKeyNotFound";
    pub const ACCESS_DENIED: &str = "AccessDenied";
    pub const CLIENT_DISABLED: &str = "ClientDisabled";
    pub const CLIENT_NOT_FOUND: &str = "ClientNotFound";

    /// Customer errors
    pub const CUSTOMER_NOT_FOUND: &str = "CustomerNotFound";
    pub const CUSTOMER_LOCKED: &str = "CustomerLocked";
    pub const DUPLICATED_CUSTOMER: &str = "DuplicatedCustomer";

    /// Connection errors
    pub const CONNECTION_NOT_FOUND: &str = "ConnectionNotFound";

    /// Request errors
    pub const WRONG_REQUEST_FORMAT: &str = "WrongRequestFormat";
    pub const DATE_OUT_OF_RANGE: &str = "DateOutOfRange";
    pub const RETURN_URL_INVALID: &str = "ReturnURLInvalid";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_from_json() {
        let body = r#"{
            "error": {
                "class": "DuplicatedCustomer",
                "message": "Customer with such identifier already exists.",
                "documentation_url": "https://docs.saltedge.com/account_information/v5/#errors"
            },
            "request": { "identifier": "user-1" }
        }"#;
        let response: ErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.class(), "DuplicatedCustomer");
        assert!(response.is_duplicated_customer());
        assert!(!response.is_customer_not_found());
        assert_eq!(response.request.unwrap()["identifier"], "user-1");
    }

    #[test]
    fn test_error_response_without_request_echo() {
        let body = r#"{"error": {"class": "ClientDisabled", "message": "Client disabled."}}"#;
        let response: ErrorResponse = serde_json::from_str(body).unwrap();
        assert!(response.is_auth_failure());
        assert!(response.request.is_none());
        assert!(response.error.documentation_url.is_none());
    }

    #[test]
    fn test_api_error_display() {
        let error = SaltEdgeError::Api {
            status: 404,
            response: ErrorResponse::new("CustomerNotFound", "Customer was not found."),
        };
        assert_eq!(
            error.to_string(),
            "Salt Edge API error (HTTP 404): CustomerNotFound: Customer was not found."
        );
        assert!(error.api_response().unwrap().is_customer_not_found());
    }
}
