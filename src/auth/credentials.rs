//! Application credentials sent as the `App-id` and `Secret` headers.

use reqwest::header::HeaderValue;
use reqwest_middleware::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

use crate::error::SaltEdgeError;

/// Header carrying the application id.
pub const APP_ID_HEADER: &str = "App-id";

/// Header carrying the application secret.
pub const SECRET_HEADER: &str = "Secret";

/// Default environment variable holding the application id.
pub const APP_ID_ENV: &str = "SALTEDGE_APP_ID";

/// Default environment variable holding the application secret.
pub const SECRET_ENV: &str = "SALTEDGE_SECRET";

/// The App-id/Secret pair identifying a Salt Edge client application.
///
/// The secret is only readable while [`apply`](Credentials::apply) builds the
/// `Secret` header, which is marked sensitive so it stays out of logs.
#[derive(Clone, Debug)]
pub struct Credentials {
    /// Application id, as shown in the Salt Edge dashboard.
    pub app_id: String,
    secret: SecretString,
}

impl Credentials {
    /// Create credentials from an application id and secret.
    pub fn new(app_id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            secret: SecretString::from(secret.into()),
        }
    }

    /// Read `SALTEDGE_APP_ID` and `SALTEDGE_SECRET`.
    ///
    /// Returns `None` unless both are set.
    pub fn from_env() -> Option<Self> {
        Self::from_env_vars(APP_ID_ENV, SECRET_ENV)
    }

    /// Read the pair from custom environment variable names.
    pub fn from_env_vars(app_id_var: &str, secret_var: &str) -> Option<Self> {
        let app_id = std::env::var(app_id_var).ok()?;
        let secret = std::env::var(secret_var).ok()?;
        Some(Self::new(app_id, secret))
    }

    /// Attach the `App-id` and `Secret` headers to a request.
    pub fn apply(&self, request: RequestBuilder) -> Result<RequestBuilder, SaltEdgeError> {
        let app_id = HeaderValue::from_str(&self.app_id).map_err(|_| {
            SaltEdgeError::InvalidCredentials("App-id is not a valid header value")
        })?;
        let mut secret = HeaderValue::from_str(self.secret.expose_secret()).map_err(|_| {
            SaltEdgeError::InvalidCredentials("Secret is not a valid header value")
        })?;
        secret.set_sensitive(true);

        Ok(request.header(APP_ID_HEADER, app_id).header(SECRET_HEADER, secret))
    }
}

/// Source of the credentials attached to each request.
///
/// [`Credentials`] provides itself. Implement this to look the pair up
/// elsewhere, e.g. a secrets manager that rotates the secret.
pub trait CredentialsProvider: Send + Sync {
    /// The credentials for the next request.
    fn credentials(&self) -> &Credentials;
}

impl CredentialsProvider for Credentials {
    fn credentials(&self) -> &Credentials {
        self
    }
}
