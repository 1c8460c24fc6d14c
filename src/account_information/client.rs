//! Salt Edge REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, RequestBuilder};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;

use crate::account_information::connect_sessions::{ConnectSession, CreateConnectSessionRequest};
use crate::account_information::connections::Connection;
use crate::account_information::customers::{CreateCustomerRequest, Customer};
use crate::account_information::endpoints::SALTEDGE_BASE_URL;
use crate::account_information::traits::SaltEdgeApi;
use crate::auth::CredentialsProvider;
use crate::error::{ErrorResponse, SaltEdgeError};
use crate::types::Envelope;

/// The Salt Edge Account Information API client.
///
/// Every call is a single JSON round trip. The client is cheap to clone and
/// holds no mutable state, so calls may be issued concurrently.
///
/// # Example
///
/// ```rust,no_run
/// use saltedge_client::account_information::{SaltEdgeApiExt, SaltEdgeClient};
/// use saltedge_client::auth::Credentials;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(Credentials::new("app_id", "secret"));
///     let client = SaltEdgeClient::builder()
///         .credentials(credentials)
///         .build();
///
///     let connections = client.get_connections("111111111111111111").await?;
///     println!("Connections: {:?}", connections);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct SaltEdgeClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
}

impl SaltEdgeClient {
    /// Create a new client with default settings.
    ///
    /// The client has no credentials, so every call fails with
    /// [`SaltEdgeError::MissingCredentials`]. Use [`SaltEdgeClient::builder()`]
    /// to configure them.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> SaltEdgeClientBuilder {
        SaltEdgeClientBuilder::new()
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make an authenticated GET request with query parameters.
    pub(crate) async fn get_with_params<T, Q>(
        &self,
        endpoint: &str,
        params: &Q,
    ) -> Result<T, SaltEdgeError>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let query_string = serde_urlencoded::to_string(params)
            .map_err(|e| SaltEdgeError::InvalidResponse(e.to_string()))?;
        let url = if query_string.is_empty() {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}{}?{}", self.base_url, endpoint, query_string)
        };

        tracing::debug!(endpoint, "GET");
        let request = self.authorize(self.http_client.get(&url))?;
        let response = request.send().await?;
        self.parse_response(response).await
    }

    /// Make an authenticated POST request with a JSON body.
    pub(crate) async fn post_json<T, B>(&self, endpoint: &str, body: &B) -> Result<T, SaltEdgeError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let payload = serde_json::to_vec(body)?;
        let url = format!("{}{}", self.base_url, endpoint);

        tracing::debug!(endpoint, "POST");
        let request = self.authorize(
            self.http_client
                .post(&url)
                .header(CONTENT_TYPE, "application/json")
                .body(payload),
        )?;
        let response = request.send().await?;
        self.parse_response(response).await
    }

    /// Attach the App-id and Secret headers.
    fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder, SaltEdgeError> {
        let provider = self
            .credentials
            .as_ref()
            .ok_or(SaltEdgeError::MissingCredentials)?;
        provider.credentials().apply(request)
    }

    /// Parse a response from the Salt Edge API.
    ///
    /// This is the one place failure responses are translated: any non-2xx
    /// status carrying a Salt Edge error body becomes [`SaltEdgeError::Api`].
    async fn parse_response<T>(&self, response: reqwest::Response) -> Result<T, SaltEdgeError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(match serde_json::from_str::<ErrorResponse>(&body) {
                Ok(error_response) => {
                    tracing::warn!(
                        status = status.as_u16(),
                        class = %error_response.error.class,
                        "Salt Edge request failed: {}",
                        error_response.error.message
                    );
                    SaltEdgeError::Api {
                        status: status.as_u16(),
                        response: error_response,
                    }
                }
                Err(_) => SaltEdgeError::InvalidResponse(format!("HTTP {}: {}", status, body)),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            SaltEdgeError::InvalidResponse(format!("Failed to parse response: {}. Body: {}", e, body))
        })
    }
}

impl Default for SaltEdgeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SaltEdgeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaltEdgeClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// Builder for [`SaltEdgeClient`].
pub struct SaltEdgeClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    max_retries: u32,
}

impl SaltEdgeClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: SALTEDGE_BASE_URL.to_string(),
            credentials: None,
            user_agent: None,
            timeout: None,
            max_retries: 0,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the credentials provider supplying the App-id and Secret.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set a total timeout for each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Retry transient failures (connection errors, 5xx, 408, 429) up to
    /// `retries` times with exponential backoff.
    ///
    /// Off by default. Retries apply to every call, including the
    /// non-idempotent `POST`s, so a retried create may be executed twice.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Build the client.
    pub fn build(self) -> SaltEdgeClient {
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("saltedge-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("saltedge-client"));
        headers.insert(USER_AGENT, header_value);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut reqwest_builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            reqwest_builder = reqwest_builder.timeout(timeout);
        }
        let reqwest_client = reqwest_builder
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let mut client_builder =
            ClientBuilder::new(reqwest_client).with(TracingMiddleware::default());
        if self.max_retries > 0 {
            let retry_policy =
                ExponentialBackoff::builder().build_with_max_retries(self.max_retries);
            client_builder =
                client_builder.with(RetryTransientMiddleware::new_with_policy(retry_policy));
        }
        let client = client_builder.build();

        SaltEdgeClient {
            http_client: client,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            credentials: self.credentials,
        }
    }
}

impl Default for SaltEdgeClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// SaltEdgeApi trait implementation.

impl SaltEdgeApi for SaltEdgeClient {
    async fn create_customer_call(
        &self,
        params: &Envelope<CreateCustomerRequest>,
    ) -> Result<Envelope<Customer>, SaltEdgeError> {
        SaltEdgeClient::create_customer_call(self, params).await
    }

    async fn create_connect_session_call(
        &self,
        params: &Envelope<CreateConnectSessionRequest>,
    ) -> Result<Envelope<ConnectSession>, SaltEdgeError> {
        SaltEdgeClient::create_connect_session_call(self, params).await
    }

    async fn get_connections_call(
        &self,
        customer_id: &str,
    ) -> Result<Envelope<Vec<Connection>>, SaltEdgeError> {
        SaltEdgeClient::get_connections_call(self, customer_id).await
    }
}
