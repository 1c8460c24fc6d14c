//! Trait definitions for the Salt Edge API client.
//!
//! [`SaltEdgeApi`] maps each operation to its endpoint and works in terms of
//! `{"data": ...}` envelopes. [`SaltEdgeApiExt`] is implemented for every
//! [`SaltEdgeApi`] and provides the convenience methods most callers use.
//!
//! # Example
//!
//! ```rust,ignore
//! use saltedge_client::account_information::{SaltEdgeApi, SaltEdgeApiExt};
//!
//! async fn onboard<C: SaltEdgeApi>(client: &C) -> Result<(), saltedge_client::SaltEdgeError> {
//!     let customer = client.create_customer("user-42").await?;
//!     println!("Created {}", customer.id);
//!     Ok(())
//! }
//! ```

use std::future::Future;

use time::Date;
use url::Url;

use crate::account_information::connect_sessions::{ConnectSession, CreateConnectSessionRequest};
use crate::account_information::connections::Connection;
use crate::account_information::customers::{CreateCustomerRequest, Customer};
use crate::error::SaltEdgeError;
use crate::types::Envelope;

/// Trait defining the Salt Edge endpoints.
///
/// This trait enables dependency injection and allows for:
/// - Testing with mock implementations
/// - Wrapping with decorators
///
/// Every failure response is reported as [`SaltEdgeError::Api`] carrying the
/// parsed error body.
pub trait SaltEdgeApi: Send + Sync {
    /// `POST /customers`.
    fn create_customer_call(
        &self,
        params: &Envelope<CreateCustomerRequest>,
    ) -> impl Future<Output = Result<Envelope<Customer>, SaltEdgeError>> + Send;

    /// `POST /connect_sessions/create`.
    fn create_connect_session_call(
        &self,
        params: &Envelope<CreateConnectSessionRequest>,
    ) -> impl Future<Output = Result<Envelope<ConnectSession>, SaltEdgeError>> + Send;

    /// `GET /connections`.
    fn get_connections_call(
        &self,
        customer_id: &str,
    ) -> impl Future<Output = Result<Envelope<Vec<Connection>>, SaltEdgeError>> + Send;
}

/// Convenience methods that build request payloads and unwrap responses.
pub trait SaltEdgeApiExt: SaltEdgeApi {
    /// Create a customer just by specifying the desired identifier.
    fn create_customer(
        &self,
        identifier: &str,
    ) -> impl Future<Output = Result<Customer, SaltEdgeError>> + Send {
        let params = Envelope::new(CreateCustomerRequest::new(identifier));
        async move {
            let response = self.create_customer_call(&params).await?;
            Ok(response.into_data())
        }
    }

    /// Request a connect session with scopes `account_details` and
    /// `transactions_details`, with access starting from `from_date`.
    ///
    /// # Arguments
    ///
    /// * `customer_id` - Salt Edge customer id.
    /// * `return_to` - Where the user is redirected after linking.
    /// * `from_date` - Start date of requested access.
    fn create_connect_session(
        &self,
        customer_id: &str,
        return_to: Url,
        from_date: Date,
    ) -> impl Future<Output = Result<ConnectSession, SaltEdgeError>> + Send {
        let params = Envelope::new(CreateConnectSessionRequest::new(
            customer_id,
            return_to,
            from_date,
        ));
        async move {
            let response = self.create_connect_session_call(&params).await?;
            Ok(response.into_data())
        }
    }

    /// Get all connections of a customer.
    fn get_connections(
        &self,
        customer_id: &str,
    ) -> impl Future<Output = Result<Vec<Connection>, SaltEdgeError>> + Send {
        async move {
            let response = self.get_connections_call(customer_id).await?;
            Ok(response.into_data())
        }
    }
}

impl<T: SaltEdgeApi> SaltEdgeApiExt for T {}
