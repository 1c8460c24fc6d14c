//! Connection endpoints.

mod types;

pub use types::*;

use crate::account_information::SaltEdgeClient;
use crate::account_information::endpoints::CONNECTIONS;
use crate::error::SaltEdgeError;
use crate::types::Envelope;

impl SaltEdgeClient {
    /// List the connections of a customer.
    ///
    /// `GET /connections?customer_id=...`. Only the first page is fetched;
    /// the envelope's `meta` tells whether more exist.
    ///
    /// # Arguments
    ///
    /// * `customer_id` - Salt Edge customer id.
    pub async fn get_connections_call(
        &self,
        customer_id: &str,
    ) -> Result<Envelope<Vec<Connection>>, SaltEdgeError> {
        #[derive(serde::Serialize)]
        struct Params<'a> {
            customer_id: &'a str,
        }
        self.get_with_params(CONNECTIONS, &Params { customer_id })
            .await
    }
}
