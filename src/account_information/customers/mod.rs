//! Customer endpoints.

mod types;

pub use types::*;

use crate::account_information::SaltEdgeClient;
use crate::account_information::endpoints::CUSTOMERS;
use crate::error::SaltEdgeError;
use crate::types::Envelope;

impl SaltEdgeClient {
    /// Create a customer.
    ///
    /// `POST /customers`. See
    /// <https://docs.saltedge.com/account_information/v5/#customers-create>.
    ///
    /// Most callers want [`SaltEdgeApiExt::create_customer`](crate::SaltEdgeApiExt::create_customer),
    /// which builds the envelope from an identifier.
    pub async fn create_customer_call(
        &self,
        params: &Envelope<CreateCustomerRequest>,
    ) -> Result<Envelope<Customer>, SaltEdgeError> {
        self.post_json(CUSTOMERS, params).await
    }
}
