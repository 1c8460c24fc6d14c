//! Connect session endpoints.

mod types;

pub use types::*;

use crate::account_information::SaltEdgeClient;
use crate::account_information::endpoints::CONNECT_SESSIONS_CREATE;
use crate::error::SaltEdgeError;
use crate::types::Envelope;

impl SaltEdgeClient {
    /// Create a connect session.
    ///
    /// `POST /connect_sessions/create`. The returned `connect_url` is where the
    /// end user links their bank; Salt Edge redirects back to `return_to`
    /// afterwards. See
    /// <https://docs.saltedge.com/account_information/v5/#connect_sessions-create>.
    pub async fn create_connect_session_call(
        &self,
        params: &Envelope<CreateConnectSessionRequest>,
    ) -> Result<Envelope<ConnectSession>, SaltEdgeError> {
        self.post_json(CONNECT_SESSIONS_CREATE, params).await
    }
}
