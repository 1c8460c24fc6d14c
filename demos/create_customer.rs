//! Example: Create a customer and list their connections.
//!
//! Run with: cargo run --example create_customer -- <identifier>
//!
//! Reads `SALTEDGE_APP_ID` and `SALTEDGE_SECRET` from the environment.

use std::sync::Arc;

use saltedge_client::account_information::{SaltEdgeApiExt, SaltEdgeClient};
use saltedge_client::auth::Credentials;
use saltedge_client::error::SaltEdgeError;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let identifier = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demo-customer".to_string());

    let Some(credentials) = Credentials::from_env() else {
        println!("Set SALTEDGE_APP_ID and SALTEDGE_SECRET to run this example.");
        return Ok(());
    };
    let client = SaltEdgeClient::builder()
        .credentials(Arc::new(credentials))
        .build();

    let customer = match client.create_customer(&identifier).await {
        Ok(customer) => customer,
        Err(SaltEdgeError::Api { response, .. }) if response.is_duplicated_customer() => {
            println!("Customer '{}' already exists", identifier);
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    println!("Created customer {} ({})", customer.id, customer.identifier);

    let connections = client.get_connections(&customer.id).await?;
    println!("{} connection(s)", connections.len());

    Ok(())
}
