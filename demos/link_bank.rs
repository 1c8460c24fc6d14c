//! Example: Start a bank-linking flow for an existing customer.
//!
//! Run with: cargo run --example link_bank -- <customer_id> <return_url>

use std::sync::Arc;

use saltedge_client::account_information::{SaltEdgeApiExt, SaltEdgeClient};
use saltedge_client::auth::Credentials;
use time::{Duration, OffsetDateTime};
use tracing_subscriber::EnvFilter;
use url::Url;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(customer_id), Some(return_to)) = (args.next(), args.next()) else {
        println!("usage: link_bank <customer_id> <return_url>");
        return Ok(());
    };
    let return_to = Url::parse(&return_to)?;

    let Some(credentials) = Credentials::from_env() else {
        println!("Set SALTEDGE_APP_ID and SALTEDGE_SECRET to run this example.");
        return Ok(());
    };
    let client = SaltEdgeClient::builder()
        .credentials(Arc::new(credentials))
        .timeout(std::time::Duration::from_secs(30))
        .build();

    // Ask for the last 90 days of history.
    let from_date = (OffsetDateTime::now_utc() - Duration::days(90)).date();
    let session = client
        .create_connect_session(&customer_id, return_to, from_date)
        .await?;

    println!("Send the user to: {}", session.connect_url);
    if let Some(expires_at) = session.expires_at {
        println!("Link expires at {}", expires_at);
    }

    Ok(())
}
