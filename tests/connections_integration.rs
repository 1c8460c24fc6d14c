use std::sync::Arc;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use saltedge_client::account_information::connections::ConnectionStatus;
use saltedge_client::account_information::{SaltEdgeApiExt, SaltEdgeClient};
use saltedge_client::auth::Credentials;

fn build_client(server: &MockServer) -> SaltEdgeClient {
    let credentials = Arc::new(Credentials::new("test_app", "test_secret"));
    SaltEdgeClient::builder()
        .base_url(server.uri())
        .credentials(credentials)
        .build()
}

fn connection_json(id: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "customer_id": "222222222222222222",
        "provider_id": "1234",
        "provider_code": "fakebank_simple_xf",
        "provider_name": "Fakebank Simple",
        "country_code": "XF",
        "status": status,
        "daily_refresh": false,
        "store_credentials": true,
        "created_at": "2020-06-15T09:40:51Z",
        "updated_at": "2020-07-15T09:40:51Z"
    })
}

async fn mount_connections(server: &MockServer, customer_id: &str, data: Vec<serde_json::Value>) {
    let response = serde_json::json!({
        "data": data,
        "meta": { "next_id": null, "next_page": null }
    });
    Mock::given(method("GET"))
        .and(path("/connections"))
        .and(query_param("customer_id", customer_id))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_get_connections_empty() {
    let server = MockServer::start().await;
    mount_connections(&server, "100", vec![]).await;

    let client = build_client(&server);
    let connections = client.get_connections("100").await.unwrap();

    assert!(connections.is_empty());
}

#[tokio::test]
async fn test_get_connections_single() {
    let server = MockServer::start().await;
    mount_connections(&server, "101", vec![connection_json("1", "active")]).await;

    let client = build_client(&server);
    let connections = client.get_connections("101").await.unwrap();

    assert_eq!(connections.len(), 1);
    assert_eq!(connections[0].id, "1");
    assert!(connections[0].is_active());
}

#[tokio::test]
async fn test_get_connections_many_keeps_order() {
    let server = MockServer::start().await;
    mount_connections(
        &server,
        "102",
        vec![
            connection_json("1", "active"),
            connection_json("2", "inactive"),
            connection_json("3", "disabled"),
        ],
    )
    .await;

    let client = build_client(&server);
    let connections = client.get_connections("102").await.unwrap();

    let ids: Vec<&str> = connections.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3"]);
    assert_eq!(connections[1].status, ConnectionStatus::Inactive);
    assert_eq!(connections[2].status, ConnectionStatus::Disabled);
}

#[tokio::test]
async fn test_get_connections_call_exposes_meta() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "data": [connection_json("1", "active")],
        "meta": { "next_id": "2", "next_page": "/api/v5/connections?customer_id=103&from_id=2" }
    });
    Mock::given(method("GET"))
        .and(path("/connections"))
        .and(query_param("customer_id", "103"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let envelope = client.get_connections_call("103").await.unwrap();

    assert_eq!(envelope.data.len(), 1);
    assert!(envelope.meta.unwrap().has_next());
}

#[tokio::test]
async fn test_get_connections_keeps_unrecognized_status() {
    let server = MockServer::start().await;
    let mut sparse = connection_json("2", "suspended");
    sparse.as_object_mut().unwrap().remove("provider_name");
    mount_connections(&server, "104", vec![connection_json("1", "active"), sparse]).await;

    let client = build_client(&server);
    let connections = client.get_connections("104").await.unwrap();

    assert_eq!(connections.len(), 2);
    assert_eq!(connections[1].status, ConnectionStatus::Unknown);
    assert!(connections[1].provider_name.is_empty());
}
