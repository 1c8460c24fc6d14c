use std::sync::Arc;

use time::macros::date;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use saltedge_client::account_information::{SaltEdgeApiExt, SaltEdgeClient};
use saltedge_client::auth::Credentials;
use saltedge_client::error::{SaltEdgeError, error_classes};

fn build_client(server: &MockServer) -> SaltEdgeClient {
    let credentials = Arc::new(Credentials::new("test_app", "test_secret"));
    SaltEdgeClient::builder()
        .base_url(server.uri())
        .credentials(credentials)
        .build()
}

fn error_body(class: &str, message: &str) -> serde_json::Value {
    serde_json::json!({
        "error": {
            "class": class,
            "message": message,
            "documentation_url": "https://docs.saltedge.com/account_information/v5/#errors"
        },
        "request": { "customer_id": "404" }
    })
}

#[tokio::test]
async fn test_create_customer_duplicate() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(409).set_body_json(error_body(
            error_classes::DUPLICATED_CUSTOMER,
            "Customer with such identifier already exists.",
        )))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.create_customer("user-42").await.unwrap_err();

    match err {
        SaltEdgeError::Api { status, response } => {
            assert_eq!(status, 409);
            assert!(response.is_duplicated_customer());
            assert_eq!(
                response.message(),
                "Customer with such identifier already exists."
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_connect_session_customer_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/connect_sessions/create"))
        .respond_with(ResponseTemplate::new(404).set_body_json(error_body(
            error_classes::CUSTOMER_NOT_FOUND,
            "Customer with id: '404' was not found.",
        )))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client
        .create_connect_session(
            "404",
            Url::parse("https://example.com/callback").unwrap(),
            date!(2020 - 01 - 01),
        )
        .await
        .unwrap_err();

    let response = err.api_response().expect("api error");
    assert!(response.is_customer_not_found());
    assert_eq!(response.request.as_ref().unwrap()["customer_id"], "404");
}

#[tokio::test]
async fn test_get_connections_payload_matches_error_body() {
    let server = MockServer::start().await;
    let body = error_body(error_classes::API_KEY_NOT_FOUND, "API key was not found.");
    Mock::given(method("GET"))
        .and(path("/connections"))
        .respond_with(ResponseTemplate::new(401).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_connections("404").await.unwrap_err();

    let response = err.api_response().expect("api error");
    assert!(response.is_auth_failure());
    assert_eq!(response.class(), body["error"]["class"]);
    assert_eq!(response.message(), body["error"]["message"]);
    assert_eq!(
        response.error.documentation_url.as_deref(),
        body["error"]["documentation_url"].as_str()
    );
    assert_eq!(response.request.as_ref(), Some(&body["request"]));
}

#[tokio::test]
async fn test_server_error_with_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/connections"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(error_body("InternalServerError", "Something went wrong.")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_connections("1").await.unwrap_err();

    assert!(matches!(err, SaltEdgeError::Api { status: 500, .. }));
}

#[tokio::test]
async fn test_failure_without_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/connections"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_connections("1").await.unwrap_err();

    match err {
        SaltEdgeError::InvalidResponse(message) => assert!(message.contains("Bad Gateway")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"unexpected\": true}"))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.create_customer("user").await.unwrap_err();

    assert!(matches!(err, SaltEdgeError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_create_customer_server_error_is_sent_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/customers"))
        .respond_with(
            ResponseTemplate::new(503)
                .set_body_json(error_body("ServiceUnavailable", "Try again later.")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.create_customer("user-42").await.unwrap_err();

    assert!(matches!(err, SaltEdgeError::Api { status: 503, .. }));
    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
}

#[tokio::test]
async fn test_connect_session_server_error_is_sent_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/connect_sessions/create"))
        .respond_with(
            ResponseTemplate::new(502)
                .set_body_json(error_body("InternalServerError", "Upstream failed.")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client
        .create_connect_session(
            "1",
            Url::parse("https://example.com/callback").unwrap(),
            date!(2020 - 01 - 01),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, SaltEdgeError::Api { status: 502, .. }));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}
