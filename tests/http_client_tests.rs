//! Integration tests for the HTTP client functionality.
//!
//! These tests verify the session headers, request building, and the
//! status-code classification of real responses served by a mock server.

use squarespace_commerce::clients::{DataType, HttpClient, HttpMethod, HttpRequest};
use squarespace_commerce::{
    ApiKey, ApiVersion, BaseUrl, CommerceConfig, HttpError, InvalidHttpRequestError, ResponseBody,
};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointed at the mock server with the given key.
fn create_test_client(server: &MockServer, api_key: &str) -> HttpClient {
    let config = CommerceConfig::builder()
        .api_key(ApiKey::new(api_key).unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    HttpClient::new(&config).unwrap()
}

fn get(path: &str) -> HttpRequest {
    HttpRequest::builder(HttpMethod::Get, path).build().unwrap()
}

// ============================================================================
// Session Tests
// ============================================================================

#[tokio::test]
async fn test_requests_carry_bearer_token_and_user_agent() {
    let server = MockServer::start().await;
    let client = create_test_client(&server, "key-123");

    Mock::given(method("GET"))
        .and(path("/0.1/commerce/orders"))
        .and(header("Authorization", "Bearer key-123"))
        .and(header("User-Agent", client.user_agent()))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"result": []})))
        .expect(1)
        .mount(&server)
        .await;

    let body = client.request(get("commerce/orders")).await.unwrap();
    assert_eq!(body.json(), Some(&serde_json::json!({"result": []})));
}

#[tokio::test]
async fn test_multiple_clients_keep_their_own_keys() {
    let server = MockServer::start().await;
    let first = create_test_client(&server, "first-key");
    let second = create_test_client(&server, "second-key");

    Mock::given(header("Authorization", "Bearer first-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"who": 1})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(header("Authorization", "Bearer second-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"who": 2})))
        .expect(1)
        .mount(&server)
        .await;

    let a = first.request(get("ping")).await.unwrap().into_json().unwrap();
    let b = second.request(get("ping")).await.unwrap().into_json().unwrap();

    assert_eq!(a["who"], 1);
    assert_eq!(b["who"], 2);
}

#[tokio::test]
async fn test_set_user_agent_applies_to_next_request() {
    let server = MockServer::start().await;
    let mut client = create_test_client(&server, "key");

    Mock::given(header("User-Agent", "Warehouse/4.2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.set_user_agent("Warehouse/4.2");
    let body = client.request(get("commerce/orders")).await.unwrap();

    assert_eq!(body, ResponseBody::NoContent);
}

#[tokio::test]
async fn test_api_version_prefixes_every_path() {
    let server = MockServer::start().await;
    let config = CommerceConfig::builder()
        .api_key(ApiKey::new("key").unwrap())
        .base_url(BaseUrl::new(format!("{}/", server.uri())).unwrap())
        .api_version(ApiVersion::V1_0)
        .build()
        .unwrap();
    let client = HttpClient::new(&config).unwrap();

    Mock::given(path("/1.0/commerce/orders/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "abc"})))
        .expect(1)
        .mount(&server)
        .await;

    client.request(get("/commerce/orders/abc")).await.unwrap();
}

// ============================================================================
// Request Tests
// ============================================================================

#[tokio::test]
async fn test_request_with_query_and_json_body() {
    let server = MockServer::start().await;
    let client = create_test_client(&server, "key");

    Mock::given(method("POST"))
        .and(path("/0.1/commerce/orders/o1/fulfillments"))
        .and(query_param("dryRun", "true"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(serde_json::json!({"shouldSendNotification": true})))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let request = HttpRequest::builder(HttpMethod::Post, "commerce/orders/o1/fulfillments")
        .query_param("dryRun", "true")
        .body(serde_json::json!({"shouldSendNotification": true}))
        .body_type(DataType::Json)
        .build()
        .unwrap();

    let body = client.request(request).await.unwrap();
    assert_eq!(body.json().unwrap()["ok"], true);
}

#[tokio::test]
async fn test_invalid_request_is_rejected_before_sending() {
    let server = MockServer::start().await;
    let client = create_test_client(&server, "key");

    let request = HttpRequest {
        http_method: HttpMethod::Get,
        path: "commerce/orders".to_string(),
        body: Some(serde_json::json!({"key": "value"})),
        body_type: None,
        query: None,
    };

    let result = client.request(request).await;
    assert!(matches!(
        result,
        Err(HttpError::InvalidRequest(InvalidHttpRequestError::MissingBodyType))
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Classification Tests
// ============================================================================

#[tokio::test]
async fn test_unauthorized_maps_to_authentication_error() {
    let server = MockServer::start().await;
    let client = create_test_client(&server, "revoked-key");

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("{\"message\":\"bad key\"}"))
        .mount(&server)
        .await;

    let err = client.request(get("commerce/orders")).await.unwrap_err();

    let HttpError::Authentication(response) = &err else {
        panic!("expected Authentication, got {err:?}");
    };
    assert_eq!(response.code, 401);
    assert!(response.url.ends_with("/0.1/commerce/orders"));
    assert!(response.body.contains("bad key"));
    assert!(!err.to_string().contains("revoked-key"));
}

#[tokio::test]
async fn test_status_ranges_map_to_error_kinds() {
    let server = MockServer::start().await;
    let client = create_test_client(&server, "key");

    for (code, route) in [(202, "accepted"), (404, "missing"), (429, "limited"), (503, "down")] {
        Mock::given(path(format!("/0.1/{route}")))
            .respond_with(ResponseTemplate::new(code).set_body_string(route))
            .mount(&server)
            .await;
    }

    let accepted = client.request(get("accepted")).await.unwrap_err();
    assert!(matches!(accepted, HttpError::UnexpectedSuccess(ref e) if e.code == 202));

    let missing = client.request(get("missing")).await.unwrap_err();
    assert!(matches!(missing, HttpError::ClientRequest(ref e) if e.code == 404));

    let limited = client.request(get("limited")).await.unwrap_err();
    assert!(matches!(limited, HttpError::ClientRequest(ref e) if e.code == 429));

    let down = client.request(get("down")).await.unwrap_err();
    assert!(matches!(down, HttpError::Server(ref e) if e.body == "down"));
    assert!(down.is_retryable());
}

#[tokio::test]
async fn test_undecodable_success_body_is_invalid_json() {
    let server = MockServer::start().await;
    let client = create_test_client(&server, "key");

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client.request(get("commerce/orders")).await.unwrap_err();

    let HttpError::InvalidJson { response, .. } = &err else {
        panic!("expected InvalidJson, got {err:?}");
    };
    assert_eq!(response.code, 200);
    assert_eq!(response.body, "<html>maintenance</html>");
}
