//! Integration tests for the Yelp client using wiremock

use integration_yelp::{BusinessSearch, YelpConfig, YelpError, YelpFusionClient};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

fn business(name: &str, address1: &str) -> serde_json::Value {
    serde_json::json!({
        "id": name.to_lowercase().replace(' ', "-"),
        "name": name,
        "rating": 4.5,
        "url": format!("https://www.yelp.com/biz/{}", name.to_lowercase().replace(' ', "-")),
        "location": {
            "address1": address1,
            "city": "Springfield",
            "display_address": [address1, "Springfield, IL 62701"]
        }
    })
}

fn create_test_client(mock_server: &MockServer) -> YelpFusionClient {
    let config = YelpConfig::for_testing(mock_server.uri());
    #[allow(clippy::expect_used)]
    YelpFusionClient::new(config).expect("Failed to create client")
}

#[tokio::test]
async fn test_search_sends_expected_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/businesses/search"))
        .and(query_param("latitude", "39.8"))
        .and(query_param("longitude", "-89.6"))
        .and(query_param("categories", "restaurants"))
        .and(query_param("limit", "5"))
        .and(header("Authorization", "Bearer test-yelp-key"))
        .and(header("Accept-Language", "es"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "businesses": [
                business("Cozy Dog Drive In", "2935 S 6th St"),
                business("Maid-Rite", "118 N Pasfield St")
            ],
            "total": 2
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let results = client.search_nearby(39.8, -89.6).await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].name, "Cozy Dog Drive In");
    assert_eq!(results[0].address.as_deref(), Some("2935 S 6th St"));
    assert_eq!(results[1].name, "Maid-Rite");
}

#[tokio::test]
async fn test_search_truncates_to_limit() {
    let mock_server = MockServer::start().await;

    let businesses: Vec<_> = (0..8)
        .map(|i| business(&format!("Place {i}"), "1 Main St"))
        .collect();

    Mock::given(method("GET"))
        .and(path("/businesses/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "businesses": businesses })),
        )
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let results = client.search_nearby(39.8, -89.6).await.unwrap();

    assert_eq!(results.len(), 5);
    assert_eq!(results[0].name, "Place 0");
    assert_eq!(results[4].name, "Place 4");
}

#[tokio::test]
async fn test_search_empty_businesses() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/businesses/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "businesses": [], "total": 0 })),
        )
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client.search_nearby(39.8, -89.6).await.unwrap_err();
    assert!(err.is_empty_result());
}

#[tokio::test]
async fn test_search_missing_businesses_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/businesses/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "total": 0 })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client.search_nearby(39.8, -89.6).await.unwrap_err();
    assert!(matches!(err, YelpError::NoResults { .. }));
}

#[tokio::test]
async fn test_search_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/businesses/search"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": { "code": "TOKEN_INVALID", "description": "Invalid access token" }
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client.search_nearby(39.8, -89.6).await.unwrap_err();
    assert!(matches!(err, YelpError::AuthenticationFailed(_)));
}

#[tokio::test]
async fn test_search_rate_limited_with_retry_after() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/businesses/search"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "30"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client.search_nearby(39.8, -89.6).await.unwrap_err();
    assert!(matches!(
        err,
        YelpError::RateLimitExceeded {
            retry_after_secs: Some(30)
        }
    ));
}

#[tokio::test]
async fn test_search_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/businesses/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client.search_nearby(39.8, -89.6).await.unwrap_err();
    assert!(matches!(err, YelpError::ServiceUnavailable(_)));
}

#[tokio::test]
async fn test_search_bad_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/businesses/search"))
        .respond_with(ResponseTemplate::new(400).set_body_string("VALIDATION_ERROR"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client.search_nearby(39.8, -89.6).await.unwrap_err();
    match err {
        YelpError::RequestFailed(msg) => assert!(msg.contains("VALIDATION_ERROR")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_search_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/businesses/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client.search_nearby(39.8, -89.6).await.unwrap_err();
    assert!(matches!(err, YelpError::ParseError(_)));
}
