//! Middleware tests.

mod helpers;

use helpers::TestClient;
use shutter_server::create_router;
use uuid::Uuid;

fn client() -> TestClient {
    TestClient::new(create_router())
}

// === Request ID ===

#[tokio::test]
async fn response_includes_request_id() {
    let response = client().get("/health").await;

    response.assert_header_exists("x-request-id");
}

#[tokio::test]
async fn request_id_is_valid_uuid() {
    let response = client().get("/health").await;

    let id = response.header("x-request-id").unwrap();
    let parsed = Uuid::parse_str(id);

    assert!(parsed.is_ok(), "Invalid UUID: {}", id);
}

#[tokio::test]
async fn propagates_incoming_request_id() {
    let custom_id = "edge-request-4711";

    let response = client()
        .get_with_headers("/health", vec![("x-request-id", custom_id)])
        .await;

    response.assert_header("x-request-id", custom_id);
}

#[tokio::test]
async fn generates_different_ids_for_each_request() {
    let response1 = client().get("/health").await;
    let response2 = client().get("/health").await;

    let id1 = response1.header("x-request-id").unwrap();
    let id2 = response2.header("x-request-id").unwrap();

    assert_ne!(id1, id2);
}

// === Request ID on the screenshot route ===

#[tokio::test]
async fn request_id_present_on_screenshot_responses() {
    let response = helpers::client().get("/stagetimer.io__pricing.jpg").await;

    response.assert_header_exists("x-request-id");
}

#[tokio::test]
async fn request_id_present_on_error_responses() {
    let response = helpers::client().get("/").await;

    response.assert_header_exists("x-request-id");
}

// === CORS ===

#[tokio::test]
async fn screenshot_responses_allow_any_origin() {
    let response = helpers::client()
        .get_with_headers(
            "/stagetimer.io__pricing.jpg",
            vec![("origin", "https://example.com")],
        )
        .await;

    response.assert_header("access-control-allow-origin", "*");
}
