//! Shared test helpers for Cloudflare Images API integration tests
//!
//! Provides wiremock-based mock server setup. Each helper mounts the
//! necessary mock endpoints and returns a configured ImagesClient
//! pointing at the mock server.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cfsync_api::client::ImagesClient;
use cfsync_core::domain::newtypes::AccountId;

/// Account id used by every test client.
pub const TEST_ACCOUNT: &str = "acct-test";

/// Bearer token used by every test client.
pub const TEST_TOKEN: &str = "test-access-token";

/// Path of the images endpoint for the test account.
pub const IMAGES_ENDPOINT: &str = "/accounts/acct-test/images/v1";

/// Starts a mock server and returns it with a client pointed at it.
pub async fn setup_images_mock() -> (MockServer, ImagesClient) {
    let server = MockServer::start().await;
    let account = AccountId::new(TEST_ACCOUNT).unwrap();
    let client = ImagesClient::with_base_url(account, TEST_TOKEN, server.uri());
    (server, client)
}

/// Builds one image record as the API would return it.
pub fn image_record(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "filename": id,
        "uploaded": "2026-01-15T10:00:00Z",
        "requireSignedURLs": false,
        "variants": [format!("https://imagedelivery.net/hash/{id}/public")]
    })
}

/// Builds `count` sequentially-named image records for one page.
pub fn images_page(page: u32, count: usize) -> serde_json::Value {
    let images: Vec<serde_json::Value> = (0..count)
        .map(|i| image_record(&format!("page{page}/img{i:03}.jpg")))
        .collect();
    serde_json::Value::Array(images)
}

/// Mounts one listing page, asserting it is requested exactly once.
pub async fn mount_list_page(server: &MockServer, page: u32, images: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(IMAGES_ENDPOINT))
        .and(query_param("per_page", "100"))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": { "images": images },
            "success": true,
            "errors": [],
            "messages": []
        })))
        .expect(1)
        .mount(server)
        .await;
}
