//! Inventory listing integration tests

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use cfsync_api::list::list_all_images;

use crate::common::{
    image_record, images_page, mount_list_page, setup_images_mock, IMAGES_ENDPOINT, TEST_TOKEN,
};

#[tokio::test]
async fn test_pagination_exhausts_until_empty_page() {
    let (server, client) = setup_images_mock().await;

    // Two full pages followed by an empty one: the fetcher must issue
    // exactly three requests (the .expect(1) on each mock enforces it)
    // and return all 200 records.
    mount_list_page(&server, 1, images_page(1, 100)).await;
    mount_list_page(&server, 2, images_page(2, 100)).await;
    mount_list_page(&server, 3, serde_json::json!([])).await;

    let images = list_all_images(&client).await.unwrap();

    assert_eq!(images.len(), 200);
    assert_eq!(images[0].id, "page1/img000.jpg");
    assert_eq!(images[199].id, "page2/img099.jpg");
}

#[tokio::test]
async fn test_partial_page_still_fetches_next() {
    let (server, client) = setup_images_mock().await;

    // A page with fewer than 100 records does not end the listing; only
    // an empty page does.
    mount_list_page(
        &server,
        1,
        serde_json::json!([image_record("a.jpg"), image_record("sub/b.png")]),
    )
    .await;
    mount_list_page(&server, 2, serde_json::json!([])).await;

    let images = list_all_images(&client).await.unwrap();

    assert_eq!(images.len(), 2);
    assert_eq!(images[0].id, "a.jpg");
    assert_eq!(images[1].id, "sub/b.png");
}

#[tokio::test]
async fn test_empty_inventory() {
    let (server, client) = setup_images_mock().await;

    mount_list_page(&server, 1, serde_json::json!([])).await;

    let images = list_all_images(&client).await.unwrap();
    assert!(images.is_empty());
}

#[tokio::test]
async fn test_listing_sends_bearer_token() {
    let (server, client) = setup_images_mock().await;

    Mock::given(method("GET"))
        .and(path(IMAGES_ENDPOINT))
        .and(header("authorization", format!("Bearer {TEST_TOKEN}")))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": { "images": [] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    list_all_images(&client).await.unwrap();
}

#[tokio::test]
async fn test_listing_error_surfaces_status_and_body() {
    let (server, client) = setup_images_mock().await;

    Mock::given(method("GET"))
        .and(path(IMAGES_ENDPOINT))
        .respond_with(
            ResponseTemplate::new(500).set_body_string("internal error from cloudflare"),
        )
        .mount(&server)
        .await;

    let err = list_all_images(&client).await.unwrap_err();
    let message = format!("{err:#}");

    assert!(message.contains("500"), "missing status in: {message}");
    assert!(
        message.contains("internal error from cloudflare"),
        "missing body in: {message}"
    );
}

#[tokio::test]
async fn test_record_fields_are_mapped() {
    let (server, client) = setup_images_mock().await;

    mount_list_page(
        &server,
        1,
        serde_json::json!([{
            "id": "private/photo.jpg",
            "filename": "private/photo.jpg",
            "uploaded": "2026-04-01T09:15:00Z",
            "requireSignedURLs": true,
            "variants": ["https://imagedelivery.net/hash/private/photo.jpg/signed"]
        }]),
    )
    .await;
    mount_list_page(&server, 2, serde_json::json!([])).await;

    let images = list_all_images(&client).await.unwrap();

    assert_eq!(images.len(), 1);
    let image = &images[0];
    assert_eq!(image.id, "private/photo.jpg");
    assert!(image.require_signed_urls);
    assert_eq!(image.uploaded.to_rfc3339(), "2026-04-01T09:15:00+00:00");
    assert_eq!(image.variants.len(), 1);
}
