//! Upload integration tests

use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use cfsync_api::provider::CloudflareImageStore;
use cfsync_api::upload::upload_image;
use cfsync_core::domain::newtypes::ImageId;
use cfsync_core::ports::image_store::IImageStore;

use crate::common::{mount_list_page, setup_images_mock, IMAGES_ENDPOINT, TEST_TOKEN};

fn upload_ok_body() -> serde_json::Value {
    serde_json::json!({
        "result": {
            "id": "sub/b.png",
            "filename": "sub/b.png",
            "uploaded": "2026-01-15T10:00:00Z",
            "requireSignedURLs": false,
            "variants": []
        },
        "success": true,
        "errors": [],
        "messages": []
    })
}

#[tokio::test]
async fn test_upload_sends_multipart_file_and_id_fields() {
    let (server, client) = setup_images_mock().await;

    // The multipart body must carry the file part (filename = id) and the
    // explicit id field, so the remote filename equals the relative path.
    Mock::given(method("POST"))
        .and(path(IMAGES_ENDPOINT))
        .and(header("authorization", format!("Bearer {TEST_TOKEN}")))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("filename=\"sub/b.png\""))
        .and(body_string_contains("name=\"id\""))
        .and(body_string_contains("fake image bytes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(upload_ok_body()))
        .expect(1)
        .mount(&server)
        .await;

    let id = ImageId::new("sub/b.png").unwrap();
    upload_image(&client, &id, b"fake image bytes".to_vec())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_upload_error_surfaces_status_and_body() {
    let (server, client) = setup_images_mock().await;

    Mock::given(method("POST"))
        .and(path(IMAGES_ENDPOINT))
        .respond_with(ResponseTemplate::new(415).set_body_string("unsupported image format"))
        .mount(&server)
        .await;

    let id = ImageId::new("broken.jpg").unwrap();
    let err = upload_image(&client, &id, b"not an image".to_vec())
        .await
        .unwrap_err();
    let message = format!("{err:#}");

    assert!(message.contains("415"), "missing status in: {message}");
    assert!(
        message.contains("unsupported image format"),
        "missing body in: {message}"
    );
}

#[tokio::test]
async fn test_provider_implements_the_port() {
    let (server, client) = setup_images_mock().await;

    mount_list_page(&server, 1, serde_json::json!([])).await;
    Mock::given(method("POST"))
        .and(path(IMAGES_ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(upload_ok_body()))
        .expect(1)
        .mount(&server)
        .await;

    let store: Box<dyn IImageStore> = Box::new(CloudflareImageStore::new(client));

    let images = store.list_images().await.unwrap();
    assert!(images.is_empty());

    let id = ImageId::new("a.jpg").unwrap();
    store.upload_image(&id, b"bytes".to_vec()).await.unwrap();
}
