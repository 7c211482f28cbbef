//! Image store tests: object upload, public URL shape, deletion

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

use wardrobe_core::domain::StorageKey;
use wardrobe_core::ports::IImageStore;

use crate::common::{setup_storage, ACCESS_TOKEN, ANON_KEY, BUCKET};

fn key() -> StorageKey {
    StorageKey::new("1d6a7c2e/1764400000000-ab12cd34.jpg").unwrap()
}

#[tokio::test]
async fn test_upload_posts_object_and_returns_public_url() {
    let (server, store) = setup_storage().await;

    Mock::given(method("POST"))
        .and(path(format!(
            "/storage/v1/object/{BUCKET}/1d6a7c2e/1764400000000-ab12cd34.jpg"
        )))
        .and(header("Content-Type", "image/jpeg"))
        .and(header("x-upsert", "false"))
        .and(header("apikey", ANON_KEY))
        .and(header("Authorization", format!("Bearer {ACCESS_TOKEN}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Key": format!("{BUCKET}/1d6a7c2e/1764400000000-ab12cd34.jpg")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let url = store
        .upload(&key(), &[0xFF, 0xD8, 0xFF], "image/jpeg")
        .await
        .unwrap();

    assert_eq!(
        url,
        format!(
            "{}/storage/v1/object/public/{BUCKET}/1d6a7c2e/1764400000000-ab12cd34.jpg",
            server.uri()
        )
    );
}

#[tokio::test]
async fn test_upload_surfaces_error_status() {
    let (server, store) = setup_storage().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(413).set_body_json(serde_json::json!({
            "message": "Payload too large"
        })))
        .mount(&server)
        .await;

    let err = store
        .upload(&key(), &[0u8; 8], "image/png")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("error status"));
}

#[tokio::test]
async fn test_remove_deletes_object() {
    let (server, store) = setup_storage().await;

    Mock::given(method("DELETE"))
        .and(path(format!(
            "/storage/v1/object/{BUCKET}/1d6a7c2e/1764400000000-ab12cd34.jpg"
        )))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    store.remove(&key()).await.unwrap();
}
