//! Auth adapter tests: password grant, refresh, sign-out

use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use wardrobe_core::domain::{OwnerId, Session};
use wardrobe_core::ports::IAuthGateway;
use wardrobe_supabase::auth::SupabaseAuthAdapter;
use wardrobe_supabase::client::SupabaseClient;

use crate::common::ANON_KEY;

const USER_ID: &str = "1d6a7c2e-0b4f-4f7e-8a1d-6e2b9c3f5a77";

async fn setup_auth() -> (MockServer, SupabaseAuthAdapter) {
    let server = MockServer::start().await;
    let client = SupabaseClient::new(server.uri(), ANON_KEY);
    (server, SupabaseAuthAdapter::new(client))
}

#[tokio::test]
async fn test_sign_in_password_grant() {
    let (server, adapter) = setup_auth().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .and(header("apikey", ANON_KEY))
        .and(body_partial_json(serde_json::json!({
            "email": "ana@example.com",
            "password": "s3cret"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "jwt-access",
            "refresh_token": "jwt-refresh",
            "token_type": "bearer",
            "user": { "id": USER_ID, "email": "ana@example.com" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = adapter.sign_in("ana@example.com", "s3cret").await.unwrap();
    assert_eq!(session.owner_id, USER_ID.parse::<OwnerId>().unwrap());
    assert_eq!(session.email, "ana@example.com");
    assert_eq!(session.access_token, "jwt-access");
    assert_eq!(session.refresh_token.as_deref(), Some("jwt-refresh"));
}

#[tokio::test]
async fn test_sign_in_rejects_bad_credentials() {
    let (server, adapter) = setup_auth().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": "invalid_grant",
            "error_description": "Invalid login credentials"
        })))
        .mount(&server)
        .await;

    let err = adapter
        .sign_in("ana@example.com", "wrong")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("rejected"));
}

#[tokio::test]
async fn test_refresh_exchanges_token() {
    let (server, adapter) = setup_auth().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "refresh_token"))
        .and(body_partial_json(serde_json::json!({
            "refresh_token": "jwt-refresh"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "jwt-access-2",
            "refresh_token": "jwt-refresh-2",
            "token_type": "bearer",
            "user": { "id": USER_ID, "email": "ana@example.com" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = adapter.refresh("jwt-refresh").await.unwrap();
    assert_eq!(session.access_token, "jwt-access-2");
    assert_eq!(session.refresh_token.as_deref(), Some("jwt-refresh-2"));
}

#[tokio::test]
async fn test_sign_out_presents_session_token() {
    let (server, adapter) = setup_auth().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/logout"))
        .and(header("Authorization", "Bearer jwt-access"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let session = Session::new(USER_ID.parse().unwrap(), "ana@example.com", "jwt-access");
    adapter.sign_out(&session).await.unwrap();
}

#[tokio::test]
async fn test_sign_out_tolerates_expired_token() {
    let (server, adapter) = setup_auth().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/logout"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let session = Session::new(USER_ID.parse().unwrap(), "ana@example.com", "stale");
    adapter.sign_out(&session).await.unwrap();
}
