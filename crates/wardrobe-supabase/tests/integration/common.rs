//! Shared test helpers for Supabase integration tests
//!
//! Provides wiremock-based mock server setup. Each helper returns a
//! configured adapter pointing at the mock server.

use wiremock::MockServer;

use wardrobe_core::domain::OwnerId;
use wardrobe_supabase::client::SupabaseClient;
use wardrobe_supabase::storage::SupabaseImageStore;
use wardrobe_supabase::tables::SupabaseTableGateway;

pub const ANON_KEY: &str = "test-anon-key";
pub const ACCESS_TOKEN: &str = "test-access-token";
pub const BUCKET: &str = "wardrobe-images";

/// Starts a mock server and returns it with a table gateway pointed at it
pub async fn setup_gateway() -> (MockServer, SupabaseTableGateway) {
    let server = MockServer::start().await;
    let client = SupabaseClient::new(server.uri(), ANON_KEY).with_access_token(ACCESS_TOKEN);
    (server, SupabaseTableGateway::new(client))
}

/// Starts a mock server and returns it with an image store pointed at it
pub async fn setup_storage() -> (MockServer, SupabaseImageStore) {
    let server = MockServer::start().await;
    let client = SupabaseClient::new(server.uri(), ANON_KEY).with_access_token(ACCESS_TOKEN);
    (server, SupabaseImageStore::new(client, BUCKET))
}

/// A fixed owner id used across the table tests
pub fn owner() -> OwnerId {
    "1d6a7c2e-0b4f-4f7e-8a1d-6e2b9c3f5a77"
        .parse()
        .expect("valid uuid")
}

/// A complete item row as the REST endpoint returns it
pub fn item_row(name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "8f6e0d0a-58a4-4c1e-9d25-3c9e4a8b0f11",
        "user_id": owner().to_string(),
        "name": name,
        "category": "Camisetas",
        "color": "#1d4ed8",
        "season": "Verão",
        "tags": ["casual"],
        "image_url": null,
        "favorite": false,
        "usage_count": 0,
        "created_at": "2026-05-01T12:00:00Z"
    })
}
