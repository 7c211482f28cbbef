//! Table gateway tests: owner scoping, headers, and row parsing

use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use wardrobe_core::domain::{ItemChanges, ItemDraft, ItemId, LookDraft};
use wardrobe_core::ports::IWardrobeGateway;

use crate::common::{item_row, owner, setup_gateway, ACCESS_TOKEN, ANON_KEY};

fn new_item() -> wardrobe_core::domain::NewItem {
    ItemDraft {
        name: "Camisa azul".to_string(),
        category: "Camisetas".to_string(),
        color: "#1d4ed8".to_string(),
        season: "Verão".to_string(),
        tags: vec!["casual".to_string()],
    }
    .into_new(owner(), None)
}

#[tokio::test]
async fn test_list_items_scopes_by_owner_and_orders_newest_first() {
    let (server, gateway) = setup_gateway().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/wardrobe_items"))
        .and(query_param("user_id", format!("eq.{}", owner())))
        .and(query_param("order", "created_at.desc"))
        .and(header("apikey", ANON_KEY))
        .and(header("Authorization", format!("Bearer {ACCESS_TOKEN}")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([item_row("Camisa azul")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let items = gateway.list_items(&owner()).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Camisa azul");
    assert_eq!(items[0].owner_id, owner());
}

#[tokio::test]
async fn test_list_items_tolerates_null_tags() {
    let (server, gateway) = setup_gateway().await;

    let mut row = item_row("Calça jeans");
    row["tags"] = serde_json::Value::Null;
    Mock::given(method("GET"))
        .and(path("/rest/v1/wardrobe_items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([row])))
        .mount(&server)
        .await;

    let items = gateway.list_items(&owner()).await.unwrap();
    assert!(items[0].tags.is_empty());
}

#[tokio::test]
async fn test_insert_item_returns_server_row() {
    let (server, gateway) = setup_gateway().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/wardrobe_items"))
        .and(header("Prefer", "return=representation"))
        .and(body_partial_json(serde_json::json!({
            "user_id": owner().to_string(),
            "name": "Camisa azul",
            "favorite": false,
            "usage_count": 0
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(serde_json::json!([item_row("Camisa azul")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let item = gateway.insert_item(&new_item()).await.unwrap();
    assert_eq!(item.name, "Camisa azul");
}

#[tokio::test]
async fn test_insert_item_surfaces_error_status() {
    let (server, gateway) = setup_gateway().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/wardrobe_items"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "message": "new row violates row-level security policy"
        })))
        .mount(&server)
        .await;

    let err = gateway.insert_item(&new_item()).await.unwrap_err();
    assert!(err.to_string().contains("error status"));
}

#[tokio::test]
async fn test_update_item_patches_by_id() {
    let (server, gateway) = setup_gateway().await;
    let id: ItemId = "8f6e0d0a-58a4-4c1e-9d25-3c9e4a8b0f11".parse().unwrap();

    let mut row = item_row("Camisa azul");
    row["favorite"] = serde_json::json!(true);
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/wardrobe_items"))
        .and(query_param("id", format!("eq.{id}")))
        .and(body_partial_json(serde_json::json!({ "favorite": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([row])))
        .expect(1)
        .mount(&server)
        .await;

    let item = gateway
        .update_item(&id, &ItemChanges::favorite(true))
        .await
        .unwrap();
    assert!(item.favorite);
}

#[tokio::test]
async fn test_delete_item_targets_single_row() {
    let (server, gateway) = setup_gateway().await;
    let id: ItemId = "8f6e0d0a-58a4-4c1e-9d25-3c9e4a8b0f11".parse().unwrap();

    Mock::given(method("DELETE"))
        .and(path("/rest/v1/wardrobe_items"))
        .and(query_param("id", format!("eq.{id}")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    gateway.delete_item(&id).await.unwrap();
}

#[tokio::test]
async fn test_delete_all_items_scopes_by_owner() {
    let (server, gateway) = setup_gateway().await;

    Mock::given(method("DELETE"))
        .and(path("/rest/v1/wardrobe_items"))
        .and(query_param("user_id", format!("eq.{}", owner())))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    gateway.delete_all_items(&owner()).await.unwrap();
}

#[tokio::test]
async fn test_insert_look_round_trips_item_ids() {
    let (server, gateway) = setup_gateway().await;
    let item_id: ItemId = "8f6e0d0a-58a4-4c1e-9d25-3c9e4a8b0f11".parse().unwrap();

    Mock::given(method("POST"))
        .and(path("/rest/v1/looks"))
        .and(header("Prefer", "return=representation"))
        .and(body_partial_json(serde_json::json!({
            "name": "Casual",
            "item_ids": [item_id.to_string()]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!([{
            "id": "6a1b2c3d-4e5f-4a6b-8c7d-9e0f1a2b3c4d",
            "user_id": owner().to_string(),
            "name": "Casual",
            "occasion": "fim de semana",
            "item_ids": [item_id.to_string()],
            "created_at": "2026-05-02T09:00:00Z"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let draft = LookDraft {
        name: "Casual".to_string(),
        occasion: Some("fim de semana".to_string()),
        item_ids: vec![item_id],
    };
    let look = gateway.insert_look(&draft.into_new(owner())).await.unwrap();
    assert_eq!(look.item_ids, vec![item_id]);
    assert_eq!(look.occasion.as_deref(), Some("fim de semana"));
}

#[tokio::test]
async fn test_insert_items_sends_batch_body() {
    let (server, gateway) = setup_gateway().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/wardrobe_items"))
        .and(body_partial_json(serde_json::json!([
            { "name": "Camisa azul" }
        ])))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    gateway.insert_items(&[new_item()]).await.unwrap();
}
