//! Item domain entity
//!
//! An `Item` is a single wardrobe garment record, owned exclusively by one
//! user. Items are created through an explicit add action, mutated in place
//! for favorite-toggle and usage-increment, and deleted explicitly (deleting
//! the stored image along the way, best-effort).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::errors::DomainError;
use super::newtypes::{ItemId, OwnerId};

/// Deserializes an explicit JSON `null` into an empty list.
///
/// The table store returns `null` for array columns that were never set;
/// consumers always see a normalized `Vec`.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value = Option::<Vec<T>>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// A single wardrobe garment record
///
/// The wire representation matches the `wardrobe_items` table row: the
/// owner column is `user_id`, tags deserialize null-safe, and the fields
/// the server defaults (`favorite`, `usage_count`, `image_url`) are
/// tolerant of being absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Server-assigned identity
    pub id: ItemId,
    /// Owning user
    #[serde(rename = "user_id")]
    pub owner_id: OwnerId,
    /// Display name (non-empty)
    pub name: String,
    /// Category label (e.g., "Camisetas"); matched exactly by the filter
    pub category: String,
    /// Hex color string
    pub color: String,
    /// Season label
    pub season: String,
    /// Free-form tags; order irrelevant, never null on read
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    /// Public URL of the uploaded photo, if any
    #[serde(default)]
    pub image_url: Option<String>,
    /// Favorite flag
    #[serde(default)]
    pub favorite: bool,
    /// How many times the item was worn
    #[serde(default)]
    pub usage_count: u32,
    /// Creation timestamp (server-assigned unless imported)
    pub created_at: DateTime<Utc>,
}

/// User-entered fields for a new item, before ownership is attached
#[derive(Debug, Clone, Default)]
pub struct ItemDraft {
    pub name: String,
    pub category: String,
    pub color: String,
    pub season: String,
    pub tags: Vec<String>,
}

impl ItemDraft {
    /// Field-level validation, performed before any gateway call
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::EmptyField("name"));
        }
        Ok(())
    }

    /// Attaches ownership and an optional uploaded image URL, producing
    /// the insert payload
    pub fn into_new(self, owner_id: OwnerId, image_url: Option<String>) -> NewItem {
        NewItem {
            owner_id,
            name: self.name,
            category: self.category,
            color: self.color,
            season: self.season,
            tags: self.tags,
            image_url,
            favorite: false,
            usage_count: 0,
            created_at: None,
        }
    }
}

/// Insert payload for the `wardrobe_items` table
///
/// Identity is never sent; the server assigns it. `created_at` is only
/// populated by the import path, which preserves original timestamps.
#[derive(Debug, Clone, Serialize)]
pub struct NewItem {
    #[serde(rename = "user_id")]
    pub owner_id: OwnerId,
    pub name: String,
    pub category: String,
    pub color: String,
    pub season: String,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub favorite: bool,
    pub usage_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Partial update payload for an item row
///
/// Only the mutable-in-place fields are updatable; unset fields are
/// omitted from the PATCH body entirely.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ItemChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_count: Option<u32>,
}

impl ItemChanges {
    /// Change only the favorite flag
    pub fn favorite(value: bool) -> Self {
        Self {
            favorite: Some(value),
            ..Self::default()
        }
    }

    /// Change only the usage count
    pub fn usage_count(value: u32) -> Self {
        Self {
            usage_count: Some(value),
            ..Self::default()
        }
    }
}

/// Splits a comma-separated tag string into trimmed, non-empty tags
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_json(tags: &str) -> String {
        format!(
            r##"{{
                "id": "8f6e0d0a-58a4-4c1e-9d25-3c9e4a8b0f11",
                "user_id": "1d6a7c2e-0b4f-4f7e-8a1d-6e2b9c3f5a77",
                "name": "Camisa azul",
                "category": "Camisetas",
                "color": "#1d4ed8",
                "season": "Verão",
                "tags": {tags},
                "created_at": "2026-05-01T12:00:00Z"
            }}"##
        )
    }

    #[test]
    fn test_item_row_deserializes_with_defaults() {
        let item: Item = serde_json::from_str(&row_json(r#"["casual"]"#)).unwrap();
        assert_eq!(item.name, "Camisa azul");
        assert_eq!(item.tags, vec!["casual"]);
        assert!(!item.favorite);
        assert_eq!(item.usage_count, 0);
        assert!(item.image_url.is_none());
    }

    #[test]
    fn test_null_tags_normalize_to_empty_vec() {
        let item: Item = serde_json::from_str(&row_json("null")).unwrap();
        assert!(item.tags.is_empty());
    }

    #[test]
    fn test_draft_requires_name() {
        let draft = ItemDraft {
            name: "   ".to_string(),
            ..ItemDraft::default()
        };
        assert_eq!(draft.validate(), Err(DomainError::EmptyField("name")));
    }

    #[test]
    fn test_new_item_omits_identity_and_timestamp() {
        let draft = ItemDraft {
            name: "Jaqueta".to_string(),
            category: "Casacos".to_string(),
            color: "#000000".to_string(),
            season: "Inverno".to_string(),
            tags: vec![],
        };
        let new_item = draft.into_new(OwnerId::new(), None);
        let json = serde_json::to_value(&new_item).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("created_at").is_none());
        assert!(json.get("user_id").is_some());
    }

    #[test]
    fn test_item_changes_serialize_sparse() {
        let json = serde_json::to_value(ItemChanges::favorite(true)).unwrap();
        assert_eq!(json, serde_json::json!({ "favorite": true }));

        let json = serde_json::to_value(ItemChanges::usage_count(3)).unwrap();
        assert_eq!(json, serde_json::json!({ "usage_count": 3 }));
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(
            parse_tags(" casual , verão,, trabalho "),
            vec!["casual", "verão", "trabalho"]
        );
        assert!(parse_tags("").is_empty());
    }
}
