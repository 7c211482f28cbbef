//! Look domain entity
//!
//! A `Look` is a named collection of item references representing an outfit.
//! The references do not imply ownership: items may be deleted independently,
//! leaving dangling ids, and consumers must render a "removed" placeholder
//! rather than fail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::DomainError;
use super::item::{null_as_empty, Item};
use super::newtypes::{ItemId, LookId, OwnerId};

/// A named outfit built from item references
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Look {
    /// Server-assigned identity
    pub id: LookId,
    /// Owning user
    #[serde(rename = "user_id")]
    pub owner_id: OwnerId,
    /// Display name (non-empty)
    pub name: String,
    /// Optional occasion label (e.g., "Trabalho")
    #[serde(default)]
    pub occasion: Option<String>,
    /// Referenced item ids; dangling references are tolerated
    #[serde(default, deserialize_with = "null_as_empty")]
    pub item_ids: Vec<ItemId>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// One slot of a resolved look: either a live item or a placeholder for
/// an item that has since been deleted
#[derive(Debug, Clone, PartialEq)]
pub enum LookEntry<'a> {
    /// The referenced item still exists
    Present(&'a Item),
    /// The referenced item was deleted; render a placeholder
    Removed(ItemId),
}

impl Look {
    /// Resolves the look's item references against a live item collection.
    ///
    /// Every id in `item_ids` yields exactly one entry, preserving order;
    /// ids with no matching item become [`LookEntry::Removed`].
    pub fn resolve<'a>(&self, items: &'a [Item]) -> Vec<LookEntry<'a>> {
        self.item_ids
            .iter()
            .map(|id| match items.iter().find(|item| item.id == *id) {
                Some(item) => LookEntry::Present(item),
                None => LookEntry::Removed(*id),
            })
            .collect()
    }
}

/// User-entered fields for a new look
#[derive(Debug, Clone, Default)]
pub struct LookDraft {
    pub name: String,
    pub occasion: Option<String>,
    pub item_ids: Vec<ItemId>,
}

impl LookDraft {
    /// Field-level validation: non-empty name, non-empty selection.
    /// Performed before any gateway call.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::EmptyField("name"));
        }
        if self.item_ids.is_empty() {
            return Err(DomainError::EmptySelection);
        }
        Ok(())
    }

    /// Attaches ownership, producing the insert payload
    pub fn into_new(self, owner_id: OwnerId) -> NewLook {
        NewLook {
            owner_id,
            name: self.name,
            occasion: self.occasion,
            item_ids: self.item_ids,
            created_at: None,
        }
    }
}

/// Insert payload for the `looks` table
#[derive(Debug, Clone, Serialize)]
pub struct NewLook {
    #[serde(rename = "user_id")]
    pub owner_id: OwnerId,
    pub name: String,
    pub occasion: Option<String>,
    pub item_ids: Vec<ItemId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_owner() -> OwnerId {
        OwnerId::from_uuid(uuid::Uuid::nil())
    }

    fn item(name: &str) -> Item {
        Item {
            id: ItemId::new(),
            owner_id: test_owner(),
            name: name.to_string(),
            category: "Camisetas".to_string(),
            color: "#ffffff".to_string(),
            season: "Verão".to_string(),
            tags: vec![],
            image_url: None,
            favorite: false,
            usage_count: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_resolve_substitutes_placeholder_for_deleted_items() {
        let live = item("Camisa");
        let deleted_id = ItemId::new();
        let look = Look {
            id: LookId::new(),
            owner_id: test_owner(),
            name: "Casual".to_string(),
            occasion: None,
            item_ids: vec![live.id, deleted_id],
            created_at: Utc::now(),
        };

        let items = vec![live.clone()];
        let resolved = look.resolve(&items);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0], LookEntry::Present(&items[0]));
        assert_eq!(resolved[1], LookEntry::Removed(deleted_id));
    }

    #[test]
    fn test_null_item_ids_normalize_to_empty_vec() {
        let json = format!(
            r#"{{
                "id": "{}",
                "user_id": "{}",
                "name": "Festa",
                "item_ids": null,
                "created_at": "2026-05-01T12:00:00Z"
            }}"#,
            LookId::new(),
            OwnerId::new()
        );
        let look: Look = serde_json::from_str(&json).unwrap();
        assert!(look.item_ids.is_empty());
        assert!(look.occasion.is_none());
    }

    #[test]
    fn test_draft_validation() {
        let draft = LookDraft {
            name: "Festa".to_string(),
            occasion: None,
            item_ids: vec![],
        };
        assert_eq!(draft.validate(), Err(DomainError::EmptySelection));

        let draft = LookDraft {
            name: "".to_string(),
            occasion: None,
            item_ids: vec![ItemId::new()],
        };
        assert_eq!(draft.validate(), Err(DomainError::EmptyField("name")));
    }
}
