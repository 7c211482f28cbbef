//! Remote data gateway port (driven/secondary port)
//!
//! Interface for row-level CRUD against the hosted table store. The primary
//! implementation targets the two logical tables `wardrobe_items` and
//! `looks`, filtered and ordered server-side by owner and creation time.
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result` because errors at port boundaries are
//!   adapter-specific and don't need domain-level classification.
//! - Insert payloads never carry identity; the server assigns ids.
//! - The batch insert/delete-all operations exist for the import
//!   serializer's destructive replace sequence.

use crate::domain::{Item, ItemChanges, ItemId, Look, LookId, NewItem, NewLook, OwnerId};

/// Port trait for the remote table store
#[async_trait::async_trait]
pub trait IWardrobeGateway: Send + Sync {
    /// Fetches all items for the owner, ordered newest-first (server-side)
    async fn list_items(&self, owner: &OwnerId) -> anyhow::Result<Vec<Item>>;

    /// Inserts a single item and returns the server-assigned row
    async fn insert_item(&self, item: &NewItem) -> anyhow::Result<Item>;

    /// Inserts a batch of items (import path); returned rows are not needed
    async fn insert_items(&self, items: &[NewItem]) -> anyhow::Result<()>;

    /// Applies a partial update and returns the updated row
    async fn update_item(&self, id: &ItemId, changes: &ItemChanges) -> anyhow::Result<Item>;

    /// Deletes one item row
    async fn delete_item(&self, id: &ItemId) -> anyhow::Result<()>;

    /// Deletes every item row belonging to the owner (import path)
    async fn delete_all_items(&self, owner: &OwnerId) -> anyhow::Result<()>;

    /// Fetches all looks for the owner, ordered newest-first (server-side)
    async fn list_looks(&self, owner: &OwnerId) -> anyhow::Result<Vec<Look>>;

    /// Inserts a single look and returns the server-assigned row
    async fn insert_look(&self, look: &NewLook) -> anyhow::Result<Look>;

    /// Inserts a batch of looks (import path)
    async fn insert_looks(&self, looks: &[NewLook]) -> anyhow::Result<()>;

    /// Deletes one look row
    async fn delete_look(&self, id: &LookId) -> anyhow::Result<()>;

    /// Deletes every look row belonging to the owner (import path)
    async fn delete_all_looks(&self, owner: &OwnerId) -> anyhow::Result<()>;
}
