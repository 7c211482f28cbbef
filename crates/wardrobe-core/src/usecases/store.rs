//! Wardrobe state store use case
//!
//! Holds the in-memory item and look collections for one session and
//! orchestrates every mutation against the remote gateway:
//! - `add_item` uploads the photo first and compensates (deletes the blob)
//!   if the row insert fails afterwards
//! - favorite/usage mutations are optimistic: local state changes
//!   immediately, and a remote failure restores the pre-update value before
//!   the error is surfaced
//! - `delete_item` is remote-first: local state only changes on success
//!
//! Every failure funnels into a single user-visible error channel
//! (`last_error`), no operation is retried automatically, and the store is
//! always left fully committed or fully rolled back.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, info};

use crate::domain::{
    compute_stats, filter_items, CategoryFilter, DomainError, Item, ItemChanges, ItemDraft,
    ItemId, ItemQuery, Look, LookDraft, LookId, Session, WardrobeStats,
};
use crate::ports::IWardrobeGateway;
use crate::usecases::transfer::{parse_snapshot, ExportSnapshot};
use crate::usecases::upload_image::{ImageFile, ImageUploadManager, UploadImageError};

/// A mutation failure, as shown to the user
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    /// Rejected locally before any gateway call
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// A gateway call failed; the operation was aborted or rolled back
    #[error("Remote operation '{operation}' failed: {message}")]
    Remote {
        /// Which operation failed
        operation: &'static str,
        /// Adapter-level failure description
        message: String,
    },
}

impl StoreError {
    fn remote(operation: &'static str, err: impl ToString) -> Self {
        Self::Remote {
            operation,
            message: err.to_string(),
        }
    }
}

/// Result of a completed import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Items inserted
    pub items: usize,
    /// Looks inserted
    pub looks: usize,
}

/// In-memory wardrobe state for one authenticated session
pub struct WardrobeStore {
    session: Session,
    gateway: Arc<dyn IWardrobeGateway>,
    images: ImageUploadManager,
    items: Vec<Item>,
    looks: Vec<Look>,
    selection: Vec<ItemId>,
    query: ItemQuery,
    last_error: Option<StoreError>,
}

impl WardrobeStore {
    /// Creates an empty store bound to the given session.
    ///
    /// The session is passed explicitly; the store never reads ambient
    /// global state to find the current user.
    pub fn new(
        session: Session,
        gateway: Arc<dyn IWardrobeGateway>,
        images: ImageUploadManager,
    ) -> Self {
        Self {
            session,
            gateway,
            images,
            items: Vec::new(),
            looks: Vec::new(),
            selection: Vec::new(),
            query: ItemQuery::default(),
            last_error: None,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Items, newest-first
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Looks, newest-first
    pub fn looks(&self) -> &[Look] {
        &self.looks
    }

    /// The session this store is bound to
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The single user-visible error channel; `None` when the last
    /// operation succeeded
    pub fn last_error(&self) -> Option<&StoreError> {
        self.last_error.as_ref()
    }

    /// Clears the error channel (e.g., when the user dismisses the notice)
    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Items matching the current category/search state, in collection order
    pub fn filtered_items(&self) -> Vec<&Item> {
        filter_items(&self.items, &self.query)
    }

    /// Aggregate statistics over the current collections
    pub fn stats(&self) -> WardrobeStats {
        compute_stats(&self.items, &self.looks)
    }

    /// Sets the category filter
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.query.category = category;
    }

    /// Sets the free-text search term
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    // ========================================================================
    // Selection (look building)
    // ========================================================================

    /// Currently selected item ids, in selection order
    pub fn selection(&self) -> &[ItemId] {
        &self.selection
    }

    /// Adds the id to the selection, or removes it if already selected
    pub fn toggle_selected(&mut self, id: ItemId) {
        if let Some(index) = self.selection.iter().position(|s| *s == id) {
            self.selection.remove(index);
        } else {
            self.selection.push(id);
        }
    }

    /// Empties the selection
    pub fn reset_selection(&mut self) {
        self.selection.clear();
    }

    // ========================================================================
    // Loading and lifecycle
    // ========================================================================

    /// Fetches all items and looks for the session owner, in parallel.
    ///
    /// A failed fetch leaves that collection empty and records the error in
    /// the error channel; nothing is retried automatically.
    pub async fn load(&mut self) {
        self.last_error = None;
        let owner = self.session.owner_id;
        let gateway = Arc::clone(&self.gateway);

        let (items, looks) = tokio::join!(gateway.list_items(&owner), gateway.list_looks(&owner));

        match items {
            Ok(items) => {
                debug!(count = items.len(), "Loaded items");
                self.items = items;
            }
            Err(e) => {
                error!(error = %e, "Failed to load items");
                self.items = Vec::new();
                self.last_error = Some(StoreError::remote("load items", e));
            }
        }

        match looks {
            Ok(looks) => {
                debug!(count = looks.len(), "Loaded looks");
                self.looks = looks;
            }
            Err(e) => {
                error!(error = %e, "Failed to load looks");
                self.looks = Vec::new();
                self.last_error = Some(StoreError::remote("load looks", e));
            }
        }
    }

    /// Drops all session-scoped state (sign-out); nothing is persisted
    pub fn clear(&mut self) {
        self.items.clear();
        self.looks.clear();
        self.selection.clear();
        self.query = ItemQuery::default();
        self.last_error = None;
    }

    // ========================================================================
    // Item mutations
    // ========================================================================

    /// Adds a new item, uploading its photo first when one is given.
    ///
    /// - upload failure aborts before any row is created
    /// - row-insert failure after a successful upload deletes the uploaded
    ///   blob again, so no orphaned image is left behind
    /// - on success the item is prepended, preserving newest-first order
    pub async fn add_item(
        &mut self,
        draft: ItemDraft,
        image: Option<ImageFile>,
    ) -> Result<&Item, StoreError> {
        self.last_error = None;

        if let Err(e) = draft.validate() {
            return Err(self.record(StoreError::Validation(e)));
        }

        let owner = self.session.owner_id;
        let image_url = match image {
            Some(file) => match self.images.upload_image(&owner, &file).await {
                Ok(url) => Some(url),
                Err(UploadImageError::Rejected(e)) => {
                    return Err(self.record(StoreError::Validation(e)));
                }
                Err(UploadImageError::Upload(message)) => {
                    return Err(self.record(StoreError::Remote {
                        operation: "upload image",
                        message,
                    }));
                }
            },
            None => None,
        };

        let new_item = draft.into_new(owner, image_url.clone());
        match self.gateway.insert_item(&new_item).await {
            Ok(item) => {
                info!(id = %item.id, name = %item.name, "Item added");
                self.items.insert(0, item);
                Ok(&self.items[0])
            }
            Err(e) => {
                // Compensating action: the row does not exist, so the
                // uploaded blob must not either.
                if let Some(url) = &image_url {
                    self.images.delete_image(url).await;
                }
                Err(self.record(StoreError::remote("add item", e)))
            }
        }
    }

    /// Toggles the favorite flag, optimistically
    pub async fn toggle_favorite(&mut self, id: &ItemId) -> Result<(), StoreError> {
        self.optimistic_update(id, "toggle favorite", |item| {
            item.favorite = !item.favorite;
            ItemChanges::favorite(item.favorite)
        })
        .await
    }

    /// Increments the usage count, optimistically
    pub async fn record_wear(&mut self, id: &ItemId) -> Result<(), StoreError> {
        self.optimistic_update(id, "record wear", |item| {
            item.usage_count += 1;
            ItemChanges::usage_count(item.usage_count)
        })
        .await
    }

    /// Optimistic-update policy shared by the in-place item mutations:
    /// apply locally, reconcile remotely, restore the previous value on
    /// failure. The store never commits to a value the backend rejected.
    async fn optimistic_update<F>(
        &mut self,
        id: &ItemId,
        operation: &'static str,
        mutate: F,
    ) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Item) -> ItemChanges,
    {
        self.last_error = None;

        let Some(index) = self.items.iter().position(|item| item.id == *id) else {
            return Err(self.record(StoreError::Validation(DomainError::NotFound(id.to_string()))));
        };

        let previous = self.items[index].clone();
        let changes = mutate(&mut self.items[index]);

        match self.gateway.update_item(id, &changes).await {
            Ok(updated) => {
                // The server row is canonical after reconciliation
                self.items[index] = updated;
                Ok(())
            }
            Err(e) => {
                self.items[index] = previous;
                Err(self.record(StoreError::remote(operation, e)))
            }
        }
    }

    /// Deletes an item, remote-first.
    ///
    /// Local state is untouched if the remote delete fails. On success the
    /// stored image (if any) is deleted best-effort; a failing image delete
    /// is logged and never surfaced.
    pub async fn delete_item(&mut self, id: &ItemId) -> Result<(), StoreError> {
        self.last_error = None;

        if let Err(e) = self.gateway.delete_item(id).await {
            return Err(self.record(StoreError::remote("delete item", e)));
        }

        if let Some(index) = self.items.iter().position(|item| item.id == *id) {
            let removed = self.items.remove(index);
            info!(id = %removed.id, "Item deleted");
            if let Some(url) = &removed.image_url {
                self.images.delete_image(url).await;
            }
        }
        Ok(())
    }

    // ========================================================================
    // Look mutations
    // ========================================================================

    /// Creates a look from the draft.
    ///
    /// Field-level validation (non-empty name, non-empty selection) happens
    /// before any gateway call. On success the look is prepended and the
    /// current selection is cleared.
    pub async fn create_look(&mut self, draft: LookDraft) -> Result<&Look, StoreError> {
        self.last_error = None;

        if let Err(e) = draft.validate() {
            return Err(self.record(StoreError::Validation(e)));
        }

        let new_look = draft.into_new(self.session.owner_id);
        match self.gateway.insert_look(&new_look).await {
            Ok(look) => {
                info!(id = %look.id, name = %look.name, "Look created");
                self.looks.insert(0, look);
                self.selection.clear();
                Ok(&self.looks[0])
            }
            Err(e) => Err(self.record(StoreError::remote("create look", e))),
        }
    }

    /// Deletes a look, remote-first; items it references are untouched.
    ///
    /// User confirmation is the caller's concern.
    pub async fn delete_look(&mut self, id: &LookId) -> Result<(), StoreError> {
        self.last_error = None;

        if let Err(e) = self.gateway.delete_look(id).await {
            return Err(self.record(StoreError::remote("delete look", e)));
        }

        self.looks.retain(|look| look.id != *id);
        info!(id = %id, "Look deleted");
        Ok(())
    }

    // ========================================================================
    // Import / export
    // ========================================================================

    /// Snapshot of the current collections for download
    pub fn export_snapshot(&self) -> ExportSnapshot {
        ExportSnapshot::capture(&self.items, &self.looks)
    }

    /// Destructively replaces the owner's remote data with the snapshot.
    ///
    /// The snapshot is parsed and fully normalized before anything is
    /// deleted, so malformed input can never interrupt the sequence. The
    /// replace itself runs: delete looks, delete items, insert items,
    /// insert looks. A failure after the delete phase aborts with an error
    /// that states the remote data was already cleared; there is no
    /// transactional rollback across the sequence.
    ///
    /// User confirmation is the caller's concern.
    pub async fn import(&mut self, raw: &str) -> Result<ImportSummary, StoreError> {
        self.last_error = None;
        let owner = self.session.owner_id;

        let normalized = match parse_snapshot(raw, &owner) {
            Ok(n) => n,
            Err(e) => return Err(self.record(StoreError::Validation(e))),
        };

        // Looks first, so orphaned item references never exist remotely
        if let Err(e) = self.gateway.delete_all_looks(&owner).await {
            return Err(self.record(StoreError::remote("import: clear looks", e)));
        }
        if let Err(e) = self.gateway.delete_all_items(&owner).await {
            return Err(self.record(cleared_error("import: clear items", e)));
        }

        if !normalized.items.is_empty() {
            if let Err(e) = self.gateway.insert_items(&normalized.items).await {
                return Err(self.record(cleared_error("import: insert items", e)));
            }
        }
        if !normalized.looks.is_empty() {
            if let Err(e) = self.gateway.insert_looks(&normalized.looks).await {
                return Err(self.record(cleared_error("import: insert looks", e)));
            }
        }

        let summary = ImportSummary {
            items: normalized.items.len(),
            looks: normalized.looks.len(),
        };
        info!(items = summary.items, looks = summary.looks, "Import complete");

        // Reload wholesale so the server-assigned rows become canonical
        self.load().await;
        Ok(summary)
    }

    /// Records the failure in the error channel and hands it back for
    /// propagation
    fn record(&mut self, err: StoreError) -> StoreError {
        error!(error = %err, "Wardrobe mutation failed");
        self.last_error = Some(err.clone());
        err
    }
}

/// Wraps a post-delete import failure with the explicit warning that
/// previously existing remote data is already gone.
fn cleared_error(operation: &'static str, err: impl ToString) -> StoreError {
    StoreError::Remote {
        operation,
        message: format!(
            "{}; existing remote data was already cleared and is not restored",
            err.to_string()
        ),
    }
}
