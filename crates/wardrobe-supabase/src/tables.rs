//! PostgREST table gateway
//!
//! Implements [`IWardrobeGateway`] over the `/rest/v1` table endpoints.
//! Every query is scoped to the owning user with a `user_id=eq.{uuid}`
//! filter, listings are ordered newest-first by the server, and writes
//! that need the stored row back send `Prefer: return=representation`.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Method;
use tracing::debug;

use wardrobe_core::domain::{Item, ItemChanges, ItemId, Look, LookId, NewItem, NewLook, OwnerId};
use wardrobe_core::ports::IWardrobeGateway;

use crate::client::SupabaseClient;

/// Table holding item rows
const ITEMS_TABLE: &str = "wardrobe_items";

/// Table holding look rows
const LOOKS_TABLE: &str = "looks";

/// Asks PostgREST to echo the stored row back in the response body
const RETURN_REPRESENTATION: &str = "return=representation";

/// [`IWardrobeGateway`] implementation over the Supabase REST endpoints
pub struct SupabaseTableGateway {
    client: SupabaseClient,
}

impl SupabaseTableGateway {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    /// Fetches all rows of `table` owned by `owner`, newest-first
    async fn list<T: serde::de::DeserializeOwned>(
        &self,
        table: &str,
        owner: &OwnerId,
    ) -> Result<Vec<T>> {
        let path = format!(
            "/rest/v1/{table}?user_id=eq.{owner}&select=*&order=created_at.desc"
        );
        let rows: Vec<T> = self
            .client
            .request(Method::GET, &path)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {table}"))?
            .error_for_status()
            .with_context(|| format!("GET {table} returned error status"))?
            .json()
            .await
            .with_context(|| format!("Failed to parse {table} rows"))?;
        debug!(table, count = rows.len(), "Listed rows");
        Ok(rows)
    }

    /// Inserts one row and returns the stored representation.
    ///
    /// PostgREST answers a single-object insert with a one-element array.
    async fn insert_returning<B, T>(&self, table: &str, body: &B) -> Result<T>
    where
        B: serde::Serialize + Sync,
        T: serde::de::DeserializeOwned,
    {
        let path = format!("/rest/v1/{table}");
        let mut rows: Vec<T> = self
            .client
            .request(Method::POST, &path)
            .header("Prefer", RETURN_REPRESENTATION)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to insert into {table}"))?
            .error_for_status()
            .with_context(|| format!("POST {table} returned error status"))?
            .json()
            .await
            .with_context(|| format!("Failed to parse inserted {table} row"))?;
        rows.pop()
            .with_context(|| format!("Insert into {table} returned no row"))
    }

    /// Inserts a batch of rows without asking for the representation back
    async fn insert_batch<B: serde::Serialize + Sync>(
        &self,
        table: &str,
        rows: &[B],
    ) -> Result<()> {
        let path = format!("/rest/v1/{table}");
        self.client
            .request(Method::POST, &path)
            .json(&rows)
            .send()
            .await
            .with_context(|| format!("Failed to insert batch into {table}"))?
            .error_for_status()
            .with_context(|| format!("Batch POST {table} returned error status"))?;
        debug!(table, count = rows.len(), "Inserted batch");
        Ok(())
    }

    /// Deletes every row of `table` matching the filter
    async fn delete_where(&self, table: &str, filter: &str) -> Result<()> {
        let path = format!("/rest/v1/{table}?{filter}");
        self.client
            .request(Method::DELETE, &path)
            .send()
            .await
            .with_context(|| format!("Failed to delete from {table}"))?
            .error_for_status()
            .with_context(|| format!("DELETE {table} returned error status"))?;
        Ok(())
    }
}

#[async_trait]
impl IWardrobeGateway for SupabaseTableGateway {
    async fn list_items(&self, owner: &OwnerId) -> Result<Vec<Item>> {
        self.list(ITEMS_TABLE, owner).await
    }

    async fn insert_item(&self, item: &NewItem) -> Result<Item> {
        self.insert_returning(ITEMS_TABLE, item).await
    }

    async fn insert_items(&self, items: &[NewItem]) -> Result<()> {
        self.insert_batch(ITEMS_TABLE, items).await
    }

    async fn update_item(&self, id: &ItemId, changes: &ItemChanges) -> Result<Item> {
        let path = format!("/rest/v1/{ITEMS_TABLE}?id=eq.{id}");
        let mut rows: Vec<Item> = self
            .client
            .request(Method::PATCH, &path)
            .header("Prefer", RETURN_REPRESENTATION)
            .json(changes)
            .send()
            .await
            .context("Failed to update item")?
            .error_for_status()
            .context("PATCH wardrobe_items returned error status")?
            .json()
            .await
            .context("Failed to parse updated item row")?;
        rows.pop().context("Update matched no item row")
    }

    async fn delete_item(&self, id: &ItemId) -> Result<()> {
        self.delete_where(ITEMS_TABLE, &format!("id=eq.{id}")).await
    }

    async fn delete_all_items(&self, owner: &OwnerId) -> Result<()> {
        self.delete_where(ITEMS_TABLE, &format!("user_id=eq.{owner}"))
            .await
    }

    async fn list_looks(&self, owner: &OwnerId) -> Result<Vec<Look>> {
        self.list(LOOKS_TABLE, owner).await
    }

    async fn insert_look(&self, look: &NewLook) -> Result<Look> {
        self.insert_returning(LOOKS_TABLE, look).await
    }

    async fn insert_looks(&self, looks: &[NewLook]) -> Result<()> {
        self.insert_batch(LOOKS_TABLE, looks).await
    }

    async fn delete_look(&self, id: &LookId) -> Result<()> {
        self.delete_where(LOOKS_TABLE, &format!("id=eq.{id}")).await
    }

    async fn delete_all_looks(&self, owner: &OwnerId) -> Result<()> {
        self.delete_where(LOOKS_TABLE, &format!("user_id=eq.{owner}"))
            .await
    }
}
