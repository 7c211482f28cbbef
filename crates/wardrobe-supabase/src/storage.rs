//! Storage object adapter
//!
//! Implements [`IImageStore`] over the `/storage/v1/object` endpoints of a
//! single bucket. Uploads never overwrite (keys are collision-resistant by
//! construction) and the returned URL is the bucket's public object URL.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Method;
use tracing::debug;

use wardrobe_core::domain::StorageKey;
use wardrobe_core::ports::IImageStore;

use crate::client::SupabaseClient;

/// Browser-style cache lifetime for uploaded objects, in seconds
const CACHE_CONTROL_SECS: &str = "3600";

/// [`IImageStore`] implementation over a Supabase storage bucket
pub struct SupabaseImageStore {
    client: SupabaseClient,
    bucket: String,
}

impl SupabaseImageStore {
    pub fn new(client: SupabaseClient, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Public URL of an object in this bucket
    fn public_url(&self, key: &StorageKey) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{key}",
            self.client.base_url(),
            self.bucket
        )
    }
}

#[async_trait]
impl IImageStore for SupabaseImageStore {
    async fn upload(&self, key: &StorageKey, data: &[u8], content_type: &str) -> Result<String> {
        let path = format!("/storage/v1/object/{}/{key}", self.bucket);
        debug!(bucket = %self.bucket, key = %key, size = data.len(), "Uploading object");

        self.client
            .request(Method::POST, &path)
            .header("Content-Type", content_type)
            .header("cache-control", CACHE_CONTROL_SECS)
            .header("x-upsert", "false")
            .body(data.to_vec())
            .send()
            .await
            .context("Failed to upload object")?
            .error_for_status()
            .context("Object upload returned error status")?;

        Ok(self.public_url(key))
    }

    async fn remove(&self, key: &StorageKey) -> Result<()> {
        let path = format!("/storage/v1/object/{}/{key}", self.bucket);
        debug!(bucket = %self.bucket, key = %key, "Removing object");

        self.client
            .request(Method::DELETE, &path)
            .send()
            .await
            .context("Failed to delete object")?
            .error_for_status()
            .context("Object delete returned error status")?;

        Ok(())
    }
}
