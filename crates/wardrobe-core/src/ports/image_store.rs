//! Blob store port (driven/secondary port)
//!
//! Interface for the hosted image bucket. Keys are owner-namespaced paths
//! derived by the Image Upload Manager; the adapter owns the bucket name
//! and the public-URL convention.

use crate::domain::StorageKey;

/// Port trait for the remote blob store
#[async_trait::async_trait]
pub trait IImageStore: Send + Sync {
    /// Uploads the bytes under the given key and returns the public URL
    async fn upload(
        &self,
        key: &StorageKey,
        data: &[u8],
        content_type: &str,
    ) -> anyhow::Result<String>;

    /// Removes the object stored under the given key
    async fn remove(&self, key: &StorageKey) -> anyhow::Result<()>;
}
