//! Image upload use case
//!
//! Validates the file before any network call, derives a collision-resistant
//! owner-namespaced storage key, uploads through the blob store port, and
//! reverses public URLs back into storage keys for deletion.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{DomainError, OwnerId, StorageKey};
use crate::ports::IImageStore;

/// Maximum accepted image size: 5 MiB
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Fixed path marker separating the host part of a public URL from the
/// bucket-qualified storage path
const PUBLIC_PATH_MARKER: &str = "/storage/v1/object/public/";

/// An image file selected by the user, as raw bytes plus its MIME type
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Failure modes of an image upload
#[derive(Debug, Error)]
pub enum UploadImageError {
    /// Rejected by local validation; no network call was made
    #[error(transparent)]
    Rejected(#[from] DomainError),

    /// The blob store refused or failed the upload
    #[error("Image upload failed: {0}")]
    Upload(String),
}

/// Validates, names and uploads item photos
pub struct ImageUploadManager {
    store: Arc<dyn IImageStore>,
    max_bytes: u64,
}

impl ImageUploadManager {
    /// Creates a manager with the default 5 MiB size limit
    pub fn new(store: Arc<dyn IImageStore>) -> Self {
        Self {
            store,
            max_bytes: MAX_IMAGE_BYTES,
        }
    }

    /// Overrides the size limit (from configuration)
    pub fn with_limit(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Checks MIME type and size without touching the network
    pub fn validate(&self, file: &ImageFile) -> Result<(), DomainError> {
        if extension_for(&file.content_type).is_none() {
            return Err(DomainError::UnsupportedImageType(
                file.content_type.clone(),
            ));
        }
        let size = file.bytes.len() as u64;
        if size > self.max_bytes {
            return Err(DomainError::ImageTooLarge {
                size_bytes: size,
                limit_bytes: self.max_bytes,
            });
        }
        Ok(())
    }

    /// Uploads a validated image and returns its public URL.
    ///
    /// Validation failures reject the call before any network traffic.
    pub async fn upload_image(
        &self,
        owner: &OwnerId,
        file: &ImageFile,
    ) -> Result<String, UploadImageError> {
        self.validate(file)?;

        let key = derive_storage_key(owner, &file.content_type)?;
        debug!(key = %key, size = file.bytes.len(), "Uploading image");

        let url = self
            .store
            .upload(&key, &file.bytes, &file.content_type)
            .await
            .map_err(|e| UploadImageError::Upload(e.to_string()))?;

        Ok(url)
    }

    /// Deletes the image behind a public URL, best-effort.
    ///
    /// Malformed URLs (missing marker, missing key) are ignored silently;
    /// storage failures are logged but never propagated to the caller.
    pub async fn delete_image(&self, public_url: &str) {
        let Some(key) = storage_key_from_url(public_url) else {
            debug!(url = public_url, "No storage key in URL, skipping delete");
            return;
        };

        if let Err(e) = self.store.remove(&key).await {
            warn!(key = %key, error = %e, "Failed to delete stored image");
        }
    }
}

/// Maps an accepted MIME type to its storage extension.
///
/// The extension comes from the MIME type, never from the client-supplied
/// file name.
fn extension_for(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        _ => None,
    }
}

/// Derives `{owner_id}/{timestamp}-{token}.{ext}`.
///
/// Timestamp plus random suffix keeps keys collision-resistant even for
/// uploads within the same millisecond.
fn derive_storage_key(owner: &OwnerId, content_type: &str) -> Result<StorageKey, DomainError> {
    let ext = extension_for(content_type)
        .ok_or_else(|| DomainError::UnsupportedImageType(content_type.to_string()))?;
    let timestamp = chrono::Utc::now().timestamp_millis();
    let token = uuid::Uuid::new_v4().simple().to_string();
    StorageKey::new(format!("{owner}/{timestamp}-{}.{ext}", &token[..8]))
}

/// Reverse-parses a public URL into the storage key.
///
/// The URL path after the fixed marker is `{bucket}/{key}`; the bucket
/// segment is dropped. Returns `None` for anything malformed.
fn storage_key_from_url(public_url: &str) -> Option<StorageKey> {
    let (_, bucket_and_key) = public_url.split_once(PUBLIC_PATH_MARKER)?;
    let (_bucket, key) = bucket_and_key.split_once('/')?;
    if key.is_empty() {
        return None;
    }
    StorageKey::new(key).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Blob store double that records calls and can be scripted to fail
    struct FakeImageStore {
        uploads: Mutex<Vec<String>>,
        removals: Mutex<Vec<String>>,
        fail_upload: bool,
    }

    impl FakeImageStore {
        fn new() -> Self {
            Self {
                uploads: Mutex::new(vec![]),
                removals: Mutex::new(vec![]),
                fail_upload: false,
            }
        }
    }

    #[async_trait::async_trait]
    impl IImageStore for FakeImageStore {
        async fn upload(
            &self,
            key: &StorageKey,
            _data: &[u8],
            _content_type: &str,
        ) -> anyhow::Result<String> {
            if self.fail_upload {
                anyhow::bail!("bucket unavailable");
            }
            self.uploads.lock().unwrap().push(key.to_string());
            Ok(format!(
                "https://proj.supabase.co/storage/v1/object/public/wardrobe-images/{key}"
            ))
        }

        async fn remove(&self, key: &StorageKey) -> anyhow::Result<()> {
            self.removals.lock().unwrap().push(key.to_string());
            Ok(())
        }
    }

    fn jpeg(len: usize) -> ImageFile {
        ImageFile {
            bytes: vec![0u8; len],
            content_type: "image/jpeg".to_string(),
        }
    }

    #[tokio::test]
    async fn test_oversized_file_rejected_before_any_network_call() {
        let store = Arc::new(FakeImageStore::new());
        let manager = ImageUploadManager::new(store.clone());

        // 6 MB JPEG
        let result = manager
            .upload_image(&OwnerId::new(), &jpeg(6 * 1024 * 1024))
            .await;

        assert!(matches!(
            result,
            Err(UploadImageError::Rejected(DomainError::ImageTooLarge { .. }))
        ));
        assert!(store.uploads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unsupported_mime_rejected() {
        let store = Arc::new(FakeImageStore::new());
        let manager = ImageUploadManager::new(store.clone());

        let file = ImageFile {
            bytes: vec![0u8; 16],
            content_type: "image/gif".to_string(),
        };
        let result = manager.upload_image(&OwnerId::new(), &file).await;

        assert!(matches!(
            result,
            Err(UploadImageError::Rejected(
                DomainError::UnsupportedImageType(_)
            ))
        ));
        assert!(store.uploads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upload_namespaces_key_by_owner() {
        let store = Arc::new(FakeImageStore::new());
        let manager = ImageUploadManager::new(store.clone());
        let owner = OwnerId::new();

        let url = manager.upload_image(&owner, &jpeg(1024)).await.unwrap();

        let uploads = store.uploads.lock().unwrap();
        assert_eq!(uploads.len(), 1);
        assert!(uploads[0].starts_with(&format!("{owner}/")));
        assert!(uploads[0].ends_with(".jpg"));
        assert!(url.contains(PUBLIC_PATH_MARKER));
    }

    #[tokio::test]
    async fn test_delete_image_noops_on_malformed_url() {
        let store = Arc::new(FakeImageStore::new());
        let manager = ImageUploadManager::new(store.clone());

        manager.delete_image("https://example.com/no/marker.jpg").await;
        manager
            .delete_image("https://proj.supabase.co/storage/v1/object/public/bucketonly")
            .await;

        assert!(store.removals.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_image_strips_bucket_from_key() {
        let store = Arc::new(FakeImageStore::new());
        let manager = ImageUploadManager::new(store.clone());

        manager
            .delete_image(
                "https://proj.supabase.co/storage/v1/object/public/wardrobe-images/owner/1-ab.jpg",
            )
            .await;

        let removals = store.removals.lock().unwrap();
        assert_eq!(removals.as_slice(), ["owner/1-ab.jpg"]);
    }

    #[test]
    fn test_storage_key_from_url() {
        assert_eq!(
            storage_key_from_url(
                "https://x.co/storage/v1/object/public/bucket/owner/123-ab.png"
            )
            .unwrap()
            .as_str(),
            "owner/123-ab.png"
        );
        assert!(storage_key_from_url("https://x.co/other/path.png").is_none());
    }
}
