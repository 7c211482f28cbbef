//! Use cases (application logic)
//!
//! Each use case orchestrates domain entities through the port traits:
//! - [`WardrobeStore`] - session-scoped state and every CRUD mutation
//! - [`ImageUploadManager`] - photo validation, naming and upload
//! - import/export serialization in [`transfer`]

pub mod store;
pub mod transfer;
pub mod upload_image;

pub use store::{ImportSummary, StoreError, WardrobeStore};
pub use transfer::{export_file_name, parse_snapshot, ExportSnapshot, NormalizedImport};
pub use upload_image::{ImageFile, ImageUploadManager, UploadImageError, MAX_IMAGE_BYTES};
