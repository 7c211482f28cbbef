//! Domain entities and business logic
//!
//! This module contains the core domain types for the wardrobe manager:
//! - Newtypes for type-safe identifiers and storage keys
//! - Item and Look entities with their draft/insert/update payloads
//! - The pure query/filter engine and statistics aggregator
//! - Session management types
//! - Domain-specific error types

pub mod errors;
pub mod item;
pub mod look;
pub mod newtypes;
pub mod query;
pub mod session;
pub mod stats;

// Re-export commonly used types
pub use errors::DomainError;
pub use item::{parse_tags, Item, ItemChanges, ItemDraft, NewItem};
pub use look::{Look, LookDraft, LookEntry, NewLook};
pub use newtypes::{ItemId, LookId, OwnerId, StorageKey};
pub use query::{filter_items, CategoryFilter, ItemQuery};
pub use session::Session;
pub use stats::{compute_stats, WardrobeStats};
