//! Import/Export serializer
//!
//! Serializes the in-memory collections into a JSON snapshot and parses a
//! snapshot back into normalized insert payloads. Normalization happens
//! entirely before any remote call: identity fields are stripped, ownership
//! is forced to the current session, tag and item-id lists are coerced to
//! arrays (including the legacy comma-separated string form), and missing
//! creation timestamps default to the import moment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{parse_tags, DomainError, Item, ItemId, Look, NewItem, NewLook, OwnerId};

/// The exported JSON document: `{ exportedAt, items, looks }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSnapshot {
    #[serde(rename = "exportedAt")]
    pub exported_at: DateTime<Utc>,
    pub items: Vec<Item>,
    pub looks: Vec<Look>,
}

impl ExportSnapshot {
    /// Captures the current collections with a fresh timestamp
    pub fn capture(items: &[Item], looks: &[Look]) -> Self {
        Self {
            exported_at: Utc::now(),
            items: items.to_vec(),
            looks: looks.to_vec(),
        }
    }

    /// Pretty-printed JSON, matching the downloadable file format
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Conventional file name for a snapshot download: `guarda-roupa-{date}.json`
pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("guarda-roupa-{}.json", now.format("%Y-%m-%d"))
}

/// Fully normalized snapshot, ready for the destructive replace sequence
#[derive(Debug, Clone)]
pub struct NormalizedImport {
    pub items: Vec<NewItem>,
    pub looks: Vec<NewLook>,
}

/// Tags as found in the wild: a proper array, a comma-separated string,
/// or null/absent
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TagField {
    List(Vec<String>),
    Csv(String),
}

impl TagField {
    fn into_vec(self) -> Vec<String> {
        match self {
            Self::List(tags) => tags,
            Self::Csv(csv) => parse_tags(&csv),
        }
    }
}

/// Lenient item row: every field optional or defaulted, identity ignored
#[derive(Debug, Deserialize)]
struct RawItem {
    #[serde(default)]
    name: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    color: String,
    #[serde(default)]
    season: String,
    #[serde(default)]
    tags: Option<TagField>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    favorite: bool,
    #[serde(default)]
    usage_count: u32,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

/// Lenient look row
#[derive(Debug, Deserialize)]
struct RawLook {
    #[serde(default)]
    name: String,
    #[serde(default)]
    occasion: Option<String>,
    #[serde(default)]
    item_ids: Option<Vec<ItemId>>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

/// Parses and normalizes a snapshot for the given owner.
///
/// Structural validation is strict (`items` and `looks` must both be
/// present as arrays); row contents are lenient with defaults so old
/// exports keep importing.
pub fn parse_snapshot(raw: &str, owner: &OwnerId) -> Result<NormalizedImport, DomainError> {
    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| DomainError::InvalidSnapshot(format!("not valid JSON: {e}")))?;

    let items_value = value
        .get("items")
        .ok_or_else(|| DomainError::InvalidSnapshot("missing 'items' field".to_string()))?;
    let looks_value = value
        .get("looks")
        .ok_or_else(|| DomainError::InvalidSnapshot("missing 'looks' field".to_string()))?;

    if !items_value.is_array() {
        return Err(DomainError::InvalidSnapshot(
            "'items' must be an array".to_string(),
        ));
    }
    if !looks_value.is_array() {
        return Err(DomainError::InvalidSnapshot(
            "'looks' must be an array".to_string(),
        ));
    }

    let raw_items: Vec<RawItem> = serde_json::from_value(items_value.clone())
        .map_err(|e| DomainError::InvalidSnapshot(format!("bad item row: {e}")))?;
    let raw_looks: Vec<RawLook> = serde_json::from_value(looks_value.clone())
        .map_err(|e| DomainError::InvalidSnapshot(format!("bad look row: {e}")))?;

    let now = Utc::now();

    let items = raw_items
        .into_iter()
        .map(|row| NewItem {
            owner_id: *owner,
            name: row.name,
            category: row.category,
            color: row.color,
            season: row.season,
            tags: row.tags.map(TagField::into_vec).unwrap_or_default(),
            image_url: row.image_url,
            favorite: row.favorite,
            usage_count: row.usage_count,
            created_at: Some(row.created_at.unwrap_or(now)),
        })
        .collect();

    let looks = raw_looks
        .into_iter()
        .map(|row| NewLook {
            owner_id: *owner,
            name: row.name,
            occasion: row.occasion,
            item_ids: row.item_ids.unwrap_or_default(),
            created_at: Some(row.created_at.unwrap_or(now)),
        })
        .collect();

    Ok(NormalizedImport { items, looks })
}
