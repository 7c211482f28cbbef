//! Statistics aggregator
//!
//! Pure derivation of aggregate counts from the in-memory collections.
//! Recomputed by callers whenever items or looks change; memoization is an
//! implementation freedom of the consumer, not a contract of this module.

use std::collections::HashMap;

use serde::Serialize;

use super::item::Item;
use super::look::Look;

/// How many items to report in the most-used ranking
const TOP_USED_LIMIT: usize = 3;

/// How many items to report in the recently-added list
const RECENT_LIMIT: usize = 5;

/// Aggregate view over the wardrobe
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WardrobeStats {
    /// Total number of items
    pub total_items: usize,
    /// Number of items flagged favorite
    pub favorites: usize,
    /// Total number of looks
    pub total_looks: usize,
    /// Sum of all usage counts
    pub total_usage: u64,
    /// Per-category histogram; categories with no items are absent, not zero
    pub by_category: HashMap<String, usize>,
    /// Top items by usage count, descending; ties keep collection order
    pub top_used: Vec<Item>,
    /// Most recently created items, newest first
    pub recent: Vec<Item>,
}

/// Computes aggregate statistics over the given collections.
///
/// Pure function with no side effects; input slices are not mutated.
pub fn compute_stats(items: &[Item], looks: &[Look]) -> WardrobeStats {
    let total_items = items.len();
    let favorites = items.iter().filter(|item| item.favorite).count();
    let total_usage = items.iter().map(|item| u64::from(item.usage_count)).sum();

    let mut by_category: HashMap<String, usize> = HashMap::new();
    for item in items {
        *by_category.entry(item.category.clone()).or_insert(0) += 1;
    }

    // sort_by is stable, so equal usage counts keep their collection order
    let mut top_used: Vec<Item> = items.to_vec();
    top_used.sort_by(|a, b| b.usage_count.cmp(&a.usage_count));
    top_used.truncate(TOP_USED_LIMIT);

    let mut recent: Vec<Item> = items.to_vec();
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent.truncate(RECENT_LIMIT);

    WardrobeStats {
        total_items,
        favorites,
        total_looks: looks.len(),
        total_usage,
        by_category,
        top_used,
        recent,
    }
}
