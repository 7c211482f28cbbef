//! Query/Filter engine
//!
//! Pure derivation of filtered item lists from a category selection plus a
//! free-text search term. Given identical inputs the output is identical in
//! content and order; the input collection is never mutated and relative
//! ordering is preserved (stable filter).

use serde::{Deserialize, Serialize};

use super::item::Item;

/// Category predicate: a concrete category or the `all` wildcard
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    /// Matches every item
    #[default]
    All,
    /// Exact category match
    Only(String),
}

impl CategoryFilter {
    /// Parses the UI convention where the literal string `all` is the wildcard
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(label.to_string())
        }
    }

    fn matches(&self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => item.category == *category,
        }
    }
}

/// Combined filter state: category plus free-text search
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemQuery {
    pub category: CategoryFilter,
    pub search: String,
}

impl ItemQuery {
    fn matches(&self, item: &Item) -> bool {
        if !self.category.matches(item) {
            return false;
        }

        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        item.name.to_lowercase().contains(&needle)
            || item
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }
}

/// Filters items by category and case-insensitive substring search over
/// name and tags. Empty or whitespace-only search matches everything.
pub fn filter_items<'a>(items: &'a [Item], query: &ItemQuery) -> Vec<&'a Item> {
    items.iter().filter(|item| query.matches(item)).collect()
}
