//! Items commands - list, add, favorite, wear and delete wardrobe items
//!
//! All commands operate on a freshly loaded store; the backend is the
//! source of truth between invocations.

use anyhow::{Context, Result};
use clap::Subcommand;

use wardrobe_core::domain::{parse_tags, CategoryFilter, Item, ItemDraft, ItemId};
use wardrobe_core::usecases::ImageFile;

use crate::context::{confirm, content_type_for, load_wardrobe};
use crate::output::{get_formatter, item_line, OutputFormat, OutputFormatter};

#[derive(Debug, Subcommand)]
pub enum ItemsCommand {
    /// List items, optionally filtered
    List {
        /// Show only this category ("all" for everything)
        #[arg(long, default_value = "all")]
        category: String,
        /// Case-insensitive name/tag search
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Add a new item
    Add {
        /// Display name
        name: String,
        /// Category label
        #[arg(long)]
        category: String,
        /// Hex color, e.g. "#1d4ed8"
        #[arg(long, default_value = "")]
        color: String,
        /// Season label
        #[arg(long, default_value = "")]
        season: String,
        /// Comma-separated tags
        #[arg(long, default_value = "")]
        tags: String,
        /// Photo to upload (jpg, png or webp, max 5 MB)
        #[arg(long)]
        image: Option<std::path::PathBuf>,
    },
    /// Toggle the favorite flag
    Favorite {
        /// Item id
        id: ItemId,
    },
    /// Record one wear of the item
    Wear {
        /// Item id
        id: ItemId,
    },
    /// Delete an item (its photo is removed as well)
    Delete {
        /// Item id
        id: ItemId,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

impl ItemsCommand {
    pub async fn execute(&self, format: OutputFormat, config_path: Option<&str>) -> Result<()> {
        let fmt = get_formatter(format == OutputFormat::Json);
        let mut store = load_wardrobe(config_path).await?;
        if let Some(err) = store.last_error() {
            fmt.warn(&err.to_string());
        }

        match self {
            ItemsCommand::List { category, search } => {
                store.set_category(CategoryFilter::from_label(category));
                store.set_search(search.clone());
                let items = store.filtered_items();
                print_items(&items, &*fmt, format);
            }
            ItemsCommand::Add {
                name,
                category,
                color,
                season,
                tags,
                image,
            } => {
                let draft = ItemDraft {
                    name: name.clone(),
                    category: category.clone(),
                    color: color.clone(),
                    season: season.clone(),
                    tags: parse_tags(tags),
                };
                let image = match image {
                    Some(path) => Some(read_image(path)?),
                    None => None,
                };
                let item = store.add_item(draft, image).await?;
                fmt.success(&format!("Added '{}' ({})", item.name, item.id));
            }
            ItemsCommand::Favorite { id } => {
                store.toggle_favorite(id).await?;
                let item = find(&store, id)?;
                let state = if item.favorite { "favorited" } else { "unfavorited" };
                fmt.success(&format!("'{}' {state}", item.name));
            }
            ItemsCommand::Wear { id } => {
                store.record_wear(id).await?;
                let item = find(&store, id)?;
                fmt.success(&format!(
                    "'{}' worn {} time(s)",
                    item.name, item.usage_count
                ));
            }
            ItemsCommand::Delete { id, yes } => {
                let item = find(&store, id)?;
                if !yes && !confirm(&format!("This deletes '{}' and its photo.", item.name))? {
                    fmt.info("Delete cancelled");
                    return Ok(());
                }
                store.delete_item(id).await?;
                fmt.success(&format!("Deleted item {id}"));
            }
        }
        Ok(())
    }
}

fn find<'a>(store: &'a wardrobe_core::usecases::WardrobeStore, id: &ItemId) -> Result<&'a Item> {
    store
        .items()
        .iter()
        .find(|item| item.id == *id)
        .with_context(|| format!("Item {id} not found"))
}

fn read_image(path: &std::path::Path) -> Result<ImageFile> {
    let content_type = content_type_for(path)?;
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(ImageFile {
        bytes,
        content_type: content_type.to_string(),
    })
}

fn print_items(items: &[&Item], fmt: &dyn OutputFormatter, format: OutputFormat) {
    if format == OutputFormat::Json {
        fmt.print_json(&serde_json::json!({
            "count": items.len(),
            "items": items,
        }));
        return;
    }

    if items.is_empty() {
        fmt.info("No items match");
        return;
    }
    for item in items {
        fmt.info(&item_line(item));
    }
}
