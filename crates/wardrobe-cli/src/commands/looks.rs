//! Looks commands - list, create and delete outfit combinations
//!
//! A look references items by id; deleting a referenced item later leaves
//! the look intact and the listing shows a placeholder for the gap.

use anyhow::{Context, Result};
use clap::Subcommand;

use wardrobe_core::domain::{ItemId, LookDraft, LookId};
use wardrobe_core::usecases::WardrobeStore;

use crate::context::{confirm, load_wardrobe};
use crate::output::{get_formatter, look_lines, OutputFormat, OutputFormatter};

#[derive(Debug, Subcommand)]
pub enum LooksCommand {
    /// List looks with their resolved items
    List,
    /// Create a look from existing items
    Create {
        /// Display name
        name: String,
        /// Items composing the look (at least one)
        #[arg(required = true)]
        items: Vec<ItemId>,
        /// Occasion label, e.g. "trabalho"
        #[arg(long)]
        occasion: Option<String>,
    },
    /// Delete a look (referenced items are untouched)
    Delete {
        /// Look id
        id: LookId,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

impl LooksCommand {
    pub async fn execute(&self, format: OutputFormat, config_path: Option<&str>) -> Result<()> {
        let fmt = get_formatter(format == OutputFormat::Json);
        let mut store = load_wardrobe(config_path).await?;
        if let Some(err) = store.last_error() {
            fmt.warn(&err.to_string());
        }

        match self {
            LooksCommand::List => print_looks(&store, &*fmt, format),
            LooksCommand::Create {
                name,
                items,
                occasion,
            } => {
                let draft = LookDraft {
                    name: name.clone(),
                    occasion: occasion.clone(),
                    item_ids: items.clone(),
                };
                let look = store.create_look(draft).await?;
                fmt.success(&format!("Created look '{}' ({})", look.name, look.id));
            }
            LooksCommand::Delete { id, yes } => {
                let look = store
                    .looks()
                    .iter()
                    .find(|look| look.id == *id)
                    .with_context(|| format!("Look {id} not found"))?;
                if !yes && !confirm(&format!("This deletes the look '{}'.", look.name))? {
                    fmt.info("Delete cancelled");
                    return Ok(());
                }
                store.delete_look(id).await?;
                fmt.success(&format!("Deleted look {id}"));
            }
        }
        Ok(())
    }
}

fn print_looks(store: &WardrobeStore, fmt: &dyn OutputFormatter, format: OutputFormat) {
    if format == OutputFormat::Json {
        fmt.print_json(&serde_json::json!({
            "count": store.looks().len(),
            "looks": store.looks(),
        }));
        return;
    }

    if store.looks().is_empty() {
        fmt.info("No looks yet");
        return;
    }
    for look in store.looks() {
        for line in look_lines(look, store.items()) {
            fmt.info(&line);
        }
    }
}
