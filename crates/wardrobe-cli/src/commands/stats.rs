//! Stats command - aggregate view over the collection

use anyhow::Result;
use clap::Args;

use crate::context::load_wardrobe;
use crate::output::{get_formatter, OutputFormat};

#[derive(Debug, Args)]
pub struct StatsCommand {}

impl StatsCommand {
    pub async fn execute(&self, format: OutputFormat, config_path: Option<&str>) -> Result<()> {
        let fmt = get_formatter(format == OutputFormat::Json);
        let store = {
            let mut store = load_wardrobe(config_path).await?;
            if let Some(err) = store.last_error() {
                fmt.warn(&err.to_string());
                store.clear_error();
            }
            store
        };

        let stats = store.stats();

        if format == OutputFormat::Json {
            fmt.print_json(&serde_json::json!({
                "total_items": stats.total_items,
                "favorites": stats.favorites,
                "total_looks": stats.total_looks,
                "total_usage": stats.total_usage,
                "by_category": stats.by_category,
                "top_used": stats.top_used,
                "recent": stats.recent,
            }));
            return Ok(());
        }

        fmt.info(&format!("Items:      {}", stats.total_items));
        fmt.info(&format!("Favorites:  {}", stats.favorites));
        fmt.info(&format!("Looks:      {}", stats.total_looks));
        fmt.info(&format!("Total wears: {}", stats.total_usage));

        if !stats.by_category.is_empty() {
            fmt.info("By category:");
            let mut categories: Vec<_> = stats.by_category.iter().collect();
            categories.sort_by(|a, b| a.0.cmp(b.0));
            for (category, count) in categories {
                fmt.info(&format!("    {category}: {count}"));
            }
        }
        if !stats.top_used.is_empty() {
            fmt.info("Most worn:");
            for item in &stats.top_used {
                fmt.info(&format!("    {} ({} wears)", item.name, item.usage_count));
            }
        }
        if !stats.recent.is_empty() {
            fmt.info("Recently added:");
            for item in &stats.recent {
                fmt.info(&format!("    {}", item.name));
            }
        }
        Ok(())
    }
}
