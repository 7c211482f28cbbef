//! Command output formatting
//!
//! Commands speak through an [`OutputFormatter`] so `--json` swaps the
//! human rendering for machine-readable lines. The item/look line
//! renderers live here so listings look the same everywhere.

use wardrobe_core::domain::{Item, Look, LookEntry};

/// Output format selector
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Trait for formatting CLI output
pub trait OutputFormatter {
    fn success(&self, message: &str);
    fn warn(&self, message: &str);
    fn info(&self, message: &str);
    fn print_json(&self, value: &serde_json::Value);
}

/// Human-readable output formatter with checkmarks and indentation
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn success(&self, message: &str) {
        println!("\u{2713} {}", message);
    }
    fn warn(&self, message: &str) {
        eprintln!("\u{26a0} Warning: {}", message);
    }
    fn info(&self, message: &str) {
        println!("  {}", message);
    }
    fn print_json(&self, _value: &serde_json::Value) {
        // Human formatter doesn't print JSON
    }
}

/// JSON output formatter
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn success(&self, message: &str) {
        println!(
            "{}",
            serde_json::json!({"success": true, "message": message})
        );
    }
    fn warn(&self, message: &str) {
        eprintln!(
            "{}",
            serde_json::json!({"level": "warning", "message": message})
        );
    }
    fn info(&self, _message: &str) {}
    fn print_json(&self, value: &serde_json::Value) {
        println!(
            "{}",
            serde_json::to_string_pretty(value).unwrap_or_default()
        );
    }
}

pub fn get_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(HumanFormatter)
    }
}

/// One listing line for an item: favorite star, name, category, wear
/// count, tags and id
pub fn item_line(item: &Item) -> String {
    let star = if item.favorite { "\u{2605} " } else { "" };
    let tags = if item.tags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", item.tags.join(", "))
    };
    format!(
        "{star}{} | {} ({} wears){tags}  {}",
        item.name, item.category, item.usage_count, item.id
    )
}

/// Listing lines for a look: a header line followed by one indented line
/// per referenced item, with a placeholder for items deleted since
pub fn look_lines(look: &Look, items: &[Item]) -> Vec<String> {
    let occasion = look
        .occasion
        .as_deref()
        .map(|o| format!(" ({o})"))
        .unwrap_or_default();
    let mut lines = vec![format!("{}{occasion}  {}", look.name, look.id)];
    for entry in look.resolve(items) {
        match entry {
            LookEntry::Present(item) => lines.push(format!("    - {}", item.name)),
            LookEntry::Removed(_) => lines.push("    - (removed item)".to_string()),
        }
    }
    lines
}
