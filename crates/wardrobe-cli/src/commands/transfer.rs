//! Export and import commands
//!
//! Export writes the pretty-printed JSON snapshot to a file (or stdout);
//! import destructively replaces all remote data with a snapshot and
//! requires explicit confirmation.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use wardrobe_core::usecases::export_file_name;

use crate::context::{confirm, load_wardrobe};
use crate::output::{get_formatter, OutputFormat};

#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Destination file (default: guarda-roupa-YYYY-MM-DD.json; "-" for stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

impl ExportCommand {
    pub async fn execute(&self, format: OutputFormat, config_path: Option<&str>) -> Result<()> {
        let fmt = get_formatter(format == OutputFormat::Json);
        let store = load_wardrobe(config_path).await?;
        if let Some(err) = store.last_error() {
            bail!("Refusing to export partially loaded data: {err}");
        }

        let snapshot = store.export_snapshot();
        let json = snapshot.to_json().context("Failed to serialize snapshot")?;

        let path = match &self.output {
            Some(p) if p.as_os_str() == "-" => {
                println!("{json}");
                return Ok(());
            }
            Some(p) => p.clone(),
            None => PathBuf::from(export_file_name(snapshot.exported_at)),
        };

        std::fs::write(&path, &json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        fmt.success(&format!(
            "Exported {} item(s) and {} look(s) to {}",
            snapshot.items.len(),
            snapshot.looks.len(),
            path.display()
        ));
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct ImportCommand {
    /// Snapshot file to import
    file: PathBuf,

    /// Skip the confirmation prompt
    #[arg(long)]
    yes: bool,
}

impl ImportCommand {
    pub async fn execute(&self, format: OutputFormat, config_path: Option<&str>) -> Result<()> {
        let fmt = get_formatter(format == OutputFormat::Json);

        let raw = std::fs::read_to_string(&self.file)
            .with_context(|| format!("Failed to read {}", self.file.display()))?;

        if !self.yes && !confirm("This replaces ALL existing items and looks.")? {
            fmt.info("Import cancelled");
            return Ok(());
        }

        let mut store = load_wardrobe(config_path).await?;
        let summary = store.import(&raw).await?;

        fmt.success(&format!(
            "Imported {} item(s) and {} look(s)",
            summary.items, summary.looks
        ));
        Ok(())
    }
}
