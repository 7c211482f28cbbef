//! Configuration module.
//!
//! Provides typed configuration structs that map to the YAML configuration
//! file, with loading, validation and defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub supabase: SupabaseConfig,
    pub upload: UploadConfig,
    pub logging: LoggingConfig,
}

/// Hosted backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupabaseConfig {
    /// Project base URL, e.g. `https://abc123.supabase.co`
    pub url: String,
    /// Publishable anon key, sent as the `apikey` header
    pub anon_key: String,
    /// Storage bucket holding item photos
    pub bucket: String,
}

/// Image upload settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Maximum accepted photo size in MiB
    pub max_size_mb: u64,
}

/// Logging / tracing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: `trace`, `debug`, `info`, `warn`, or `error`.
    pub level: String,
}

impl Config {
    /// Load configuration from a YAML file at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Try to load from `path`; fall back to [`Config::default`] on any error.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Platform-appropriate default path for the configuration file.
    ///
    /// Typically `$XDG_CONFIG_HOME/wardrobe/config.yaml` on Linux.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("wardrobe")
            .join("config.yaml")
    }
}

impl Default for SupabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            bucket: "wardrobe-images".to_string(),
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self { max_size_mb: 5 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// A single validation error found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path to the offending field, e.g. `"supabase.url"`.
    pub field: String,
    /// Human-readable explanation.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Valid values for `logging.level`.
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl Config {
    /// Validate the configuration and return all errors found.
    ///
    /// An empty vector means the configuration is valid.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.supabase.url.trim().is_empty() {
            errors.push(ValidationError {
                field: "supabase.url".into(),
                message: "must be set to the project base URL".into(),
            });
        } else if !self.supabase.url.starts_with("http") {
            errors.push(ValidationError {
                field: "supabase.url".into(),
                message: "must be an http(s) URL".into(),
            });
        }
        if self.supabase.anon_key.trim().is_empty() {
            errors.push(ValidationError {
                field: "supabase.anon_key".into(),
                message: "must be set to the project anon key".into(),
            });
        }
        if self.supabase.bucket.trim().is_empty() {
            errors.push(ValidationError {
                field: "supabase.bucket".into(),
                message: "must name the image bucket".into(),
            });
        }

        if self.upload.max_size_mb == 0 {
            errors.push(ValidationError {
                field: "upload.max_size_mb".into(),
                message: "must be greater than 0".into(),
            });
        }

        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            errors.push(ValidationError {
                field: "logging.level".into(),
                message: format!("must be one of: {}", VALID_LOG_LEVELS.join(", ")),
            });
        }

        errors
    }
}
