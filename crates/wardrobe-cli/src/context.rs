//! Shared command plumbing
//!
//! Builds the configured adapters and a loaded [`WardrobeStore`] for the
//! commands. The signed-in user's email lives in a small marker file under
//! the data directory; the session itself stays in the system keyring.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};

use wardrobe_core::config::Config;
use wardrobe_core::domain::Session;
use wardrobe_core::usecases::{ImageUploadManager, WardrobeStore};
use wardrobe_supabase::{
    KeyringSessionStorage, SupabaseClient, SupabaseImageStore, SupabaseTableGateway,
};

/// Loads and validates the configuration, honoring a `--config` override
pub fn load_config(path_override: Option<&str>) -> Result<Config> {
    let path = match path_override {
        Some(p) => PathBuf::from(p),
        None => Config::default_path(),
    };
    let config = Config::load_or_default(&path);

    let errors = config.validate();
    if !errors.is_empty() {
        let summary: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        bail!(
            "Invalid configuration at {}: {}",
            path.display(),
            summary.join("; ")
        );
    }
    Ok(config)
}

/// Path of the marker file naming the signed-in user
fn current_user_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wardrobe")
        .join("current-user")
}

/// Remembers which user's session to load from the keyring
pub fn save_current_user(email: &str) -> Result<()> {
    let path = current_user_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(&path, email).with_context(|| format!("Failed to write {}", path.display()))
}

/// The signed-in user's email, if any
pub fn load_current_user() -> Option<String> {
    let email = std::fs::read_to_string(current_user_path()).ok()?;
    let email = email.trim().to_string();
    (!email.is_empty()).then_some(email)
}

/// Forgets the signed-in user
pub fn clear_current_user() -> Result<()> {
    match std::fs::remove_file(current_user_path()) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).context("Failed to remove current-user marker"),
    }
}

/// Loads the stored session for the signed-in user
pub fn load_session() -> Result<Session> {
    let email = load_current_user()
        .context("Not signed in. Run 'wardrobe auth login <email>' first")?;
    KeyringSessionStorage::load(&email)?
        .with_context(|| format!("No stored session for {email}. Run 'wardrobe auth login'"))
}

/// Builds a store wired to the configured backend, without loading data
pub fn build_store(config: &Config, session: Session) -> WardrobeStore {
    let gateway_client = SupabaseClient::new(&config.supabase.url, &config.supabase.anon_key)
        .with_access_token(&session.access_token);
    let storage_client = SupabaseClient::new(&config.supabase.url, &config.supabase.anon_key)
        .with_access_token(&session.access_token);

    let gateway = Arc::new(SupabaseTableGateway::new(gateway_client));
    let images = ImageUploadManager::new(Arc::new(SupabaseImageStore::new(
        storage_client,
        &config.supabase.bucket,
    )))
    .with_limit(config.upload.max_size_mb * 1024 * 1024);

    WardrobeStore::new(session, gateway, images)
}

/// Config, session and a fully loaded store, ready for a command
pub async fn load_wardrobe(config_path: Option<&str>) -> Result<WardrobeStore> {
    let config = load_config(config_path)?;
    let session = load_session()?;
    let mut store = build_store(&config, session);
    store.load().await;
    Ok(store)
}

/// Asks the user to confirm a destructive action; only a literal `yes`
/// (case-insensitive) proceeds
pub fn confirm(prompt: &str) -> Result<bool> {
    use std::io::Write;

    print!("{prompt} Type 'yes' to continue: ");
    std::io::stdout().flush().context("Failed to flush stdout")?;
    let mut answer = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;
    Ok(is_affirmative(&answer))
}

fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

/// Maps a file extension to the MIME type accepted by the upload manager
pub fn content_type_for(path: &Path) -> Result<&'static str> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "png" => Ok("image/png"),
        "webp" => Ok("image/webp"),
        other => bail!("Unsupported image extension '{other}' (use jpg, png or webp)"),
    }
}
