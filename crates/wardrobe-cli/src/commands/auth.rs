//! Auth commands - Login, Logout, and Status
//!
//! Provides the `wardrobe auth` CLI subcommands which:
//! 1. `login`  - Signs in with email and password, stores the session in
//!    the system keyring and remembers the user in a marker file.
//! 2. `logout` - Revokes the session remotely and clears the stored copy.
//! 3. `status` - Shows who is signed in.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Subcommand;
use tracing::info;

use wardrobe_core::ports::IAuthGateway;
use wardrobe_supabase::{KeyringSessionStorage, SupabaseAuthAdapter, SupabaseClient};

use crate::context::{clear_current_user, load_config, load_current_user, save_current_user};
use crate::output::{get_formatter, OutputFormat, OutputFormatter};

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Sign in with email and password
    Login {
        /// Account email address
        email: String,
        /// Password (prompted for when omitted)
        #[arg(long)]
        password: Option<String>,
    },
    /// Sign out and remove the stored session
    Logout,
    /// Check authentication status
    Status,
}

impl AuthCommand {
    pub async fn execute(&self, format: OutputFormat, config_path: Option<&str>) -> Result<()> {
        let fmt = get_formatter(format == OutputFormat::Json);
        match self {
            AuthCommand::Login { email, password } => {
                self.execute_login(email, password.as_deref(), config_path, &*fmt)
                    .await
            }
            AuthCommand::Logout => self.execute_logout(config_path, &*fmt).await,
            AuthCommand::Status => self.execute_status(&*fmt),
        }
    }

    async fn execute_login(
        &self,
        email: &str,
        password: Option<&str>,
        config_path: Option<&str>,
        fmt: &dyn OutputFormatter,
    ) -> Result<()> {
        let config = load_config(config_path)?;

        let password = match password {
            Some(p) => p.to_string(),
            None => prompt_password(email)?,
        };

        let client = SupabaseClient::new(&config.supabase.url, &config.supabase.anon_key);
        let adapter = SupabaseAuthAdapter::new(client);
        let session = adapter
            .sign_in(email, &password)
            .await
            .context("Sign-in failed")?;

        KeyringSessionStorage::store(&session)
            .context("Failed to store session in keyring")?;
        save_current_user(&session.email)?;

        info!(email = %session.email, "Signed in");
        fmt.success(&format!("Signed in as {}", session.email));
        Ok(())
    }

    async fn execute_logout(
        &self,
        config_path: Option<&str>,
        fmt: &dyn OutputFormatter,
    ) -> Result<()> {
        let Some(email) = load_current_user() else {
            fmt.info("Not signed in");
            return Ok(());
        };

        // Revoke remotely first; a failure still clears local state
        if let Ok(Some(session)) = KeyringSessionStorage::load(&email) {
            let config = load_config(config_path)?;
            let client = SupabaseClient::new(&config.supabase.url, &config.supabase.anon_key);
            let adapter = SupabaseAuthAdapter::new(client);
            if let Err(e) = adapter.sign_out(&session).await {
                fmt.warn(&format!("Could not revoke session remotely: {e}"));
            }
        }

        KeyringSessionStorage::clear(&email)?;
        clear_current_user()?;

        fmt.success(&format!("Signed out {email}"));
        Ok(())
    }

    fn execute_status(&self, fmt: &dyn OutputFormatter) -> Result<()> {
        match load_current_user() {
            Some(email) => {
                let stored = KeyringSessionStorage::load(&email)?.is_some();
                if stored {
                    fmt.success(&format!("Signed in as {email}"));
                } else {
                    fmt.warn(&format!(
                        "Marker says {email}, but no session is stored. Run 'wardrobe auth login'"
                    ));
                }
            }
            None => fmt.info("Not signed in"),
        }
        Ok(())
    }
}

/// Reads the password from stdin.
///
/// The input is not echoed-off; pass `--password` in scripts instead.
fn prompt_password(email: &str) -> Result<String> {
    print!("Password for {email}: ");
    std::io::stdout().flush().context("Failed to flush stdout")?;
    let mut password = String::new();
    std::io::stdin()
        .read_line(&mut password)
        .context("Failed to read password")?;
    Ok(password.trim_end_matches(['\r', '\n']).to_string())
}
