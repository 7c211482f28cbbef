//! GoTrue authentication adapter
//!
//! Implements [`IAuthGateway`] over the `/auth/v1` endpoints using the
//! password grant, and persists the resulting [`Session`] in the system
//! keyring so the CLI survives restarts without re-prompting.
//!
//! ## Components
//!
//! - [`SupabaseAuthAdapter`] - sign-in, refresh and sign-out calls
//! - [`KeyringSessionStorage`] - secure session storage using the keyring

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;
use tracing::{debug, info, warn};

use wardrobe_core::domain::{OwnerId, Session};
use wardrobe_core::ports::IAuthGateway;

use crate::client::SupabaseClient;

/// Keyring service name for storing sessions
const KEYRING_SERVICE: &str = "wardrobe";

// ============================================================================
// GoTrue response types
// ============================================================================

/// Response from the token endpoint (password or refresh grant)
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: Option<String>,
    user: TokenUser,
}

/// User object embedded in the token response
#[derive(Debug, Deserialize)]
struct TokenUser {
    id: OwnerId,
    email: Option<String>,
}

impl TokenResponse {
    fn into_session(self, fallback_email: &str) -> Session {
        let email = self.user.email.unwrap_or_else(|| fallback_email.to_string());
        let session = Session::new(self.user.id, email, self.access_token);
        match self.refresh_token {
            Some(token) => session.with_refresh_token(token),
            None => session,
        }
    }
}

// ============================================================================
// SupabaseAuthAdapter
// ============================================================================

/// [`IAuthGateway`] implementation over the GoTrue endpoints
pub struct SupabaseAuthAdapter {
    client: SupabaseClient,
}

impl SupabaseAuthAdapter {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    async fn token_grant(&self, grant_type: &str, body: serde_json::Value) -> Result<TokenResponse> {
        let path = format!("/auth/v1/token?grant_type={grant_type}");
        self.client
            .request(Method::POST, &path)
            .json(&body)
            .send()
            .await
            .context("Failed to reach the auth service")?
            .error_for_status()
            .context("Auth token request was rejected")?
            .json()
            .await
            .context("Failed to parse auth token response")
    }
}

#[async_trait]
impl IAuthGateway for SupabaseAuthAdapter {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        debug!(email, "Signing in");
        let response = self
            .token_grant(
                "password",
                serde_json::json!({ "email": email, "password": password }),
            )
            .await?;
        let session = response.into_session(email);
        info!(email = %session.email, "Signed in");
        Ok(session)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Session> {
        debug!("Refreshing session");
        let response = self
            .token_grant(
                "refresh_token",
                serde_json::json!({ "refresh_token": refresh_token }),
            )
            .await?;
        Ok(response.into_session(""))
    }

    async fn sign_out(&self, session: &Session) -> Result<()> {
        let response = self
            .client
            .request_as(Method::POST, "/auth/v1/logout", &session.access_token)
            .send()
            .await
            .context("Failed to reach the auth service")?;

        // An expired token still counts as signed out
        if let Err(e) = response.error_for_status() {
            warn!(error = %e, "Logout was rejected, discarding session anyway");
        }
        Ok(())
    }
}

// ============================================================================
// KeyringSessionStorage
// ============================================================================

/// Stores and retrieves sessions from the system keyring
///
/// Uses the `keyring` crate to store the session securely in the OS
/// credential store (e.g., GNOME Keyring, KDE Wallet, macOS Keychain).
/// Sessions are serialized as JSON with the service name "wardrobe" and
/// the user's email as the username.
pub struct KeyringSessionStorage;

impl KeyringSessionStorage {
    /// Stores the session in the system keyring
    pub fn store(session: &Session) -> Result<()> {
        let entry = keyring::Entry::new(KEYRING_SERVICE, &session.email)
            .context("Failed to create keyring entry")?;

        let json = serde_json::to_string(session).context("Failed to serialize session")?;

        entry
            .set_password(&json)
            .context("Failed to store session in keyring")?;

        debug!("Stored session in keyring for user: {}", session.email);
        Ok(())
    }

    /// Loads the session for the given user
    ///
    /// # Returns
    /// `Some(Session)` if found and valid, `None` if not found
    pub fn load(email: &str) -> Result<Option<Session>> {
        let entry = keyring::Entry::new(KEYRING_SERVICE, email)
            .context("Failed to create keyring entry")?;

        match entry.get_password() {
            Ok(json) => {
                let session: Session = serde_json::from_str(&json)
                    .context("Failed to deserialize session from keyring")?;
                debug!("Loaded session from keyring for user: {}", email);
                Ok(Some(session))
            }
            Err(keyring::Error::NoEntry) => {
                debug!("No session found in keyring for user: {}", email);
                Ok(None)
            }
            Err(e) => Err(anyhow::Error::new(e).context("Failed to read from keyring")),
        }
    }

    /// Removes the stored session for the given user
    pub fn clear(email: &str) -> Result<()> {
        let entry = keyring::Entry::new(KEYRING_SERVICE, email)
            .context("Failed to create keyring entry")?;

        match entry.delete_credential() {
            Ok(()) => {
                info!("Cleared session from keyring for user: {}", email);
                Ok(())
            }
            Err(keyring::Error::NoEntry) => {
                debug!("No session to clear for user: {}", email);
                Ok(())
            }
            Err(e) => Err(anyhow::Error::new(e).context("Failed to delete from keyring")),
        }
    }
}
