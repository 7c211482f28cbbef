//! Authenticated session
//!
//! The session is an explicit value threaded into the state store's
//! constructor; there is no ambient global user. Collections live only as
//! long as the session: they are reloaded wholesale on sign-in and cleared
//! on sign-out.

use serde::{Deserialize, Serialize};

use super::newtypes::OwnerId;

/// Credentials and identity of the signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Owner of every record this session may touch
    pub owner_id: OwnerId,
    /// User's email address
    pub email: String,
    /// Bearer token for gateway requests
    pub access_token: String,
    /// Token for obtaining a new access token without re-entering credentials
    pub refresh_token: Option<String>,
}

impl Session {
    /// Creates a session for the given owner with a bearer token
    pub fn new(
        owner_id: OwnerId,
        email: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            owner_id,
            email: email.into(),
            access_token: access_token.into(),
            refresh_token: None,
        }
    }

    /// Attaches a refresh token
    pub fn with_refresh_token(mut self, token: impl Into<String>) -> Self {
        self.refresh_token = Some(token.into());
        self
    }
}
