//! Auth gateway port (driven/secondary port)
//!
//! Session retrieval and sign-out against the hosted auth service. The
//! service itself (password policies, OAuth providers, token issuance) is
//! an opaque external collaborator; this port only covers what the core
//! needs: obtaining a [`Session`] and ending it.

use crate::domain::Session;

/// Port trait for the authentication service
#[async_trait::async_trait]
pub trait IAuthGateway: Send + Sync {
    /// Signs in with email and password, returning a fresh session
    async fn sign_in(&self, email: &str, password: &str) -> anyhow::Result<Session>;

    /// Exchanges a refresh token for a new session
    async fn refresh(&self, refresh_token: &str) -> anyhow::Result<Session>;

    /// Revokes the session's tokens
    async fn sign_out(&self, session: &Session) -> anyhow::Result<()>;
}
