//! Supabase HTTP client
//!
//! Provides a typed HTTP client shared by the table, storage and auth
//! adapters. Handles the `apikey` header, the bearer token, and endpoint
//! construction relative to the project base URL.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wardrobe_supabase::client::SupabaseClient;
//!
//! let client = SupabaseClient::new("https://abc123.supabase.co", "anon-key");
//! ```

use reqwest::{Client, Method, RequestBuilder};
use tracing::debug;

/// HTTP client for Supabase REST, storage and auth calls
///
/// Wraps `reqwest::Client` with the project base URL, the publishable anon
/// key (sent as `apikey` on every request) and an optional user bearer
/// token. Without a bearer token the anon key doubles as the bearer, which
/// is what the auth endpoints expect.
pub struct SupabaseClient {
    /// The underlying HTTP client
    client: Client,
    /// Project base URL, without a trailing slash
    base_url: String,
    /// Publishable anon key
    anon_key: String,
    /// Access token of the signed-in user, if any
    access_token: Option<String>,
}

impl SupabaseClient {
    /// Creates a new client for the given project
    ///
    /// # Arguments
    /// * `base_url` - Project base URL, e.g. `https://abc123.supabase.co`
    /// * `anon_key` - The project's publishable anon key
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
            anon_key: anon_key.into(),
            access_token: None,
        }
    }

    /// Attaches the signed-in user's access token
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Updates the access token (e.g., after a session refresh)
    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.access_token = Some(token.into());
        debug!("Updated Supabase access token");
    }

    /// The project base URL, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Creates an authenticated request builder for the given method and path
    ///
    /// Automatically prepends the base URL and adds the `apikey` and
    /// Authorization headers.
    ///
    /// # Arguments
    /// * `method` - HTTP method (GET, POST, PATCH, DELETE, etc.)
    /// * `path` - Path relative to the base URL (e.g., "/rest/v1/wardrobe_items")
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let bearer = self.access_token.as_deref().unwrap_or(&self.anon_key);
        self.request_as(method, path, bearer)
    }

    /// Like [`request`](Self::request), but with an explicit bearer token
    /// (used by sign-out, which must present the session being revoked)
    pub fn request_as(&self, method: Method, path: &str, bearer: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, &url)
            .header("apikey", &self.anon_key)
            .bearer_auth(bearer)
    }
}
