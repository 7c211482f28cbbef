//! Supabase adapters for the wardrobe manager
//!
//! Implements the core port traits against a hosted Supabase project:
//! - [`client`] - shared HTTP client with `apikey` and bearer headers
//! - [`tables`] - [`IWardrobeGateway`] over the PostgREST table endpoints
//! - [`storage`] - [`IImageStore`] over the storage object endpoints
//! - [`auth`] - [`IAuthGateway`] over the GoTrue password grant, plus
//!   keyring-backed session persistence
//!
//! [`IWardrobeGateway`]: wardrobe_core::ports::IWardrobeGateway
//! [`IImageStore`]: wardrobe_core::ports::IImageStore
//! [`IAuthGateway`]: wardrobe_core::ports::IAuthGateway

pub mod auth;
pub mod client;
pub mod storage;
pub mod tables;

pub use auth::{KeyringSessionStorage, SupabaseAuthAdapter};
pub use client::SupabaseClient;
pub use storage::SupabaseImageStore;
pub use tables::SupabaseTableGateway;
