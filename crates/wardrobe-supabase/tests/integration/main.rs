//! Integration tests for wardrobe-supabase
//!
//! Uses wiremock to simulate the Supabase REST, storage and auth endpoints
//! and verifies end-to-end behavior of the table gateway, the image store
//! and the auth adapter.

mod common;

mod test_auth;
mod test_storage;
mod test_tables;
