//! CLI command implementations

pub mod auth;
pub mod items;
pub mod looks;
pub mod stats;
pub mod transfer;
