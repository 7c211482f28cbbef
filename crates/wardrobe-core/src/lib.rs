//! Wardrobe Core - Domain logic and business rules
//!
//! This crate contains the hexagonal architecture core with:
//! - **Domain entities** - `Item`, `Look`, `Session`, plus the pure
//!   query/filter and statistics functions
//! - **Use cases** - `WardrobeStore` (optimistic mutations with rollback),
//!   `ImageUploadManager`, and the import/export serializer
//! - **Port definitions** - Traits for adapters: `IWardrobeGateway`,
//!   `IImageStore`, `IAuthGateway`
//!
//! # Architecture
//!
//! This crate follows the hexagonal (ports & adapters) architecture pattern.
//! The domain module contains pure business logic with no external dependencies.
//! Ports define trait interfaces that adapter crates implement.
//! Use cases orchestrate domain entities through port interfaces.

pub mod config;
pub mod domain;
pub mod ports;
pub mod usecases;
