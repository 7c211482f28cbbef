//! Port definitions (trait interfaces for adapters)
//!
//! Following the hexagonal architecture pattern, these traits define the
//! boundary between the core and the outside world:
//! - [`IWardrobeGateway`] - row CRUD against the hosted table store
//! - [`IImageStore`] - the hosted blob bucket for item photos
//! - [`IAuthGateway`] - session retrieval and sign-out

pub mod auth_gateway;
pub mod image_store;
pub mod wardrobe_gateway;

pub use auth_gateway::IAuthGateway;
pub use image_store::IImageStore;
pub use wardrobe_gateway::IWardrobeGateway;
