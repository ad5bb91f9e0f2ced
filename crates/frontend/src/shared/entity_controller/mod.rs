//! Entity State Controller and the Backend Service Adapter it wraps.

pub mod adapter;
pub mod controller;
pub mod state;

pub use adapter::{EntityServiceAdapter, HttpServiceAdapter};
pub use controller::EntityController;
pub use state::EntityCollectionState;
