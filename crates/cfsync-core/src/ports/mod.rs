//! Port definitions
//!
//! Traits that form the boundary between the domain core and the adapter
//! crates. The only port cfsync needs is the image store: the remote
//! service that holds the uploaded inventory.

pub mod image_store;

pub use image_store::{IImageStore, RemoteImage};
