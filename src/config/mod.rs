//! Configuration module for pixelgrid
//!
//! Provides types, discovery and loading for `pxg.toml`.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
