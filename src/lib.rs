//! Select two campus places and view the walking route between them
//!
//! The route itself comes from an external routing backend, this crate owns
//! the place catalog, the selection surfaces, the map view state and the
//! rendering of the final result.
pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
mod error;
pub mod geo;
pub mod map;
pub mod services;

pub use error::Error;
pub use geo::{Bounds, Location};
