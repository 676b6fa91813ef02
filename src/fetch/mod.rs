//! Typed data loading with fixture fallback.

mod loader;
mod state;

pub use loader::*;
pub use state::*;

pub use crate::models::FallbackPolicy;
