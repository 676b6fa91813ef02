//! Core data models for routier: domain records, configuration, and the
//! error taxonomy shared across the crate.

mod config;
mod domain;
mod error;

pub use config::*;
pub use domain::*;
pub use error::*;
