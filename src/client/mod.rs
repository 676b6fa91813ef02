//! Transports for the dashboard API.

mod http;
mod transport;

pub use http::*;
pub use transport::*;
