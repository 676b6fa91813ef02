//! routier - data-access core for a road-traffic-control admin dashboard.
//!
//! ## Architecture
//!
//! The crate is the headless half of the dashboard: everything a page
//! component needs between "user navigated here" and "render this data".
//!
//! - **Loaders** ([`fetch`]): typed request cycles with a three-state
//!   observable result (loading / error / success) and a fixture fallback,
//!   so screens always have something to show.
//! - **Transports** ([`client`]): the seam to the agency API, with an
//!   offline substitute for deployments that have no backend at all.
//! - **Fixtures** ([`fixtures`]): deterministic generators for every domain
//!   entity, seeded from the record id.
//! - **Notifications** ([`notify`]): a variant-dispatching facade over an
//!   injected presentation sink.
//! - **Routes** ([`routes`]): the declarative page table.

pub mod client;
pub mod fetch;
pub mod fixtures;
pub mod models;
pub mod notify;
pub mod routes;

// Re-exports for convenience
pub use client::{HttpTransport, OfflineTransport, Transport};
pub use fetch::{FetchRequest, FetchState, FixtureFallback, Loader};
pub use models::{Config, FallbackPolicy, Result, RoutierError, TransportError};
pub use notify::{NotificationRequest, Notifier, Variant};
pub use routes::{Page, RouteTable};
