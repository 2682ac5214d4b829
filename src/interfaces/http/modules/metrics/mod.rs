//! Catalog metrics: request tracking middleware and the Prometheus endpoint

pub mod handlers;
pub mod middleware;

pub use handlers::{describe_catalog_metrics, render_catalog_metrics, MetricsState};
pub use middleware::track_catalog_requests;
