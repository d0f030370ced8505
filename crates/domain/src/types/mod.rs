//! Domain data types
//!
//! Wire-visible telemetry types shared by the store, the insight engine and
//! the HTTP surface.

pub mod insights;
pub mod metrics;

pub use insights::{MetricInsights, SeriesInsight};
pub use metrics::{AlertEvent, MetricSample};
