//! Port interfaces for telemetry persistence
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use syssentry_domain::{AlertEvent, MetricSample, Result};

/// Optional durable persistence target for ingested telemetry.
///
/// The sink is strictly best-effort on the write path: the in-memory window
/// is the source of truth for the live views, and sink failures never
/// propagate to the producer.
#[async_trait]
pub trait TelemetrySink: Send + Sync {
    /// Persist one metric sample.
    async fn store_metric(&self, sample: &MetricSample) -> Result<()>;

    /// Persist one alert event.
    async fn store_alert(&self, event: &AlertEvent) -> Result<()>;

    /// Fetch the newest `limit` samples in chronological order.
    async fn fetch_metric_history(&self, limit: usize) -> Result<Vec<MetricSample>>;
}
