//! Telemetry service - core business logic
//!
//! One service fronts both directions of the data flow: the producer-facing
//! ingestion gateway (validate, append to the bounded window, best-effort
//! sink forward) and the reader-facing query surface (latest/history/alert
//! views plus the derived insight bundle).

use std::sync::Arc;

use syssentry_domain::{AlertEvent, MetricInsights, MetricSample, Result};
use tracing::warn;

use super::ports::TelemetrySink;
use crate::insights::compute_insights;
use crate::store::TelemetryStore;

/// Ingestion gateway and query surface over the shared telemetry store.
pub struct TelemetryService {
    store: Arc<TelemetryStore>,
    sink: Option<Arc<dyn TelemetrySink>>,
}

impl TelemetryService {
    /// Create a service without a durable sink.
    pub fn new(store: Arc<TelemetryStore>) -> Self {
        Self { store, sink: None }
    }

    /// Attach an optional durable sink. Absence of a sink is a no-op path,
    /// not a runtime failure.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn TelemetrySink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Validate and append a metric sample.
    ///
    /// The append is unconditional once validation passes; the sink forward
    /// runs on a detached task after the store lock has been released and
    /// its failure is logged and swallowed.
    pub fn ingest_metric(&self, sample: MetricSample) -> Result<()> {
        sample.validate()?;
        self.store.push_metric(sample.clone());

        if let Some(sink) = &self.sink {
            let sink = Arc::clone(sink);
            tokio::spawn(async move {
                if let Err(err) = sink.store_metric(&sample).await {
                    warn!(error = %err, "durable sink rejected metric sample");
                }
            });
        }
        Ok(())
    }

    /// Validate and append an alert event. Same contract as
    /// [`Self::ingest_metric`].
    pub fn ingest_alert(&self, event: AlertEvent) -> Result<()> {
        event.validate()?;
        self.store.push_alert(event.clone());

        if let Some(sink) = &self.sink {
            let sink = Arc::clone(sink);
            tokio::spawn(async move {
                if let Err(err) = sink.store_alert(&event).await {
                    warn!(error = %err, "durable sink rejected alert event");
                }
            });
        }
        Ok(())
    }

    /// Most recent sample, if any.
    pub fn latest_metric(&self) -> Option<MetricSample> {
        self.store.latest_metric()
    }

    /// Full current window in chronological order.
    pub fn metric_window(&self) -> Vec<MetricSample> {
        self.store.metric_window()
    }

    /// Last `limit` samples in chronological order.
    pub fn metric_history(&self, limit: usize) -> Vec<MetricSample> {
        self.store.metric_history(limit)
    }

    /// All retained alerts, newest first.
    pub fn recent_alerts(&self) -> Vec<AlertEvent> {
        self.store.recent_alerts()
    }

    /// Extended history served from the durable sink when one is attached.
    ///
    /// Falls back to the in-memory window when no sink is configured or the
    /// sink read fails.
    pub async fn full_history(&self, limit: usize) -> Vec<MetricSample> {
        if let Some(sink) = &self.sink {
            match sink.fetch_metric_history(limit).await {
                Ok(samples) => return samples,
                Err(err) => {
                    warn!(error = %err, "sink history read failed, serving in-memory window");
                }
            }
        }
        self.store.metric_history(limit)
    }

    /// Insight bundle over the current window, or `None` when no data has
    /// arrived yet.
    pub fn insights(&self) -> Option<MetricInsights> {
        compute_insights(&self.store.metric_window())
    }
}
