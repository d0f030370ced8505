//! Bounded in-memory retention for telemetry samples and alerts.
//!
//! The store exclusively owns the two rolling windows. Each window sits
//! behind its own lock; readers always receive cloned snapshots, never a
//! view into a buffer that is still being mutated. The store is created
//! once at startup and injected into handlers via `Arc`, so tests can build
//! isolated instances.

mod ring;

use parking_lot::RwLock;
pub use ring::RingBuffer;
use syssentry_domain::constants::{ALERT_WINDOW_CAPACITY, METRIC_WINDOW_CAPACITY};
use syssentry_domain::{AlertEvent, MetricSample};

/// Process-wide retention for the most recent samples and alerts.
#[derive(Debug)]
pub struct TelemetryStore {
    metrics: RwLock<RingBuffer<MetricSample>>,
    alerts: RwLock<RingBuffer<AlertEvent>>,
}

impl TelemetryStore {
    /// Create a store with the standard window capacities (200 samples,
    /// 100 alerts).
    pub fn new() -> Self {
        Self::with_capacities(METRIC_WINDOW_CAPACITY, ALERT_WINDOW_CAPACITY)
    }

    /// Create a store with explicit capacities. Used by tests that want
    /// small windows.
    pub fn with_capacities(metric_capacity: usize, alert_capacity: usize) -> Self {
        Self {
            metrics: RwLock::new(RingBuffer::new(metric_capacity)),
            alerts: RwLock::new(RingBuffer::new(alert_capacity)),
        }
    }

    /// Append a sample, evicting the oldest one when the window is full.
    pub fn push_metric(&self, sample: MetricSample) {
        self.metrics.write().push(sample);
    }

    /// Append an alert, evicting the oldest one when the window is full.
    pub fn push_alert(&self, event: AlertEvent) {
        self.alerts.write().push(event);
    }

    /// The most recent sample, if any.
    pub fn latest_metric(&self) -> Option<MetricSample> {
        self.metrics.read().latest().cloned()
    }

    /// The most recent `min(limit, len)` samples in chronological order.
    pub fn metric_history(&self, limit: usize) -> Vec<MetricSample> {
        self.metrics.read().history(limit)
    }

    /// The full current sample window in chronological order.
    pub fn metric_window(&self) -> Vec<MetricSample> {
        self.metrics.read().all()
    }

    /// All retained alerts, newest first. Alert feeds are consumed most
    /// recent first.
    pub fn recent_alerts(&self) -> Vec<AlertEvent> {
        self.alerts.read().reversed()
    }

    /// Number of samples currently retained.
    pub fn metric_count(&self) -> usize {
        self.metrics.read().len()
    }

    /// Number of alerts currently retained.
    pub fn alert_count(&self) -> usize {
        self.alerts.read().len()
    }
}

impl Default for TelemetryStore {
    fn default() -> Self {
        Self::new()
    }
}
