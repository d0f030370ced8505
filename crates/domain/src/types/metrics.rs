//! Telemetry sample and alert event types.
//!
//! These mirror the producer's ingestion payloads one-to-one: a sample
//! carries usage percentages plus disk I/O rates, an alert carries a short
//! free-form label. Both are immutable once stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SysSentryError};

/// One timestamped observation of host resource usage.
///
/// `throughput` is the combined read+write disk rate in MB/s; the read/write
/// split is only retained for IOPS. Downstream consumers rely on this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    /// Producer-side observation instant (RFC 3339).
    pub timestamp: DateTime<Utc>,
    /// CPU utilisation, 0-100.
    pub cpu_percent: f64,
    /// Memory utilisation, 0-100.
    pub memory_percent: f64,
    /// Disk space usage, 0-100.
    pub disk_percent: f64,
    /// Disk read operations per second.
    pub read_iops: f64,
    /// Disk write operations per second.
    pub write_iops: f64,
    /// Combined disk throughput in MB/s.
    pub throughput: f64,
}

impl MetricSample {
    /// Validate field ranges before the sample enters the store.
    ///
    /// Percentages must lie in `[0, 100]`, rates must be finite and
    /// non-negative. Presence and numeric typing are already enforced by
    /// deserialization; this catches out-of-range and non-finite values.
    pub fn validate(&self) -> Result<()> {
        check_percent("cpu_percent", self.cpu_percent)?;
        check_percent("memory_percent", self.memory_percent)?;
        check_percent("disk_percent", self.disk_percent)?;
        check_rate("read_iops", self.read_iops)?;
        check_rate("write_iops", self.write_iops)?;
        check_rate("throughput", self.throughput)?;
        Ok(())
    }
}

/// A triggered alert condition reported by the producer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertEvent {
    /// Instant the condition was observed.
    pub timestamp: DateTime<Utc>,
    /// Short label identifying the triggered condition.
    pub alert: String,
}

impl AlertEvent {
    /// Reject alerts with an empty label.
    pub fn validate(&self) -> Result<()> {
        if self.alert.trim().is_empty() {
            return Err(SysSentryError::InvalidInput("alert label must not be empty".into()));
        }
        Ok(())
    }
}

fn check_percent(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(SysSentryError::InvalidInput(format!(
            "{field} must be a percentage in [0, 100], got {value}"
        )));
    }
    Ok(())
}

fn check_rate(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(SysSentryError::InvalidInput(format!(
            "{field} must be a non-negative rate, got {value}"
        )));
    }
    Ok(())
}
