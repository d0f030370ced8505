//! Derived insight types returned by the insight engine.

use serde::{Deserialize, Serialize};

use crate::types::metrics::MetricSample;

/// Derived statistics for a single resource series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesInsight {
    /// Most recent value in the window.
    pub current: f64,
    /// Moving average over the last five samples.
    pub ma_5: f64,
    /// Least-squares slope of the series against sample position.
    pub trend_slope: f64,
}

/// The full insight bundle computed over the current metric window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricInsights {
    /// Most recent sample in the window.
    pub latest: MetricSample,
    /// CPU utilisation insights.
    pub cpu: SeriesInsight,
    /// Memory utilisation insights.
    pub memory: SeriesInsight,
    /// Disk usage insights.
    pub disk: SeriesInsight,
    /// Rule-based recommendations, in rule-evaluation order.
    pub recommendations: Vec<String>,
}
