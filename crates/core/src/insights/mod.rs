//! Insight engine: derived statistics over the current metric window.
//!
//! All computations run on demand over a snapshot of the window in
//! chronological order (oldest at index 0). An empty window produces `None`
//! rather than partial statistics.

use syssentry_domain::constants::{
    CPU_HIGH_THRESHOLD, DISK_FULL_THRESHOLD, MEMORY_HIGH_THRESHOLD, MOVING_AVERAGE_WINDOW,
};
use syssentry_domain::{MetricInsights, MetricSample, SeriesInsight};

/// Average of the last `min(window, len)` elements of `series`.
///
/// Callers guard the empty case before invoking; an empty series yields 0.0
/// so the function stays total.
#[allow(clippy::cast_precision_loss)]
pub fn moving_average(series: &[f64], window: usize) -> f64 {
    let n = window.min(series.len());
    if n == 0 {
        return 0.0;
    }
    let tail = &series[series.len() - n..];
    tail.iter().sum::<f64>() / n as f64
}

/// Ordinary least-squares slope of `series` against its 0-based position.
///
/// Returns 0.0 for fewer than two points. The zero-variance guard cannot
/// trigger with distinct integer positions but keeps the division total.
#[allow(clippy::cast_precision_loss)]
pub fn trend_slope(series: &[f64]) -> f64 {
    let n = series.len();
    if n < 2 {
        return 0.0;
    }

    let mean_x = (n - 1) as f64 / 2.0;
    let mean_y = series.iter().sum::<f64>() / n as f64;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (index, value) in series.iter().enumerate() {
        let dx = index as f64 - mean_x;
        numerator += dx * (value - mean_y);
        denominator += dx * dx;
    }

    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Compute the full insight bundle over the current window.
///
/// Returns `None` when the window is empty ("no data yet").
pub fn compute_insights(window: &[MetricSample]) -> Option<MetricInsights> {
    let latest = window.last()?.clone();

    let cpu: Vec<f64> = window.iter().map(|m| m.cpu_percent).collect();
    let memory: Vec<f64> = window.iter().map(|m| m.memory_percent).collect();
    let disk: Vec<f64> = window.iter().map(|m| m.disk_percent).collect();

    let recommendations =
        recommendations(latest.cpu_percent, latest.memory_percent, latest.disk_percent);

    Some(MetricInsights {
        latest,
        cpu: series_insight(&cpu),
        memory: series_insight(&memory),
        disk: series_insight(&disk),
        recommendations,
    })
}

fn series_insight(series: &[f64]) -> SeriesInsight {
    SeriesInsight {
        current: series.last().copied().unwrap_or_default(),
        ma_5: moving_average(series, MOVING_AVERAGE_WINDOW),
        trend_slope: trend_slope(series),
    }
}

/// Threshold rules against the current sample. Rules are independent and
/// all-applicable; evaluation order is CPU, memory, disk.
fn recommendations(cpu: f64, memory: f64, disk: f64) -> Vec<String> {
    let mut out = Vec::new();
    if cpu > CPU_HIGH_THRESHOLD {
        out.push("CPU extremely high - identify heavy processes.".to_string());
    }
    if memory > MEMORY_HIGH_THRESHOLD {
        out.push("Memory very high - close unused apps.".to_string());
    }
    if disk > DISK_FULL_THRESHOLD {
        out.push("Disk almost full - consider cleanup.".to_string());
    }
    if out.is_empty() {
        out.push("System looks healthy.".to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn sample(seq: i64, cpu: f64, memory: f64, disk: f64) -> MetricSample {
        MetricSample {
            timestamp: Utc.timestamp_opt(1_700_000_000 + seq, 0).single().expect("valid ts"),
            cpu_percent: cpu,
            memory_percent: memory,
            disk_percent: disk,
            read_iops: 10.0,
            write_iops: 5.0,
            throughput: 1.5,
        }
    }

    #[test]
    fn moving_average_over_full_window() {
        assert_eq!(moving_average(&[10.0, 20.0, 30.0, 40.0, 50.0], 5), 30.0);
    }

    #[test]
    fn moving_average_with_short_series() {
        assert_eq!(moving_average(&[10.0], 5), 10.0);
    }

    #[test]
    fn moving_average_uses_only_the_tail() {
        assert_eq!(moving_average(&[100.0, 10.0, 20.0, 30.0, 40.0, 50.0], 5), 30.0);
    }

    #[test]
    fn trend_slope_of_exact_linear_series() {
        let slope = trend_slope(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!((slope - 1.0).abs() < 1e-12);
    }

    #[test]
    fn trend_slope_of_flat_series_is_zero() {
        assert_eq!(trend_slope(&[7.0, 7.0, 7.0, 7.0]), 0.0);
    }

    #[test]
    fn trend_slope_needs_two_points() {
        assert_eq!(trend_slope(&[42.0]), 0.0);
        assert_eq!(trend_slope(&[]), 0.0);
    }

    #[test]
    fn empty_window_yields_no_insights() {
        assert!(compute_insights(&[]).is_none());
    }

    #[test]
    fn high_cpu_only_triggers_cpu_recommendation() {
        let window = vec![sample(0, 90.0, 50.0, 50.0)];
        let insights = compute_insights(&window).expect("window not empty");
        assert_eq!(insights.recommendations.len(), 1);
        assert!(insights.recommendations[0].starts_with("CPU extremely high"));
    }

    #[test]
    fn healthy_sample_yields_single_healthy_recommendation() {
        let window = vec![sample(0, 50.0, 50.0, 50.0)];
        let insights = compute_insights(&window).expect("window not empty");
        assert_eq!(insights.recommendations, vec!["System looks healthy.".to_string()]);
    }

    #[test]
    fn all_rules_fire_in_cpu_memory_disk_order() {
        let window = vec![sample(0, 95.0, 95.0, 95.0)];
        let insights = compute_insights(&window).expect("window not empty");
        assert_eq!(insights.recommendations.len(), 3);
        assert!(insights.recommendations[0].starts_with("CPU"));
        assert!(insights.recommendations[1].starts_with("Memory"));
        assert!(insights.recommendations[2].starts_with("Disk"));
    }

    #[test]
    fn rules_read_the_latest_sample_only() {
        // Older samples are hot but the current one is healthy.
        let window = vec![sample(0, 99.0, 99.0, 99.0), sample(1, 30.0, 30.0, 30.0)];
        let insights = compute_insights(&window).expect("window not empty");
        assert_eq!(insights.recommendations, vec!["System looks healthy.".to_string()]);
    }

    #[test]
    fn insight_bundle_tracks_series_statistics() {
        let window: Vec<MetricSample> =
            (0..5).map(|seq| sample(seq, (seq + 1) as f64 * 10.0, 50.0, 50.0)).collect();
        let insights = compute_insights(&window).expect("window not empty");
        assert_eq!(insights.cpu.current, 50.0);
        assert_eq!(insights.cpu.ma_5, 30.0);
        assert!((insights.cpu.trend_slope - 10.0).abs() < 1e-9);
        assert_eq!(insights.memory.trend_slope, 0.0);
        assert_eq!(insights.latest, window[4]);
    }
}
