//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Rolling window capacities
pub const METRIC_WINDOW_CAPACITY: usize = 200;
pub const ALERT_WINDOW_CAPACITY: usize = 100;

// Insight computation
pub const MOVING_AVERAGE_WINDOW: usize = 5;

// Recommendation thresholds (percent of capacity)
pub const CPU_HIGH_THRESHOLD: f64 = 85.0;
pub const MEMORY_HIGH_THRESHOLD: f64 = 85.0;
pub const DISK_FULL_THRESHOLD: f64 = 90.0;

// Query defaults
pub const DEFAULT_RECENT_LIMIT: usize = 40;
pub const DEFAULT_HISTORY_LIMIT: usize = 200;
