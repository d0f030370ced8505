//! # SysSentry Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The bounded ring store retaining the rolling telemetry window
//! - The telemetry service (ingestion gateway + query surface)
//! - The insight engine (moving averages, trend slopes, recommendations)
//! - Port/adapter interfaces (traits) for the optional durable sink
//!
//! ## Architecture Principles
//! - Only depends on `syssentry-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod insights;
pub mod store;
pub mod telemetry;

// Re-export specific items to avoid ambiguity
pub use insights::{compute_insights, moving_average, trend_slope};
pub use store::{RingBuffer, TelemetryStore};
pub use telemetry::ports::TelemetrySink;
pub use telemetry::TelemetryService;
