//! # SysSentry Domain
//!
//! Business domain types and models for SysSentry.
//!
//! This crate contains:
//! - Telemetry data types (`MetricSample`, `AlertEvent`, insight bundles)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants (window capacities, alert thresholds)
//!
//! ## Architecture
//! - No dependencies on other SysSentry crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::Config;
pub use errors::{Result, SysSentryError};
pub use types::insights::{MetricInsights, SeriesInsight};
pub use types::metrics::{AlertEvent, MetricSample};
