//! Telemetry ingestion gateway and query surface.

pub mod ports;
mod service;

pub use service::TelemetryService;
