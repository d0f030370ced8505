//! SQLite-backed persistence adapters.

mod manager;
mod telemetry_sink;

pub use manager::DbManager;
pub use telemetry_sink::SqliteTelemetrySink;
