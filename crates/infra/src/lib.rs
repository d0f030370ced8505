//! # SysSentry Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The SQLite durable-sink adapter (`SqliteTelemetrySink`)
//! - The pooled database manager and schema migrations
//!
//! ## Architecture
//! - Implements traits defined in `syssentry-core`
//! - Contains all "impure" persistence code (I/O, SQL)

pub mod database;
pub mod errors;

// Re-export commonly used items
pub use database::{DbManager, SqliteTelemetrySink};
pub use errors::InfraError;
