//! # SysSentry API
//!
//! HTTP surface for the SysSentry telemetry service: ingestion routes for
//! the sampling producer, query routes for dashboards and the derived
//! insight view.
//!
//! The binary wires an [`AppContext`] (store, optional SQLite sink,
//! telemetry service) into an axum [`axum::Router`]; tests build isolated
//! contexts and drive the router directly.

pub mod context;
pub mod routes;

pub use context::AppContext;
pub use routes::router;
