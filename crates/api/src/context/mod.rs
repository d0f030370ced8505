//! Application context - dependency injection container

use std::sync::Arc;

use syssentry_core::{TelemetryService, TelemetrySink, TelemetryStore};
use syssentry_domain::Config;
use syssentry_infra::{DbManager, SqliteTelemetrySink};
use tracing::{info, warn};

/// Connection pool size for the durable sink.
const SINK_POOL_SIZE: u32 = 4;

/// Holds every long-lived collaborator the request handlers need.
///
/// Built once at startup and shared behind an `Arc`. Tests construct their
/// own contexts with isolated stores, so no ambient global state exists.
pub struct AppContext {
    /// Ingestion gateway and query surface.
    pub service: Arc<TelemetryService>,
    /// Shared bounded retention store.
    pub store: Arc<TelemetryStore>,
}

impl AppContext {
    /// Wire the context from configuration.
    ///
    /// A sink database that fails to open is logged and skipped: the durable
    /// sink is a best-effort collaborator and must never keep the live
    /// in-memory views from starting.
    pub fn new(config: &Config) -> Self {
        let store = Arc::new(TelemetryStore::new());
        let mut service = TelemetryService::new(Arc::clone(&store));

        if let Some(sink) = config.database_path.as_deref().and_then(|path| {
            match DbManager::new(path, SINK_POOL_SIZE)
                .and_then(|db| db.run_migrations().map(|()| db))
            {
                Ok(db) => {
                    info!(path = %path.display(), "durable sink attached");
                    let sink: Arc<dyn TelemetrySink> =
                        Arc::new(SqliteTelemetrySink::new(Arc::new(db)));
                    Some(sink)
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "durable sink unavailable, continuing in-memory only");
                    None
                }
            }
        }) {
            service = service.with_sink(sink);
        }

        Self { service: Arc::new(service), store }
    }

    /// Context with an isolated store and no sink. Used by tests.
    pub fn in_memory() -> Self {
        let store = Arc::new(TelemetryStore::new());
        let service = Arc::new(TelemetryService::new(Arc::clone(&store)));
        Self { service, store }
    }
}
