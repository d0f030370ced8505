//! Pooled SQLite connection manager and schema migrations.

use std::path::Path;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;

use crate::errors::InfraError;

/// One migration statement per schema element, all idempotent.
const MIGRATIONS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS metrics (
        timestamp TEXT NOT NULL,
        cpu_percent REAL NOT NULL,
        memory_percent REAL NOT NULL,
        disk_percent REAL NOT NULL,
        read_iops REAL NOT NULL,
        write_iops REAL NOT NULL,
        throughput REAL NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS idx_metrics_timestamp ON metrics (timestamp)",
    "CREATE TABLE IF NOT EXISTS alerts (
        timestamp TEXT NOT NULL,
        alert TEXT NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS idx_alerts_timestamp ON alerts (timestamp)",
];

/// Shared SQLite pool for the durable sink.
#[derive(Debug)]
pub struct DbManager {
    pool: Pool<SqliteConnectionManager>,
}

impl DbManager {
    /// Open (or create) the database at `path` with a pool of `pool_size`
    /// connections.
    pub fn new(path: &Path, pool_size: u32) -> Result<Self, InfraError> {
        let manager = SqliteConnectionManager::file(path);
        let pool = Pool::builder().max_size(pool_size).build(manager)?;
        Ok(Self { pool })
    }

    /// Borrow a pooled connection.
    pub fn get_connection(
        &self,
    ) -> Result<PooledConnection<SqliteConnectionManager>, InfraError> {
        Ok(self.pool.get()?)
    }

    /// Apply the schema. Safe to run on every startup.
    pub fn run_migrations(&self) -> Result<(), InfraError> {
        let conn = self.get_connection()?;
        for statement in MIGRATIONS {
            conn.execute(statement, [])?;
        }
        Ok(())
    }
}
