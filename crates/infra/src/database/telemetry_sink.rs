//! SQLite implementation of the durable telemetry sink.
//!
//! Rows carry the same shape as the ingestion payloads, one row per sample
//! or alert, keyed implicitly by timestamp (stored as RFC 3339 text, which
//! sorts chronologically). All queries run on the blocking thread pool so
//! the async caller never blocks on SQLite.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::{Row, ToSql};
use syssentry_core::TelemetrySink;
use syssentry_domain::{AlertEvent, MetricSample, Result as DomainResult, SysSentryError};
use tokio::task;

use super::manager::DbManager;
use crate::errors::InfraError;

const INSERT_METRIC_SQL: &str = "INSERT INTO metrics (
        timestamp, cpu_percent, memory_percent, disk_percent,
        read_iops, write_iops, throughput
    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";

const INSERT_ALERT_SQL: &str = "INSERT INTO alerts (timestamp, alert) VALUES (?1, ?2)";

const METRIC_HISTORY_SQL: &str = "SELECT timestamp, cpu_percent, memory_percent, disk_percent,
        read_iops, write_iops, throughput
    FROM metrics
    ORDER BY timestamp DESC
    LIMIT ?1";

/// Durable sink backed by a pooled SQLite database.
pub struct SqliteTelemetrySink {
    db: Arc<DbManager>,
}

impl SqliteTelemetrySink {
    /// Construct a sink backed by the shared database manager.
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TelemetrySink for SqliteTelemetrySink {
    async fn store_metric(&self, sample: &MetricSample) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let sample = sample.clone();
        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection().map_err(SysSentryError::from)?;
            let timestamp = encode_timestamp(sample.timestamp);
            let params: [&dyn ToSql; 7] = [
                &timestamp,
                &sample.cpu_percent,
                &sample.memory_percent,
                &sample.disk_percent,
                &sample.read_iops,
                &sample.write_iops,
                &sample.throughput,
            ];
            conn.execute(INSERT_METRIC_SQL, params.as_slice())
                .map_err(|err| SysSentryError::from(InfraError::from(err)))?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn store_alert(&self, event: &AlertEvent) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let event = event.clone();
        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection().map_err(SysSentryError::from)?;
            let timestamp = encode_timestamp(event.timestamp);
            let params: [&dyn ToSql; 2] = [&timestamp, &event.alert];
            conn.execute(INSERT_ALERT_SQL, params.as_slice())
                .map_err(|err| SysSentryError::from(InfraError::from(err)))?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn fetch_metric_history(&self, limit: usize) -> DomainResult<Vec<MetricSample>> {
        let db = Arc::clone(&self.db);
        task::spawn_blocking(move || -> DomainResult<Vec<MetricSample>> {
            let conn = db.get_connection().map_err(SysSentryError::from)?;
            let fetch = || -> std::result::Result<Vec<MetricSample>, InfraError> {
                let mut stmt = conn.prepare(METRIC_HISTORY_SQL)?;
                let limit_param = usize_to_i64(limit);
                let rows = stmt.query_map([limit_param], map_metric_row)?;
                let mut samples = rows.collect::<std::result::Result<Vec<_>, _>>()?;
                // Query returns newest first; callers expect chronological.
                samples.reverse();
                Ok(samples)
            };
            fetch().map_err(SysSentryError::from)
        })
        .await
        .map_err(map_join_error)?
    }
}

fn encode_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn map_metric_row(row: &Row<'_>) -> rusqlite::Result<MetricSample> {
    let raw_timestamp: String = row.get(0)?;
    let timestamp = DateTime::parse_from_rfc3339(&raw_timestamp)
        .map_err(|err| {
            rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(err))
        })?
        .with_timezone(&Utc);

    Ok(MetricSample {
        timestamp,
        cpu_percent: row.get(1)?,
        memory_percent: row.get(2)?,
        disk_percent: row.get(3)?,
        read_iops: row.get(4)?,
        write_iops: row.get(5)?,
        throughput: row.get(6)?,
    })
}

fn usize_to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn map_join_error(err: task::JoinError) -> SysSentryError {
    if err.is_cancelled() {
        SysSentryError::Internal("blocking sink task cancelled".into())
    } else {
        SysSentryError::Internal(format!("blocking sink task failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use tempfile::TempDir;

    use super::*;

    fn sample(seq: i64) -> MetricSample {
        MetricSample {
            timestamp: Utc.timestamp_opt(1_700_000_000 + seq, 0).single().expect("valid ts"),
            cpu_percent: 10.0 + seq as f64,
            memory_percent: 40.0,
            disk_percent: 55.0,
            read_iops: 120.0,
            write_iops: 30.0,
            throughput: 4.25,
        }
    }

    fn setup_sink() -> (SqliteTelemetrySink, TempDir) {
        let temp_dir = TempDir::new().expect("tempdir created");
        let db_path = temp_dir.path().join("telemetry.db");

        let manager = Arc::new(DbManager::new(&db_path, 4).expect("db manager created"));
        manager.run_migrations().expect("migrations run");

        (SqliteTelemetrySink::new(manager), temp_dir)
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn stores_and_fetches_metrics_in_chronological_order() {
        let (sink, _temp_dir) = setup_sink();

        for seq in 0..4 {
            sink.store_metric(&sample(seq)).await.expect("store succeeds");
        }

        let history = sink.fetch_metric_history(10).await.expect("fetch succeeds");
        assert_eq!(history.len(), 4);
        assert_eq!(history[0], sample(0));
        assert_eq!(history[3], sample(3));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn fetch_limit_keeps_the_newest_rows() {
        let (sink, _temp_dir) = setup_sink();

        for seq in 0..6 {
            sink.store_metric(&sample(seq)).await.expect("store succeeds");
        }

        let history = sink.fetch_metric_history(2).await.expect("fetch succeeds");
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], sample(4));
        assert_eq!(history[1], sample(5));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn alert_rows_are_persisted() {
        let (sink, _temp_dir) = setup_sink();
        let event = AlertEvent {
            timestamp: Utc.timestamp_opt(1_700_000_000, 0).single().expect("valid ts"),
            alert: "High CPU Usage".into(),
        };

        sink.store_alert(&event).await.expect("store succeeds");

        let conn = sink.db.get_connection().expect("connection");
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM alerts", [], |row| row.get(0))
            .expect("count query");
        assert_eq!(count, 1);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn empty_database_yields_empty_history() {
        let (sink, _temp_dir) = setup_sink();
        let history = sink.fetch_metric_history(10).await.expect("fetch succeeds");
        assert!(history.is_empty());
    }
}
