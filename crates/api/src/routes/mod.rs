//! HTTP routes for ingestion, raw views and derived insights.
//!
//! Response contracts:
//! - ingestion returns `{"status":"ok"}` on success
//! - `/metrics/latest` returns `{}` when no sample has arrived
//! - `/ai-insights` returns `{"message":"no data yet"}` on an empty window
//! - validation failures are client errors, everything else is a 500 with
//!   detail; no handler can take the process down

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use syssentry_domain::constants::{DEFAULT_HISTORY_LIMIT, DEFAULT_RECENT_LIMIT};
use syssentry_domain::{AlertEvent, MetricSample, SysSentryError};

use crate::context::AppContext;

/// Build the service router over a shared context.
pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/ingest", post(ingest_metric))
        .route("/alert", post(ingest_alert))
        .route("/metrics", get(metric_window))
        .route("/metrics/latest", get(latest_metric))
        .route("/metrics/history", get(metric_history))
        .route("/alerts", get(recent_alerts))
        .route("/history", get(full_history))
        .route("/ai-insights", get(ai_insights))
        .route("/health", get(health))
        .with_state(ctx)
}

/// Domain error wrapped for HTTP transport.
struct ApiError(SysSentryError);

impl From<SysSentryError> for ApiError {
    fn from(err: SysSentryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            SysSentryError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "detail": self.0.to_string() }))).into_response()
    }
}

#[derive(Debug, Deserialize)]
struct LimitQuery {
    limit: Option<usize>,
}

async fn ingest_metric(
    State(ctx): State<Arc<AppContext>>,
    Json(sample): Json<MetricSample>,
) -> Result<Json<Value>, ApiError> {
    ctx.service.ingest_metric(sample)?;
    Ok(Json(json!({ "status": "ok" })))
}

async fn ingest_alert(
    State(ctx): State<Arc<AppContext>>,
    Json(event): Json<AlertEvent>,
) -> Result<Json<Value>, ApiError> {
    ctx.service.ingest_alert(event)?;
    Ok(Json(json!({ "status": "ok" })))
}

async fn metric_window(State(ctx): State<Arc<AppContext>>) -> Json<Vec<MetricSample>> {
    Json(ctx.service.metric_window())
}

async fn latest_metric(State(ctx): State<Arc<AppContext>>) -> Json<Value> {
    match ctx.service.latest_metric() {
        Some(sample) => Json(json!(sample)),
        None => Json(json!({})),
    }
}

async fn metric_history(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<LimitQuery>,
) -> Json<Vec<MetricSample>> {
    let limit = query.limit.unwrap_or(DEFAULT_RECENT_LIMIT);
    Json(ctx.service.metric_history(limit))
}

async fn recent_alerts(State(ctx): State<Arc<AppContext>>) -> Json<Vec<AlertEvent>> {
    Json(ctx.service.recent_alerts())
}

async fn full_history(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<LimitQuery>,
) -> Json<Vec<MetricSample>> {
    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    Json(ctx.service.full_history(limit).await)
}

async fn ai_insights(State(ctx): State<Arc<AppContext>>) -> Json<Value> {
    match ctx.service.insights() {
        Some(insights) => Json(json!(insights)),
        None => Json(json!({ "message": "no data yet" })),
    }
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
