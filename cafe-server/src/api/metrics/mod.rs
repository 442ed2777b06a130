//! Prometheus metrics
//!
//! The counters live in the store; every scrape reads a fresh snapshot and
//! renders it through a throwaway registry.

use axum::{
    Router,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};
use prometheus::{Encoder, IntCounter, IntGauge, Opts, Registry, TextEncoder};
use shared::models::OrderStats;

use crate::core::ServerState;
use crate::orders::stats;
use crate::utils::{AppError, AppResult};

pub fn router() -> Router<ServerState> {
    Router::new().route("/metrics", get(metrics))
}

async fn metrics(State(state): State<ServerState>) -> AppResult<Response> {
    let snapshot = stats::collect(&state.pool).await?;
    let body = render(&snapshot)
        .map_err(|e| AppError::internal(format!("Failed to encode metrics: {e}")))?;
    let content_type = TextEncoder::new().format_type().to_string();
    Ok(([(header::CONTENT_TYPE, content_type)], body).into_response())
}

fn counter(registry: &Registry, name: &str, help: &str, value: i64) -> prometheus::Result<()> {
    let c = IntCounter::with_opts(Opts::new(name, help))?;
    c.inc_by(value.max(0) as u64);
    registry.register(Box::new(c))
}

/// Render the stats in the Prometheus text exposition format
pub fn render(stats: &OrderStats) -> prometheus::Result<String> {
    let registry = Registry::new();

    counter(
        &registry,
        "orders_received",
        "The numbers of orders received by the system",
        stats.orders_received,
    )?;
    counter(
        &registry,
        "orders_ready",
        "The numbers of orders the system has finished",
        stats.orders_ready,
    )?;
    counter(
        &registry,
        "orders_retrieved",
        "The numbers of orders retrieved from the system",
        stats.orders_retrieved,
    )?;

    let queue = IntGauge::with_opts(Opts::new(
        "job_queue_length",
        "The number of jobs currently in the queue",
    ))?;
    queue.set(stats.job_queue_length);
    registry.register(Box::new(queue))?;

    let mut buffer = Vec::new();
    TextEncoder::new().encode(&registry.gather(), &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}
