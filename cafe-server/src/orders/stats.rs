//! Order statistics

use shared::models::OrderStats;
use sqlx::SqlitePool;
use tracing::instrument;

use super::OrderError;
use crate::db::repository::order;

/// Snapshot of the order counters, read straight from the store
#[instrument(skip(pool))]
pub async fn collect(pool: &SqlitePool) -> Result<OrderStats, OrderError> {
    Ok(order::stats(pool).await?)
}
