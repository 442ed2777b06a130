//! Order Repository

use super::{RepoResult, job};
use shared::models::{Job, Order, OrderStats};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Order>> {
    let orders = sqlx::query_as::<_, Order>(
        "SELECT id, received_at, ready_at, retrieved_at, size, brewed_count FROM coffee_order ORDER BY received_at, id",
    )
    .fetch_all(pool)
    .await?;
    Ok(orders)
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Order>> {
    let order = sqlx::query_as::<_, Order>(
        "SELECT id, received_at, ready_at, retrieved_at, size, brewed_count FROM coffee_order WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(order)
}

/// Persist an order together with all of its jobs.
///
/// Single transaction: either the order and every job become visible, or
/// nothing does. A duplicate order id surfaces as `RepoError::Duplicate`.
pub async fn create_with_jobs(pool: &SqlitePool, order: &Order, jobs: &[Job]) -> RepoResult<()> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        "INSERT INTO coffee_order (id, received_at, ready_at, retrieved_at, size, brewed_count) VALUES (?1, ?2, NULL, NULL, ?3, 0)",
    )
    .bind(&order.id)
    .bind(order.received_at)
    .bind(order.size)
    .execute(&mut *tx)
    .await?;

    for j in jobs {
        job::insert(&mut tx, j).await?;
    }

    tx.commit().await?;
    Ok(())
}

/// Atomically mark a brewed, not yet retrieved order as retrieved.
///
/// Returns the updated row, or `None` when the predicate no longer holds
/// (unknown id, not brewed, or someone else retrieved it first).
pub async fn mark_retrieved(
    pool: &SqlitePool,
    id: &str,
    retrieved_at: i64,
) -> RepoResult<Option<Order>> {
    let order = sqlx::query_as::<_, Order>(
        "UPDATE coffee_order SET retrieved_at = ?1 WHERE id = ?2 AND retrieved_at IS NULL AND brewed_count = size RETURNING id, received_at, ready_at, retrieved_at, size, brewed_count",
    )
    .bind(retrieved_at)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(order)
}

/// Point-in-time counters, read in one statement
pub async fn stats(pool: &SqlitePool) -> RepoResult<OrderStats> {
    let stats = sqlx::query_as::<_, OrderStats>(
        "SELECT \
            (SELECT COUNT(*) FROM coffee_order) AS orders_received, \
            (SELECT COUNT(*) FROM coffee_order WHERE brewed_count = size) AS orders_ready, \
            (SELECT COUNT(*) FROM coffee_order WHERE retrieved_at IS NOT NULL) AS orders_retrieved, \
            (SELECT COUNT(*) FROM brew_job WHERE retrieved_at IS NULL) AS job_queue_length",
    )
    .fetch_one(pool)
    .await?;
    Ok(stats)
}
