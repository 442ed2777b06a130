//! Brew Job Repository

use super::RepoResult;
use shared::models::Job;
use sqlx::SqlitePool;

/// Insert a freshly created job inside the order's transaction
pub(crate) async fn insert(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    job: &Job,
) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO brew_job (id, order_id, product, received_at) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(&job.id)
    .bind(&job.order_id)
    .bind(&job.product)
    .bind(job.received_at)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

pub async fn find_by_order(pool: &SqlitePool, order_id: &str) -> RepoResult<Vec<Job>> {
    let jobs = sqlx::query_as::<_, Job>(
        "SELECT id, order_id, product, received_at, machine, started_at, ready_at, retrieved_at FROM brew_job WHERE order_id = ? ORDER BY rowid",
    )
    .bind(order_id)
    .fetch_all(pool)
    .await?;
    Ok(jobs)
}
