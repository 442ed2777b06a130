//! Order intake
//!
//! Validates a submission and persists the order with one brew job per cup,
//! all inside a single transaction.

use shared::models::{Job, Order, OrderSubmission};
use shared::util::{new_id, now_millis};
use sqlx::SqlitePool;
use tracing::{Span, field, instrument};

use super::OrderError;
use crate::db::repository::{RepoError, order};
use crate::utils::AppError;
use crate::utils::validation::{
    MAX_ORDER_ID_LEN, MAX_ORDER_SIZE, MAX_PRODUCT_LEN, validate_count, validate_required_text,
};

/// Accept a new order and return its id
#[instrument(skip(pool, submission), fields(order_id = field::Empty, size = field::Empty))]
pub async fn submit(pool: &SqlitePool, submission: OrderSubmission) -> Result<String, OrderError> {
    validate(&submission)?;

    let id = submission
        .requested_id()
        .map(str::to_string)
        .unwrap_or_else(new_id);
    let size = submission.size();
    let received_at = now_millis();

    let span = Span::current();
    span.record("order_id", id.as_str());
    span.record("size", size);

    let mut jobs = Vec::with_capacity(usize::try_from(size).unwrap_or_default());
    for entry in &submission.coffees {
        for _ in 0..entry.count {
            jobs.push(Job {
                id: new_id(),
                order_id: id.clone(),
                product: entry.product.clone(),
                received_at,
                machine: None,
                started_at: None,
                ready_at: None,
                retrieved_at: None,
            });
        }
    }

    let order = Order {
        id: id.clone(),
        received_at,
        ready_at: None,
        retrieved_at: None,
        size,
        brewed_count: 0,
    };

    order::create_with_jobs(pool, &order, &jobs)
        .await
        .map_err(|e| match e {
            RepoError::Duplicate(_) => OrderError::Conflict(id.clone()),
            other => other.into(),
        })?;

    tracing::info!(order_id = %id, size = order.size, "Order received");
    Ok(id)
}

/// Reject malformed submissions before anything touches the store
fn validate(submission: &OrderSubmission) -> Result<(), OrderError> {
    if let Some(id) = submission.requested_id() {
        validate_required_text(id, "orderId", MAX_ORDER_ID_LEN).map_err(invalid)?;
    }

    for entry in &submission.coffees {
        validate_required_text(&entry.product, "product", MAX_PRODUCT_LEN).map_err(invalid)?;
        validate_count(entry.count, "count", MAX_ORDER_SIZE).map_err(invalid)?;
    }
    let total = submission.size();
    if total > MAX_ORDER_SIZE {
        return Err(OrderError::Validation(format!(
            "order is too large ({total} cups, max {MAX_ORDER_SIZE})"
        )));
    }
    Ok(())
}

fn invalid(err: AppError) -> OrderError {
    OrderError::Validation(err.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory_pool;
    use crate::db::repository::job;
    use shared::models::OrderEntry;

    fn entry(product: &str, count: i64) -> OrderEntry {
        OrderEntry {
            product: product.to_string(),
            count,
        }
    }

    fn submission(id: Option<&str>, coffees: Vec<OrderEntry>) -> OrderSubmission {
        OrderSubmission {
            id: id.map(str::to_string),
            coffees,
        }
    }

    #[tokio::test]
    async fn test_submit_fans_out_one_job_per_cup() {
        let pool = memory_pool().await;
        let id = submit(
            &pool,
            submission(None, vec![entry("espresso", 2), entry("latte", 1)]),
        )
        .await
        .unwrap();

        assert!(uuid::Uuid::parse_str(&id).is_ok());
        let stored = order::find_by_id(&pool, &id).await.unwrap().unwrap();
        assert_eq!(stored.size, 3);
        assert_eq!(stored.brewed_count, 0);
        assert_eq!(stored.ready_at, None);
        assert_eq!(stored.retrieved_at, None);

        let jobs = job::find_by_order(&pool, &id).await.unwrap();
        let products: Vec<&str> = jobs.iter().map(|j| j.product.as_str()).collect();
        assert_eq!(products, vec!["espresso", "espresso", "latte"]);
        assert!(jobs.iter().all(|j| j.received_at == stored.received_at));
        assert!(jobs.iter().all(|j| j.machine.is_none() && j.ready_at.is_none()));
    }

    #[tokio::test]
    async fn test_submit_uses_requested_id() {
        let pool = memory_pool().await;
        let id = submit(&pool, submission(Some("table-7"), vec![entry("tea", 1)]))
            .await
            .unwrap();
        assert_eq!(id, "table-7");
    }

    #[tokio::test]
    async fn test_empty_requested_id_generates_one() {
        let pool = memory_pool().await;
        let id = submit(&pool, submission(Some(""), vec![])).await.unwrap();
        assert!(!id.is_empty());
        let stored = order::find_by_id(&pool, &id).await.unwrap().unwrap();
        assert_eq!(stored.size, 0);
        assert!(stored.is_brewed());
    }

    #[tokio::test]
    async fn test_duplicate_requested_id_conflicts_without_writes() {
        let pool = memory_pool().await;
        submit(&pool, submission(Some("dup"), vec![entry("mocha", 1)]))
            .await
            .unwrap();

        let err = submit(&pool, submission(Some("dup"), vec![entry("tea", 4)]))
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::Conflict(ref id) if id == "dup"));

        let stored = order::find_by_id(&pool, "dup").await.unwrap().unwrap();
        assert_eq!(stored.size, 1);
        assert_eq!(job::find_by_order(&pool, "dup").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_entries_are_rejected() {
        let pool = memory_pool().await;
        let bad = [
            submission(None, vec![entry("  ", 1)]),
            submission(None, vec![entry("latte", 0)]),
            submission(None, vec![entry("latte", -2)]),
            submission(None, vec![entry(&"x".repeat(MAX_PRODUCT_LEN + 1), 1)]),
            submission(Some(&"i".repeat(MAX_ORDER_ID_LEN + 1)), vec![]),
            submission(None, vec![entry("latte", MAX_ORDER_SIZE), entry("tea", 1)]),
        ];
        for s in bad {
            let err = submit(&pool, s).await.unwrap_err();
            assert!(matches!(err, OrderError::Validation(_)), "{err:?}");
        }
        assert!(order::find_all(&pool).await.unwrap().is_empty());
    }
}
