//! Completion gate
//!
//! Hands a fully brewed order to the customer exactly once.

use shared::models::{Order, OrderState};
use shared::util::now_millis;
use sqlx::SqlitePool;
use tracing::instrument;

use super::OrderError;
use crate::db::repository::order;

/// Retrieve a ready order, marking it as picked up.
///
/// The final transition is one conditional update, so of several concurrent
/// callers exactly one gets the order and the rest see `AlreadyRetrieved`.
#[instrument(skip(pool))]
pub async fn retrieve(pool: &SqlitePool, order_id: &str) -> Result<Order, OrderError> {
    let current = order::find_by_id(pool, order_id)
        .await?
        .ok_or_else(|| OrderError::NotFound(order_id.to_string()))?;

    match current.state() {
        OrderState::Retrieved => {
            return Err(OrderError::AlreadyRetrieved(order_id.to_string()));
        }
        OrderState::Received => {
            tracing::debug!(
                order_id,
                brewed = current.brewed_count,
                size = current.size,
                "Order not ready"
            );
            return Err(OrderError::NotReady(order_id.to_string()));
        }
        OrderState::Ready => {}
    }

    let retrieved = order::mark_retrieved(pool, order_id, now_millis())
        .await?
        .ok_or_else(|| OrderError::AlreadyRetrieved(order_id.to_string()))?;

    tracing::info!(order_id, "Order retrieved");
    Ok(retrieved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory_pool;
    use crate::orders::intake;
    use shared::models::{OrderEntry, OrderSubmission};

    async fn place(pool: &SqlitePool, cups: i64) -> String {
        let coffees = if cups == 0 {
            vec![]
        } else {
            vec![OrderEntry {
                product: "flat white".to_string(),
                count: cups,
            }]
        };
        intake::submit(pool, OrderSubmission { id: None, coffees })
            .await
            .unwrap()
    }

    async fn brew(pool: &SqlitePool, id: &str, brewed: i64) {
        sqlx::query("UPDATE coffee_order SET brewed_count = ? WHERE id = ?")
            .bind(brewed)
            .bind(id)
            .execute(pool)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_unknown_order() {
        let pool = memory_pool().await;
        let err = retrieve(&pool, "nope").await.unwrap_err();
        assert!(matches!(err, OrderError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_not_ready_leaves_order_untouched() {
        let pool = memory_pool().await;
        let id = place(&pool, 2).await;
        brew(&pool, &id, 1).await;
        let before = order::find_by_id(&pool, &id).await.unwrap().unwrap();

        let err = retrieve(&pool, &id).await.unwrap_err();
        assert!(matches!(err, OrderError::NotReady(_)));
        assert_eq!(order::find_by_id(&pool, &id).await.unwrap().unwrap(), before);
    }

    #[tokio::test]
    async fn test_ready_order_is_delivered_once() {
        let pool = memory_pool().await;
        let id = place(&pool, 2).await;
        brew(&pool, &id, 2).await;

        let order = retrieve(&pool, &id).await.unwrap();
        assert!(order.retrieved_at.is_some());
        assert_eq!(order.state(), OrderState::Retrieved);

        let err = retrieve(&pool, &id).await.unwrap_err();
        assert!(matches!(err, OrderError::AlreadyRetrieved(_)));
    }

    #[tokio::test]
    async fn test_empty_order_is_immediately_retrievable() {
        let pool = memory_pool().await;
        let id = place(&pool, 0).await;
        let order = retrieve(&pool, &id).await.unwrap();
        assert_eq!(order.size, 0);
        assert!(order.retrieved_at.is_some());
    }
}
