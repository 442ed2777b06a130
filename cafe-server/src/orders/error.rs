//! Order flow errors

use crate::db::repository::RepoError;
use crate::utils::{AppError, ErrorCode};
use thiserror::Error;

/// Outcomes of the order flow that are not a success.
///
/// Everything except `StoreFailure` is ordinary traffic at a coffee counter.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Order already delivered: {0}")]
    AlreadyRetrieved(String),

    #[error("Order not ready: {0}")]
    NotReady(String),

    #[error("Order id already in use: {0}")]
    Conflict(String),

    #[error("{0}")]
    Validation(String),

    #[error("Store failure: {0}")]
    StoreFailure(String),
}

impl From<RepoError> for OrderError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Duplicate(msg) => OrderError::Conflict(msg),
            RepoError::NotFound(msg) | RepoError::Database(msg) => OrderError::StoreFailure(msg),
        }
    }
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::NotFound(id) => {
                AppError::new(ErrorCode::OrderNotFound).with_detail("order_id", id)
            }
            OrderError::AlreadyRetrieved(id) => {
                AppError::new(ErrorCode::OrderAlreadyRetrieved).with_detail("order_id", id)
            }
            OrderError::NotReady(id) => {
                AppError::new(ErrorCode::OrderNotReady).with_detail("order_id", id)
            }
            OrderError::Conflict(id) => {
                AppError::new(ErrorCode::OrderIdExists).with_detail("order_id", id)
            }
            OrderError::Validation(msg) => AppError::validation(msg),
            OrderError::StoreFailure(msg) => AppError::database(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_order_outcomes_map_to_status() {
        let cases = [
            (OrderError::NotFound("a".into()), StatusCode::NOT_FOUND),
            (OrderError::AlreadyRetrieved("a".into()), StatusCode::GONE),
            (OrderError::NotReady("a".into()), StatusCode::SERVICE_UNAVAILABLE),
            (OrderError::Conflict("a".into()), StatusCode::CONFLICT),
            (OrderError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (OrderError::StoreFailure("disk".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(AppError::from(err).http_status(), status);
        }
    }

    #[test]
    fn test_not_found_keeps_order_id_and_message() {
        let err = AppError::from(OrderError::NotFound("abc".into()));
        assert_eq!(err.code, ErrorCode::OrderNotFound);
        assert_eq!(err.message, "Order not found!");
        assert_eq!(err.details.unwrap().get("order_id").unwrap(), "abc");
    }

    #[test]
    fn test_duplicate_becomes_conflict() {
        let err = OrderError::from(RepoError::Duplicate("x".into()));
        assert!(matches!(err, OrderError::Conflict(_)));
        let err = OrderError::from(RepoError::Database("locked".into()));
        assert!(matches!(err, OrderError::StoreFailure(_)));
    }
}
