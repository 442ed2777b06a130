//! Order flow
//!
//! - [`intake`] - accepts orders and fans them out into brew jobs
//! - [`completion`] - the pickup gate
//! - [`stats`] - counters for monitoring
//! - listing helpers below

pub mod completion;
pub mod error;
pub mod intake;
pub mod stats;

pub use error::OrderError;

use shared::models::{Job, Order};
use sqlx::SqlitePool;
use tracing::instrument;

use crate::db::repository::{job, order};

/// All orders, oldest first
#[instrument(skip(pool))]
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Order>, OrderError> {
    Ok(order::find_all(pool).await?)
}

/// The brew jobs of one order
#[instrument(skip(pool))]
pub async fn list_jobs(pool: &SqlitePool, order_id: &str) -> Result<Vec<Job>, OrderError> {
    if order::find_by_id(pool, order_id).await?.is_none() {
        return Err(OrderError::NotFound(order_id.to_string()));
    }
    Ok(job::find_by_order(pool, order_id).await?)
}
