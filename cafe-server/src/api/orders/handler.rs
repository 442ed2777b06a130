//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde::Serialize;
use shared::models::{Job, Order, OrderSubmission};

use crate::core::ServerState;
use crate::orders::{self, completion, intake};
use crate::utils::{AppError, AppResult};

/// `{"data": [...]}` envelope used by the listing endpoints
#[derive(Debug, Serialize)]
pub struct DataList<T> {
    pub data: Vec<T>,
}

/// POST /submit-order - 提交订单，返回订单 ID
pub async fn submit(
    State(state): State<ServerState>,
    payload: Result<Json<OrderSubmission>, JsonRejection>,
) -> AppResult<Json<String>> {
    let Json(submission) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    let id = intake::submit(&state.pool, submission).await?;
    Ok(Json(id))
}

/// GET /retrieve-order/{id} - 取餐
pub async fn retrieve(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let order = completion::retrieve(&state.pool, &id).await?;
    Ok(Json(order))
}

/// GET /order-list - 所有订单
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<DataList<Order>>> {
    let data = orders::list_all(&state.pool).await?;
    Ok(Json(DataList { data }))
}

/// GET /order/{id}/jobs - 订单的制作任务
pub async fn list_jobs(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataList<Job>>> {
    let data = orders::list_jobs(&state.pool, &id).await?;
    Ok(Json(DataList { data }))
}
