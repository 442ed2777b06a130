//! Order API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/submit-order", post(handler::submit))
        .route("/retrieve-order/{id}", get(handler::retrieve))
        .route("/order-list", get(handler::list))
        .route("/order/{id}/jobs", get(handler::list_jobs))
}
