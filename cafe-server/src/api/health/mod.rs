//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | / | GET | 欢迎文本 |
//! | /healthcheck | GET | 简单健康检查 |

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub const WELCOME_TEXT: &str = "Welcome to the SchildCafé!";

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(root))
        .route("/healthcheck", get(healthcheck))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    message: &'static str,
}

async fn root() -> &'static str {
    WELCOME_TEXT
}

/// Constant liveness answer, the store is not probed
async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse { message: "Ok" })
}
