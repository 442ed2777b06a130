//! 请求日志中间件
//!
//! 记录所有进入的 HTTP 请求和响应状态码

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use shared::error::ErrorCode;
use std::time::Instant;
use tracing::{debug, info, warn};

/// 请求日志中间件
///
/// Logs request id, method, matched route, status and latency. Only system
/// errors (and bare 5xx without an error code) go out at WARN.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| "-".to_string());

    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    debug!(
        request_id = %request_id,
        method = %method,
        path = %path,
        "Request started"
    );

    let response = next.run(req).await;

    let latency = start.elapsed();
    let status = response.status();
    let code = response.extensions().get::<ErrorCode>().copied();

    // Order outcomes such as 503 "not ready" are answers, not incidents
    let incident = match code {
        Some(code) => code.category().is_incident(),
        None => status.is_server_error(),
    };
    let code = code.map(|c| c.code());

    if incident {
        warn!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = %status.as_u16(),
            code = ?code,
            latency_ms = %latency.as_millis(),
            "Request completed with server error"
        );
    } else {
        info!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = %status.as_u16(),
            code = ?code,
            latency_ms = %latency.as_millis(),
            "Request completed"
        );
    }

    response
}
