use std::time::Duration;

use axum::body::Body;
use axum::error_handling::HandleErrorLayer;
use axum::middleware as axum_middleware;
use axum::{BoxError, Json, Router, http::StatusCode, response::IntoResponse};
use http::{HeaderName, HeaderValue, Request};
use serde::Serialize;
use shared::error::{AppError, ErrorCode};
use tower::ServiceBuilder;
use tracing::{Level, Span};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::{DefaultOnFailure, TraceLayer};
use uuid::Uuid;

use crate::api;
use crate::core::ServerState;
use crate::middleware;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

#[derive(Serialize)]
struct NotFoundBody {
    code: &'static str,
    message: &'static str,
}

async fn page_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundBody {
            code: "PAGE_NOT_FOUND",
            message: "Page not found",
        }),
    )
}

/// Turns a tower timeout into the `TimeoutError` envelope
async fn handle_timeout(err: BoxError) -> AppError {
    if err.is::<tower::timeout::error::Elapsed>() {
        AppError::new(ErrorCode::TimeoutError)
    } else {
        AppError::internal(format!("Unhandled middleware error: {err}"))
    }
}

/// Bounds handler time of every route in `router`
fn with_timeout<S>(router: Router<S>, timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_timeout))
            .timeout(timeout),
    )
}

fn make_request_span(req: &Request<Body>) -> Span {
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        method = %req.method(),
        uri = %req.uri(),
        request_id = %request_id,
    )
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(api::health::router())
        .merge(api::orders::router())
        .merge(api::metrics::router())
        .fallback(page_not_found)
}

/// Build a fully configured application with all middleware
///
/// Used by the HTTP server and by in-process tests
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    let timeout = Duration::from_millis(state.config.request_timeout_ms);

    // Timeout - innermost, bounds handler time only
    with_timeout(build_router(), timeout)
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Request logging
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Trace - one span per request; failures are classified by the
        // logging middleware, not here
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(make_request_span)
                .on_failure(DefaultOnFailure::new().level(Level::DEBUG)),
        )
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID - outermost, every layer below sees x-request-id
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
}
