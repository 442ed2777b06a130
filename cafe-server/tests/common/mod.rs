//! Test harness: a real router over a temporary SQLite file

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use cafe_server::{Config, ServerState, build_app};
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub state: ServerState,
    pub router: Router,
    _dir: TempDir,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::with_overrides(dir.path().to_string_lossy(), 0);
        config.db_max_connections = 5;

        let state = ServerState::initialize(&config).await.unwrap();
        let router = build_app(&state).with_state(state.clone());
        Self {
            state,
            router,
            _dir: dir,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec();
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> TestResponse {
        self.post_raw(uri, body.to_string()).await
    }

    pub async fn post_raw(&self, uri: &str, body: String) -> TestResponse {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    /// Submit an order and return its id
    pub async fn submit(&self, body: Value) -> String {
        let response = self.post_json("/submit-order", body).await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.text());
        serde_json::from_slice(&response.body).unwrap()
    }

    /// Stand-in for the brewing workforce
    pub async fn brew(&self, order_id: &str, brewed: i64) {
        sqlx::query("UPDATE coffee_order SET brewed_count = ? WHERE id = ?")
            .bind(brewed)
            .bind(order_id)
            .execute(&self.state.pool)
            .await
            .unwrap();
    }
}
