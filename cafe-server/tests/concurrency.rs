mod common;

use common::TestApp;
use futures::future::join_all;
use http::StatusCode;
use serde_json::json;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_retrieves_deliver_once() {
    let app = TestApp::spawn().await;
    let id = app
        .submit(json!({"coffeeOrder": [{"product": "americano", "count": 2}]}))
        .await;
    app.brew(&id, 2).await;

    let uri = format!("/retrieve-order/{id}");
    let responses = join_all((0..16).map(|_| app.get(&uri))).await;

    let ok = responses
        .iter()
        .filter(|r| r.status == StatusCode::OK)
        .count();
    let gone = responses
        .iter()
        .filter(|r| r.status == StatusCode::GONE)
        .count();
    assert_eq!(ok, 1);
    assert_eq!(gone, 15);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_submissions_are_all_persisted() {
    let app = TestApp::spawn().await;

    let bodies: Vec<_> = (0..10)
        .map(|i| json!({"coffeeOrder": [{"product": format!("drink-{i}"), "count": 2}]}))
        .collect();
    let responses = join_all(bodies.into_iter().map(|b| app.post_json("/submit-order", b))).await;
    assert!(responses.iter().all(|r| r.status == StatusCode::OK));

    let list = app.get("/order-list").await.json();
    assert_eq!(list["data"].as_array().unwrap().len(), 10);
}
