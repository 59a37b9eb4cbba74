//! `error_scenario` directives over the wire.

use std::time::{Duration, Instant};

use posts_mock_server::PostRepository;
use serde_json::{json, Value};

use crate::support::{start_server, start_server_with_stall};

const FORCED: [(&str, u16, &str); 4] = [
    ("500", 500, "Internal server error scenario triggered"),
    ("503", 503, "Service temporarily unavailable"),
    ("404", 404, "Resource not found (forced scenario)"),
    ("validation", 422, "Validation error scenario triggered"),
];

#[tokio::test]
async fn forced_failures_on_existing_post_leave_store_unchanged() {
    let server = start_server().await;
    let client = reqwest::Client::new();
    let before = server.state.repo().list().unwrap();

    for (directive, status, detail) in FORCED {
        let resp = client
            .get(server.url(&format!("/posts/1?error_scenario={directive}")))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), status, "directive {directive}");
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body, json!({ "detail": detail }));

        let resp = client.get(server.url("/posts/1")).send().await.unwrap();
        assert_eq!(resp.status(), 200);
    }

    assert_eq!(server.state.repo().list().unwrap(), before);
}

#[tokio::test]
async fn forced_failures_apply_to_every_posts_route() {
    let server = start_server().await;
    let client = reqwest::Client::new();
    let payload = json!({ "title": "A", "body": "B", "author": "C" });

    for (directive, status, _) in FORCED {
        let query = format!("?error_scenario={directive}");
        let responses = [
            client.get(server.url(&format!("/posts{query}"))).send(),
            client
                .post(server.url(&format!("/posts{query}")))
                .json(&payload)
                .send(),
            client
                .put(server.url(&format!("/posts/2{query}")))
                .json(&payload)
                .send(),
            client.delete(server.url(&format!("/posts/2{query}"))).send(),
        ];
        for resp in responses {
            assert_eq!(resp.await.unwrap().status(), status, "directive {directive}");
        }
    }

    let posts = server.state.repo().list().unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[1].title, "Second sample post");
}

#[tokio::test]
async fn forced_not_found_ignores_existence_and_missing_stays_404() {
    let server = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .delete(server.url("/posts/99?error_scenario=500"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 500);

    let resp = client
        .put(server.url("/posts/1?error_scenario=404"))
        .json(&json!({ "title": "ignored" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    assert_ne!(server.state.repo().get(1).unwrap().title, "ignored");
}

#[tokio::test]
async fn repeated_directive_uses_the_last_value() {
    let server = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(server.url("/posts/1?error_scenario=500&error_scenario=503"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 503);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "detail": "Service temporarily unavailable" }));

    let resp = client
        .get(server.url("/posts?error_scenario=404&error_scenario=bogus"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn unrecognized_directive_is_ignored() {
    let server = start_server().await;
    let client = reqwest::Client::new();

    for directive in ["", "418", "explode"] {
        let resp = client
            .get(server.url(&format!("/posts/1?error_scenario={directive}")))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200, "directive {directive:?}");
    }

    let resp = client
        .post(server.url("/posts?error_scenario=bogus"))
        .json(&json!({ "title": "A", "body": "B", "author": "C" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
}

#[tokio::test]
async fn timeout_directive_trips_client_timeout() {
    let server = start_server_with_stall(Duration::from_millis(400)).await;
    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let err = client
        .get(server.url("/posts?error_scenario=timeout"))
        .send()
        .await
        .unwrap_err();
    assert!(err.is_timeout());

    // Other requests are served while the stall is in progress.
    let resp = client.get(server.url("/posts/1")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn timeout_directive_completes_after_the_stall() {
    let stall = Duration::from_millis(300);
    let server = start_server_with_stall(stall).await;
    let client = reqwest::Client::new();

    let started = Instant::now();
    let resp = client
        .get(server.url("/posts/2?error_scenario=timeout"))
        .send()
        .await
        .unwrap();

    assert!(started.elapsed() >= stall);
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["id"], 2);
}
