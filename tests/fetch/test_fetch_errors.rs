// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Fetch failure tests
//!
//! These tests verify that:
//! - Non-200 terminal statuses surface as HttpStatus with the right code
//! - A refused connection surfaces as a Network error
//! - A server that never answers trips the timeout within a bounded margin
//! - Invalid URLs fail before any network I/O

use axum::http::StatusCode;
use axum::{routing::get, Router};
use std::time::{Duration, Instant};
use fabstir_html_fetcher::{FetchConfig, FetchError, HtmlFetcher};

use super::support::spawn_server;

#[tokio::test]
async fn test_404_surfaces_as_http_status() {
    let app = Router::new().route("/", get(|| async { "<html>home</html>" }));
    let base = spawn_server(app).await;

    let fetcher = HtmlFetcher::new(FetchConfig::default());
    let err = fetcher
        .fetch_html(&format!("{}/missing", base))
        .await
        .expect_err("unknown route should 404");

    match err {
        FetchError::HttpStatus { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Not Found");
        }
        other => panic!("expected HttpStatus, got: {}", other),
    }
}

#[tokio::test]
async fn test_500_surfaces_as_http_status() {
    let app = Router::new().route(
        "/boom",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base = spawn_server(app).await;

    let fetcher = HtmlFetcher::new(FetchConfig::default());
    let err = fetcher
        .fetch_html(&format!("{}/boom", base))
        .await
        .expect_err("500 should fail");

    assert!(matches!(err, FetchError::HttpStatus { status: 500, .. }));
}

#[tokio::test]
async fn test_refused_connection_is_network_error() {
    // Bind then drop to get a local port with nothing listening on it
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let fetcher = HtmlFetcher::new(FetchConfig::default());
    let err = fetcher
        .fetch_html(&format!("http://{}/", addr))
        .await
        .expect_err("refused connection should fail");

    assert!(
        matches!(err, FetchError::Network { .. }),
        "expected Network, got: {}",
        err
    );
}

#[tokio::test]
async fn test_slow_server_trips_timeout() {
    let app = Router::new().route(
        "/slow",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            "<html>late</html>"
        }),
    );
    let base = spawn_server(app).await;

    let config = FetchConfig {
        timeout_ms: 100,
        ..FetchConfig::default()
    };
    let fetcher = HtmlFetcher::new(config);

    let start = Instant::now();
    let err = fetcher
        .fetch_html(&format!("{}/slow", base))
        .await
        .expect_err("slow server should time out");
    let elapsed = start.elapsed();

    assert!(matches!(err, FetchError::Timeout { timeout_ms: 100 }));
    assert!(
        elapsed < Duration::from_secs(2),
        "timeout should fire near the budget, took {:?}",
        elapsed
    );
}

#[tokio::test]
async fn test_invalid_url_fails_without_network() {
    let fetcher = HtmlFetcher::new(FetchConfig::default());

    let err = fetcher.fetch_html("not a url").await.expect_err("garbage URL");
    assert!(matches!(err, FetchError::InvalidUrl { .. }));

    let err = fetcher
        .fetch_html("ftp://host/file")
        .await
        .expect_err("unsupported scheme");
    assert!(matches!(err, FetchError::InvalidUrl { .. }));
}
