// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

// Allow expect/unwrap in tests - they provide clear panic messages on failure
#![allow(clippy::expect_used, clippy::unwrap_used)]

//! Request execution and retry behavior against a mock team server.

use std::time::Duration;

use csrest_client::{CancellationToken, Client, Error, FailureKind, Request, RetryPolicy};
use secrecy::SecretString;
use serde::Deserialize;
use test_case::test_case;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize, PartialEq)]
struct Pong {
    ok: bool,
}

/// Client against `server` with a short retry delay so tests stay fast.
fn client_for(server: &MockServer, max_retries: u32) -> Client {
    let mut client = Client::with_base_url(server.uri()).expect("failed to build client");
    client.set_retry_policy(RetryPolicy::new(max_retries, Duration::from_millis(10)));
    client
}

#[tokio::test]
async fn decodes_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 3);
    let pong: Option<Pong> = client
        .execute(Request::get("/api/v1/ping"), &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(pong, Some(Pong { ok: true }));
}

#[tokio::test]
async fn empty_success_body_is_none_unless_required() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/noop"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server, 3);
    let cancel = CancellationToken::new();

    let value: Option<Pong> = client
        .execute(Request::post("/api/v1/noop"), &cancel)
        .await
        .unwrap();
    assert_eq!(value, None);

    let err = client
        .execute_required::<Pong>(Request::post("/api/v1/noop"), &cancel)
        .await
        .unwrap_err();
    let api = err.api_error().expect("classified error");
    assert_eq!(api.kind(), FailureKind::EmptyBody);
    assert_eq!(api.status(), 204);
}

#[tokio::test]
async fn sends_json_body_with_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/echo"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({"command": "whoami"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 0);
    let request = Request::post("/api/v1/echo").json(&serde_json::json!({"command": "whoami"}));
    let pong: Pong = client
        .execute_required(request, &CancellationToken::new())
        .await
        .unwrap();
    assert!(pong.ok);
}

#[tokio::test]
async fn bearer_token_attached_when_set() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/ping"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 0);
    client.set_token(SecretString::from("secret-token".to_string()));
    let pong: Pong = client
        .execute_required(Request::get("/api/v1/ping"), &CancellationToken::new())
        .await
        .unwrap();
    assert!(pong.ok);
}

#[tokio::test]
async fn no_authorization_header_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .mount(&server)
        .await;

    let client = client_for(&server, 0);
    let _: Pong = client
        .execute_required(Request::get("/api/v1/ping"), &CancellationToken::new())
        .await
        .unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert!(received[0].headers.get("authorization").is_none());
}

#[test_case(500 ; "internal server error")]
#[test_case(502 ; "bad gateway")]
#[test_case(503 ; "service unavailable")]
#[test_case(429 ; "too many requests")]
#[tokio::test]
async fn retryable_status_is_retried_until_success(status: u16) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/flaky"))
        .respond_with(ResponseTemplate::new(status))
        .up_to_n_times(2)
        .with_priority(1)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/flaky"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 3);
    let pong: Pong = client
        .execute_required(Request::get("/api/v1/flaky"), &CancellationToken::new())
        .await
        .unwrap();
    assert!(pong.ok);
}

#[test_case(400 ; "bad request")]
#[test_case(401 ; "unauthorized")]
#[test_case(403 ; "forbidden")]
#[test_case(404 ; "not found")]
#[tokio::test]
async fn client_error_is_not_retried(status: u16) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/missing"))
        .respond_with(ResponseTemplate::new(status).set_body_string("nope"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 3);
    let err = client
        .execute::<Pong>(Request::get("/api/v1/missing"), &CancellationToken::new())
        .await
        .unwrap_err();

    match err {
        Error::Api(api) => {
            assert_eq!(api.kind(), FailureKind::Status);
            assert_eq!(api.status(), status);
            assert_eq!(api.message(), "nope");
            assert!(!api.is_retryable());
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn exhaustion_wraps_last_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/down"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let client = client_for(&server, 2);
    let err = client
        .execute::<Pong>(Request::get("/api/v1/down"), &CancellationToken::new())
        .await
        .unwrap_err();

    match err {
        Error::RetriesExhausted { attempts, last } => {
            assert_eq!(attempts, 3);
            assert_eq!(last.status(), 503);
            assert_eq!(last.message(), "HTTP 503: Service Unavailable");
        }
        other => panic!("expected exhaustion, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_success_body_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/garbled"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 3);
    let err = client
        .execute::<Pong>(Request::get("/api/v1/garbled"), &CancellationToken::new())
        .await
        .unwrap_err();

    let api = err.api_error().expect("classified error");
    assert_eq!(api.kind(), FailureKind::Decode);
    assert_eq!(api.status(), 200);
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn connection_refused_is_retryable_with_status_zero() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut client = Client::with_base_url(format!("http://{}", addr)).unwrap();
    client.set_retry_policy(RetryPolicy::new(1, Duration::from_millis(10)));

    let err = client
        .execute::<Pong>(Request::get("/api/v1/ping"), &CancellationToken::new())
        .await
        .unwrap_err();

    match err {
        Error::RetriesExhausted { attempts, last } => {
            assert_eq!(attempts, 2);
            assert_eq!(last.status(), 0);
            assert_eq!(last.kind(), FailureKind::Transport);
        }
        other => panic!("expected exhaustion, got {:?}", other),
    }
}

#[tokio::test]
async fn cancellation_during_retry_delay_is_distinct() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/down"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let mut client = Client::with_base_url(server.uri()).unwrap();
    client.set_retry_policy(RetryPolicy::new(5, Duration::from_secs(30)));

    let cancel = CancellationToken::new();
    let canceller = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        canceller.cancel();
    });

    let started = std::time::Instant::now();
    let err = client
        .execute::<Pong>(Request::get("/api/v1/down"), &cancel)
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
    assert!(started.elapsed() < Duration::from_secs(5));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn cancellation_aborts_in_flight_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"ok": true}))
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, 3);
    let cancel = CancellationToken::new();
    let canceller = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        canceller.cancel();
    });

    let started = std::time::Instant::now();
    let err = client
        .execute::<Pong>(Request::get("/api/v1/slow"), &cancel)
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[test_case(":99999/api/v1/ping", None ; "unparseable url")]
#[test_case("/api/v1/ping", Some("bad\ntoken") ; "token not a header value")]
#[tokio::test]
async fn request_build_failure_is_terminal_and_sends_nothing(
    request_path: &str,
    token: Option<&str>,
) {
    let server = MockServer::start().await;
    let client = client_for(&server, 3);
    if let Some(token) = token {
        client.set_token(SecretString::from(token.to_string()));
    }

    let err = client
        .execute::<Pong>(Request::get(request_path), &CancellationToken::new())
        .await
        .unwrap_err();

    match err {
        Error::Api(api) => {
            assert_eq!(api.kind(), FailureKind::Build);
            assert_eq!(api.status(), 0);
            assert!(api.message().starts_with("failed to create request"));
        }
        other => panic!("expected a build failure, got {:?}", other),
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn unserializable_body_fails_before_sending() {
    let server = MockServer::start().await;
    let client = client_for(&server, 3);

    // JSON object keys must be strings, so tuple keys cannot be encoded.
    let body = std::collections::BTreeMap::from([((1u8, 2u8), 3u8)]);
    let err = client
        .execute::<Pong>(
            Request::post("/api/v1/echo").json(&body),
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();

    match err {
        Error::Api(api) => {
            assert_eq!(api.kind(), FailureKind::Serialize);
            assert_eq!(api.status(), 0);
            assert!(api.message().starts_with("failed to marshal request"));
        }
        other => panic!("expected a serialize failure, got {:?}", other),
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn repeated_get_decodes_the_same_value() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server, 3);
    let cancel = CancellationToken::new();
    let first: Option<Pong> = client
        .execute(Request::get("/api/v1/ping"), &cancel)
        .await
        .unwrap();
    let second: Option<Pong> = client
        .execute(Request::get("/api/v1/ping"), &cancel)
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first, Some(Pong { ok: true }));
}
