//! Integration tests for the HTTP-call wrapper.
//!
//! These exercise `fetch_json` end to end against a local mock server:
//! success, HTTP error status, application-level error payload, and
//! transport failure.

use async_primer::error::ApiError;
use async_primer::fetch_json;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn success_returns_the_raw_body() {
    let server = MockServer::start().await;
    let body = json!({
        "status": "success",
        "message": "https://images.dog.ceo/breeds/appenzeller/n02107908_4913.jpg"
    });

    Mock::given(method("GET"))
        .and(path("/api/breed/appenzeller/images/random"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let url = format!("{}/api/breed/appenzeller/images/random", server.uri());
    let response = fetch_json(&url).await.expect("request should succeed");

    assert_eq!(response.status.as_u16(), 200);
    assert_eq!(response.body, body);
}

#[tokio::test]
async fn http_error_status_becomes_the_error_code() {
    let server = MockServer::start().await;
    let body = json!({
        "status": "error",
        "message": "Breed not found (master breed does not exist)",
        "code": 404
    });

    Mock::given(method("GET"))
        .and(path("/api/breed/notabreed/images/random"))
        .respond_with(ResponseTemplate::new(404).set_body_json(body))
        .mount(&server)
        .await;

    let url = format!("{}/api/breed/notabreed/images/random", server.uri());
    let error = fetch_json(&url).await.expect_err("request should fail");

    assert_eq!(error.kind(), "Status Error");
    assert_eq!(error.error_code(), 404);
    assert_eq!(
        error.error_msg(),
        "Breed not found (master breed does not exist)"
    );
}

#[tokio::test]
async fn error_status_without_a_json_body_still_normalizes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let url = format!("{}/broken", server.uri());
    let error = fetch_json(&url).await.expect_err("request should fail");

    assert_eq!(error.error_code(), 500);
    assert_eq!(error.error_msg(), "HTTP error status 500 Internal Server Error");
}

#[tokio::test]
async fn error_indicator_in_a_successful_response_normalizes_to_payload() {
    let server = MockServer::start().await;
    let body = json!({
        "status": "error",
        "message": "defensive indicator",
        "code": 418
    });

    Mock::given(method("GET"))
        .and(path("/indicator"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let url = format!("{}/indicator", server.uri());
    let error = fetch_json(&url).await.expect_err("indicator should fail");

    assert_eq!(error.kind(), "Payload Error");
    assert_eq!(error.error_code(), 418);
    assert_eq!(error.error_msg(), "defensive indicator");
}

#[tokio::test]
async fn error_indicator_without_a_code_falls_back_to_the_sentinel() {
    let server = MockServer::start().await;
    let body = json!({ "status": "error", "message": "no code field" });

    Mock::given(method("GET"))
        .and(path("/indicator"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let url = format!("{}/indicator", server.uri());
    let error = fetch_json(&url).await.expect_err("indicator should fail");

    assert_eq!(error.error_code(), ApiError::UNKNOWN_STATUS_CODE);
}

#[tokio::test]
async fn unresolvable_host_normalizes_to_transport() {
    // Reserved TLD, never resolves
    let error = fetch_json("http://badhostname.invalid/")
        .await
        .expect_err("host cannot resolve");

    assert_eq!(error.kind(), "Transport Error");
    assert_eq!(error.error_code(), ApiError::TRANSPORT_CODE);
}

#[tokio::test]
async fn connection_refused_normalizes_to_transport() {
    // Bind a port, then drop the listener so connecting to it is refused
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);

    let url = format!("http://127.0.0.1:{}/", port);
    let error = fetch_json(&url).await.expect_err("connection is refused");

    assert_eq!(error.error_code(), 900);
}

#[tokio::test]
async fn undecodable_success_body_normalizes_to_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/not-json"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_string("this is not json"),
        )
        .mount(&server)
        .await;

    let url = format!("{}/not-json", server.uri());
    let error = fetch_json(&url).await.expect_err("body cannot decode");

    assert_eq!(error.kind(), "Status Error");
}
