//! HTTP GET wrapper with error normalization
//!
//! One GET per call, no headers, no authentication, no retries. Whatever
//! goes wrong — the host does not resolve, the server answers with an
//! error status, or the body itself carries an error indicator — the
//! caller sees a single [`ApiError`] shape.

use colored::Colorize;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

/// An unresolvable host; requests here always fail at the transport level
pub const BAD_HOST_URL: &str = "https://badhostname.mysite.com";

/// A valid API endpoint expected to answer with an HTTP error status
pub const ERROR_BREED_URL: &str = "https://dog.ceo/api/breed/notabreed/images/random";

/// A valid API endpoint expected to succeed
pub const GOOD_BREED_URL: &str = "https://dog.ceo/api/breed/appenzeller/images/random";

/// Successful response: the HTTP status plus the untouched JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: reqwest::StatusCode,
    pub body: Value,
}

/// Issue one GET and normalize every failure shape
///
/// - The request never completes (DNS failure, connection refused):
///   [`ApiError::Transport`], code 900.
/// - The server answers with a 4xx/5xx status: [`ApiError::Status`]
///   carrying the status, with the body's `message` field as the error
///   message when one is present.
/// - The body cannot be read or decoded after a successful exchange:
///   [`ApiError::Status`] with whatever status the underlying error still
///   knows about; when it knows none, the code falls back to 520.
/// - The body decodes but carries `"status": "error"`:
///   [`ApiError::Payload`] with the body's own `code`/`message` fields.
/// - Otherwise: the response, unmodified.
pub async fn fetch_json(url: &str) -> ApiResult<ApiResponse> {
    let response = reqwest::get(url)
        .await
        .map_err(|error| ApiError::transport(error.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::status(
            Some(status.as_u16()),
            error_status_message(response, status).await,
        ));
    }

    // An error after this point happened on a completed exchange, so read
    // the status off the error itself. It is optional there; never assume
    // it exists.
    let body: Value = response.json().await.map_err(|error| {
        ApiError::status(error.status().map(|s| s.as_u16()), error.to_string())
    })?;

    // The API is expected to signal errors through its HTTP status, so
    // this indicator may never occur in practice; normalize it anyway.
    if let Some(error) = payload_error(&body) {
        return Err(error);
    }

    Ok(ApiResponse { status, body })
}

/// Best message for an HTTP error status: the body's own `message` field
/// when the body is JSON and has one, else a generic description
async fn error_status_message(response: reqwest::Response, status: reqwest::StatusCode) -> String {
    match response.json::<Value>().await {
        Ok(body) => body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP error status {}", status)),
        Err(_) => format!("HTTP error status {}", status),
    }
}

/// Check a decoded body for an application-level error indicator
fn payload_error(body: &Value) -> Option<ApiError> {
    if body.get("status").and_then(Value::as_str) != Some("error") {
        return None;
    }

    let code = body
        .get("code")
        .and_then(Value::as_u64)
        .and_then(|code| u16::try_from(code).ok());
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("error payload without a message");

    Some(ApiError::payload(code, message))
}

/// GET against an unresolvable host; always fails with code 900
pub async fn bad_request() -> ApiResult<ApiResponse> {
    narrated(BAD_HOST_URL).await
}

/// GET against a valid API, expected to answer with an error status
pub async fn request_with_error() -> ApiResult<ApiResponse> {
    narrated(ERROR_BREED_URL).await
}

/// GET against a valid API endpoint, expected to succeed
pub async fn good_request() -> ApiResult<ApiResponse> {
    narrated(GOOD_BREED_URL).await
}

async fn narrated(url: &str) -> ApiResult<ApiResponse> {
    match fetch_json(url).await {
        Ok(response) => {
            println!("GET {} -> {}", url, response.status.to_string().green());
            println!("{:#}", response.body);
            Ok(response)
        }
        Err(error) => {
            println!("{}", "Connection error".red());
            println!("{}", error);
            Err(error)
        }
    }
}
