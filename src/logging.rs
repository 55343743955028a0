//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes, to_bytes},
    extract::Request,
    http::{request, response},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::Error;

/// Bodies longer than this many bytes are truncated in the `info` level logs.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// The largest request body that will be read, in bytes.
pub const MAX_BODY_SIZE: usize = 16 * 1024;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and the full body is logged at the `debug` level.
///
/// Requests with a body larger than [MAX_BODY_SIZE] are rejected with
/// 400 Bad Request before reaching the route handler.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();

    let body = match to_bytes(body, MAX_BODY_SIZE).await {
        Ok(body) => body,
        Err(error) => {
            tracing::warn!(
                "Could not read the body of {} {}: {error}",
                parts.method,
                parts.uri
            );
            return Error::InvalidInput("Could not read request body".to_owned()).into_response();
        }
    };
    log_request(&parts, &body);

    let response = next.run(Request::from_parts(parts, Body::from(body))).await;

    let (parts, body) = response.into_parts();
    let body = match to_bytes(body, usize::MAX).await {
        Ok(body) => body,
        Err(error) => {
            tracing::error!("Could not read the response body: {error}");
            return Response::from_parts(parts, Body::empty());
        }
    };
    log_response(&parts, &body);

    Response::from_parts(parts, Body::from(body))
}

fn truncate(body: &Bytes) -> (String, bool) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        (
            String::from_utf8_lossy(&body[..LOG_BODY_LENGTH_LIMIT]).into_owned(),
            true,
        )
    } else {
        (String::from_utf8_lossy(body).into_owned(), false)
    }
}

fn log_request(parts: &request::Parts, body: &Bytes) {
    let (method, uri) = (&parts.method, &parts.uri);

    match truncate(body) {
        (text, true) => {
            tracing::info!("Received request: {method} {uri}\nbody: {text}...");
            tracing::debug!("Full request body: {:?}", String::from_utf8_lossy(body));
        }
        (text, false) => tracing::info!("Received request: {method} {uri}\nbody: {text:?}"),
    }
}

fn log_response(parts: &response::Parts, body: &Bytes) {
    let status = parts.status;

    match truncate(body) {
        (text, true) => {
            tracing::info!("Sending response: {status}\nbody: {text}...");
            tracing::debug!("Full response body: {:?}", String::from_utf8_lossy(body));
        }
        (text, false) => tracing::info!("Sending response: {status}\nbody: {text:?}"),
    }
}
