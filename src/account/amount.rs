//! Decoding of the amounts sent in request bodies.
//!
//! Bodies are decoded from the raw bytes rather than through `axum::Json` so
//! that requests without a `Content-Type: application/json` header are still
//! accepted, and so that decoding failures produce the app's JSON error body.

use serde::de::DeserializeOwned;

use crate::Error;

/// Decode a JSON request body into `T`.
///
/// # Errors
/// Returns [Error::InvalidInput] carrying `error_message` if the body is not
/// valid JSON for `T`.
pub(crate) fn decode_body<T>(body: &[u8], error_message: &str) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(body).map_err(|error| {
        tracing::debug!("Could not decode request body: {error}");
        Error::InvalidInput(error_message.to_owned())
    })
}
