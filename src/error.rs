//! Defines the app level error type and its conversion to JSON error responses.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// The message shown to clients when an internal error occurs.
pub const INTERNAL_ERROR_MSG: &str = "Internal server error";

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested account has not been created.
    #[error("Account not found")]
    NotFound,

    /// An account with the requested ID has already been created.
    #[error("Account already exists")]
    AlreadyExists,

    /// A single deposit was larger than [MAX_DEPOSIT](crate::MAX_DEPOSIT).
    #[error("Deposit amount exceeds the limit")]
    LimitExceeded,

    /// A withdrawal would take more than the allowed share of the balance,
    /// or would leave less than the minimum reserve in the account.
    #[error("Insufficient funds")]
    InsufficientFunds,

    /// The amount could not be decoded from the request, or was not a
    /// positive, finite number.
    ///
    /// The string is shown to the client as is.
    #[error("{0}")]
    InvalidInput(String),

    /// A thread panicked while holding one of the ledger's locks.
    #[error("could not acquire the ledger lock")]
    LockPoisoned,
}

impl Error {
    /// The HTTP status code that the error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::AlreadyExists => StatusCode::CONFLICT,
            Error::LimitExceeded | Error::InsufficientFunds | Error::InvalidInput(_) => {
                StatusCode::BAD_REQUEST
            }
            Error::LockPoisoned => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let error_message = match self {
            // Internal errors are not intended to be shown to the client.
            error @ Error::LockPoisoned => {
                tracing::error!("An unexpected error occurred: {error}");
                INTERNAL_ERROR_MSG.to_owned()
            }
            error => error.to_string(),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
