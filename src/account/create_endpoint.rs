//! Defines the endpoint for opening a new account.
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{app_state::LedgerState, account::AccountId};

/// A route handler for opening a new account, responds with the empty account.
///
/// Responds with 409 Conflict if the account already exists.
pub async fn create_account_endpoint(
    State(state): State<LedgerState>,
    Path(account_id): Path<AccountId>,
) -> Response {
    match state.ledger.create(&account_id) {
        Ok(account) => (StatusCode::CREATED, Json(account)).into_response(),
        Err(error) => error.into_response(),
    }
}
