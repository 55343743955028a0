//! Defines the two endpoints for depositing money into an account.
//!
//! Both endpoints make the same change to the ledger, they only differ in how
//! the amount is sent in the request body.
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    account::{Account, AccountId, amount::decode_body},
    app_state::LedgerState,
    ledger::INVALID_DEPOSIT_MSG,
};

/// The request body for the add-money endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct AddMoneyRequest {
    /// The amount to deposit.
    pub amount: f64,
}

/// A route handler for depositing an amount sent as a bare JSON number, e.g. `500`.
///
/// Responds with the updated account.
pub async fn deposit_endpoint(
    State(state): State<LedgerState>,
    Path(account_id): Path<AccountId>,
    body: Bytes,
) -> Result<Json<Account>, Error> {
    let amount: f64 = decode_body(&body, INVALID_DEPOSIT_MSG)?;

    state.ledger.deposit(&account_id, amount).map(Json)
}

/// A route handler for depositing an amount sent as a JSON object, e.g. `{"amount": 500}`.
///
/// Responds with the updated account.
pub async fn add_money_endpoint(
    State(state): State<LedgerState>,
    Path(account_id): Path<AccountId>,
    body: Bytes,
) -> Result<Json<Account>, Error> {
    let request: AddMoneyRequest = decode_body(&body, INVALID_DEPOSIT_MSG)?;

    state.ledger.deposit(&account_id, request.amount).map(Json)
}
