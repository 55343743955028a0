//! Defines the endpoint for withdrawing money from an account.
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};

use crate::{
    Error,
    account::{Account, AccountId, amount::decode_body},
    app_state::LedgerState,
    ledger::INVALID_WITHDRAW_MSG,
};

/// A route handler for withdrawing an amount sent as a bare JSON number, e.g. `200`.
///
/// Responds with the updated account, or 400 Bad Request if the withdrawal
/// would take more than the ledger allows.
pub async fn withdraw_endpoint(
    State(state): State<LedgerState>,
    Path(account_id): Path<AccountId>,
    body: Bytes,
) -> Result<Json<Account>, Error> {
    let amount: f64 = decode_body(&body, INVALID_WITHDRAW_MSG)?;

    state.ledger.withdraw(&account_id, amount).map(Json)
}
