//! Defines the endpoint for reading an account.
use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    Error,
    account::{Account, AccountId},
    app_state::LedgerState,
};

/// A route handler for getting an account and its balance.
///
/// Responds with 404 Not Found if the account has not been created.
pub async fn get_account_endpoint(
    State(state): State<LedgerState>,
    Path(account_id): Path<AccountId>,
) -> Result<Json<Account>, Error> {
    state.ledger.get(&account_id).map(Json)
}
