//! Application router configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    AppState,
    account::{
        add_money_endpoint, create_account_endpoint, deposit_endpoint, get_account_endpoint,
        withdraw_endpoint,
    },
    endpoints,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ACCOUNT, get(get_account_endpoint))
        .route(endpoints::CREATE_ACCOUNT, post(create_account_endpoint))
        .route(endpoints::DEPOSIT, post(deposit_endpoint))
        .route(endpoints::ADD_MONEY, post(add_money_endpoint))
        .route(endpoints::WITHDRAW, post(withdraw_endpoint))
        .fallback(get_404_not_found)
        .with_state(state)
}
