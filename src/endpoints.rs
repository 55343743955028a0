//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/accounts/{account_id}', use [format_endpoint].

/// The route for getting a single account.
pub const ACCOUNT: &str = "/accounts/{account_id}";
/// The route for opening a new account.
pub const CREATE_ACCOUNT: &str = "/accounts/{account_id}/create";
/// The route for depositing an amount sent as a bare JSON number.
pub const DEPOSIT: &str = "/accounts/{account_id}/deposit";
/// The route for depositing an amount sent as `{"amount": number}`.
pub const ADD_MONEY: &str = "/accounts/{account_id}/add-money";
/// The route for withdrawing an amount sent as a bare JSON number.
pub const WITHDRAW: &str = "/accounts/{account_id}/withdraw";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/accounts/{account_id}', '{account_id}' is the parameter.
///
/// Only the first parameter is replaced. If no parameter is found in
/// `endpoint_path`, the original `endpoint_path` is returned.
pub fn format_endpoint(endpoint_path: &str, id: &str) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map_or(endpoint_path.len(), |offset| param_start + offset + 1);

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
