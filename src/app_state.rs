//! Implements a struct that holds the state of the REST server.

use std::sync::Arc;

use axum::extract::FromRef;

use crate::Ledger;

/// The state of the REST server.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The ledger holding every account, shared by all request handlers.
    pub ledger: Arc<Ledger>,
}

impl AppState {
    /// Create a new [AppState] that serves requests from `ledger`.
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger: Arc::new(ledger),
        }
    }
}

/// The state needed by the account endpoints.
#[derive(Debug, Clone)]
pub struct LedgerState {
    /// The ledger holding every account.
    pub ledger: Arc<Ledger>,
}

impl FromRef<AppState> for LedgerState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}
