use serde::{Deserialize, Serialize};

/// The client-chosen identifier of an account, e.g. "12345".
pub type AccountId = String;

/// A single account and its current balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// The id for the account.
    pub id: AccountId,
    /// The amount of money held in the account.
    pub balance: f64,
}

impl Account {
    /// Create an empty account, i.e. with a balance of zero.
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_owned(),
            balance: 0.0,
        }
    }
}
