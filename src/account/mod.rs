mod amount;
mod core;
mod create_endpoint;
mod deposit_endpoint;
mod get_endpoint;
mod withdraw_endpoint;

pub use core::{Account, AccountId};
pub use create_endpoint::create_account_endpoint;
pub use deposit_endpoint::{AddMoneyRequest, add_money_endpoint, deposit_endpoint};
pub use get_endpoint::get_account_endpoint;
pub use withdraw_endpoint::withdraw_endpoint;
