//! The in-memory ledger that owns every account and enforces the rules for
//! changing a balance.

use std::{
    collections::{HashMap, hash_map::Entry},
    sync::{Arc, Mutex, MutexGuard, RwLock},
};

use crate::{
    Error,
    account::{Account, AccountId},
};

/// The largest amount that may be deposited in a single request.
pub const MAX_DEPOSIT: f64 = 10_000.0;

/// The largest share of the current balance that may be withdrawn in a single request.
pub const MAX_WITHDRAWAL_RATIO: f64 = 0.9;

/// The balance that must remain in an account after a withdrawal.
pub const MINIMUM_RESERVE: f64 = 100.0;

pub(crate) const INVALID_DEPOSIT_MSG: &str = "Invalid deposit amount";
pub(crate) const INVALID_WITHDRAW_MSG: &str = "Invalid withdraw amount";

/// A thread-safe store of accounts.
///
/// Each account sits behind its own mutex, so requests for different accounts
/// only contend on the brief read lock of the account map. The write lock on
/// the map is only taken to create an account. Accounts are never removed, so
/// a handle to an account stays valid after the map lock is released.
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: RwLock<HashMap<AccountId, Arc<Mutex<Account>>>>,
}

impl Ledger {
    /// Create a ledger with no accounts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new account under `id` with a balance of zero.
    ///
    /// # Errors
    /// Returns [Error::AlreadyExists] if an account with `id` exists. The
    /// existing account is left untouched.
    pub fn create(&self, id: &str) -> Result<Account, Error> {
        let mut accounts = self.accounts.write().map_err(|error| {
            tracing::error!("Could not acquire the account map lock: {error}");
            Error::LockPoisoned
        })?;

        match accounts.entry(id.to_owned()) {
            Entry::Occupied(_) => {
                tracing::debug!("Refused to create account {id:?}: it already exists");
                Err(Error::AlreadyExists)
            }
            Entry::Vacant(entry) => {
                let account = Account::new(id);
                entry.insert(Arc::new(Mutex::new(account.clone())));
                tracing::info!("Created account {id:?}");

                Ok(account)
            }
        }
    }

    /// Get a snapshot of the account `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if the account has not been created.
    pub fn get(&self, id: &str) -> Result<Account, Error> {
        let handle = self.find(id)?;
        let account = lock_account(&handle)?;

        Ok(account.clone())
    }

    /// Add `amount` to the balance of account `id`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - `amount` is not a positive, finite number ([Error::InvalidInput]),
    /// - the account has not been created ([Error::NotFound]),
    /// - `amount` is greater than [MAX_DEPOSIT] ([Error::LimitExceeded]).
    pub fn deposit(&self, id: &str, amount: f64) -> Result<Account, Error> {
        validate_amount(amount, INVALID_DEPOSIT_MSG)?;

        self.update(id, |account| {
            if amount > MAX_DEPOSIT {
                tracing::debug!("Refused deposit of {amount} into {id:?}: over the limit");
                return Err(Error::LimitExceeded);
            }

            account.balance += amount;
            tracing::debug!(
                "Deposited {amount} into {id:?}, new balance {}",
                account.balance
            );

            Ok(())
        })
    }

    /// Take `amount` from the balance of account `id`.
    ///
    /// A withdrawal may take at most [MAX_WITHDRAWAL_RATIO] of the balance and
    /// must leave at least [MINIMUM_RESERVE] behind. Both rules are checked
    /// against the balance held when the account lock is acquired.
    ///
    /// # Errors
    /// Returns an error if:
    /// - `amount` is not a positive, finite number ([Error::InvalidInput]),
    /// - the account has not been created ([Error::NotFound]),
    /// - either withdrawal rule is broken ([Error::InsufficientFunds]).
    pub fn withdraw(&self, id: &str, amount: f64) -> Result<Account, Error> {
        validate_amount(amount, INVALID_WITHDRAW_MSG)?;

        self.update(id, |account| {
            let balance = account.balance;

            if amount > MAX_WITHDRAWAL_RATIO * balance || balance - amount < MINIMUM_RESERVE {
                tracing::debug!(
                    "Refused withdrawal of {amount} from {id:?} with balance {balance}"
                );
                return Err(Error::InsufficientFunds);
            }

            account.balance = balance - amount;
            tracing::debug!(
                "Withdrew {amount} from {id:?}, new balance {}",
                account.balance
            );

            Ok(())
        })
    }

    fn find(&self, id: &str) -> Result<Arc<Mutex<Account>>, Error> {
        let accounts = self.accounts.read().map_err(|error| {
            tracing::error!("Could not acquire the account map lock: {error}");
            Error::LockPoisoned
        })?;

        accounts.get(id).cloned().ok_or(Error::NotFound)
    }

    /// Apply `change` to the account while holding its lock.
    ///
    /// `change` must only modify the account once all of its checks pass.
    fn update<F>(&self, id: &str, change: F) -> Result<Account, Error>
    where
        F: FnOnce(&mut Account) -> Result<(), Error>,
    {
        let handle = self.find(id)?;
        let mut account = lock_account(&handle)?;

        change(&mut account)?;

        Ok(account.clone())
    }
}

fn lock_account(handle: &Mutex<Account>) -> Result<MutexGuard<'_, Account>, Error> {
    handle.lock().map_err(|error| {
        tracing::error!("Could not acquire the account lock: {error}");
        Error::LockPoisoned
    })
}

fn validate_amount(amount: f64, error_message: &str) -> Result<(), Error> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidInput(error_message.to_owned()))
    }
}




#[cfg(test)]
mod withdraw_tests {
    use crate::Error;

    use super::Ledger;

    fn ledger_with_balance(id: &str, balance: f64) -> Ledger {
        let ledger = Ledger::new();
        ledger.create(id).unwrap();
        ledger.deposit(id, balance).unwrap();
        ledger
    }

    #[test]
    fn withdraw_subtracts_from_balance() {
        let ledger = ledger_with_balance("A", 500.0);

        assert_eq!(ledger.withdraw("A", 200.0).unwrap().balance, 300.0);
        assert_eq!(ledger.get("A").unwrap().balance, 300.0);
    }

    #[test]
    fn fails_over_ninety_percent_of_balance() {
        let ledger = ledger_with_balance("A", 5_000.0);

        assert_eq!(ledger.withdraw("A", 4_500.01), Err(Error::InsufficientFunds));
        assert_eq!(ledger.withdraw("A", 4_500.0).unwrap().balance, 500.0);
    }

    #[test]
    fn fails_below_minimum_reserve() {
        // 90% of 500 is 450, but only 400 may be taken while keeping 100.
        let ledger = ledger_with_balance("A", 500.0);

        assert_eq!(ledger.withdraw("A", 400.01), Err(Error::InsufficientFunds));
        assert_eq!(ledger.withdraw("A", 400.0).unwrap().balance, 100.0);
    }

    #[test]
    fn fails_on_empty_account() {
        let ledger = Ledger::new();
        ledger.create("A").unwrap();

        assert_eq!(ledger.withdraw("A", 1.0), Err(Error::InsufficientFunds));
    }

    #[test]
    fn floor_rule_holds_for_a_range_of_balances() {
        for balance in [100.0, 150.0, 500.0, 1_000.0, 2_500.0] {
            for amount in [1.0, 25.0, 50.0, 90.0, 400.0, 900.0, 2_000.0] {
                let ledger = ledger_with_balance("A", balance);
                let should_fail = amount > 0.9 * balance || balance - amount < 100.0;

                let result = ledger.withdraw("A", amount);

                if should_fail {
                    assert_eq!(
                        result,
                        Err(Error::InsufficientFunds),
                        "withdrawing {amount} from {balance} should fail"
                    );
                    assert_eq!(ledger.get("A").unwrap().balance, balance);
                } else {
                    assert_eq!(
                        result.map(|account| account.balance),
                        Ok(balance - amount),
                        "withdrawing {amount} from {balance} should succeed"
                    );
                }
            }
        }
    }

    #[test]
    fn rejects_non_positive_amounts() {
        let ledger = ledger_with_balance("A", 500.0);

        for amount in [0.0, -100.0, f64::NAN] {
            assert_eq!(
                ledger.withdraw("A", amount),
                Err(Error::InvalidInput("Invalid withdraw amount".to_owned())),
                "amount {amount} should be rejected"
            );
        }

        assert_eq!(ledger.get("A").unwrap().balance, 500.0);
    }

    #[test]
    fn deposit_then_withdraw_restores_balance() {
        let ledger = ledger_with_balance("A", 1_000.0);

        ledger.deposit("A", 250.5).unwrap();
        let account = ledger.withdraw("A", 250.5).unwrap();

        assert_eq!(account.balance, 1_000.0);
    }

    #[test]
    fn scenario_with_rejected_withdrawal() {
        let ledger = Ledger::new();

        assert_eq!(ledger.create("A").unwrap().balance, 0.0);
        assert_eq!(ledger.deposit("A", 500.0).unwrap().balance, 500.0);
        assert_eq!(ledger.withdraw("A", 200.0).unwrap().balance, 300.0);
        assert_eq!(ledger.withdraw("A", 600.0), Err(Error::InsufficientFunds));
        assert_eq!(ledger.get("A").unwrap().balance, 300.0);
    }
}

#[cfg(test)]
mod concurrency_tests {
    use std::{sync::Arc, thread};

    use super::Ledger;

    #[test]
    fn parallel_deposits_are_not_lost() {
        let ledger = Ledger::new();
        ledger.create("A").unwrap();

        thread::scope(|scope| {
            for _ in 0..200 {
                scope.spawn(|| ledger.deposit("A", 1.0).unwrap());
            }
        });

        assert_eq!(ledger.get("A").unwrap().balance, 200.0);
    }

    #[test]
    fn parallel_creates_have_one_winner() {
        let ledger = Ledger::new();

        let successes = thread::scope(|scope| {
            let handles: Vec<_> = (0..50)
                .map(|_| scope.spawn(|| ledger.create("A").is_ok()))
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .filter(|created| *created)
                .count()
        });

        assert_eq!(successes, 1);
    }

    #[test]
    fn parallel_withdrawals_never_break_the_reserve() {
        let ledger = Ledger::new();
        ledger.create("A").unwrap();
        ledger.deposit("A", 1_000.0).unwrap();

        thread::scope(|scope| {
            for _ in 0..100 {
                scope.spawn(|| {
                    let _ = ledger.withdraw("A", 50.0);
                });
            }
        });

        // 18 withdrawals succeed, after which taking 50 would break the reserve.
        assert_eq!(ledger.get("A").unwrap().balance, 100.0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn deposits_from_tasks_are_not_lost() {
        let ledger = Arc::new(Ledger::new());
        ledger.create("A").unwrap();

        let tasks: Vec<_> = (0..100)
            .map(|_| {
                let ledger = ledger.clone();
                tokio::spawn(async move { ledger.deposit("A", 1.0) })
            })
            .collect();

        for task in tasks {
            assert!(task.await.unwrap().is_ok());
        }

        assert_eq!(ledger.get("A").unwrap().balance, 100.0);
    }
}
