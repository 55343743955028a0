//! A small account ledger served over HTTP.
//!
//! Clients open accounts, deposit and withdraw money, and read balances.
//! Every account lives in memory for as long as the server process runs.
//!
//! The [Ledger] enforces the rules for changing a balance:
//! - a single deposit may not exceed [MAX_DEPOSIT],
//! - a single withdrawal may take at most [MAX_WITHDRAWAL_RATIO] of the balance,
//! - a withdrawal must leave at least [MINIMUM_RESERVE] in the account.
//!
//! Route handlers share one [Ledger] through [AppState]; see [build_router].

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod account;
mod app_state;
mod endpoints;
mod error;
mod ledger;
mod logging;
mod not_found;
mod routing;

pub use account::{Account, AccountId, AddMoneyRequest};
pub use app_state::AppState;
pub use endpoints::format_endpoint;
pub use error::Error;
pub use ledger::{Ledger, MAX_DEPOSIT, MAX_WITHDRAWAL_RATIO, MINIMUM_RESERVE};
pub use logging::{LOG_BODY_LENGTH_LIMIT, MAX_BODY_SIZE, logging_middleware};
pub use routing::build_router;

/// The time in-flight requests are given to finish once shutdown starts.
const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(1);

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("Could not listen for the ctrl+c signal: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("Could not listen for the terminate signal: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received ctrl+c signal, shutting down."),
        _ = terminate => tracing::info!("Received terminate signal, shutting down."),
    }

    handle.graceful_shutdown(Some(SHUTDOWN_GRACE_PERIOD));
}
