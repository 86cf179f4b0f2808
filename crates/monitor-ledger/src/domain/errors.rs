use super::entities::{Balance, PrivateId, PublicId};
use thiserror::Error;

/// Errors raised by ledger operations.
///
/// Every variant except `WaitTimedOut` is a precondition violation and is
/// raised synchronously, before the operation enqueues or blocks anything.
/// `WaitTimedOut` is only produced by the `*_with_timeout` variants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Transfer amount must be positive")]
    ZeroAmount,

    #[error("Account already exists: {private_id:?}")]
    AccountExists { private_id: PrivateId },

    #[error("Public identity already registered: {public_id:?}")]
    IdentityTaken { public_id: PublicId },

    #[error("Account not found: {private_id:?}")]
    AccountNotFound { private_id: PrivateId },

    #[error("Destination not registered: {public_id:?}")]
    UnknownDestination { public_id: PublicId },

    #[error("Destination resolves to the sender: {private_id:?}")]
    SelfTransfer { private_id: PrivateId },

    #[error("Timed out waiting for balance of {requester:?} to cover {threshold}")]
    WaitTimedOut {
        requester: PrivateId,
        threshold: Balance,
    },
}
