//! # Inbound Port - LedgerApi
//!
//! Primary driving port exposing the ledger to a surrounding service (a
//! request dispatcher, an RPC layer). These four operations are the entire
//! boundary; there is no wire protocol or CLI in this subsystem.

use crate::domain::{Balance, LedgerError, MonitorLedger};

/// Primary API of the concurrent account ledger.
///
/// All operations serialize through one internal monitor. `transfer` and
/// `alert_max` may block the calling thread until a balance precondition
/// holds; `open` and `balance_of` never block.
///
/// # Example
///
/// ```rust
/// use monitor_ledger::{LedgerApi, MonitorLedger};
///
/// let ledger = MonitorLedger::with_defaults();
/// ledger.open("p1".into(), "P1".into(), 100)?;
/// ledger.open("p2".into(), "P2".into(), 0)?;
/// ledger.transfer("p1", "P2", 30)?;
/// assert_eq!(ledger.balance_of("p2")?, 30);
/// # Ok::<(), monitor_ledger::LedgerError>(())
/// ```
pub trait LedgerApi: Send + Sync {
    /// Opens an account with an initial balance and registers its public
    /// identity, atomically. Never blocks.
    ///
    /// # Errors
    /// - `AccountExists`: the private id already has an account
    /// - `IdentityTaken`: the public id is already registered
    fn open(
        &self,
        private_id: String,
        public_id: String,
        initial: Balance,
    ) -> Result<(), LedgerError>;

    /// Transfers `amount` to the account addressed by `dest_public`,
    /// blocking until the transfer can be applied. Per-account submission
    /// order is preserved for the sender.
    ///
    /// # Errors
    /// - `ZeroAmount`: amount is zero
    /// - `AccountNotFound`: sender unknown
    /// - `UnknownDestination`: destination public id not registered
    /// - `SelfTransfer`: destination resolves to the sender
    fn transfer(&self, sender: &str, dest_public: &str, amount: Balance)
        -> Result<(), LedgerError>;

    /// Returns the current balance under the monitor lock. Never blocks.
    ///
    /// # Errors
    /// - `AccountNotFound`: the account does not exist
    fn balance_of(&self, private_id: &str) -> Result<Balance, LedgerError>;

    /// Blocks until the account balance rises strictly above `ceiling`;
    /// returns immediately if it already has.
    ///
    /// # Errors
    /// - `AccountNotFound`: the account does not exist
    fn alert_max(&self, private_id: &str, ceiling: Balance) -> Result<(), LedgerError>;
}

impl LedgerApi for MonitorLedger {
    fn open(
        &self,
        private_id: String,
        public_id: String,
        initial: Balance,
    ) -> Result<(), LedgerError> {
        MonitorLedger::open(self, private_id, public_id, initial)
    }

    fn transfer(
        &self,
        sender: &str,
        dest_public: &str,
        amount: Balance,
    ) -> Result<(), LedgerError> {
        MonitorLedger::transfer(self, sender, dest_public, amount)
    }

    fn balance_of(&self, private_id: &str) -> Result<Balance, LedgerError> {
        MonitorLedger::balance_of(self, private_id)
    }

    fn alert_max(&self, private_id: &str, ceiling: Balance) -> Result<(), LedgerError> {
        MonitorLedger::alert_max(self, private_id, ceiling)
    }
}
