//! # Domain Entities for the Monitor-Ledger
//!
//! ## Type Decisions
//!
//! - `Balance: u64` - balances and transfer amounts are non-negative by
//!   construction, so the whole "negative argument" failure class collapses
//!   into the type system. u64 covers any realistic single-process ledger
//!   without wrap-around concerns.
//! - Ids are `String` aliases rather than newtypes: the ledger is the only
//!   consumer and every access goes through the monitor, so the aliasing
//!   keeps call sites and tests readable.

use serde::{Deserialize, Serialize};

/// Owner-authenticating key used by ledger operations. Never exposed to
/// other parties.
pub type PrivateId = String;

/// Identity other parties use to address an account as a transfer
/// destination. Resolves to a `PrivateId` through the identity registry.
pub type PublicId = String;

/// Account balance / transfer amount in base units.
pub type Balance = u64;

/// Ledger configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Initial capacity hint for the account map.
    pub account_capacity: usize,
    /// Initial capacity hint for the identity registry.
    pub identity_capacity: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            account_capacity: 64,
            identity_capacity: 64,
        }
    }
}

/// Point-in-time snapshot of ledger occupancy, taken under the monitor lock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStatus {
    /// Number of open accounts.
    pub accounts: usize,
    /// Callers parked on the transfer queue (ordering or funds gate).
    pub pending_transfer_waits: usize,
    /// Callers parked on the alert queue.
    pub pending_alert_waits: usize,
}
