//! # Monitor Ledger - Single Lock, Per-Request Condition Variables
//!
//! Implements the concurrent ledger as a classic monitor: one mutex guards
//! accounts, the identity registry, and both pending-request queues. A
//! caller whose precondition does not hold parks on a condition variable
//! owned by its own `Request`; the wake-reevaluation routine of a later
//! operation signals it once the gating balance condition is met.
//!
//! ## Invariants Enforced
//!
//! - Balances never go negative: the funds gate blocks a debit until the
//!   balance covers it, re-validating after every wake
//! - Per-account transfer order: the ordering gate queues a transfer behind
//!   any earlier pending request for the same source account
//! - At most one request is signaled per reevaluation pass; wake cascades
//!   propagate through the monitor entries of the woken callers
//! - All precondition errors are raised before anything is enqueued;
//!   `WaitTimedOut` is the only error a blocked caller can come back with

use super::entities::{Balance, LedgerConfig, LedgerStatus, PrivateId, PublicId};
use super::errors::LedgerError;
use super::registry::IdentityRegistry;
use super::requests::{Request, RequestQueue, WaitKind};
use parking_lot::{Mutex, MutexGuard};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Shared state guarded by the monitor lock.
#[derive(Debug)]
struct LedgerState {
    accounts: HashMap<PrivateId, Balance>,
    registry: IdentityRegistry,
    transfer_waits: RequestQueue,
    alert_waits: RequestQueue,
}

impl LedgerState {
    fn new(config: &LedgerConfig) -> Self {
        Self {
            accounts: HashMap::with_capacity(config.account_capacity),
            registry: IdentityRegistry::with_capacity(config.identity_capacity),
            transfer_waits: RequestQueue::new(),
            alert_waits: RequestQueue::new(),
        }
    }

    /// Balance of an account that is known to exist. Accounts are never
    /// deleted, so a queued requester always resolves.
    fn balance(&self, private_id: &str) -> Balance {
        *self
            .accounts
            .get(private_id)
            .expect("queued requester has an open account")
    }

    fn credit(&mut self, private_id: &str, amount: Balance) {
        *self
            .accounts
            .get_mut(private_id)
            .expect("credit target has an open account") += amount;
    }

    fn debit(&mut self, private_id: &str, amount: Balance) {
        let balance = self
            .accounts
            .get_mut(private_id)
            .expect("debit source has an open account");
        debug_assert!(*balance >= amount, "funds gate admits only covered debits");
        *balance -= amount;
    }

    /// Wake-reevaluation routine. Runs with the monitor lock held, after
    /// every balance mutation and after any alert wake path. Signals at
    /// most one request per invocation.
    ///
    /// The transfer scan tracks the most recently examined-and-rejected
    /// requester and skips later entries for the same account without
    /// updating the tracker, so a burst of queued transfers for an account
    /// just shown to be underfunded is not re-tested entry by entry. An
    /// interleaved entry for a different account resets the tracker. This
    /// is a coalescing optimization carried over as a tested contract, not
    /// a correctness requirement.
    fn reevaluate(&mut self) {
        let mut last_rejected: Option<PrivateId> = None;
        let mut index = 0;
        while index < self.transfer_waits.len() {
            let (requester, threshold) = {
                let request = self.transfer_waits.get(index).expect("index in bounds");
                (request.requester().clone(), request.threshold())
            };
            if last_rejected.as_deref() == Some(requester.as_str()) {
                index += 1;
                continue;
            }
            if self.balance(&requester) >= threshold {
                let request = self.transfer_waits.remove(index);
                tracing::trace!(
                    request = %request.id(),
                    requester = %requester,
                    threshold,
                    "Waking transfer waiter"
                );
                request.grant();
                return;
            }
            last_rejected = Some(requester);
            index += 1;
        }

        let mut index = 0;
        while index < self.alert_waits.len() {
            let (requester, ceiling) = {
                let request = self.alert_waits.get(index).expect("index in bounds");
                (request.requester().clone(), request.threshold())
            };
            // Strict inequality: the alert fires only once the balance has
            // risen above the ceiling.
            if self.balance(&requester) > ceiling {
                let request = self.alert_waits.remove(index);
                tracing::trace!(
                    request = %request.id(),
                    requester = %requester,
                    ceiling,
                    "Waking alert waiter"
                );
                request.grant();
                return;
            }
            index += 1;
        }
    }

    fn queue_for(&mut self, kind: WaitKind) -> &mut RequestQueue {
        match kind {
            WaitKind::Transfer => &mut self.transfer_waits,
            WaitKind::Alert => &mut self.alert_waits,
        }
    }
}

/// Concurrent account ledger coordinated through a single monitor.
///
/// Safe to share across threads (`&self` operations); every operation,
/// including reads, serializes through the internal lock to observe a
/// consistent snapshot.
#[derive(Debug)]
pub struct MonitorLedger {
    config: LedgerConfig,
    state: Mutex<LedgerState>,
}

impl Default for MonitorLedger {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl MonitorLedger {
    /// Creates an empty ledger.
    pub fn new(config: LedgerConfig) -> Self {
        let state = LedgerState::new(&config);
        Self {
            config,
            state: Mutex::new(state),
        }
    }

    /// Creates a ledger with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(LedgerConfig::default())
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Opens an account and registers its public identity, atomically.
    ///
    /// # Errors
    /// - `AccountExists` if the private id already has an account
    /// - `IdentityTaken` if the public id is already registered
    pub fn open(
        &self,
        private_id: PrivateId,
        public_id: PublicId,
        initial: Balance,
    ) -> Result<(), LedgerError> {
        let mut state = self.state.lock();
        if state.accounts.contains_key(&private_id) {
            return Err(LedgerError::AccountExists { private_id });
        }
        state.registry.register(public_id, private_id.clone())?;
        state.accounts.insert(private_id.clone(), initial);
        tracing::debug!(account = %private_id, initial, "Account opened");
        Ok(())
    }

    /// Returns the current balance. Never blocks, but serializes through
    /// the monitor to observe a consistent snapshot.
    ///
    /// # Errors
    /// - `AccountNotFound` if the account does not exist
    pub fn balance_of(&self, private_id: &str) -> Result<Balance, LedgerError> {
        let state = self.state.lock();
        state
            .accounts
            .get(private_id)
            .copied()
            .ok_or_else(|| LedgerError::AccountNotFound {
                private_id: private_id.to_owned(),
            })
    }

    /// Transfers `amount` from the sender to the account addressed by
    /// `dest_public`. Blocks until the transfer can be applied: first
    /// behind any earlier pending request for the same sender (per-account
    /// submission order), then until the sender's balance covers the
    /// amount.
    ///
    /// # Errors
    /// - `ZeroAmount` if `amount == 0`
    /// - `AccountNotFound` if the sender is unknown
    /// - `UnknownDestination` if `dest_public` is not registered
    /// - `SelfTransfer` if the destination resolves to the sender
    pub fn transfer(
        &self,
        sender: &str,
        dest_public: &str,
        amount: Balance,
    ) -> Result<(), LedgerError> {
        self.transfer_deadline(sender, dest_public, amount, None)
    }

    /// Like [`transfer`](Self::transfer), but abandons the wait if it has
    /// not been granted within `timeout`. A timed-out transfer has made no
    /// balance change.
    ///
    /// # Errors
    /// All of [`transfer`](Self::transfer), plus `WaitTimedOut`.
    pub fn transfer_with_timeout(
        &self,
        sender: &str,
        dest_public: &str,
        amount: Balance,
        timeout: Duration,
    ) -> Result<(), LedgerError> {
        self.transfer_deadline(sender, dest_public, amount, Some(Instant::now() + timeout))
    }

    fn transfer_deadline(
        &self,
        sender: &str,
        dest_public: &str,
        amount: Balance,
        deadline: Option<Instant>,
    ) -> Result<(), LedgerError> {
        let mut state = self.state.lock();

        // All precondition checks happen here, before any enqueue.
        if amount == 0 {
            return Err(LedgerError::ZeroAmount);
        }
        if !state.accounts.contains_key(sender) {
            return Err(LedgerError::AccountNotFound {
                private_id: sender.to_owned(),
            });
        }
        let dest_private = match state.registry.resolve(dest_public) {
            Some(private_id) => private_id.clone(),
            None => {
                return Err(LedgerError::UnknownDestination {
                    public_id: dest_public.to_owned(),
                })
            }
        };
        if dest_private == sender {
            return Err(LedgerError::SelfTransfer {
                private_id: sender.to_owned(),
            });
        }

        // Ordering gate: queue behind any earlier pending request for the
        // same sender, preserving per-account submission order.
        if state.transfer_waits.contains_requester(sender) {
            Self::park(&mut state, sender, amount, WaitKind::Transfer, deadline)?;
        }

        // Funds gate: a wake is a hint, not a guarantee, so the balance is
        // re-validated after every wake with a fresh request each round.
        while state.balance(sender) < amount {
            Self::park(&mut state, sender, amount, WaitKind::Transfer, deadline)?;
        }

        state.debit(sender, amount);
        state.credit(&dest_private, amount);
        tracing::debug!(
            sender = %sender,
            destination = %dest_private,
            amount,
            "Transfer applied"
        );
        state.reevaluate();
        Ok(())
    }

    /// Blocks until the account's balance rises strictly above `ceiling`;
    /// returns immediately if it already has. The wake itself is the
    /// signal - the balance is not re-validated afterwards, since the
    /// reevaluation routine proved the condition at signal time.
    ///
    /// # Errors
    /// - `AccountNotFound` if the account does not exist
    pub fn alert_max(&self, private_id: &str, ceiling: Balance) -> Result<(), LedgerError> {
        self.alert_deadline(private_id, ceiling, None)
    }

    /// Like [`alert_max`](Self::alert_max), but abandons the wait if the
    /// balance has not crossed the ceiling within `timeout`.
    ///
    /// # Errors
    /// All of [`alert_max`](Self::alert_max), plus `WaitTimedOut`.
    pub fn alert_max_with_timeout(
        &self,
        private_id: &str,
        ceiling: Balance,
        timeout: Duration,
    ) -> Result<(), LedgerError> {
        self.alert_deadline(private_id, ceiling, Some(Instant::now() + timeout))
    }

    fn alert_deadline(
        &self,
        private_id: &str,
        ceiling: Balance,
        deadline: Option<Instant>,
    ) -> Result<(), LedgerError> {
        let mut state = self.state.lock();
        let balance = state
            .accounts
            .get(private_id)
            .copied()
            .ok_or_else(|| LedgerError::AccountNotFound {
                private_id: private_id.to_owned(),
            })?;

        if balance <= ceiling {
            Self::park(&mut state, private_id, ceiling, WaitKind::Alert, deadline)?;
        }
        // Run the wake scan on every exit path, woken or not, to cascade
        // any unblock this monitor entry made possible.
        state.reevaluate();
        Ok(())
    }

    /// Returns a snapshot of ledger occupancy.
    pub fn status(&self) -> LedgerStatus {
        let state = self.state.lock();
        LedgerStatus {
            accounts: state.accounts.len(),
            pending_transfer_waits: state.transfer_waits.len(),
            pending_alert_waits: state.alert_waits.len(),
        }
    }

    /// Enqueues a fresh request and parks the caller on its condition
    /// variable until granted, releasing and reacquiring the monitor lock
    /// around the wait.
    ///
    /// With a deadline, a timeout that loses the race against a concurrent
    /// wake proceeds as woken: the signal was already consumed, and
    /// abandoning it would strand the wake. A true timeout removes the
    /// request from its queue and runs the wake scan once, since a waiter
    /// previously shadowed by this entry may now be eligible.
    fn park(
        state: &mut MutexGuard<'_, LedgerState>,
        requester: &str,
        threshold: Balance,
        kind: WaitKind,
        deadline: Option<Instant>,
    ) -> Result<(), LedgerError> {
        let request = Request::new(requester.to_owned(), threshold, kind);
        state.queue_for(kind).push(request.clone());
        tracing::trace!(
            request = %request.id(),
            requester = %requester,
            threshold,
            kind = ?kind,
            "Caller parked"
        );

        loop {
            if request.is_granted() {
                return Ok(());
            }
            match deadline {
                None => request.condvar().wait(state),
                Some(deadline) => {
                    let result = request.condvar().wait_until(state, deadline);
                    if result.timed_out() {
                        if request.is_granted() {
                            // Wake raced the deadline; the signal is ours.
                            return Ok(());
                        }
                        let removed = state.queue_for(kind).remove_by_id(request.id());
                        debug_assert!(
                            removed.is_some(),
                            "ungranted request must still be queued"
                        );
                        tracing::debug!(
                            request = %request.id(),
                            requester = %requester,
                            threshold,
                            "Wait timed out, request cancelled"
                        );
                        state.reevaluate();
                        return Err(LedgerError::WaitTimedOut {
                            requester: requester.to_owned(),
                            threshold,
                        });
                    }
                }
            }
        }
    }
}
