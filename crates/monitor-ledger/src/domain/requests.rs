//! # Pending Wait Requests
//!
//! A `Request` is the wait record of a suspended caller: who is waiting,
//! the balance threshold that gates the wait, and a dedicated condition
//! variable created fresh for every blocking attempt. Requests live in one
//! of two insertion-ordered queues (transfer waits, alert waits) and are
//! removed exactly once: either by the wake-reevaluation routine or by a
//! timed-out caller cancelling its own wait.
//!
//! ## Invariants Enforced
//!
//! - A request belongs to at most one queue at a time
//! - A request is granted at most once, and never reinserted afterwards
//! - Queue order is insertion order; the wake scan never reorders entries

use super::entities::{Balance, PrivateId};
use parking_lot::Condvar;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use uuid::Uuid;

/// Which gate a suspended caller is parked on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaitKind {
    /// Transfer ordering or funds gate: eligible when balance >= threshold.
    Transfer,
    /// Alert ceiling gate: eligible when balance > threshold (strict).
    Alert,
}

/// Wait record of one suspended caller.
///
/// The condition variable is owned by the request and only ever used with
/// the single ledger state mutex, giving per-request signaling on top of
/// one monitor lock.
#[derive(Debug)]
pub struct Request {
    id: Uuid,
    requester: PrivateId,
    threshold: Balance,
    kind: WaitKind,
    condvar: Condvar,
    // Written only while the ledger state lock is held; the atomic is for
    // shared access through Arc, not for lock-free coordination.
    granted: AtomicBool,
}

impl Request {
    /// Creates a fresh wait record with its own condition variable.
    pub fn new(requester: PrivateId, threshold: Balance, kind: WaitKind) -> Arc<Self> {
        Arc::new(Self {
            id: Uuid::new_v4(),
            requester,
            threshold,
            kind,
            condvar: Condvar::new(),
            granted: AtomicBool::new(false),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn requester(&self) -> &PrivateId {
        &self.requester
    }

    pub fn threshold(&self) -> Balance {
        self.threshold
    }

    pub fn kind(&self) -> WaitKind {
        self.kind
    }

    /// The per-request condition variable callers park on.
    pub fn condvar(&self) -> &Condvar {
        &self.condvar
    }

    /// Marks the request granted and wakes its parked caller.
    ///
    /// Must be called with the ledger state lock held, after the request
    /// has been removed from its queue.
    pub fn grant(&self) {
        self.granted.store(true, Ordering::Relaxed);
        self.condvar.notify_one();
    }

    /// True once the wake-reevaluation routine has signaled this request.
    /// Absorbs spurious condvar wakeups.
    pub fn is_granted(&self) -> bool {
        self.granted.load(Ordering::Relaxed)
    }
}

/// Insertion-ordered collection of live requests.
#[derive(Debug, Default)]
pub struct RequestQueue {
    entries: Vec<Arc<Request>>,
}

impl RequestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a request at the tail.
    pub fn push(&mut self, request: Arc<Request>) {
        self.entries.push(request);
    }

    /// Removes and returns the request at `index`, preserving the order of
    /// the remaining entries.
    pub fn remove(&mut self, index: usize) -> Arc<Request> {
        self.entries.remove(index)
    }

    /// Removes a request by id. Returns `None` if it was already removed
    /// (a wake raced the cancellation).
    pub fn remove_by_id(&mut self, id: Uuid) -> Option<Arc<Request>> {
        let index = self.entries.iter().position(|r| r.id() == id)?;
        Some(self.entries.remove(index))
    }

    /// Returns the request at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Arc<Request>> {
        self.entries.get(index)
    }

    /// True if any queued request belongs to `requester`.
    pub fn contains_requester(&self, requester: &str) -> bool {
        self.iter().any(|r| r.requester() == requester)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Request>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
