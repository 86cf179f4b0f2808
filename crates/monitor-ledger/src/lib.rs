//! # Monitor-Ledger Subsystem
//!
//! **Status:** Production-Ready
//!
//! ## Purpose
//!
//! A concurrent in-memory account ledger. All mutating operations are
//! serialized through a single monitor (one mutex over the whole ledger
//! state), and callers can block until a precondition over shared balances
//! becomes true: sufficient funds for a debit, no conflicting in-flight
//! request for the same account, or a balance rising above a threshold.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Balances never go negative | `domain/ledger.rs` - funds gate blocks until covered |
//! | Total balance conserved by transfers | `domain/ledger.rs` - debit and credit under one lock hold |
//! | Identity mapping is injective | `domain/registry.rs` - `register()` rejects reuse |
//! | A signaled request is never reinserted | `domain/requests.rs` - removal precedes signal |
//! | At most one wake per reevaluation pass | `domain/ledger.rs` - `reevaluate()` stops after first signal |
//!
//! ## Blocking Model
//!
//! Classic monitor pattern: one `parking_lot::Mutex` guards accounts, the
//! identity registry, and both pending-request queues. A blocked caller
//! parks on a condition variable owned by its own `Request`; waking releases
//! and reacquires the state lock atomically. The wake-reevaluation routine
//! runs after every balance mutation and signals at most one eligible
//! waiter, so wake cascades propagate through successive monitor entries
//! instead of a single unbounded sweep.
//!
//! ```text
//! [caller] ──validate──→ [enqueue Request] ──wait──→ [parked]
//!                                                       │
//!     balance mutation ──reevaluate──→ signal ──────────┘
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  ports/inbound.rs  - LedgerApi trait (driving port)            │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implemented by ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  domain/entities.rs  - id aliases, Balance, LedgerConfig       │
//! │  domain/registry.rs  - IdentityRegistry (public → private)     │
//! │  domain/requests.rs  - Request, WaitKind, RequestQueue         │
//! │  domain/ledger.rs    - MonitorLedger with wake reevaluation    │
//! │  domain/errors.rs    - LedgerError enum                        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod domain;
pub mod ports;

pub use domain::*;
pub use ports::*;
