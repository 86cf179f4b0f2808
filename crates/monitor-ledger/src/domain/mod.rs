//! # Domain Layer - Monitor-Ledger Subsystem
//!
//! Pure business logic for the concurrent account ledger.
//!
//! ## Components
//!
//! - `entities`: id aliases, `Balance`, `LedgerConfig`
//! - `registry`: `IdentityRegistry` mapping public ids to private ids
//! - `requests`: `Request` wait records, `WaitKind`, `RequestQueue`
//! - `ledger`: `MonitorLedger` with the wake-reevaluation routine
//! - `errors`: `LedgerError` enumeration

pub mod entities;
pub mod errors;
pub mod ledger;
pub mod registry;
pub mod requests;

pub use entities::*;
pub use errors::*;
pub use ledger::*;
pub use registry::*;
pub use requests::*;
