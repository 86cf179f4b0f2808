//! # Monitor-Ledger Test Suite
//!
//! Unified test crate for the ledger subsystem.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── accounts.rs       # Account opening under contention
//!     ├── transfers.rs      # Blocking transfers and wake cascades
//!     ├── alerts.rs         # Balance-ceiling alerts
//!     ├── ordering.rs       # Per-account submission order
//!     ├── cancellation.rs   # Timed waits and wake/timeout races
//!     └── invariants.rs     # Randomized conservation checks
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p ml-tests
//!
//! # With ledger logs
//! RUST_LOG=monitor_ledger=trace cargo test -p ml-tests -- --nocapture
//! ```

#![allow(dead_code)]

pub mod integration;

/// Installs a subscriber reading `RUST_LOG`, once per process. Safe to call
/// from every test; later calls are no-ops.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
