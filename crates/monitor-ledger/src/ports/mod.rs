//! Ports layer for the Monitor-Ledger subsystem.
//!
//! Only the inbound (driving) port exists: the ledger has no outbound
//! dependencies - no persistence, networking, or external clock.

pub mod inbound;

pub use inbound::*;
