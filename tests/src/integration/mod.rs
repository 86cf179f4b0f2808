//! Integration tests: concurrent choreography against the public ledger
//! surface, one scenario family per module.

pub mod accounts;
pub mod alerts;
