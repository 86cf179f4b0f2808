//! # Identity Registry
//!
//! Maps public identities to private identities. The mapping is injective:
//! a public id registers at most once, and a private id is only ever paired
//! with the public id it was created with (enforced at account-open time by
//! rejecting reuse of either id). Entries are immutable after registration.

use super::entities::{PrivateId, PublicId};
use super::errors::LedgerError;
use std::collections::HashMap;

/// Public-to-private identity mapping.
#[derive(Debug, Default)]
pub struct IdentityRegistry {
    identities: HashMap<PublicId, PrivateId>,
}

impl IdentityRegistry {
    /// Creates an empty registry with the given capacity hint.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            identities: HashMap::with_capacity(capacity),
        }
    }

    /// Registers a public identity for a private identity.
    ///
    /// # Errors
    /// - `IdentityTaken` if the public id is already registered
    pub fn register(
        &mut self,
        public_id: PublicId,
        private_id: PrivateId,
    ) -> Result<(), LedgerError> {
        if self.identities.contains_key(&public_id) {
            return Err(LedgerError::IdentityTaken { public_id });
        }
        self.identities.insert(public_id, private_id);
        Ok(())
    }

    /// Resolves a public identity to its private identity.
    pub fn resolve(&self, public_id: &str) -> Option<&PrivateId> {
        self.identities.get(public_id)
    }

    /// Checks whether a public identity is registered.
    pub fn contains(&self, public_id: &str) -> bool {
        self.identities.contains_key(public_id)
    }

    /// Returns the number of registered identities.
    pub fn len(&self) -> usize {
        self.identities.len()
    }

    /// Returns true if no identity is registered.
    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }
}
