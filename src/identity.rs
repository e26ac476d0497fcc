//! Identity display-name cache.
//!
//! The policy table needs reviewer display names, and resolving them one
//! by one would cost a REST round trip per row. The cache is primed for a
//! whole batch with a single read through the SDK and consulted
//! synchronously afterwards; a miss renders as a blank cell, never an
//! error.

use crate::client::IdentityReader;
use crate::error::ServiceError;
use std::collections::{HashMap, HashSet};
use tracing::debug;

#[derive(Debug, Default)]
pub struct IdentityCache {
    names: HashMap<String, String>,
}

impl IdentityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prime the cache for a batch of identity ids with one read through
    /// the SDK. Ids already cached are not fetched again; duplicates in
    /// the batch are collapsed.
    pub fn ensure_display_names(
        &mut self,
        reader: &dyn IdentityReader,
        instance: &str,
        ids: &[String],
    ) -> Result<(), ServiceError> {
        let mut seen = HashSet::new();
        let missing: Vec<String> = ids
            .iter()
            .filter(|id| !self.names.contains_key(*id) && seen.insert(*id))
            .cloned()
            .collect();
        if missing.is_empty() {
            return Ok(());
        }
        let identities = reader.read_identities(instance, &missing)?;
        debug!(
            requested = missing.len(),
            resolved = identities.len(),
            "primed identity display-name cache"
        );
        for identity in identities {
            if let Some(name) = identity.display_name() {
                let name = name.to_string();
                self.names.insert(identity.id, name);
            }
        }
        Ok(())
    }

    /// Cached display name for an identity id, if a priming call
    /// resolved it.
    pub fn display_name(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }
}
