//! In-memory pincode directory for testing and development

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::traits::*;
use crate::types::*;

/// Pincode directory backed by a map of pincode prefixes to state names.
///
/// Lookups try the full pincode first, then ever shorter prefixes, so a single
/// entry such as `"40"` can cover a whole postal region.
#[derive(Debug, Clone, Default)]
pub struct MemoryPincodeDirectory {
    prefixes: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryPincodeDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a pincode or pincode prefix to a state
    pub fn insert(&self, prefix: impl Into<String>, state: impl Into<String>) -> GstResult<()> {
        self.prefixes
            .write()
            .map_err(|e| GstError::Directory(e.to_string()))?
            .insert(prefix.into(), state.into());
        Ok(())
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with_entry(self, prefix: impl Into<String>, state: impl Into<String>) -> GstResult<Self> {
        self.insert(prefix, state)?;
        Ok(self)
    }

    /// Remove all entries
    pub fn clear(&self) -> GstResult<()> {
        self.prefixes
            .write()
            .map_err(|e| GstError::Directory(e.to_string()))?
            .clear();
        Ok(())
    }
}

#[async_trait]
impl PincodeDirectory for MemoryPincodeDirectory {
    async fn state_for_pincode(&self, pincode: &str) -> GstResult<Option<String>> {
        let prefixes = self
            .prefixes
            .read()
            .map_err(|e| GstError::Directory(e.to_string()))?;

        let pincode = pincode.trim();
        let found = (1..=pincode.len())
            .rev()
            .filter_map(|len| pincode.get(..len))
            .find_map(|prefix| prefixes.get(prefix))
            .cloned();

        Ok(found)
    }
}
