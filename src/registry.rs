//! Policy registry
//!
//! Maps policy names to their rule set and error-string table. The registry
//! is an explicit handle owned by the embedding application; clones share
//! the same storage.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

use crate::messages::ErrorStrings;
use crate::rules::RuleSet;

pub const DEFAULT_POLICY_NAME: &str = "default";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("No policy registered under name: {0}")]
    NotFound(String),
    #[error("No policy name given and {0} policies are registered")]
    Ambiguous(usize),
    #[error("No policy name given and no policies are registered")]
    Empty,
}

#[derive(Debug, Default)]
struct Entries {
    policies: HashMap<String, RuleSet>,
    error_strings: HashMap<String, ErrorStrings>,
}

/// Shared, cloneable registry of named policies.
#[derive(Debug, Clone, Default)]
pub struct PolicyRegistry {
    inner: Arc<RwLock<Entries>>,
}

impl PolicyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Entries> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Entries> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores `rules` under `name` and `error_strings` merged over the
    /// built-in table. Any previous entry for `name` is replaced.
    pub fn register_policy(&self, rules: RuleSet, error_strings: &ErrorStrings, name: &str) {
        let merged = error_strings.merged_over_defaults();
        let mut entries = self.write();
        entries.policies.insert(name.to_string(), rules);
        entries.error_strings.insert(name.to_string(), merged);

        #[cfg(feature = "tracing")]
        tracing::debug!("Policy registered: {} ({} policies total)", name, entries.policies.len());
    }

    /// Replaces the error-string table of `name` with `strings`, without
    /// merging in the defaults.
    pub fn set_error_strings(&self, strings: &ErrorStrings, name: &str) {
        self.write()
            .error_strings
            .insert(name.to_string(), strings.clone());
    }

    /// Snapshot of every registered rule set.
    pub fn policies(&self) -> HashMap<String, RuleSet> {
        self.read().policies.clone()
    }

    /// Returns the rule set registered under `name`.
    ///
    /// An empty `name` resolves to the sole registered policy when exactly
    /// one exists, whatever its name.
    pub fn policy(&self, name: &str) -> Option<RuleSet> {
        let entries = self.read();
        if name.is_empty() && entries.policies.len() == 1 {
            return entries.policies.values().next().cloned();
        }
        entries.policies.get(name).cloned()
    }

    /// Strict form of [`policy`](Self::policy) that explains a failed lookup.
    pub fn try_policy(&self, name: &str) -> Result<RuleSet, RegistryError> {
        if let Some(rules) = self.policy(name) {
            return Ok(rules);
        }
        if name.is_empty() {
            return match self.len() {
                0 => Err(RegistryError::Empty),
                count => Err(RegistryError::Ambiguous(count)),
            };
        }
        Err(RegistryError::NotFound(name.to_string()))
    }

    pub fn error_strings(&self, name: &str) -> Option<ErrorStrings> {
        self.read().error_strings.get(name).cloned()
    }

    /// Rule set and error-string table of `name`, looked up together.
    ///
    /// No empty-name convenience here: validation resolves names exactly.
    pub(crate) fn entry(&self, name: &str) -> Option<(RuleSet, ErrorStrings)> {
        let entries = self.read();
        let rules = entries.policies.get(name)?.clone();
        let strings = entries
            .error_strings
            .get(name)
            .cloned()
            .unwrap_or_else(ErrorStrings::defaults);
        Some((rules, strings))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.read().policies.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.read().policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().policies.is_empty()
    }
}
