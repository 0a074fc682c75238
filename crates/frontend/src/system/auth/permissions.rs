//! Permission store: the resolved authorization data of the current session.
//!
//! The store is all-or-nothing. It is either still loading, or fully resolved
//! (possibly to a safe signed-out state after a failed fetch). Every query
//! fails closed.

use std::collections::{BTreeSet, HashMap};

use contracts::system::auth::PermissionRecord;

/// Snapshot of the session's authorization data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermissionStore {
    permissions: HashMap<String, BTreeSet<String>>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

impl Default for PermissionStore {
    fn default() -> Self {
        Self::loading()
    }
}

impl PermissionStore {
    /// Session load in flight. Nothing is granted yet.
    pub fn loading() -> Self {
        Self {
            permissions: HashMap::new(),
            is_authenticated: false,
            is_loading: true,
        }
    }

    /// No session (never logged in, or logged out).
    pub fn signed_out() -> Self {
        Self {
            permissions: HashMap::new(),
            is_authenticated: false,
            is_loading: false,
        }
    }

    /// Terminal state for a failed session fetch.
    pub fn failed() -> Self {
        Self::signed_out()
    }

    /// Authenticated session with the given grants.
    ///
    /// Duplicate records for the same key are merged.
    pub fn resolved<I>(records: I) -> Self
    where
        I: IntoIterator<Item = PermissionRecord>,
    {
        let mut permissions: HashMap<String, BTreeSet<String>> = HashMap::new();
        for record in records {
            permissions
                .entry(record.key)
                .or_default()
                .extend(record.actions);
        }
        Self {
            permissions,
            is_authenticated: true,
            is_loading: false,
        }
    }

    /// Whether `action` is granted on `key`.
    ///
    /// A missing or empty key declares no restriction and is always granted.
    /// While loading, or without a session, nothing else is.
    pub fn has_permission(&self, key: Option<&str>, action: &str) -> bool {
        let key = match key {
            Some(key) if !key.is_empty() => key,
            _ => return true,
        };
        if self.is_loading || !self.is_authenticated {
            return false;
        }
        self.permissions
            .get(key)
            .map(|actions| actions.contains(action))
            .unwrap_or(false)
    }

    /// Actions granted on `key`, empty for unknown keys.
    pub fn actions(&self, key: &str) -> impl Iterator<Item = &str> {
        self.permissions
            .get(key)
            .into_iter()
            .flat_map(|actions| actions.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }
}
