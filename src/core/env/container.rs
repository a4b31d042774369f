// sugar-env: environment variable access with composable plugs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory variable set with copy-on-write semantics.
//!
//! # Architecture
//!
//! ```text
//! Env (copy-on-write)
//! data: Arc<EnvData>
//! clone shares Arc until set()/remove() calls Arc::make_mut
//! ```

use super::ReadEnv;
use super::types::{EnvData, EnvKey};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A set of environment variables.
///
/// Used both as a snapshot of the process environment ([`super::current_env`])
/// and as a fixture store in tests, so resolution never depends on mutating
/// real process state.
///
/// # Thread Safety
/// `Env` is `Send` and `Sync` due to its use of `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Env {
    data: Arc<EnvData>,
}

impl Env {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment from a map of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        let data = EnvData::from_vars(vars.into_iter().map(|(k, v)| (EnvKey::new(k), v)).collect());
        Self {
            data: Arc::new(data),
        }
    }

    /// Builder-style variant of [`Env::set`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets an environment variable, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        Arc::make_mut(&mut self.data)
            .vars_mut()
            .insert(EnvKey::new(key), value.into());
        self
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data
            .vars()
            .get(&EnvKey::new(key))
            .map(String::as_str)
    }

    /// Returns true if the variable is set, regardless of its value.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.data.vars().contains_key(&EnvKey::new(key))
    }

    /// Removes an environment variable.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        if self.contains(key) {
            Arc::make_mut(&mut self.data)
                .vars_mut()
                .remove(&EnvKey::new(key));
        }
        self
    }

    /// Returns all environment variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }

    /// Returns an iterator over environment variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data
            .vars()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.vars().is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.vars().len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Env {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = Self::new();
        for (k, v) in iter {
            env.set(k, v);
        }
        env
    }
}

impl ReadEnv for Env {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_owned)
    }
}
