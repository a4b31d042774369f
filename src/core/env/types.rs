// sugar-env: environment variable access with composable plugs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Key and storage types backing [`super::Env`].
//!
//! ```text
//! EnvKey: case-insensitive on Windows (PATH == Path), exact elsewhere
//! EnvData: BTreeMap<EnvKey, String> for deterministic order
//! ```

use std::collections::BTreeMap;

/// An environment variable name compared the way the host OS does.
#[derive(Debug, Clone, Eq)]
pub(super) struct EnvKey(String);

impl EnvKey {
    pub(super) fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub(super) fn as_str(&self) -> &str {
        &self.0
    }

    fn folded(&self) -> std::borrow::Cow<'_, str> {
        if cfg!(windows) {
            std::borrow::Cow::Owned(self.0.to_ascii_lowercase())
        } else {
            std::borrow::Cow::Borrowed(&self.0)
        }
    }
}

impl PartialEq for EnvKey {
    fn eq(&self, other: &Self) -> bool {
        self.folded() == other.folded()
    }
}

impl std::hash::Hash for EnvKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.folded().hash(state);
    }
}

impl PartialOrd for EnvKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EnvKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.folded().cmp(&other.folded())
    }
}

/// Shared environment data for copy-on-write semantics.
#[derive(Debug, Clone, Default)]
pub(super) struct EnvData {
    vars: BTreeMap<EnvKey, String>,
}

impl EnvData {
    pub(super) const fn from_vars(vars: BTreeMap<EnvKey, String>) -> Self {
        Self { vars }
    }

    pub(super) const fn vars(&self) -> &BTreeMap<EnvKey, String> {
        &self.vars
    }

    pub(super) const fn vars_mut(&mut self) -> &mut BTreeMap<EnvKey, String> {
        &mut self.vars
    }
}
