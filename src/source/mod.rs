// sugar-env: environment variable access with composable plugs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Candidate variable resolution.
//!
//! ```text
//! names ["PROD_DB_URL", "DB_URL"]
//!    |  lookup each, blank -> absent
//!    v
//! sources [env PROD_DB_URL=None, env DB_URL=Some(..)]
//!    |  first present wins, else first
//!    v
//! selected  env DB_URL
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::env::ReadEnv;

/// Where a candidate value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Looked up from the variable store.
    Env,
    /// Injected by a plug (e.g. a default value).
    Literal,
}

impl SourceKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Env => "env",
            Self::Literal => "literal",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named origin contributing a candidate value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub kind: SourceKind,
    pub name: String,
    /// Raw (untrimmed) value, `None` when absent or blank.
    pub value: Option<String>,
}

impl Source {
    pub fn env(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            kind: SourceKind::Env,
            name: name.into(),
            value,
        }
    }

    pub fn literal(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: SourceKind::Literal,
            name: name.into(),
            value: Some(value.into()),
        }
    }

    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.value.is_some()
    }
}

/// Ordered list of candidate variable names; earlier names win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Names(Vec<String>);

impl Names {
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Names {
    fn from(name: &str) -> Self {
        Self(vec![name.to_owned()])
    }
}

impl From<String> for Names {
    fn from(name: String) -> Self {
        Self(vec![name])
    }
}

impl From<&String> for Names {
    fn from(name: &String) -> Self {
        Self(vec![name.clone()])
    }
}

impl From<Vec<String>> for Names {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

impl From<Vec<&str>> for Names {
    fn from(names: Vec<&str>) -> Self {
        names.as_slice().into()
    }
}

impl From<&[&str]> for Names {
    fn from(names: &[&str]) -> Self {
        Self(names.iter().map(|&n| n.to_owned()).collect())
    }
}

impl From<&[String]> for Names {
    fn from(names: &[String]) -> Self {
        Self(names.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for Names {
    fn from(names: [&str; N]) -> Self {
        names.as_slice().into()
    }
}

/// Outcome of resolving a list of candidate names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub sources: Vec<Source>,
    /// First present source, else the first source; `None` only for an
    /// empty name list.
    pub selected: Option<Source>,
}

impl Resolution {
    /// Value of the selected source.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.selected.as_ref().and_then(|s| s.value.as_deref())
    }
}

/// Reads `name`, treating unset and whitespace-only values alike as absent.
pub fn read_present<R: ReadEnv + ?Sized>(reader: &R, name: &str) -> Option<String> {
    reader.lookup(name).filter(|v| !v.trim().is_empty())
}

/// Looks up every candidate name in order and selects the winner.
pub fn resolve<R: ReadEnv + ?Sized>(reader: &R, names: impl Into<Names>) -> Resolution {
    let names = names.into();
    let sources: Vec<Source> = names
        .as_slice()
        .iter()
        .map(|name| Source::env(name.as_str(), read_present(reader, name)))
        .collect();

    let selected = sources
        .iter()
        .find(|s| s.is_present())
        .or_else(|| sources.first())
        .cloned();

    debug!(
        candidates = ?names.as_slice(),
        selected = selected.as_ref().map(|s| s.name.as_str()),
        present = selected.as_ref().is_some_and(Source::is_present),
        "resolved sources"
    );

    Resolution { sources, selected }
}

#[cfg(test)]
mod tests;
