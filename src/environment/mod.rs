// sugar-env: environment variable access with composable plugs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Runtime environment detection.
//!
//! ```text
//! raw NODE_ENV --trim--> lowercase --match--> Environment
//!   "dev" "test" "ci" "review" "staging" "prod"
//!   anything else (or unset) ----------------> Dev
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::env::ReadEnv;
use crate::error::{ConfigError, EnvError, EnvResult};

/// Variable consulted by [`current`] unless configured otherwise.
pub const DEFAULT_VARIABLE: &str = "NODE_ENV";

/// The closed set of recognized environments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Dev,
    Test,
    Ci,
    Review,
    Staging,
    Prod,
}

impl Environment {
    pub const ALL: [Self; 6] = [
        Self::Dev,
        Self::Test,
        Self::Ci,
        Self::Review,
        Self::Staging,
        Self::Prod,
    ];

    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Test => "test",
            Self::Ci => "ci",
            Self::Review => "review",
            Self::Staging => "staging",
            Self::Prod => "prod",
        }
    }

    fn from_canonical(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|env| env.as_str() == s)
    }
}

impl AsRef<str> for Environment {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse: only canonical names (case-insensitive, trimmed) succeed.
///
/// Use [`normalize`] for the lenient, total mapping.
impl std::str::FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_canonical(&s.trim().to_lowercase()).ok_or_else(|| ConfigError::InvalidValue {
            section: "environment".to_string(),
            key: "name".to_string(),
            message: format!(
                "expected one of dev, test, ci, review, staging, prod; got '{s}'"
            ),
        })
    }
}

/// Maps raw text onto an [`Environment`], defaulting to [`Environment::Dev`].
#[must_use]
pub fn normalize(raw: Option<&str>) -> Environment {
    raw.map(|s| s.trim().to_lowercase())
        .and_then(|s| Environment::from_canonical(&s))
        .unwrap_or_default()
}

/// Reads `variable` and normalizes it.
pub fn current<R: ReadEnv + ?Sized>(reader: &R, variable: &str) -> Environment {
    let raw = reader.lookup(variable);
    let env = normalize(raw.as_deref());
    debug!(variable, raw = raw.as_deref(), %env, "detected environment");
    env
}

/// Checks whether the current environment equals `name` after normalizing both.
pub fn is<R: ReadEnv + ?Sized>(reader: &R, variable: &str, name: impl AsRef<str>) -> bool {
    normalize(Some(name.as_ref())) == current(reader, variable)
}

/// Fails with [`EnvError::Assertion`] unless the current environment is `name`.
///
/// # Errors
///
/// Returns [`EnvError::Assertion`] carrying the expected and actual names.
pub fn must_be<R: ReadEnv + ?Sized>(
    reader: &R,
    variable: &str,
    name: impl AsRef<str>,
) -> EnvResult<()> {
    let expected = name.as_ref();
    let actual = current(reader, variable);
    if normalize(Some(expected)) == actual {
        return Ok(());
    }
    warn!(expected, %actual, "environment assertion failed");
    Err(EnvError::Assertion {
        expected: expected.trim().to_string(),
        actual: actual.to_string(),
    })
}
