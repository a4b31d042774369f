// sugar-env: environment variable access with composable plugs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!   library            EnvError     Assertion, MissingRequired,
//!   (EnvResult<T>)                  ExpectedNumericString,
//!                                   ExpectedValidUrl, ExpectedBase64String
//!   config             ConfigError  InvalidValue, UnknownPlug
//!        |
//!        v
//!   cli / loader       anyhow::Result<T>
//! ```
//!
//! Plugs return [`EnvError`] as a plain value; only the pipeline driver
//! stops evaluation on it.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type produced by the plug pipeline.
pub type EnvResult<T> = std::result::Result<T, EnvError>;

// --- Environment Errors ---

/// Failures raised while reading and coercing environment values.
///
/// Every variant carries the provenance of the offending value so the
/// message alone is enough to find the misconfigured variable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    /// The current environment does not match the asserted one.
    #[error("Expected current environment to be \"{expected}\" but got \"{actual}\"")]
    Assertion { expected: String, actual: String },

    /// None of the candidate variables carried a non-blank value.
    #[error(
        "Missing required environment variable \"{name}\". You should make sure one of the \
         following environment variables is present and that it has a non-empty value: {}",
        quote_all(.candidates)
    )]
    MissingRequired {
        name: String,
        candidates: Vec<String>,
    },

    /// The value has no numeric prefix.
    #[error(
        "Expected {kind} value \"{name}\" to be a valid numeric string but got `\"{value}\"`"
    )]
    ExpectedNumericString {
        kind: String,
        name: String,
        value: String,
    },

    /// The value is not an absolute URL.
    #[error("Expected {kind} value \"{name}\" to be a valid URL but got `\"{value}\"`")]
    ExpectedValidUrl {
        kind: String,
        name: String,
        value: String,
    },

    /// The value is not decodable base64.
    #[error("Expected {kind} value \"{name}\" to be a valid base64 string but got `\"{value}\"`")]
    ExpectedBase64String {
        kind: String,
        name: String,
        value: String,
    },
}

impl EnvError {
    /// Stable, machine-readable name of the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Assertion { .. } => "Assertion",
            Self::MissingRequired { .. } => "MissingRequired",
            Self::ExpectedNumericString { .. } => "ExpectedNumericString",
            Self::ExpectedValidUrl { .. } => "ExpectedValidUrl",
            Self::ExpectedBase64String { .. } => "ExpectedBase64String",
        }
    }

    /// Variable name the error refers to, if any.
    #[must_use]
    pub fn variable(&self) -> Option<&str> {
        match self {
            Self::Assertion { .. } => None,
            Self::MissingRequired { name, .. }
            | Self::ExpectedNumericString { name, .. }
            | Self::ExpectedValidUrl { name, .. }
            | Self::ExpectedBase64String { name, .. } => Some(name),
        }
    }
}

fn quote_all(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("\"{n}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// A variable declares a plug that does not exist.
    #[error("unknown plug '{plug}' for variable '{var}'")]
    UnknownPlug { var: String, plug: String },
}

#[cfg(test)]
mod tests;
