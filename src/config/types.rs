// sugar-env: environment variable access with composable plugs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for sugar-env.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, EnvironmentConfig, vars
//! vars: name -> VarSpec { names: [..], plugs: ["required", "default_to:x", ..] }
//! ```
//!
//! # Plug Specs
//!
//! ```text
//! required | boolean | integer | float | url | base64 | default_to:<value>
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::environment::DEFAULT_VARIABLE;
use crate::logging::LogLevel;
use crate::pipeline::{Pipeline, Plug, plugs};

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Log level for stderr output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::WARN,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Runtime environment detection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Variable holding the environment name.
    pub variable: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            variable: DEFAULT_VARIABLE.to_string(),
        }
    }
}

/// A declared variable: candidate names plus a plug chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VarSpec {
    /// Candidate variable names, highest priority first.
    pub names: Vec<String>,
    /// Plug specs applied in order.
    pub plugs: Vec<String>,
}

impl VarSpec {
    /// Parses every plug spec into a [`Pipeline`].
    ///
    /// Returns the first spec that is not a known plug.
    pub(super) fn to_pipeline(&self) -> std::result::Result<Pipeline, String> {
        self.plugs
            .iter()
            .try_fold(Pipeline::new(self.names.as_slice()), |pipeline, spec| {
                PlugSpec::parse(spec)
                    .map(|plug| pipeline.boxed_plug(plug.into_plug()))
                    .ok_or_else(|| spec.clone())
            })
    }
}

/// Parsed form of a plug spec string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlugSpec {
    Required,
    DefaultTo(String),
    Boolean,
    Integer,
    Float,
    Url,
    Base64,
}

impl PlugSpec {
    /// Parses `spec`; names are case-insensitive, the default value is not.
    #[must_use]
    pub fn parse(spec: &str) -> Option<Self> {
        let (name, arg) = match spec.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (spec, None),
        };
        let parsed = match (name.trim().to_lowercase().as_str(), arg) {
            ("required", None) => Self::Required,
            ("default_to" | "default", Some(value)) => Self::DefaultTo(value.to_string()),
            ("boolean" | "bool", None) => Self::Boolean,
            ("integer" | "int", None) => Self::Integer,
            ("float", None) => Self::Float,
            ("url", None) => Self::Url,
            ("base64", None) => Self::Base64,
            _ => return None,
        };
        Some(parsed)
    }

    #[must_use]
    pub fn into_plug(self) -> Box<dyn Plug> {
        match self {
            Self::Required => Box::new(plugs::required()),
            Self::DefaultTo(value) => Box::new(plugs::default_to(value)),
            Self::Boolean => Box::new(plugs::boolean()),
            Self::Integer => Box::new(plugs::integer()),
            Self::Float => Box::new(plugs::float()),
            Self::Url => Box::new(plugs::url()),
            Self::Base64 => Box::new(plugs::base64()),
        }
    }
}

impl std::fmt::Display for PlugSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => write!(f, "required"),
            Self::DefaultTo(value) => write!(f, "default_to:{value}"),
            Self::Boolean => write!(f, "boolean"),
            Self::Integer => write!(f, "integer"),
            Self::Float => write!(f, "float"),
            Self::Url => write!(f, "url"),
            Self::Base64 => write!(f, "base64"),
        }
    }
}
