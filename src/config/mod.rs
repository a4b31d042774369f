// sugar-env: environment variable access with composable plugs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for sugar-env.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. sugar-env.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. SUGAR_ENV_<SECTION>__<KEY> env vars
//! 5. --set KEY=VALUE
//! ```
//!
//! # Declared Variables
//!
//! ```toml
//! [environment]
//! variable = "NODE_ENV"
//!
//! [vars.port]
//! names = ["PORT"]
//! plugs = ["default_to:3000", "integer"]
//!
//! [vars.database_url]
//! names = ["TEST_DB_URL", "DEV_DB_URL", "DB_URL"]
//! plugs = ["required", "url"]
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::pipeline::Pipeline;

use loader::ConfigLoader;
use types::{EnvironmentConfig, GlobalConfig, VarSpec};

/// File looked up in the working directory by default.
pub const DEFAULT_CONFIG_FILE: &str = "sugar-env.toml";

/// Prefix of variables that override configuration keys.
pub const ENV_PREFIX: &str = "SUGAR_ENV";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Environment detection.
    pub environment: EnvironmentConfig,
    /// Declared variables, evaluated by `check`.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub vars: BTreeMap<String, VarSpec>,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sugar_env::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file("config/default.toml")
    ///     .add_toml_file_optional("sugar-env.toml")
    ///     .with_env_prefix("SUGAR_ENV")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Checks settings that deserialization alone cannot.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an empty environment variable name or
    /// an unknown plug spec.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.environment.variable.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "environment".to_string(),
                key: "variable".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        self.pipelines().map(|_| ())
    }

    /// Builds one pipeline per declared variable, in name order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownPlug`] for the first unknown plug spec.
    pub fn pipelines(&self) -> std::result::Result<Vec<(&str, Pipeline)>, ConfigError> {
        self.vars
            .iter()
            .map(|(var, spec)| {
                spec.to_pipeline()
                    .map(|pipeline| (var.as_str(), pipeline))
                    .map_err(|plug| ConfigError::UnknownPlug {
                        var: var.clone(),
                        plug,
                    })
            })
            .collect()
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert(
            "global.output_log_level".to_string(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".to_string(),
            self.global.file_log_level.as_u8().to_string(),
        );
        if let Some(log_file) = &self.global.log_file {
            options.insert("global.log_file".to_string(), log_file.display().to_string());
        }
        options.insert(
            "environment.variable".to_string(),
            self.environment.variable.clone(),
        );
        for (var, spec) in &self.vars {
            options.insert(format!("vars.{var}.names"), spec.names.join(", "));
            options.insert(format!("vars.{var}.plugs"), spec.plugs.join(", "));
        }

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
