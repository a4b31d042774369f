// sugar-env: environment variable access with composable plugs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file_optional("sugar-env.toml")
//!   .add_toml_file(--config)
//!   .with_env_prefix("SUGAR_ENV")     SUGAR_ENV_<SECTION>__<KEY>
//!   .set_assignment(--set)
//!        |
//!        v
//!    build() --> Config (validated)
//! ```

use std::path::{Path, PathBuf};

use config::{File, FileFormat};

use super::Config;
use crate::error::Result;

/// Sections whose scalar keys may be overridden from the environment.
const ENV_SECTIONS: [&str; 2] = ["global", "environment"];

/// Separator between section and key in prefixed variables.
const ENV_KEY_SEPARATOR: &str = "__";

/// Where a layer came from, for `configs` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    File,
    Optional,
    Inline,
}

impl Origin {
    const fn label(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Optional => "optional",
            Self::Inline => "string",
        }
    }
}

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env: Option<(String, config::Map<String, String>)>,
    layers: Vec<(Origin, PathBuf)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env: None,
            layers: Vec::new(),
        }
    }

    /// Adds a TOML file that must exist when `build()` runs.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        let path = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(true));
        self.layers.push((Origin::File, path.to_path_buf()));
        self
    }

    /// Adds a TOML file that is skipped when missing.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        let path = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(false));
        if path.exists() {
            self.layers.push((Origin::Optional, path.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.layers.push((Origin::Inline, PathBuf::from("<string>")));
        self
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` from the process environment,
    /// e.g. `SUGAR_ENV_GLOBAL__OUTPUT_LOG_LEVEL=4`.
    #[must_use]
    pub fn with_env_prefix(self, prefix: &str) -> Self {
        self.with_env_vars(prefix, std::env::vars())
    }

    /// Like [`Self::with_env_prefix`], reading from `vars` instead.
    ///
    /// Only `global` and `environment` keys are taken; anything else under
    /// the prefix (a bare section name, `vars`, deeper paths) is ignored so
    /// it cannot replace a table with a scalar.
    #[must_use]
    pub fn with_env_vars<I, K, V>(mut self, prefix: &str, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let scoped = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(key, _)| is_scalar_override(prefix, key))
            .collect();
        self.env = Some((prefix.to_string(), scoped));
        self
    }

    /// Sets a configuration override.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or if the value cannot be converted
    /// to a configuration value.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        Ok(self)
    }

    /// Applies a `key=value` override as given on the command line.
    ///
    /// # Errors
    ///
    /// Returns an error if `assignment` has no `=` or the key is empty.
    pub fn set_assignment(self, assignment: &str) -> Result<Self> {
        let (key, value) = assignment
            .split_once('=')
            .filter(|(key, _)| !key.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("invalid override '{assignment}', expected KEY=VALUE"))?;
        self.set(key.trim(), value.to_string())
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required configuration files are missing.
    /// - Configuration files have invalid TOML syntax.
    /// - The merged configuration cannot be deserialized into the `Config` struct.
    /// - A declared variable uses an unknown plug.
    pub fn build(self) -> Result<Config> {
        let builder = match self.env {
            Some((prefix, vars)) => self.builder.add_source(
                config::Environment::with_prefix(&prefix)
                    .prefix_separator("_")
                    .separator(ENV_KEY_SEPARATOR)
                    .try_parsing(true)
                    .source(Some(vars)),
            ),
            None => self.builder,
        };
        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Numbered list of the file layers, in load order.
    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.layers
            .iter()
            .enumerate()
            .map(|(i, (origin, path))| format!("{}. [{}] {}", i + 1, origin.label(), path.display()))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// `PREFIX_SECTION__KEY` with a known section and a single non-empty key.
fn is_scalar_override(prefix: &str, key: &str) -> bool {
    let key = key.to_lowercase();
    let Some(rest) = key.strip_prefix(&format!("{}_", prefix.to_lowercase())) else {
        return false;
    };
    match rest.split_once(ENV_KEY_SEPARATOR) {
        Some((section, field)) => {
            ENV_SECTIONS.contains(&section)
                && !field.is_empty()
                && !field.contains(ENV_KEY_SEPARATOR)
        }
        None => false,
    }
}
