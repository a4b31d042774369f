// sugar-env: environment variable access with composable plugs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! One handle for everything: a reader plus the designated environment
//! variable.
//!
//! ```text
//! SugarEnv<R: ReadEnv>
//!   current / is / must_be        -> environment
//!   resolve / evaluate / pipeline -> source + pipeline
//!   has / get / get_*             -> getters
//! ```


use crate::core::env::{ReadEnv, SystemEnv};
use crate::environment::{self, DEFAULT_VARIABLE, Environment};
use crate::error::EnvResult;
use crate::getters;
use crate::pipeline::{self, Pipeline, Plug, Value};
use crate::source::{self, Names, Resolution};

/// Environment accessor bound to a reader.
///
/// # Example
///
/// ```
/// use sugar_env::SugarEnv;
/// use sugar_env::core::env::Env;
/// use sugar_env::environment::Environment;
/// use sugar_env::pipeline::Plug;
/// use sugar_env::plugs;
///
/// let env = SugarEnv::new(Env::new().with("NODE_ENV", "PROD").with("PORT", "8080"));
/// assert_eq!(env.current(), Environment::Prod);
///
/// let steps: Vec<Box<dyn Plug>> = vec![Box::new(plugs::integer())];
/// let port = env.evaluate("PORT", &steps)?;
/// assert_eq!(port.as_integer(), Some(8080));
/// # Ok::<(), sugar_env::error::EnvError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SugarEnv<R = SystemEnv> {
    reader: R,
    variable: String,
}

impl SugarEnv<SystemEnv> {
    /// Accessor over the live process environment.
    #[must_use]
    pub fn system() -> Self {
        Self::new(SystemEnv)
    }
}

impl Default for SugarEnv<SystemEnv> {
    fn default() -> Self {
        Self::system()
    }
}

impl<R: ReadEnv> SugarEnv<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            variable: DEFAULT_VARIABLE.to_string(),
        }
    }

    /// Uses `variable` instead of `NODE_ENV` to detect the environment.
    #[must_use]
    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = variable.into();
        self
    }

    pub const fn reader(&self) -> &R {
        &self.reader
    }

    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }

    #[must_use]
    pub fn current(&self) -> Environment {
        environment::current(&self.reader, &self.variable)
    }

    pub fn is(&self, name: impl AsRef<str>) -> bool {
        environment::is(&self.reader, &self.variable, name)
    }

    /// # Errors
    ///
    /// Returns [`crate::error::EnvError::Assertion`] on mismatch.
    pub fn must_be(&self, name: impl AsRef<str>) -> EnvResult<()> {
        environment::must_be(&self.reader, &self.variable, name)
    }

    pub fn resolve(&self, names: impl Into<Names>) -> Resolution {
        source::resolve(&self.reader, names)
    }

    /// # Errors
    ///
    /// Returns the first error produced by a plug.
    pub fn evaluate(&self, names: impl Into<Names>, plugs: &[Box<dyn Plug>]) -> EnvResult<Value> {
        pipeline::evaluate(&self.reader, names, plugs)
    }

    /// # Errors
    ///
    /// Returns the first error produced by a plug.
    pub fn run(&self, pipeline: &Pipeline) -> EnvResult<Value> {
        pipeline.evaluate(&self.reader)
    }

    pub fn has(&self, name: &str) -> bool {
        getters::has(&self.reader, name)
    }

    pub fn get(&self, names: impl Into<Names>, fallback: Option<&str>) -> Option<String> {
        getters::get(&self.reader, names, fallback)
    }

    /// # Errors
    ///
    /// Never fails; see [`getters::get_boolean`].
    pub fn get_boolean(
        &self,
        names: impl Into<Names>,
        fallback: Option<bool>,
    ) -> EnvResult<Option<bool>> {
        getters::get_boolean(&self.reader, names, fallback)
    }

    /// # Errors
    ///
    /// See [`getters::get_integer`].
    pub fn get_integer(
        &self,
        names: impl Into<Names>,
        fallback: Option<i64>,
    ) -> EnvResult<Option<i64>> {
        getters::get_integer(&self.reader, names, fallback)
    }

    /// # Errors
    ///
    /// See [`getters::get_float`].
    pub fn get_float(
        &self,
        names: impl Into<Names>,
        fallback: Option<f64>,
    ) -> EnvResult<Option<f64>> {
        getters::get_float(&self.reader, names, fallback)
    }

    /// # Errors
    ///
    /// See [`getters::get_url`].
    pub fn get_url(
        &self,
        names: impl Into<Names>,
        fallback: Option<String>,
    ) -> EnvResult<Option<String>> {
        getters::get_url(&self.reader, names, fallback)
    }

    /// # Errors
    ///
    /// See [`getters::get_base64`].
    pub fn get_base64(
        &self,
        names: impl Into<Names>,
        fallback: Option<String>,
    ) -> EnvResult<Option<String>> {
        getters::get_base64(&self.reader, names, fallback)
    }
}
