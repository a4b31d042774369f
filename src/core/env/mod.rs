// sugar-env: environment variable access with composable plugs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable read capability.
//!
//! # Architecture
//!
//! ```text
//! ReadEnv::lookup(name) -> Option<String>
//!   SystemEnv   live process environment (std::env)
//!   Env         copy-on-write BTreeMap snapshot / test fixture
//! ```
//!
//! - **Read-only**: nothing in this crate writes to the process environment
//! - **Case-insensitive on Windows**, case-sensitive elsewhere
//! - **Copy-on-write**: clones of an [`Env`] share data until modified

pub mod container;
pub mod types;


pub use container::Env;

/// Capability to read a named variable's raw value.
///
/// Returns `None` when the variable is unset or is not valid Unicode.
/// Presence rules (trimming, blank values) are applied by the resolver,
/// not by implementations of this trait.
pub trait ReadEnv {
    fn lookup(&self, name: &str) -> Option<String>;
}

impl<T: ReadEnv + ?Sized> ReadEnv for &T {
    fn lookup(&self, name: &str) -> Option<String> {
        (**self).lookup(name)
    }
}

/// Zero-sized reader that delegates to `std::env`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Captures the current process environment.
///
/// Variables whose name or value is not valid Unicode are skipped.
#[must_use]
pub fn current_env() -> Env {
    let vars = std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect();
    Env::from_map(vars)
}
