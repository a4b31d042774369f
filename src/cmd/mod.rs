// sugar-env: environment variable access with composable plugs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers --> out (stdout in main)
//!   env:    current, is, must-be
//!   get:    has, get
//!   check:  [vars.*] from config
//!   config: options, configs
//! ```
//!
//! Handlers write to a caller-supplied writer and read variables through
//! [`crate::core::env::ReadEnv`], so they run against any environment.

pub mod check;
pub mod config;
pub mod env;
pub mod get;

#[cfg(test)]
mod tests;

use std::process::ExitCode;

/// Maps a yes/no answer onto the process exit code.
#[must_use]
pub fn exit_code(answer: bool) -> ExitCode {
    if answer {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
