// sugar-env: environment variable access with composable plugs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment detection commands.

use std::io::Write;

use crate::cli::get::EnvNameArgs;
use crate::core::env::ReadEnv;
use crate::error::Result;
use crate::facade::SugarEnv;

/// Prints the normalized current environment.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run_current_command<R: ReadEnv, W: Write>(env: &SugarEnv<R>, out: &mut W) -> Result<()> {
    writeln!(out, "{}", env.current())?;
    Ok(())
}

/// Answers whether the current environment is `args.name`.
#[must_use]
pub fn run_is_command<R: ReadEnv>(args: &EnvNameArgs, env: &SugarEnv<R>) -> bool {
    env.is(args.name)
}

/// Fails with the assertion message unless the environment matches.
///
/// # Errors
///
/// Returns the [`crate::error::EnvError::Assertion`] on mismatch.
pub fn run_must_be_command<R: ReadEnv>(args: &EnvNameArgs, env: &SugarEnv<R>) -> Result<()> {
    env.must_be(args.name)?;
    Ok(())
}
