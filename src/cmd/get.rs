// sugar-env: environment variable access with composable plugs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Value-reading commands.

use std::io::Write;

use tracing::debug;

use crate::cli::get::{GetArgs, NameArgs};
use crate::core::env::ReadEnv;
use crate::error::Result;
use crate::facade::SugarEnv;

/// Answers whether `args.name` has a non-blank value.
#[must_use]
pub fn run_has_command<R: ReadEnv>(args: &NameArgs, env: &SugarEnv<R>) -> bool {
    env.has(&args.name)
}

/// Evaluates the pipeline described by `args` and prints the value.
///
/// An absent value prints nothing.
///
/// # Errors
///
/// Returns the first plug failure, or an error if writing to `out` fails.
pub fn run_get_command<R: ReadEnv, W: Write>(
    args: &GetArgs,
    env: &SugarEnv<R>,
    out: &mut W,
) -> Result<()> {
    let pipeline = args.to_pipeline();
    debug!(?pipeline, "evaluating");

    let value = env.run(&pipeline)?;
    if !value.is_absent() {
        writeln!(out, "{value}")?;
    }
    Ok(())
}
