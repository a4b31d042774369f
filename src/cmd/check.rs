// sugar-env: environment variable access with composable plugs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `check` command.
//!
//! ```text
//! [vars.port]  --> Pipeline --> Ok(value)  --> "port = 3000"
//! [vars.db]    --> Pipeline --> Err(e)     --> "db: <message>"
//!                                               any Err => exit 1
//! ```

use std::io::Write;

use serde::Serialize;
use tracing::{info, warn};

use crate::cli::get::CheckArgs;
use crate::config::Config;
use crate::core::env::ReadEnv;
use crate::error::Result;
use crate::facade::SugarEnv;
use crate::pipeline::Value;

/// Outcome of one declared variable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckEntry {
    pub name: String,
    pub names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CheckFailure>,
}

/// Serializable form of an [`crate::error::EnvError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckFailure {
    pub kind: &'static str,
    pub message: String,
}

impl CheckEntry {
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Evaluates every declared variable in name order.
///
/// # Errors
///
/// Returns an error if a declared variable uses an unknown plug.
pub fn check_vars<R: ReadEnv>(config: &Config, env: &SugarEnv<R>) -> Result<Vec<CheckEntry>> {
    let entries = config
        .pipelines()?
        .into_iter()
        .map(|(name, pipeline)| {
            let names = pipeline.names().as_slice().to_vec();
            match env.run(&pipeline) {
                Ok(value) => CheckEntry {
                    name: name.to_string(),
                    names,
                    value: Some(value),
                    error: None,
                },
                Err(e) => {
                    warn!(var = name, kind = e.kind(), "check failed");
                    CheckEntry {
                        name: name.to_string(),
                        names,
                        value: None,
                        error: Some(CheckFailure {
                            kind: e.kind(),
                            message: e.to_string(),
                        }),
                    }
                }
            }
        })
        .collect();
    Ok(entries)
}

/// Runs `check` and reports whether every variable passed.
///
/// # Errors
///
/// Returns an error for an unknown plug or if writing to `out` fails.
pub fn run_check_command<R: ReadEnv, W: Write>(
    args: &CheckArgs,
    config: &Config,
    env: &SugarEnv<R>,
    out: &mut W,
) -> Result<bool> {
    let entries = check_vars(config, env)?;
    let failed = entries.iter().filter(|entry| !entry.is_ok()).count();
    info!(total = entries.len(), failed, "checked declared variables");

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
    } else {
        for entry in &entries {
            match (&entry.value, &entry.error) {
                (_, Some(failure)) => writeln!(out, "{}: {}", entry.name, failure.message)?,
                (Some(Value::Absent) | None, None) => writeln!(out, "{} is absent", entry.name)?,
                (Some(value), None) => writeln!(out, "{} = {value}", entry.name)?,
            }
        }
    }

    Ok(failed == 0)
}
