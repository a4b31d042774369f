// sugar-env: environment variable access with composable plugs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for sugar-env using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! sugar-env [global options] <command>
//! version
//! current
//! is <NAME>
//! must-be <NAME>
//! has <NAME>
//! get <NAMES>... [--required] [--default V] [--as KIND]
//! check [--json]
//! options
//! configs
//! ```

pub mod get;
pub mod global;


use crate::cli::get::{CheckArgs, EnvNameArgs, GetArgs, NameArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Environment variable access with composable plugs.
#[derive(Debug, Parser)]
#[command(
    name = "sugar-env",
    author,
    version,
    about = "Environment variable access with composable plugs",
    long_about = "sugar-env Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Reads environment variables through a chain of plugs.\n\n\
                  `sugar-env get PORT --default 3000 --as integer` prints the\n\
                  port as an integer. `sugar-env check` evaluates every variable\n\
                  declared in the configuration. See `sugar-env <command> --help`\n\
                  for more information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  sugar-env reads `sugar-env.toml` from the current directory if it\n\
                  exists. Additional files can be given with --config, those are\n\
                  loaded after it. SUGAR_ENV_<SECTION>__<KEY> variables and --set override both.\n\
                  Use --no-default-config to only use --config."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Prints the current environment.
    Current,

    /// Succeeds if the current environment is NAME.
    Is(EnvNameArgs),

    /// Fails with a message unless the current environment is NAME.
    #[command(name = "must-be")]
    MustBe(EnvNameArgs),

    /// Succeeds if the variable NAME has a non-blank value.
    Has(NameArgs),

    /// Reads the first present variable and prints its value.
    Get(GetArgs),

    /// Evaluates every variable declared in the configuration.
    Check(CheckArgs),

    /// Lists all options and their values.
    Options,

    /// Lists the configuration files in load order.
    Configs,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
