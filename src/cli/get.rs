// sugar-env: environment variable access with composable plugs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the value-reading commands.
//!
//! ```text
//! get NAMES... --required --default V --as KIND
//!      |            |          |          |
//!      v            v          v          v
//!   resolve  -->  required --> default_to --> conversion
//! ```

use clap::{Args, ValueEnum};

use crate::environment::Environment;
use crate::pipeline::{Pipeline, plugs};

/// A single variable name.
#[derive(Debug, Clone, Args)]
pub struct NameArgs {
    /// Variable to test.
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// A single environment name, parsed strictly.
#[derive(Debug, Clone, Args)]
pub struct EnvNameArgs {
    /// One of dev, test, ci, review, staging, prod (any case).
    #[arg(value_name = "NAME")]
    pub name: Environment,
}

/// Arguments for the `get` command.
#[derive(Debug, Clone, Args)]
pub struct GetArgs {
    /// Candidate variable names, highest priority first.
    #[arg(value_name = "NAMES", required = true, num_args = 1..)]
    pub names: Vec<String>,

    /// Fails if none of the candidates has a non-blank value.
    #[arg(short = 'r', long)]
    pub required: bool,

    /// Value used when none of the candidates is present.
    #[arg(short = 'd', long = "default", value_name = "VALUE")]
    pub default: Option<String>,

    /// Conversion applied last.
    #[arg(long = "as", value_enum, default_value_t = ValueKind::Text)]
    pub kind: ValueKind,
}

impl GetArgs {
    /// Builds the pipeline these arguments describe.
    #[must_use]
    pub fn to_pipeline(&self) -> Pipeline {
        let mut pipeline = Pipeline::new(self.names.clone());
        if self.required {
            pipeline = pipeline.plug(plugs::required());
        }
        if let Some(default) = &self.default {
            pipeline = pipeline.plug(plugs::default_to(default.clone()));
        }
        match self.kind {
            ValueKind::Text => pipeline,
            ValueKind::Boolean => pipeline.plug(plugs::boolean()),
            ValueKind::Integer => pipeline.plug(plugs::integer()),
            ValueKind::Float => pipeline.plug(plugs::float()),
            ValueKind::Url => pipeline.plug(plugs::url()),
            ValueKind::Base64 => pipeline.plug(plugs::base64()),
        }
    }
}

/// Target type of `get --as`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ValueKind {
    /// Raw text, no conversion.
    #[default]
    Text,
    Boolean,
    Integer,
    Float,
    Url,
    Base64,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, Args)]
pub struct CheckArgs {
    /// Prints a JSON report instead of text lines.
    #[arg(long)]
    pub json: bool,
}
