// sugar-env: environment variable access with composable plugs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pipeline state threaded from plug to plug.
//!
//! ```text
//! Context
//!   sources          ordered; plugs may only append
//!   selected_source  provenance of `value`
//!   value            Absent | Text | Integer | Float | Boolean
//!   logs             one LogEntry per completed plug
//! ```

use serde::Serialize;

use crate::source::{Resolution, Source};

/// Placeholder reported when no candidate name was given at all.
pub(crate) const NO_SOURCE_NAME: &str = "<none>";

/// Current value of a pipeline.
///
/// Absence is a legitimate terminal value, distinct from failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Absent,
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl Value {
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Textual form of any present value; `None` when absent.
    #[must_use]
    pub fn to_raw_string(&self) -> Option<String> {
        match self {
            Self::Absent => None,
            Self::Text(s) => Some(s.clone()),
            Self::Integer(i) => Some(i.to_string()),
            Self::Float(f) => Some(f.to_string()),
            Self::Boolean(b) => Some(b.to_string()),
        }
    }

    /// Short type label used in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Boolean(_) => "boolean",
        }
    }
}

impl From<Option<String>> for Value {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Absent, Self::Text)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// Absent values display as the empty string.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absent => Ok(()),
            Self::Text(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

/// Diagnostic record of one completed plug.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub plug_name: String,
    pub value_before: Value,
    pub value_after: Value,
}

/// Value plus provenance, rebuilt by every plug.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Context {
    pub sources: Vec<Source>,
    pub selected_source: Option<Source>,
    pub value: Value,
    pub logs: Vec<LogEntry>,
}

impl Context {
    /// Initial context: value of the selected source, no logs.
    #[must_use]
    pub fn from_resolution(resolution: Resolution) -> Self {
        let value = resolution
            .selected
            .as_ref()
            .and_then(|s| s.value.clone())
            .into();
        Self {
            sources: resolution.sources,
            selected_source: resolution.selected,
            value,
            logs: Vec::new(),
        }
    }

    /// Derived copy carrying a new value.
    #[must_use]
    pub fn with_value(&self, value: Value) -> Self {
        Self {
            value,
            ..self.clone()
        }
    }

    /// Derived copy with `source` appended, selected, and driving `value`.
    #[must_use]
    pub fn with_selected_source(&self, source: Source, value: Value) -> Self {
        let mut sources = self.sources.clone();
        sources.push(source.clone());
        Self {
            sources,
            selected_source: Some(source),
            value,
            logs: self.logs.clone(),
        }
    }

    /// Kind label of the selected source (`env` when nothing was selected).
    #[must_use]
    pub fn selected_kind(&self) -> &'static str {
        self.selected_source
            .as_ref()
            .map_or("env", |s| s.kind.as_str())
    }

    /// Name of the selected source.
    #[must_use]
    pub fn selected_name(&self) -> &str {
        self.selected_source
            .as_ref()
            .map_or(NO_SOURCE_NAME, |s| s.name.as_str())
    }

    /// Names of every variable-store source, in lookup order.
    #[must_use]
    pub fn env_source_names(&self) -> Vec<String> {
        self.sources
            .iter()
            .filter(|s| s.kind == crate::source::SourceKind::Env)
            .map(|s| s.name.clone())
            .collect()
    }
}
