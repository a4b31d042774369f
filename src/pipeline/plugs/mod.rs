// sugar-env: environment variable access with composable plugs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Built-in plug catalog.
//!
//! ```text
//! plug          absent in        present in               fails with
//! required      error            unchanged                MissingRequired
//! default_to(d) Text(d)+literal  unchanged                -
//! boolean       false            "1"/"true" -> true       -
//! integer       absent           lenient base-10 prefix   ExpectedNumericString
//! float         absent           decimal literal prefix   ExpectedNumericString
//! url           absent           absolute URL, unchanged  ExpectedValidUrl
//! base64        absent           decoded UTF-8 (lossy)    ExpectedBase64String
//! custom(n, f)  f(ctx)           f(ctx)                   whatever f returns
//! ```

mod parse;

#[cfg(test)]
mod tests;

use super::{Context, Plug, Value};
use crate::error::{EnvError, EnvResult};
use crate::source::Source;

pub use parse::{decode_base64, parse_float_prefix, parse_int_prefix};

/// Name of the literal source injected by [`default_to`].
pub const DEFAULT_SOURCE_NAME: &str = "defaultValue";

/// Fails when no candidate produced a value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Required;

/// Substitutes a literal when no candidate produced a value.
#[derive(Debug, Clone)]
pub struct DefaultTo(String);

/// Converts to a boolean; never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Boolean;

/// Parses a base-10 integer prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct Integer;

/// Parses a decimal float prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct Float;

/// Validates an absolute URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct Url;

/// Decodes base64 text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64;

/// User-supplied plug backed by a closure.
pub struct FnPlug<F> {
    name: String,
    f: F,
}

#[must_use]
pub const fn required() -> Required {
    Required
}

pub fn default_to(value: impl Into<String>) -> DefaultTo {
    DefaultTo(value.into())
}

#[must_use]
pub const fn boolean() -> Boolean {
    Boolean
}

#[must_use]
pub const fn integer() -> Integer {
    Integer
}

#[must_use]
pub const fn float() -> Float {
    Float
}

#[must_use]
pub const fn url() -> Url {
    Url
}

#[must_use]
pub const fn base64() -> Base64 {
    Base64
}

/// Wraps a closure as a plug.
///
/// ```
/// use sugar_env::core::env::Env;
/// use sugar_env::pipeline::{Pipeline, Value};
/// use sugar_env::plugs;
///
/// let foo = plugs::custom("foo", |ctx| {
///     Ok(if ctx.value.is_absent() { ctx.with_value("foo".into()) } else { ctx.clone() })
/// });
/// let value = Pipeline::new("FOO").plug(foo).evaluate(&Env::new())?;
/// assert_eq!(value, Value::Text("foo".into()));
/// # Ok::<(), sugar_env::error::EnvError>(())
/// ```
pub fn custom<F>(name: impl Into<String>, f: F) -> FnPlug<F>
where
    F: Fn(&Context) -> EnvResult<Context>,
{
    FnPlug {
        name: name.into(),
        f,
    }
}

impl Plug for Required {
    fn name(&self) -> &str {
        "required"
    }

    fn apply(&self, ctx: &Context) -> EnvResult<Context> {
        if !ctx.value.is_absent() {
            return Ok(ctx.clone());
        }
        Err(EnvError::MissingRequired {
            name: ctx.selected_name().to_owned(),
            candidates: ctx.env_source_names(),
        })
    }
}

impl Plug for DefaultTo {
    fn name(&self) -> &str {
        "default_to"
    }

    fn apply(&self, ctx: &Context) -> EnvResult<Context> {
        if !ctx.value.is_absent() {
            return Ok(ctx.clone());
        }
        Ok(ctx.with_selected_source(
            Source::literal(DEFAULT_SOURCE_NAME, self.0.as_str()),
            Value::Text(self.0.clone()),
        ))
    }
}

impl Plug for Boolean {
    fn name(&self) -> &str {
        "boolean"
    }

    fn apply(&self, ctx: &Context) -> EnvResult<Context> {
        let truthy = match &ctx.value {
            Value::Absent => false,
            Value::Boolean(b) => *b,
            Value::Integer(i) => *i == 1,
            #[allow(clippy::float_cmp)]
            Value::Float(f) => *f == 1.0,
            Value::Text(s) => {
                let lower = s.to_lowercase();
                lower == "1" || lower == "true"
            }
        };
        Ok(ctx.with_value(Value::Boolean(truthy)))
    }
}

impl Plug for Integer {
    fn name(&self) -> &str {
        "integer"
    }

    fn apply(&self, ctx: &Context) -> EnvResult<Context> {
        let Some(raw) = ctx.value.to_raw_string() else {
            return Ok(ctx.clone());
        };
        parse_int_prefix(&raw)
            .map(|i| ctx.with_value(Value::Integer(i)))
            .ok_or_else(|| EnvError::ExpectedNumericString {
                kind: ctx.selected_kind().to_owned(),
                name: ctx.selected_name().to_owned(),
                value: raw,
            })
    }
}

impl Plug for Float {
    fn name(&self) -> &str {
        "float"
    }

    fn apply(&self, ctx: &Context) -> EnvResult<Context> {
        let Some(raw) = ctx.value.to_raw_string() else {
            return Ok(ctx.clone());
        };
        parse_float_prefix(&raw)
            .map(|f| ctx.with_value(Value::Float(f)))
            .ok_or_else(|| EnvError::ExpectedNumericString {
                kind: ctx.selected_kind().to_owned(),
                name: ctx.selected_name().to_owned(),
                value: raw,
            })
    }
}

impl Plug for Url {
    fn name(&self) -> &str {
        "url"
    }

    fn apply(&self, ctx: &Context) -> EnvResult<Context> {
        let Some(raw) = ctx.value.to_raw_string() else {
            return Ok(ctx.clone());
        };
        match ::url::Url::parse(&raw) {
            Ok(_) => Ok(ctx.with_value(Value::Text(raw))),
            Err(_) => Err(EnvError::ExpectedValidUrl {
                kind: ctx.selected_kind().to_owned(),
                name: ctx.selected_name().to_owned(),
                value: raw,
            }),
        }
    }
}

impl Plug for Base64 {
    fn name(&self) -> &str {
        "base64"
    }

    fn apply(&self, ctx: &Context) -> EnvResult<Context> {
        let Some(raw) = ctx.value.to_raw_string() else {
            return Ok(ctx.clone());
        };
        decode_base64(&raw)
            .map(|text| ctx.with_value(Value::Text(text)))
            .ok_or_else(|| EnvError::ExpectedBase64String {
                kind: ctx.selected_kind().to_owned(),
                name: ctx.selected_name().to_owned(),
                value: raw,
            })
    }
}

impl<F> Plug for FnPlug<F>
where
    F: Fn(&Context) -> EnvResult<Context>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, ctx: &Context) -> EnvResult<Context> {
        (self.f)(ctx)
    }
}

impl<F> std::fmt::Debug for FnPlug<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnPlug").field("name", &self.name).finish()
    }
}
