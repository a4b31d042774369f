// sugar-env: environment variable access with composable plugs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Single-shot `has` / `get` helpers.
//!
//! ```text
//! has(name)              resolve([name]).value().is_some()
//! get(names, fallback)   Pipeline[default_to(fallback)?]
//! get_*(names, fallback) resolve, absent -> fallback as-is,
//!                        present -> run(ctx, [conversion plug])
//! ```
//!
//! These are thin compositions over the plug pipeline so the two
//! access styles cannot drift apart. Unlike older releases, `get_url`
//! does not append a trailing slash.

#[cfg(test)]
mod tests;

use crate::core::env::ReadEnv;
use crate::error::EnvResult;
use crate::pipeline::plugs;
use crate::pipeline::{Context, Pipeline, Plug, Value, run};
use crate::source::{Names, resolve};

/// Returns true if `name` is set to a non-blank value.
pub fn has<R: ReadEnv + ?Sized>(reader: &R, name: &str) -> bool {
    resolve(reader, name).value().is_some()
}

/// Value of the first present candidate, else `fallback`.
pub fn get<R: ReadEnv + ?Sized>(
    reader: &R,
    names: impl Into<Names>,
    fallback: Option<&str>,
) -> Option<String> {
    let pipeline = match fallback {
        Some(fallback) => Pipeline::new(names).plug(plugs::default_to(fallback)),
        None => Pipeline::new(names),
    };
    // default_to is the only plug and cannot fail
    pipeline.evaluate(reader).ok().and_then(Value::into_text)
}

fn get_as<R, P, T>(
    reader: &R,
    names: impl Into<Names>,
    fallback: Option<T>,
    plug: &P,
    extract: impl FnOnce(Value) -> Option<T>,
) -> EnvResult<Option<T>>
where
    R: ReadEnv + ?Sized,
    P: Plug,
{
    let ctx = Context::from_resolution(resolve(reader, names));
    if ctx.value.is_absent() {
        return Ok(fallback);
    }
    let ctx = run(ctx, [plug])?;
    Ok(extract(ctx.value))
}

/// `"1"` / `"true"` (any case) as `true`, anything else `false`.
///
/// # Errors
///
/// Never fails; the `Result` keeps the typed getters uniform.
pub fn get_boolean<R: ReadEnv + ?Sized>(
    reader: &R,
    names: impl Into<Names>,
    fallback: Option<bool>,
) -> EnvResult<Option<bool>> {
    get_as(reader, names, fallback, &plugs::boolean(), |v| v.as_bool())
}

/// Lenient base-10 integer.
///
/// # Errors
///
/// Returns [`crate::error::EnvError::ExpectedNumericString`] for a present,
/// non-numeric value.
pub fn get_integer<R: ReadEnv + ?Sized>(
    reader: &R,
    names: impl Into<Names>,
    fallback: Option<i64>,
) -> EnvResult<Option<i64>> {
    get_as(reader, names, fallback, &plugs::integer(), |v| v.as_integer())
}

/// Decimal float.
///
/// # Errors
///
/// Returns [`crate::error::EnvError::ExpectedNumericString`] for a present,
/// non-numeric value.
pub fn get_float<R: ReadEnv + ?Sized>(
    reader: &R,
    names: impl Into<Names>,
    fallback: Option<f64>,
) -> EnvResult<Option<f64>> {
    get_as(reader, names, fallback, &plugs::float(), |v| v.as_float())
}

/// Absolute URL, returned verbatim.
///
/// # Errors
///
/// Returns [`crate::error::EnvError::ExpectedValidUrl`] for a malformed URL.
pub fn get_url<R: ReadEnv + ?Sized>(
    reader: &R,
    names: impl Into<Names>,
    fallback: Option<String>,
) -> EnvResult<Option<String>> {
    get_as(reader, names, fallback, &plugs::url(), Value::into_text)
}

/// Base64-decoded text.
///
/// # Errors
///
/// Returns [`crate::error::EnvError::ExpectedBase64String`] when decoding fails.
pub fn get_base64<R: ReadEnv + ?Sized>(
    reader: &R,
    names: impl Into<Names>,
    fallback: Option<String>,
) -> EnvResult<Option<String>> {
    get_as(reader, names, fallback, &plugs::base64(), Value::into_text)
}
