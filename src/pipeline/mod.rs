// sugar-env: environment variable access with composable plugs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Plug pipeline evaluation.
//!
//! ```text
//! resolve(names) --> Context{value = selected.value}
//!        |
//!        v
//!   plug[0].apply(&ctx) --Err--> stop, return Err
//!        | Ok(next) + LogEntry
//!        v
//!   plug[1].apply(&ctx) ...
//!        |
//!        v
//!   final Context.value
//! ```
//!
//! Plugs never stop evaluation themselves; they return `Err` and the
//! driver decides. A plug only sees the output of strictly earlier plugs,
//! and may only append to `sources` and `logs`.

pub mod context;
pub mod plugs;


use tracing::{trace, warn};

use crate::core::env::ReadEnv;
use crate::error::EnvResult;
use crate::source::{Names, resolve};

pub use context::{Context, LogEntry, Value};

/// A named transformation step.
pub trait Plug {
    /// Name recorded in [`LogEntry::plug_name`].
    fn name(&self) -> &str;

    /// Builds the next context from `ctx`.
    ///
    /// # Errors
    ///
    /// Returns the failure that should abort the evaluation.
    fn apply(&self, ctx: &Context) -> EnvResult<Context>;
}

impl<P: Plug + ?Sized> Plug for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn apply(&self, ctx: &Context) -> EnvResult<Context> {
        (**self).apply(ctx)
    }
}

/// Applies `plugs` in order starting from `ctx`.
///
/// The log is owned by the driver: whatever a plug does to `logs`, the
/// result carries the previous entries plus one new entry. `sources` is
/// append-only too: a plug that drops or edits earlier sources gets the
/// previous list back, and a selection that is missing or not among the
/// sources falls back to the previous selection.
///
/// # Errors
///
/// Returns the first error produced by a plug; later plugs do not run.
pub fn run<'a, P, I>(mut ctx: Context, plugs: I) -> EnvResult<Context>
where
    P: Plug + ?Sized + 'a,
    I: IntoIterator<Item = &'a P>,
{
    for plug in plugs {
        let mut next = plug.apply(&ctx).inspect_err(|e| {
            trace!(plug = plug.name(), error = %e, "plug failed");
        })?;
        trace!(
            plug = plug.name(),
            before = ?ctx.value,
            after = ?next.value,
            "plug applied"
        );
        if !next.sources.starts_with(&ctx.sources) {
            warn!(plug = plug.name(), "plug rewrote earlier sources, keeping them");
            next.sources = std::mem::take(&mut ctx.sources);
        }
        if next
            .selected_source
            .as_ref()
            .is_none_or(|s| !next.sources.contains(s))
        {
            next.selected_source = ctx.selected_source.take();
        }
        let mut logs = std::mem::take(&mut ctx.logs);
        logs.push(LogEntry {
            plug_name: plug.name().to_owned(),
            value_before: std::mem::take(&mut ctx.value),
            value_after: next.value.clone(),
        });
        next.logs = logs;
        ctx = next;
    }
    Ok(ctx)
}

/// Resolves `names` and runs `plugs` over the result.
///
/// # Errors
///
/// Returns the first error produced by a plug.
pub fn evaluate<R: ReadEnv + ?Sized>(
    reader: &R,
    names: impl Into<Names>,
    plugs: &[Box<dyn Plug>],
) -> EnvResult<Value> {
    let ctx = Context::from_resolution(resolve(reader, names));
    run(ctx, plugs).map(|ctx| ctx.value)
}

/// Reusable pipeline: candidate names plus an ordered plug list.
///
/// # Example
///
/// ```
/// use sugar_env::core::env::Env;
/// use sugar_env::pipeline::{Pipeline, Value};
/// use sugar_env::plugs;
///
/// let env = Env::new();
/// let port = Pipeline::new("PORT")
///     .plug(plugs::default_to("3000"))
///     .plug(plugs::integer())
///     .evaluate(&env)?;
/// assert_eq!(port, Value::Integer(3000));
/// # Ok::<(), sugar_env::error::EnvError>(())
/// ```
#[derive(Default)]
pub struct Pipeline {
    names: Names,
    plugs: Vec<Box<dyn Plug>>,
}

impl Pipeline {
    pub fn new(names: impl Into<Names>) -> Self {
        Self {
            names: names.into(),
            plugs: Vec::new(),
        }
    }

    /// Appends a plug.
    #[must_use]
    pub fn plug(mut self, plug: impl Plug + 'static) -> Self {
        self.plugs.push(Box::new(plug));
        self
    }

    /// Appends an already boxed plug.
    #[must_use]
    pub fn boxed_plug(mut self, plug: Box<dyn Plug>) -> Self {
        self.plugs.push(plug);
        self
    }

    #[must_use]
    pub const fn names(&self) -> &Names {
        &self.names
    }

    #[must_use]
    pub fn plug_names(&self) -> Vec<&str> {
        self.plugs.iter().map(|p| p.name()).collect()
    }

    /// Runs the pipeline and returns the full final context.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by a plug.
    pub fn evaluate_context<R: ReadEnv + ?Sized>(&self, reader: &R) -> EnvResult<Context> {
        let ctx = Context::from_resolution(resolve(reader, self.names.clone()));
        run(ctx, &self.plugs)
    }

    /// Runs the pipeline and returns the final value.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by a plug.
    pub fn evaluate<R: ReadEnv + ?Sized>(&self, reader: &R) -> EnvResult<Value> {
        self.evaluate_context(reader).map(|ctx| ctx.value)
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("names", &self.names)
            .field("plugs", &self.plug_names())
            .finish()
    }
}
