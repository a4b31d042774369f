// sugar-env: environment variable access with composable plugs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |          current / get / check
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |   config        facade    |
//!              |  TOML vars     SugarEnv   |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!            environment   getters   pipeline
//!            NODE_ENV      get/has   Plug chain
//!                             |        |
//!                             +---+----+
//!                                 v
//!                              source
//!                         first present name
//!
//!   +-----------------------------------------+
//!   |  core         ReadEnv, Env snapshot     |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```
//!
//! # Example
//!
//! ```
//! use sugar_env::core::env::Env;
//! use sugar_env::pipeline::{Pipeline, Value};
//! use sugar_env::{SugarEnv, plugs};
//!
//! let env = SugarEnv::new(Env::new().with("PORT", "8080").with("NODE_ENV", "test"));
//! assert!(env.is("test"));
//!
//! let port = Pipeline::new(["TEST_PORT", "PORT"])
//!     .plug(plugs::default_to("3000"))
//!     .plug(plugs::integer());
//! assert_eq!(env.run(&port)?, Value::Integer(8080));
//! # Ok::<(), sugar_env::error::EnvError>(())
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod environment;
pub mod error;
pub mod facade;
pub mod getters;
pub mod logging;
pub mod pipeline;
pub mod source;

pub use environment::Environment;
pub use facade::SugarEnv;
pub use pipeline::{Pipeline, Plug, Value, plugs};
