// sugar-env: environment variable access with composable plugs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for reading the variable store.
//!
//! ```text
//!              core
//!               |
//!               v
//!              env
//!               |
//!     +---------+---------+
//!     |                   |
//!  ReadEnv            Env (snapshot/fixture)
//!  SystemEnv          EnvKey (case-insensitive on Windows)
//! ```

pub mod env;
