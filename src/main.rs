// sugar-env: environment variable access with composable plugs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Current | Is | MustBe | Has | Get | Check | Options | Configs
//! ```

use std::io::Write;
use std::process::ExitCode;

use sugar_env::SugarEnv;
use sugar_env::cli::global::GlobalOptions;
use sugar_env::cli::{self, Command};
use sugar_env::cmd::check::run_check_command;
use sugar_env::cmd::config::{run_configs_command, run_options_command};
use sugar_env::cmd::env::{run_current_command, run_is_command, run_must_be_command};
use sugar_env::cmd::exit_code;
use sugar_env::cmd::get::{run_get_command, run_has_command};
use sugar_env::config::loader::ConfigLoader;
use sugar_env::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use sugar_env::core::env::SystemEnv;
use sugar_env::error::Result;
use sugar_env::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    match &cli.command {
        Some(Command::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Some(Command::Configs) => {
            let loader = match build_config_loader(&cli.global) {
                Ok(loader) => loader,
                Err(e) => return report(&e),
            };
            return finish(run_configs_command(
                &loader.format_loaded_files(),
                &mut std::io::stdout().lock(),
            ));
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            return ExitCode::FAILURE;
        }
        Some(_) => {}
    }

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => return report(&e),
    };

    let _log_guard = match init_logging(&build_log_config(&config, &cli.global)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config)
}

fn build_log_config(config: &Config, global: &GlobalOptions) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .with_json_file(global.log_json)
        .build()
}

fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let env = SugarEnv::new(SystemEnv).with_variable(config.environment.variable.clone());
    let mut out = std::io::stdout().lock();

    let result = match &cli.command {
        Some(Command::Current) => run_current_command(&env, &mut out).map(|()| true),
        Some(Command::Is(args)) => Ok(run_is_command(args, &env)),
        Some(Command::MustBe(args)) => run_must_be_command(args, &env).map(|()| true),
        Some(Command::Has(args)) => Ok(run_has_command(args, &env)),
        Some(Command::Get(args)) => run_get_command(args, &env, &mut out).map(|()| true),
        Some(Command::Check(args)) => run_check_command(args, config, &env, &mut out),
        Some(Command::Options) => run_options_command(config, &mut out).map(|()| true),
        Some(Command::Version | Command::Configs) | None => Ok(true),
    };
    let _ = out.flush();

    match result {
        Ok(answer) => exit_code(answer),
        Err(e) => report(&e),
    }
}

fn finish(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

fn report(e: &anyhow::Error) -> ExitCode {
    eprintln!("Error: {e:#}");
    ExitCode::FAILURE
}

fn build_config_loader(global: &GlobalOptions) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for assignment in global.to_config_overrides() {
        loader = loader.set_assignment(&assignment)?;
    }
    Ok(loader)
}

fn load_config(global: &GlobalOptions) -> Result<Config> {
    build_config_loader(global)?
        .build()
        .map_err(|e| e.context("failed to load config"))
}
