// sugar-env: environment variable access with composable plugs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::process::ExitCode;

use super::check::{check_vars, run_check_command};
use super::config::{run_configs_command, run_options_command};
use super::env::{run_current_command, run_is_command, run_must_be_command};
use super::exit_code;
use super::get::{run_get_command, run_has_command};
use crate::cli::get::{CheckArgs, EnvNameArgs, GetArgs, NameArgs, ValueKind};
use crate::config::Config;
use crate::core::env::Env;
use crate::environment::Environment;
use crate::facade::SugarEnv;
use crate::pipeline::Value;

fn name(name: &str) -> NameArgs {
    NameArgs {
        name: name.to_string(),
    }
}

fn env_name(name: Environment) -> EnvNameArgs {
    EnvNameArgs { name }
}

fn get_args(names: &[&str], default: Option<&str>, kind: ValueKind) -> GetArgs {
    GetArgs {
        names: names.iter().map(ToString::to_string).collect(),
        required: false,
        default: default.map(ToString::to_string),
        kind,
    }
}

fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}

const CHECK_CONFIG: &str = r#"
[vars.port]
names = ["PORT"]
plugs = ["default_to:3000", "integer"]

[vars.db]
names = ["TEST_DB_URL", "DB_URL"]
plugs = ["required", "url"]

[vars.token]
names = ["TOKEN"]
plugs = []
"#;

#[test]
fn test_exit_code() {
    assert_eq!(exit_code(true), ExitCode::SUCCESS);
    assert_eq!(exit_code(false), ExitCode::FAILURE);
}

#[test]
fn test_current_command() {
    let env = SugarEnv::new(Env::new().with("NODE_ENV", "  STAGING "));
    let mut out = Vec::new();
    run_current_command(&env, &mut out).unwrap();
    assert_eq!(output(out), "staging\n");
}

#[test]
fn test_current_command_custom_variable() {
    let env = SugarEnv::new(Env::new().with("APP_ENV", "ci")).with_variable("APP_ENV");
    let mut out = Vec::new();
    run_current_command(&env, &mut out).unwrap();
    assert_eq!(output(out), "ci\n");
}

#[test]
fn test_is_and_must_be_commands() {
    let env = SugarEnv::new(Env::new().with("NODE_ENV", "prod"));
    assert!(run_is_command(&env_name(Environment::Prod), &env));
    assert!(!run_is_command(&env_name(Environment::Dev), &env));

    assert!(run_must_be_command(&env_name(Environment::Prod), &env).is_ok());
    let err = run_must_be_command(&env_name(Environment::Test), &env).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @r#"Expected current environment to be "test" but got "prod""#);
}

#[test]
fn test_has_command() {
    let env = SugarEnv::new(Env::new().with("A", "x").with("B", "   "));
    assert!(run_has_command(&name("A"), &env));
    assert!(!run_has_command(&name("B"), &env));
    assert!(!run_has_command(&name("C"), &env));
}

#[test]
fn test_get_command_prints_value() {
    let env = SugarEnv::new(Env::new().with("PORT", "8080"));
    let mut out = Vec::new();
    run_get_command(
        &get_args(&["TEST_PORT", "PORT"], None, ValueKind::Integer),
        &env,
        &mut out,
    )
    .unwrap();
    assert_eq!(output(out), "8080\n");
}

#[test]
fn test_get_command_absent_prints_nothing() {
    let env = SugarEnv::new(Env::new());
    let mut out = Vec::new();
    run_get_command(&get_args(&["PORT"], None, ValueKind::Text), &env, &mut out).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_get_command_default_and_boolean() {
    let env = SugarEnv::new(Env::new());
    let mut out = Vec::new();
    run_get_command(
        &get_args(&["DEBUG"], Some("true"), ValueKind::Boolean),
        &env,
        &mut out,
    )
    .unwrap();
    assert_eq!(output(out), "true\n");
}

#[test]
fn test_get_command_required_fails() {
    let env = SugarEnv::new(Env::new());
    let mut args = get_args(&["A", "B"], Some("unused"), ValueKind::Text);
    args.required = true;
    let mut out = Vec::new();
    let err = run_get_command(&args, &env, &mut out).unwrap_err();
    assert!(err.to_string().starts_with("Missing required environment variable \"A\""));
    assert!(out.is_empty());
}

#[test]
fn test_check_vars() {
    let config = Config::parse(CHECK_CONFIG).unwrap();
    let env = SugarEnv::new(Env::new().with("DB_URL", "not a url"));
    let entries = check_vars(&config, &env).unwrap();

    let summary: Vec<_> = entries
        .iter()
        .map(|e| (e.name.as_str(), e.value.clone(), e.error.as_ref().map(|f| f.kind)))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("db", None, Some("ExpectedValidUrl")),
            ("port", Some(Value::Integer(3000)), None),
            ("token", Some(Value::Absent), None),
        ]
    );
}

#[test]
fn test_check_command_text() {
    let config = Config::parse(CHECK_CONFIG).unwrap();
    let env = SugarEnv::new(Env::new().with("PORT", "8080"));
    let mut out = Vec::new();
    let ok = run_check_command(&CheckArgs::default(), &config, &env, &mut out).unwrap();

    assert!(!ok);
    insta::assert_snapshot!(output(out), @r#"
    db: Missing required environment variable "TEST_DB_URL". You should make sure one of the following environment variables is present and that it has a non-empty value: "TEST_DB_URL", "DB_URL"
    port = 8080
    token is absent
    "#);
}

#[test]
fn test_check_command_json() {
    let config = Config::parse(
        r#"
[vars.port]
names = ["PORT"]
plugs = ["integer"]
"#,
    )
    .unwrap();
    let env = SugarEnv::new(Env::new().with("PORT", "42abc"));
    let mut out = Vec::new();
    let ok = run_check_command(&CheckArgs { json: true }, &config, &env, &mut out).unwrap();

    assert!(ok);
    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(
        report,
        serde_json::json!([{ "name": "port", "names": ["PORT"], "value": 42 }])
    );
}

#[test]
fn test_check_command_all_pass() {
    let config = Config::default();
    let env = SugarEnv::new(Env::new());
    let mut out = Vec::new();
    assert!(run_check_command(&CheckArgs::default(), &config, &env, &mut out).unwrap());
    assert!(out.is_empty());
}

#[test]
fn test_options_command() {
    let config = Config::default();
    let mut out = Vec::new();
    run_options_command(&config, &mut out).unwrap();
    insta::assert_snapshot!(output(out), @r"
    environment.variable    = NODE_ENV
    global.file_log_level   = 5
    global.output_log_level = 2
    ");
}

#[test]
fn test_configs_command() {
    let mut out = Vec::new();
    run_configs_command(&[], &mut out).unwrap();
    assert_eq!(output(out), "No configuration files loaded\n");

    let mut out = Vec::new();
    run_configs_command(&["1. [file] a.toml".to_string()], &mut out).unwrap();
    assert_eq!(output(out), "1. [file] a.toml\n");
}
