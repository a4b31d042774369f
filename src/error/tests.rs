// sugar-env: environment variable access with composable plugs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, EnvError};

#[test]
fn test_missing_required_display() {
    let err = EnvError::MissingRequired {
        name: "PROD_DB_URL".to_string(),
        candidates: vec!["PROD_DB_URL".to_string(), "DB_URL".to_string()],
    };
    insta::assert_snapshot!(
        err.to_string(),
        @r#"Missing required environment variable "PROD_DB_URL". You should make sure one of the following environment variables is present and that it has a non-empty value: "PROD_DB_URL", "DB_URL""#
    );
}

#[test]
fn test_numeric_display() {
    let err = EnvError::ExpectedNumericString {
        kind: "env".to_string(),
        name: "PORT".to_string(),
        value: "abc".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @r#"Expected env value "PORT" to be a valid numeric string but got `"abc"`"#
    );
}

#[test]
fn test_assertion_display() {
    let err = EnvError::Assertion {
        expected: "prod".to_string(),
        actual: "dev".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @r#"Expected current environment to be "prod" but got "dev""#
    );
}

#[test]
fn test_env_error_kind_and_variable() {
    let err = EnvError::ExpectedValidUrl {
        kind: "literal".to_string(),
        name: "defaultValue".to_string(),
        value: "a b c".to_string(),
    };
    assert_eq!(err.kind(), "ExpectedValidUrl");
    assert_eq!(err.variable(), Some("defaultValue"));

    let err = EnvError::Assertion {
        expected: "ci".to_string(),
        actual: "test".to_string(),
    };
    assert_eq!(err.kind(), "Assertion");
    assert_eq!(err.variable(), None);
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::UnknownPlug {
        var: "port".to_string(),
        plug: "hex".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"unknown plug 'hex' for variable 'port'");
}

#[test]
fn test_config_error_converts_to_anyhow() {
    let err: anyhow::Error = ConfigError::InvalidValue {
        section: "environment".to_string(),
        key: "variable".to_string(),
        message: "must not be empty".to_string(),
    }
    .into();
    assert!(err.downcast_ref::<ConfigError>().is_some());
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'variable' in section '[environment]': must not be empty"
    );
}

#[test]
fn test_env_error_size() {
    let size = std::mem::size_of::<EnvError>();
    assert!(size <= 80, "EnvError is {size} bytes, expected <= 80");
}
