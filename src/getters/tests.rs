// sugar-env: environment variable access with composable plugs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{get, get_base64, get_boolean, get_float, get_integer, get_url, has};
use crate::core::env::Env;
use crate::error::EnvError;

fn fixture() -> Env {
    Env::new()
        .with("MONGO_URL", "mongo://foo.bar:27018/baz")
        .with("FOO_HAS", "1")
        .with("BLANK", "  ")
        .with("STRING_NUMBER", "45.4")
        .with("NAN", "false")
        .with("STRING_URL", "http://foo.bar")
        .with("STRING_BASE64", "dGVzdHN0cmluZw==")
}

#[test]
fn test_has() {
    let env = fixture();
    assert!(has(&env, "FOO_HAS"));
    assert!(!has(&env, "FOO_HASNT"));
    assert!(!has(&env, "BLANK"));
}

#[test]
fn test_get() {
    let env = fixture();
    assert_eq!(get(&env, "MONGO_URL", None).as_deref(), Some("mongo://foo.bar:27018/baz"));
    assert_eq!(get(&env, "FOO_BAR", None), None);
    assert_eq!(get(&env, "FOO_BAR", Some("baz")).as_deref(), Some("baz"));
    assert_eq!(
        get(&env, ["FOO_BAR", "MONGO_URL"], None).as_deref(),
        Some("mongo://foo.bar:27018/baz")
    );
    assert_eq!(get(&env, ["FOO_BAR", "BAR_BAZ"], None), None);
    assert_eq!(get(&env, "BLANK", None), None);
}

#[test]
fn test_get_boolean() {
    let env = fixture();
    assert_eq!(get_boolean(&env, "FOO_HAS", None), Ok(Some(true)));
    assert_eq!(get_boolean(&env, "NAN", None), Ok(Some(false)));
    // absent returns the fallback untouched, not `false`
    assert_eq!(get_boolean(&env, "NULL", None), Ok(None));
    assert_eq!(get_boolean(&env, "NULL", Some(true)), Ok(Some(true)));
}

#[test]
fn test_get_integer() {
    let env = fixture();
    assert_eq!(get_integer(&env, "STRING_NUMBER", None), Ok(Some(45)));
    assert_eq!(get_integer(&env, "NULL", None), Ok(None));
    assert_eq!(get_integer(&env, "NULL", Some(8)), Ok(Some(8)));
    assert!(matches!(
        get_integer(&env, "NAN", None),
        Err(EnvError::ExpectedNumericString { .. })
    ));
}

#[test]
fn test_get_float() {
    let env = fixture();
    assert_eq!(get_float(&env, "STRING_NUMBER", None), Ok(Some(45.4)));
    assert_eq!(get_float(&env, "NULL", None), Ok(None));
    assert!(get_float(&env, "NAN", None).is_err());
}

#[test]
fn test_get_url_keeps_value_verbatim() {
    let env = fixture();
    assert_eq!(
        get_url(&env, "STRING_URL", None),
        Ok(Some("http://foo.bar".to_string()))
    );
    assert_eq!(get_url(&env, "NULL", None), Ok(None));
}

#[test]
fn test_get_base64() {
    let env = fixture();
    assert_eq!(
        get_base64(&env, "STRING_BASE64", None),
        Ok(Some("teststring".to_string()))
    );
    assert_eq!(get_base64(&env, "NULL", None), Ok(None));
}
