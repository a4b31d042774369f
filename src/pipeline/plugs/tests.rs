// sugar-env: environment variable access with composable plugs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{
    DEFAULT_SOURCE_NAME, base64, boolean, custom, decode_base64, default_to, float, integer,
    parse_float_prefix, parse_int_prefix, required, url,
};
use crate::core::env::Env;
use crate::error::EnvError;
use crate::pipeline::{Context, Plug, Value};
use crate::source::{SourceKind, resolve};

fn ctx_for(value: Option<&str>) -> Context {
    let env = value.map_or_else(Env::new, |v| Env::new().with("VAR", v));
    Context::from_resolution(resolve(&env, "VAR"))
}

fn apply(plug: &dyn Plug, value: Option<&str>) -> Result<Value, EnvError> {
    plug.apply(&ctx_for(value)).map(|ctx| ctx.value)
}

// =============================================================================
// required / default_to
// =============================================================================

#[test]
fn test_required_passes_present_value() {
    assert_eq!(apply(&required(), Some("x")), Ok(Value::Text("x".into())));
}

#[test]
fn test_required_lists_env_candidates() {
    let env = Env::new();
    let ctx = Context::from_resolution(resolve(&env, ["PROD_KEY", "KEY"]));
    let err = required().apply(&ctx).unwrap_err();
    assert_eq!(
        err,
        EnvError::MissingRequired {
            name: "PROD_KEY".into(),
            candidates: vec!["PROD_KEY".into(), "KEY".into()],
        }
    );
}

#[test]
fn test_default_to_absent_injects_literal_source() {
    let ctx = default_to("3000").apply(&ctx_for(None)).unwrap();
    assert_eq!(ctx.value, Value::Text("3000".into()));

    let selected = ctx.selected_source.as_ref().unwrap();
    assert_eq!(selected.kind, SourceKind::Literal);
    assert_eq!(selected.name, DEFAULT_SOURCE_NAME);
    assert_eq!(ctx.sources.len(), 2);
    assert_eq!(ctx.sources.last(), Some(selected));
}

#[test]
fn test_default_to_present_is_unchanged() {
    let before = ctx_for(Some("8080"));
    let after = default_to("3000").apply(&before).unwrap();
    assert_eq!(after, before);
}

#[test]
fn test_plug_does_not_mutate_input() {
    let before = ctx_for(None);
    let snapshot = before.clone();
    let _ = default_to("x").apply(&before);
    let _ = required().apply(&before);
    assert_eq!(before, snapshot);
}

// =============================================================================
// boolean
// =============================================================================

#[test]
fn test_boolean_truthy_values() {
    for raw in ["1", "true", "TRUE", "True"] {
        assert_eq!(apply(&boolean(), Some(raw)), Ok(Value::Boolean(true)), "{raw}");
    }
}

#[test]
fn test_boolean_everything_else_is_false() {
    for raw in ["0", "false", "FALSE", "yes", "asdfasdf", " true"] {
        assert_eq!(apply(&boolean(), Some(raw)), Ok(Value::Boolean(false)), "{raw}");
    }
    assert_eq!(apply(&boolean(), None), Ok(Value::Boolean(false)));
}

#[test]
fn test_boolean_of_numbers() {
    let ctx = ctx_for(None).with_value(Value::Integer(1));
    assert_eq!(boolean().apply(&ctx).unwrap().value, Value::Boolean(true));
    let ctx = ctx_for(None).with_value(Value::Float(0.5));
    assert_eq!(boolean().apply(&ctx).unwrap().value, Value::Boolean(false));
}

// =============================================================================
// integer / float
// =============================================================================

#[test]
fn test_integer() {
    assert_eq!(apply(&integer(), Some("45")), Ok(Value::Integer(45)));
    assert_eq!(apply(&integer(), Some("123.4")), Ok(Value::Integer(123)));
    assert_eq!(apply(&integer(), Some(" -7px")), Ok(Value::Integer(-7)));
    assert_eq!(apply(&integer(), None), Ok(Value::Absent));
}

#[test]
fn test_integer_rejects_non_numeric() {
    let err = apply(&integer(), Some("false")).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @r#"Expected env value "VAR" to be a valid numeric string but got `"false"`"#
    );
}

#[test]
fn test_integer_reports_literal_provenance() {
    let ctx = default_to("abc").apply(&ctx_for(None)).unwrap();
    let err = integer().apply(&ctx).unwrap_err();
    assert_eq!(
        err,
        EnvError::ExpectedNumericString {
            kind: "literal".into(),
            name: DEFAULT_SOURCE_NAME.into(),
            value: "abc".into(),
        }
    );
}

#[test]
fn test_float() {
    assert_eq!(apply(&float(), Some("45.4")), Ok(Value::Float(45.4)));
    assert_eq!(apply(&float(), Some("1e3")), Ok(Value::Float(1000.0)));
    assert_eq!(apply(&float(), None), Ok(Value::Absent));
    assert!(matches!(
        apply(&float(), Some("NaN")),
        Err(EnvError::ExpectedNumericString { .. })
    ));
}

#[test]
fn test_parse_int_prefix() {
    assert_eq!(parse_int_prefix("0"), Some(0));
    assert_eq!(parse_int_prefix("+12abc"), Some(12));
    assert_eq!(parse_int_prefix("\t99"), Some(99));
    assert_eq!(parse_int_prefix("-"), None);
    assert_eq!(parse_int_prefix(".5"), None);
    assert_eq!(parse_int_prefix(""), None);
    assert_eq!(parse_int_prefix("99999999999999999999"), Some(i64::MAX));
    assert_eq!(parse_int_prefix("-99999999999999999999px"), Some(i64::MIN));
}

#[test]
fn test_integer_plug_saturates_overflowing_prefix() {
    let env = Env::new().with("BIG", "99999999999999999999");
    let ctx = Context::from_resolution(resolve(&env, "BIG"));
    let next = integer().apply(&ctx).unwrap();
    assert_eq!(next.value, Value::Integer(i64::MAX));
}

#[test]
fn test_parse_float_prefix() {
    assert_eq!(parse_float_prefix("45.4abc"), Some(45.4));
    assert_eq!(parse_float_prefix(".5"), Some(0.5));
    assert_eq!(parse_float_prefix("5."), Some(5.0));
    assert_eq!(parse_float_prefix("-2.5e-1x"), Some(-0.25));
    assert_eq!(parse_float_prefix("3e"), Some(3.0));
    assert_eq!(parse_float_prefix("-Infinity"), Some(f64::NEG_INFINITY));
    assert_eq!(parse_float_prefix("."), None);
    assert_eq!(parse_float_prefix("e5"), None);
    assert_eq!(parse_float_prefix("abc"), None);
}

// =============================================================================
// url / base64
// =============================================================================

#[test]
fn test_url_passes_through_unchanged() {
    assert_eq!(apply(&url(), Some("http://x/")), Ok(Value::Text("http://x/".into())));
    assert_eq!(
        apply(&url(), Some("HTTP://Foo.Bar")),
        Ok(Value::Text("HTTP://Foo.Bar".into()))
    );
    assert_eq!(apply(&url(), None), Ok(Value::Absent));
}

#[test]
fn test_url_rejects_malformed() {
    let err = apply(&url(), Some("a b c")).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @r#"Expected env value "VAR" to be a valid URL but got `"a b c"`"#
    );
    assert!(apply(&url(), Some("/relative/path")).is_err());
}

#[test]
fn test_base64() {
    assert_eq!(
        apply(&base64(), Some("dGVzdHN0cmluZw==")),
        Ok(Value::Text("teststring".into()))
    );
    assert_eq!(apply(&base64(), None), Ok(Value::Absent));
    assert_eq!(apply(&base64(), Some("!!!")).unwrap_err().kind(), "ExpectedBase64String");
}

#[test]
fn test_decode_base64_leniency() {
    assert_eq!(decode_base64("dGVzdHN0cmluZw").as_deref(), Some("teststring"));
    assert_eq!(decode_base64("dGVz\ndHN0\ncmluZw==").as_deref(), Some("teststring"));
    // URL-safe alphabet: 0xfb 0xff -> "-_8"
    assert_eq!(
        decode_base64("-_8").map(|s| s.contains('\u{FFFD}')),
        Some(true)
    );
}

// =============================================================================
// custom
// =============================================================================

#[test]
fn test_custom_plug() {
    let foo = custom("foo", |ctx: &Context| {
        Ok(if ctx.value.is_absent() {
            ctx.with_value("foo".into())
        } else {
            ctx.clone()
        })
    });
    assert_eq!(foo.name(), "foo");
    assert_eq!(apply(&foo, None), Ok(Value::Text("foo".into())));
    assert_eq!(apply(&foo, Some("bar")), Ok(Value::Text("bar".into())));
}
