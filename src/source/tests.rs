// sugar-env: environment variable access with composable plugs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Names, Source, SourceKind, read_present, resolve};
use crate::core::env::Env;

#[test]
fn test_single_name_is_wrapped() {
    let env = Env::new().with("PORT", "8080");
    let res = resolve(&env, "PORT");
    assert_eq!(res.sources, vec![Source::env("PORT", Some("8080".into()))]);
    assert_eq!(res.value(), Some("8080"));
}

#[test]
fn test_first_present_candidate_wins() {
    let env = Env::new()
        .with("DEV_DB_URL", "postgres://dev")
        .with("DB_URL", "postgres://shared");
    let res = resolve(&env, ["TEST_DB_URL", "DEV_DB_URL", "DB_URL"]);

    assert_eq!(res.sources.len(), 3);
    assert_eq!(res.selected.as_ref().unwrap().name, "DEV_DB_URL");
    assert_eq!(res.value(), Some("postgres://dev"));
}

#[test]
fn test_blank_values_are_absent() {
    let env = Env::new().with("A", " \t ").with("B", "");
    let res = resolve(&env, ["A", "B"]);

    assert!(res.sources.iter().all(|s| s.value.is_none()));
    // nothing present: the first candidate is still reported
    assert_eq!(res.selected.as_ref().unwrap().name, "A");
    assert_eq!(res.value(), None);
}

#[test]
fn test_raw_value_is_not_trimmed() {
    let env = Env::new().with("NAME", "  padded  ");
    assert_eq!(resolve(&env, "NAME").value(), Some("  padded  "));
    assert_eq!(read_present(&env, "NAME").as_deref(), Some("  padded  "));
}

#[test]
fn test_empty_name_list() {
    let res = resolve(&Env::new(), Vec::<String>::new());
    assert!(res.sources.is_empty());
    assert!(res.selected.is_none());
    assert_eq!(res.value(), None);
}

#[test]
fn test_all_sources_tagged_env() {
    let res = resolve(&Env::new(), vec!["X", "Y"]);
    assert!(res.sources.iter().all(|s| s.kind == SourceKind::Env));
}

#[test]
fn test_names_conversions() {
    let owned = vec!["A".to_string(), "B".to_string()];
    assert_eq!(Names::from(owned.as_slice()), Names::from(["A", "B"]));
    assert_eq!(Names::from(&owned[0]).as_slice(), ["A".to_string()]);
    assert!(Names::default().is_empty());
}

#[test]
fn test_source_kind_display() {
    assert_eq!(SourceKind::Env.to_string(), "env");
    assert_eq!(Source::literal("defaultValue", "3000").kind.to_string(), "literal");
}
