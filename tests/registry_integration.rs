//! Tests for the process-wide registry and comparator scenarios

use comparators::prelude::*;
use comparators::{build, constructor, replace_comparator, ConfigurationErrorKind};

#[test]
fn test_builtin_names_are_listed() {
    let names = registered_names();
    for name in [
        "gt",
        "lt",
        "within",
        "contains",
        "all_eq",
        "startswith",
        "shorter_than",
        "match_all",
        "match_any",
    ] {
        assert!(names.iter().any(|n| n == name), "missing {}", name);
    }
}

#[test]
fn test_duplicate_registration_is_rejected() {
    let def = || ComparatorDef::new("registry_it_dup", Arity::Exact(1), |_, _| Ok(true));
    comparator(def()).unwrap();
    let err = comparator(def()).unwrap_err();
    assert_eq!(err.kind(), &ConfigurationErrorKind::Duplicate);
}

#[test]
fn test_replace_overwrites_global_definition() {
    comparator(ComparatorDef::new("registry_it_swap", Arity::Exact(1), |_, _| Ok(false))).unwrap();
    replace_comparator(ComparatorDef::new("registry_it_swap", Arity::Exact(1), |_, _| Ok(true)))
        .unwrap();
    let c = build("registry_it_swap", vec![Value::from(0)]).unwrap();
    assert!(1 == c);
}

#[test]
fn test_constructor_checks_arity() {
    let within_ctor = constructor("within").unwrap();
    assert_eq!(within_ctor.arity(), Arity::Exact(2));
    let err = within_ctor.call(vec![Value::from(1)]).unwrap_err();
    assert!(matches!(err.kind(), ConfigurationErrorKind::Arity { actual: 1, .. }));
}

#[test]
fn test_concurrent_registration() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                comparator(ComparatorDef::new(
                    format!("registry_it_thread_{}", i),
                    Arity::Exact(1),
                    |_, _| Ok(true),
                ))
                .map(|ctor| ctor.name().to_string())
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }
    let names = registered_names();
    assert_eq!(
        names.iter().filter(|n| n.starts_with("registry_it_thread_")).count(),
        8
    );
}

#[test]
fn test_search_first_word_starting_with_t() {
    let words = ["one", "two", "three", "four"];
    assert_eq!(words.iter().position(|w| *w == startswith("t")), Some(1));
}

#[test]
fn test_all_eq_scenarios() {
    assert!([5, 5, 6] != all_eq(5));
    assert!([5; 10] == all_eq(5));
}

#[test]
fn test_describe_gt() {
    assert!(gt(5).describe().contains("gt(5)"));
}

#[test]
fn test_filtering_with_comparators() {
    let statuses = vec![200, 201, 301, 404, 500];
    let errors: Vec<_> = statuses.iter().filter(|s| **s == ge(400)).collect();
    assert_eq!(errors, [&404, &500]);
}
