//! Membership, element and length comparators

use std::collections::BTreeMap;
use std::sync::LazyLock;

use super::{Arity, Comparator, ComparatorDef};
use crate::error::{BoxError, ConfigurationError};
use crate::value::Value;

fn unsupported(candidate: &Value, what: &str) -> BoxError {
    format!("{} {} does not support {}", candidate.kind(), candidate, what).into()
}

static CONTAINS: LazyLock<ComparatorDef> = LazyLock::new(|| {
    ComparatorDef::new("contains", Arity::Exact(1), |candidate, args| {
        candidate
            .contains(&args[0])
            .ok_or_else(|| unsupported(candidate, "membership testing"))
    })
});

static ALL_EQ: LazyLock<ComparatorDef> = LazyLock::new(|| {
    ComparatorDef::new("all_eq", Arity::Exact(1), |candidate, args| {
        let elements = candidate
            .elements()
            .ok_or_else(|| unsupported(candidate, "iteration"))?;
        Ok(elements.iter().all(|element| *element == args[0]))
    })
});

static SHORTER_THAN: LazyLock<ComparatorDef> = LazyLock::new(|| {
    ComparatorDef::new("shorter_than", Arity::Exact(1), |candidate, args| {
        let len = candidate
            .len()
            .ok_or_else(|| unsupported(candidate, "length"))?;
        Ok(args[0].as_i64().is_some_and(|limit| (len as i64) < limit))
    })
    .with_validator(|args| match args[0].as_i64() {
        Some(n) if n >= 0 => Ok(()),
        _ => Err(format!("length {} is not a non-negative integer", args[0])),
    })
});

static ONE_OF: LazyLock<ComparatorDef> = LazyLock::new(|| {
    ComparatorDef::new("one_of", Arity::Exact(1), |candidate, args| {
        args[0].contains(candidate).ok_or_else(|| {
            format!(
                "cannot look up {} {} in {}",
                candidate.kind(),
                candidate,
                args[0]
            )
            .into()
        })
    })
    .with_validator(|args| match args[0] {
        Value::List(_) | Value::Map(_) | Value::Str(_) => Ok(()),
        ref other => Err(format!("expected a list, map or string, got {}", other.kind())),
    })
});

static EQ_ANY: LazyLock<ComparatorDef> = LazyLock::new(|| {
    ComparatorDef::new("eq_any", Arity::AtLeast(1), |candidate, args| {
        Ok(args.iter().any(|arg| candidate == arg))
    })
});

static EQ_ALL: LazyLock<ComparatorDef> = LazyLock::new(|| {
    ComparatorDef::new("eq_all", Arity::AtLeast(1), |candidate, args| {
        Ok(args.iter().all(|arg| candidate == arg))
    })
});

static CONTAINS_DICT: LazyLock<ComparatorDef> = LazyLock::new(|| {
    ComparatorDef::new("contains_dict", Arity::Exact(1), |candidate, args| {
        let actual = candidate
            .as_map()
            .ok_or_else(|| unsupported(candidate, "key lookup"))?;
        Ok(args[0].as_map().is_some_and(|expected| {
            expected
                .iter()
                .all(|(key, value)| actual.get(key) == Some(value))
        }))
    })
    .with_validator(|args| match args[0] {
        Value::Map(_) => Ok(()),
        ref other => Err(format!("expected a map, got {}", other.kind())),
    })
});

pub(super) fn defs() -> Vec<ComparatorDef> {
    [
        &CONTAINS,
        &ALL_EQ,
        &SHORTER_THAN,
        &ONE_OF,
        &EQ_ANY,
        &EQ_ALL,
        &CONTAINS_DICT,
    ]
    .into_iter()
    .map(|def| ComparatorDef::clone(def))
    .collect()
}

/// Match strings containing a substring, lists containing an element, or
/// maps containing a key.
///
/// # Example
///
/// ```rust
/// use comparators::prelude::*;
///
/// assert!("user@example.com" == contains("@"));
/// assert!(vec![1, 2, 3] == contains(2));
/// assert!(contains("x").equals(&Value::from(5)).is_err());
/// ```
pub fn contains(member: impl Into<Value>) -> Comparator {
    CONTAINS.instantiate(vec![member.into()])
}

/// Match sequences whose every element equals `value`.
///
/// Strings iterate their chars, maps their keys. Empty sequences match.
///
/// # Example
///
/// ```rust
/// use comparators::prelude::*;
///
/// assert!([5, 5, 6] != all_eq(5));
/// assert!(vec![5; 10] == all_eq(5));
/// assert!(Vec::<i32>::new() == all_eq(5));
/// ```
pub fn all_eq(value: impl Into<Value>) -> Comparator {
    ALL_EQ.instantiate(vec![value.into()])
}

/// Match strings, lists or maps with fewer than `len` items.
///
/// # Example
///
/// ```rust
/// use comparators::prelude::*;
///
/// assert!("abc" == shorter_than(4));
/// assert!("abcd" != shorter_than(4));
/// ```
pub fn shorter_than(len: usize) -> Comparator {
    SHORTER_THAN.instantiate(vec![Value::from(len)])
}

/// Match values that are members of `items`.
///
/// # Example
///
/// ```rust
/// use comparators::prelude::*;
///
/// let methods = one_of(["GET", "HEAD"]);
/// assert!("GET" == methods);
/// assert!("POST" != methods);
/// ```
pub fn one_of<I>(items: I) -> Comparator
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    ONE_OF.instantiate(vec![items.into_iter().collect()])
}

/// Match values equal to at least one of `values`.
///
/// # Errors
///
/// Fails with a [`ConfigurationError`] when `values` is empty.
pub fn eq_any<I>(values: I) -> Result<Comparator, ConfigurationError>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    EQ_ANY.build(values.into_iter().map(Into::into).collect())
}

/// Match values equal to every one of `values`.
///
/// # Errors
///
/// Fails with a [`ConfigurationError`] when `values` is empty.
pub fn eq_all<I>(values: I) -> Result<Comparator, ConfigurationError>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    EQ_ALL.build(values.into_iter().map(Into::into).collect())
}

/// Match maps holding every given key with an equal value.
///
/// Missing keys are a mismatch; extra keys in the candidate are ignored.
///
/// # Example
///
/// ```rust
/// use comparators::prelude::*;
/// use std::collections::BTreeMap;
///
/// let mut headers = BTreeMap::new();
/// headers.insert("content-type", "text/plain");
/// headers.insert("server", "nginx");
///
/// assert!(Value::from(headers.clone()) == contains_dict([("server", "nginx")]));
/// assert!(Value::from(headers) != contains_dict([("etag", "abc")]));
/// ```
pub fn contains_dict<I, K, V>(entries: I) -> Comparator
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    let map: BTreeMap<String, Value> = entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();
    CONTAINS_DICT.instantiate(vec![Value::Map(map)])
}
