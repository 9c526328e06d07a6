//! Regular expression comparators
//!
//! `re_search` matches anywhere in the candidate; `re_match` only at its
//! start. Patterns use the [`regex`] syntax and are compiled when the
//! comparator is built, so a malformed pattern is a
//! [`ConfigurationError`] rather than an evaluation failure.

use std::sync::LazyLock;

use regex::Regex;

use super::{Arity, Comparator, ComparatorDef};
use crate::error::{BoxError, ConfigurationError};
use crate::value::Value;

#[derive(Clone, Copy)]
enum Anchor {
    Anywhere,
    Start,
}

fn compile(anchor: Anchor, pattern: &str) -> Result<Regex, regex::Error> {
    match anchor {
        Anchor::Anywhere => Regex::new(pattern),
        Anchor::Start => Regex::new(&format!(r"\A(?:{})", pattern)),
    }
}

fn pattern_of(args: &[Value]) -> Result<&str, String> {
    args[0]
        .as_str()
        .ok_or_else(|| format!("pattern {} is not a string", args[0]))
}

fn regex_def(name: &'static str, anchor: Anchor) -> ComparatorDef {
    ComparatorDef::new(name, Arity::Exact(1), move |candidate, args| {
        let text = candidate.as_str().ok_or_else(|| -> BoxError {
            format!("{} {} is not a string", candidate.kind(), candidate).into()
        })?;
        let re = compile(anchor, pattern_of(args)?)?;
        Ok(re.is_match(text))
    })
    .with_validator(move |args| {
        compile(anchor, pattern_of(args)?)
            .map(|_| ())
            .map_err(|e| e.to_string())
    })
}

static RE_SEARCH: LazyLock<ComparatorDef> =
    LazyLock::new(|| regex_def("re_search", Anchor::Anywhere));

static RE_MATCH: LazyLock<ComparatorDef> = LazyLock::new(|| regex_def("re_match", Anchor::Start));

pub(super) fn defs() -> Vec<ComparatorDef> {
    vec![RE_SEARCH.clone(), RE_MATCH.clone()]
}

/// Match strings containing a match of `pattern` anywhere.
///
/// # Errors
///
/// Fails with a [`ConfigurationError`] when `pattern` does not compile.
///
/// # Example
///
/// ```rust
/// use comparators::prelude::*;
///
/// let digits = re_search(r"\d+").unwrap();
/// assert!("order 66" == digits);
/// assert!("no numbers" != digits);
/// assert!(re_search("(").is_err());
/// ```
pub fn re_search(pattern: &str) -> Result<Comparator, ConfigurationError> {
    RE_SEARCH.build(vec![Value::from(pattern)])
}

/// Match strings whose start matches `pattern`.
///
/// # Errors
///
/// Fails with a [`ConfigurationError`] when `pattern` does not compile.
///
/// # Example
///
/// ```rust
/// use comparators::prelude::*;
///
/// let version = re_match(r"v\d").unwrap();
/// assert!("v2.1" == version);
/// assert!("release v2" != version);
/// ```
pub fn re_match(pattern: &str) -> Result<Comparator, ConfigurationError> {
    RE_MATCH.build(vec![Value::from(pattern)])
}
