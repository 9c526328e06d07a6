//! Equality and ordering comparators
//!
//! Ordering works on any pair of values [`Value::compare`] can order: numbers
//! (ints and floats mix), strings, booleans, and lists. Comparing values that
//! have no ordering is an evaluation error rather than a silent mismatch.

use std::cmp::Ordering;
use std::sync::LazyLock;

use super::{Arity, Comparator, ComparatorDef};
use crate::error::{BoxError, ConfigurationError};
use crate::value::Value;

fn ordering(candidate: &Value, reference: &Value) -> Result<Ordering, BoxError> {
    candidate.compare(reference).ok_or_else(|| {
        format!(
            "cannot order {} {} against {} {}",
            candidate.kind(),
            candidate,
            reference.kind(),
            reference
        )
        .into()
    })
}

fn ordered(name: &'static str, accept: fn(Ordering) -> bool) -> ComparatorDef {
    ComparatorDef::new(name, Arity::Exact(1), move |candidate, args| {
        Ok(accept(ordering(candidate, &args[0])?))
    })
}

static EQ: LazyLock<ComparatorDef> = LazyLock::new(|| {
    ComparatorDef::new("eq", Arity::Exact(1), |candidate, args| Ok(*candidate == args[0]))
});

static NE: LazyLock<ComparatorDef> = LazyLock::new(|| {
    ComparatorDef::new("ne", Arity::Exact(1), |candidate, args| Ok(*candidate != args[0]))
});

static GT: LazyLock<ComparatorDef> = LazyLock::new(|| ordered("gt", Ordering::is_gt));
static GE: LazyLock<ComparatorDef> = LazyLock::new(|| ordered("ge", Ordering::is_ge));
static LT: LazyLock<ComparatorDef> = LazyLock::new(|| ordered("lt", Ordering::is_lt));
static LE: LazyLock<ComparatorDef> = LazyLock::new(|| ordered("le", Ordering::is_le));

static WITHIN: LazyLock<ComparatorDef> = LazyLock::new(|| {
    ComparatorDef::new("within", Arity::Exact(2), |candidate, args| {
        Ok(ordering(candidate, &args[0])?.is_ge() && ordering(candidate, &args[1])?.is_le())
    })
    .with_validator(|args| match args[0].compare(&args[1]) {
        Some(Ordering::Greater) => Err(format!(
            "lower bound {} is greater than upper bound {}",
            args[0], args[1]
        )),
        Some(_) => Ok(()),
        None => Err(format!(
            "bounds {} and {} are not comparable",
            args[0], args[1]
        )),
    })
});

pub(super) fn defs() -> Vec<ComparatorDef> {
    [&EQ, &NE, &GT, &GE, &LT, &LE, &WITHIN]
        .into_iter()
        .map(|def| ComparatorDef::clone(def))
        .collect()
}

/// Match values equal to `value`. Plain expected values are wrapped with this.
///
/// # Example
///
/// ```rust
/// use comparators::prelude::*;
///
/// assert!(5 == eq(5));
/// assert!(5.0 == eq(5));
/// assert!("5" != eq(5));
/// ```
pub fn eq(value: impl Into<Value>) -> Comparator {
    EQ.instantiate(vec![value.into()])
}

/// Match values not equal to `value`.
///
/// # Example
///
/// ```rust
/// use comparators::prelude::*;
///
/// assert!(4 == ne(5));
/// assert!(5 != ne(5));
/// ```
pub fn ne(value: impl Into<Value>) -> Comparator {
    NE.instantiate(vec![value.into()])
}

/// Match values greater than `value`.
///
/// # Example
///
/// ```rust
/// use comparators::prelude::*;
///
/// assert!(6 == gt(5));
/// assert!(5 != gt(5));
/// assert!("b" == gt("a"));
/// ```
pub fn gt(value: impl Into<Value>) -> Comparator {
    GT.instantiate(vec![value.into()])
}

/// Match values greater than or equal to `value`.
pub fn ge(value: impl Into<Value>) -> Comparator {
    GE.instantiate(vec![value.into()])
}

/// Match values less than `value`.
///
/// # Example
///
/// ```rust
/// use comparators::prelude::*;
///
/// assert!(200 == lt(206));
/// assert!(206 != lt(206));
/// ```
pub fn lt(value: impl Into<Value>) -> Comparator {
    LT.instantiate(vec![value.into()])
}

/// Match values less than or equal to `value`.
pub fn le(value: impl Into<Value>) -> Comparator {
    LE.instantiate(vec![value.into()])
}

/// Match values in `lo..=hi`.
///
/// # Errors
///
/// Fails with a [`ConfigurationError`] when `lo > hi` or the bounds cannot
/// be ordered against each other.
///
/// # Example
///
/// ```rust
/// use comparators::prelude::*;
///
/// let c = within(300, 400).unwrap();
/// assert!(300 == c);
/// assert!(400 == c);
/// assert!(401 != c);
/// assert!(within(400, 300).is_err());
/// ```
pub fn within(
    lo: impl Into<Value>,
    hi: impl Into<Value>,
) -> Result<Comparator, ConfigurationError> {
    WITHIN.build(vec![lo.into(), hi.into()])
}
