//! Logical combinators
//!
//! `match_all` and `match_any` fold several comparators (or plain values)
//! into one. The result is itself a [`Comparator`], so combinators nest to
//! any depth.

use super::Comparator;
use crate::error::EvaluationError;
use crate::value::Value;

/// How a combinator aggregates its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Every child must match.
    All,
    /// At least one child must match.
    Any,
}

impl Mode {
    /// Registered name of the combinator.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::All => "match_all",
            Mode::Any => "match_any",
        }
    }
}

/// Children are evaluated left to right and evaluation stops at the first
/// deciding child, so a later child's error is never reached.
pub(super) fn evaluate(
    mode: Mode,
    children: &[Comparator],
    candidate: &Value,
) -> Result<bool, EvaluationError> {
    match mode {
        Mode::All => {
            for child in children {
                if !child.equals(candidate)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        Mode::Any => {
            for child in children {
                if child.equals(candidate)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
    }
}

/// Match only when every child matches.
///
/// Plain values are wrapped with [`eq`](super::eq). An empty list matches
/// everything.
///
/// # Example
///
/// ```rust
/// use comparators::prelude::*;
///
/// let in_range = match_all([gt(0), lt(100)]);
/// assert!(50 == in_range);
/// assert!(100 != in_range);
/// assert_eq!(in_range.to_string(), "match_all(gt(0), lt(100))");
///
/// let anything = match_all(Vec::<Comparator>::new());
/// assert!("whatever" == anything);
/// ```
pub fn match_all<I>(children: I) -> Comparator
where
    I: IntoIterator,
    I::Item: Into<Comparator>,
{
    Comparator::combine(Mode::All, children.into_iter().map(Into::into).collect())
}

/// Match when at least one child matches.
///
/// Plain values are wrapped with [`eq`](super::eq). An empty list matches
/// nothing.
///
/// # Example
///
/// ```rust
/// use comparators::prelude::*;
///
/// let ok_status = match_any([200, 204]);
/// assert!(204 == ok_status);
/// assert!(404 != ok_status);
///
/// let outside = match_any([lt(0), gt(100)]);
/// assert!(-5 == outside);
/// assert!(50 != outside);
/// ```
pub fn match_any<I>(children: I) -> Comparator
where
    I: IntoIterator,
    I::Item: Into<Comparator>,
{
    Comparator::combine(Mode::Any, children.into_iter().map(Into::into).collect())
}
