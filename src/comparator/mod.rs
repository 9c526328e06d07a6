//! Comparator core
//!
//! A [`Comparator`] binds reference value(s) and comparison logic into one
//! value that can stand in for an expected value in ordinary equality-based
//! code. Comparing a candidate runs the predicate:
//!
//! ```rust
//! use comparators::prelude::*;
//!
//! assert!(gt(5).equals(&Value::from(6)).unwrap());
//! assert!(7 == gt(5));
//! assert!(gt(5) == 7);
//! assert_eq!(gt(5).to_string(), "gt(5)");
//! ```
//!
//! Every comparator is built from a [`ComparatorDef`], which names the
//! comparison, declares its [`Arity`], and holds the predicate. Predicates
//! receive the candidate first, then the reference arguments in declared
//! order:
//!
//! ```rust
//! use comparators::prelude::*;
//!
//! let def = ComparatorDef::new("divisible_by", Arity::Exact(1), |candidate, args| {
//!     match (candidate.as_i64(), args[0].as_i64()) {
//!         (Some(n), Some(d)) if d != 0 => Ok(n % d == 0),
//!         _ => Err("divisible_by needs non-zero integers".into()),
//!     }
//! });
//!
//! let by_three = def.build(vec![Value::from(3)]).unwrap();
//! assert!(9 == by_three);
//! assert!(def.build(vec![]).is_err()); // arity is checked eagerly
//! ```
//!
//! Comparators implement neither `Eq` nor `Hash`. Predicate equality is not
//! reflexive or transitive, so they cannot serve as map or set keys.

mod collection;
mod combinators;
mod equality;
mod number;
mod pattern;
mod string;

use std::fmt;
use std::sync::Arc;

use crate::error::{BoxError, ConfigurationError, ConfigurationErrorKind, EvaluationError};
use crate::value::Value;

pub use collection::{all_eq, contains, contains_dict, eq_all, eq_any, one_of, shorter_than};
pub use combinators::{match_all, match_any, Mode};
pub use number::{eq, ge, gt, le, lt, ne, within};
pub use pattern::{re_match, re_search};
pub use string::{endswith, startswith};

/// Definitions of every built-in comparator, combinators included.
pub(crate) fn builtin_defs() -> Vec<ComparatorDef> {
    let mut defs = number::defs();
    defs.extend(string::defs());
    defs.extend(pattern::defs());
    defs.extend(collection::defs());
    defs.push(ComparatorDef::combinator(Mode::All));
    defs.push(ComparatorDef::combinator(Mode::Any));
    defs
}

/// Signature of a comparator predicate: `(candidate, reference args) -> bool`.
pub type PredicateFn = dyn Fn(&Value, &[Value]) -> Result<bool, BoxError> + Send + Sync;

/// Signature of an eager argument check run when a comparator is built.
pub type ValidatorFn = dyn Fn(&[Value]) -> Result<(), String> + Send + Sync;

/// Number of reference arguments a comparator accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly `n` arguments.
    Exact(usize),
    /// `n` or more arguments.
    AtLeast(usize),
}

impl Arity {
    /// Whether `count` arguments are acceptable.
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            Arity::Exact(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "{}", n),
            Arity::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

#[derive(Clone)]
enum Logic {
    Predicate(Arc<PredicateFn>),
    Combine(Mode),
}

/// A named comparator constructor.
///
/// Definitions are what the [`Registry`](crate::Registry) stores. Calling
/// [`build`](ComparatorDef::build) checks the arity and runs the optional
/// validator before producing a [`Comparator`], so malformed comparators are
/// rejected at construction time rather than at comparison time.
#[derive(Clone)]
pub struct ComparatorDef {
    name: String,
    arity: Arity,
    logic: Logic,
    validator: Option<Arc<ValidatorFn>>,
}

impl ComparatorDef {
    /// Define a comparator from a predicate.
    pub fn new<F>(name: impl Into<String>, arity: Arity, predicate: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Result<bool, BoxError> + Send + Sync + 'static,
    {
        ComparatorDef {
            name: name.into(),
            arity,
            logic: Logic::Predicate(Arc::new(predicate)),
            validator: None,
        }
    }

    pub(crate) fn combinator(mode: Mode) -> Self {
        ComparatorDef {
            name: mode.name().to_string(),
            arity: Arity::AtLeast(0),
            logic: Logic::Combine(mode),
            validator: None,
        }
    }

    /// Attach an argument validator.
    ///
    /// The validator sees the reference arguments and returns a reason on
    /// rejection, which becomes a [`ConfigurationError`].
    pub fn with_validator<V>(mut self, validator: V) -> Self
    where
        V: Fn(&[Value]) -> Result<(), String> + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(validator));
        self
    }

    /// The comparator's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The comparator's arity.
    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Build a comparator from reference arguments.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] when the argument count does not fit
    /// the arity or the validator rejects the arguments.
    pub fn build(&self, args: Vec<Value>) -> Result<Comparator, ConfigurationError> {
        if !self.arity.accepts(args.len()) {
            return Err(ConfigurationError::new(
                &self.name,
                ConfigurationErrorKind::Arity {
                    expected: self.arity.to_string(),
                    actual: args.len(),
                },
            ));
        }
        if let Some(validator) = &self.validator {
            validator(&args)
                .map_err(|reason| ConfigurationError::invalid_argument(&self.name, reason))?;
        }
        Ok(self.instantiate(args))
    }

    /// Build without checks; callers guarantee the arguments are valid.
    pub(crate) fn instantiate(&self, args: Vec<Value>) -> Comparator {
        match &self.logic {
            Logic::Predicate(predicate) => Comparator {
                kind: Kind::Predicate {
                    name: Arc::from(self.name.as_str()),
                    args,
                    predicate: Arc::clone(predicate),
                },
            },
            Logic::Combine(mode) => {
                Comparator::combine(*mode, args.into_iter().map(eq).collect())
            }
        }
    }
}

impl fmt::Debug for ComparatorDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparatorDef")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("validated", &self.validator.is_some())
            .finish()
    }
}

#[derive(Clone)]
enum Kind {
    Predicate {
        name: Arc<str>,
        args: Vec<Value>,
        predicate: Arc<PredicateFn>,
    },
    Combine {
        mode: Mode,
        children: Vec<Comparator>,
    },
}

/// A reference value bound to comparison logic.
///
/// Immutable and cheap to clone. See the [module docs](self) for usage.
#[derive(Clone)]
pub struct Comparator {
    kind: Kind,
}

impl Comparator {
    pub(crate) fn combine(mode: Mode, children: Vec<Comparator>) -> Self {
        Comparator {
            kind: Kind::Combine { mode, children },
        }
    }

    /// Compare a candidate.
    ///
    /// The result depends only on the candidate and the stored references.
    ///
    /// # Errors
    ///
    /// A failing predicate surfaces as an [`EvaluationError`] naming this
    /// comparator (or the nested child that failed) and the candidate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use comparators::prelude::*;
    ///
    /// assert!(within(300, 400).unwrap().equals(&Value::from(350)).unwrap());
    /// assert!(gt(5).equals(&Value::from("five")).is_err());
    /// ```
    pub fn equals(&self, candidate: &Value) -> Result<bool, EvaluationError> {
        match &self.kind {
            Kind::Predicate {
                args, predicate, ..
            } => predicate(candidate, args).map_err(|cause| {
                #[cfg(feature = "tracing")]
                tracing::debug!("comparator {} failed on {}: {}", self, candidate, cause);
                EvaluationError::new(self.describe(), candidate.to_string(), cause)
            }),
            Kind::Combine { mode, children } => combinators::evaluate(*mode, children, candidate),
        }
    }

    /// Render as `name(arg, ...)`, e.g. `gt(5)` or `match_any(eq(1), lt(0))`.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Name of the comparator, `match_all`/`match_any` for combinators.
    pub fn name(&self) -> &str {
        match &self.kind {
            Kind::Predicate { name, .. } => name.as_ref(),
            Kind::Combine { mode, .. } => mode.name(),
        }
    }

    /// Reference arguments of a predicate comparator; empty for combinators.
    pub fn args(&self) -> &[Value] {
        match &self.kind {
            Kind::Predicate { args, .. } => args,
            Kind::Combine { .. } => &[],
        }
    }

    /// Children of a combinator; empty for predicate comparators.
    pub fn children(&self) -> &[Comparator] {
        match &self.kind {
            Kind::Predicate { .. } => &[],
            Kind::Combine { children, .. } => children,
        }
    }

    /// Compare, panicking on evaluation errors. Backs the `==` operator.
    pub(crate) fn equals_or_panic(&self, candidate: &Value) -> bool {
        match self.equals(candidate) {
            Ok(matched) => matched,
            Err(e) => panic!("{}", e),
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Kind::Predicate { name, args, .. } => {
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            Kind::Combine { mode, children } => {
                write!(f, "{}(", mode.name())?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl fmt::Debug for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Comparator({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn always(result: bool) -> ComparatorDef {
        ComparatorDef::new("always", Arity::AtLeast(0), move |_, _| Ok(result))
    }

    #[test]
    fn test_arity_accepts() {
        assert!(Arity::Exact(2).accepts(2));
        assert!(!Arity::Exact(2).accepts(1));
        assert!(Arity::AtLeast(1).accepts(3));
        assert!(!Arity::AtLeast(1).accepts(0));
        assert_eq!(Arity::AtLeast(1).to_string(), "at least 1");
    }

    #[test]
    fn test_build_checks_arity() {
        let def = ComparatorDef::new("pair", Arity::Exact(2), |_, _| Ok(true));
        let err = def.build(vec![Value::from(1)]).unwrap_err();
        assert_eq!(err.comparator(), "pair");
        assert!(matches!(
            err.kind(),
            ConfigurationErrorKind::Arity { actual: 1, .. }
        ));
        assert!(def.build(vec![Value::from(1), Value::from(2)]).is_ok());
    }

    #[test]
    fn test_build_runs_validator() {
        let def = ComparatorDef::new("positive_ref", Arity::Exact(1), |_, _| Ok(true))
            .with_validator(|args| match args[0].as_i64() {
                Some(n) if n > 0 => Ok(()),
                _ => Err("reference must be a positive integer".to_string()),
            });
        assert!(def.build(vec![Value::from(3)]).is_ok());
        let err = def.build(vec![Value::from(-3)]).unwrap_err();
        assert!(err.to_string().contains("positive integer"));
    }

    #[test]
    fn test_predicate_receives_candidate_then_args() {
        let def = ComparatorDef::new("sum_is", Arity::Exact(2), |candidate, args| {
            Ok(candidate.as_i64() == Some(args[0].as_i64().unwrap_or(0) + args[1].as_i64().unwrap_or(0)))
        });
        let c = def.build(vec![Value::from(2), Value::from(3)]).unwrap();
        assert!(c.equals(&Value::from(5)).unwrap());
        assert!(!c.equals(&Value::from(6)).unwrap());
    }

    #[test]
    fn test_predicate_error_is_wrapped_not_swallowed() {
        let def = ComparatorDef::new("boom", Arity::Exact(1), |_, _| Err("kaboom".into()));
        let c = def.build(vec![Value::from("x")]).unwrap();
        let err = c.equals(&Value::from(1)).unwrap_err();
        assert_eq!(err.comparator(), "boom(\"x\")");
        assert_eq!(err.candidate(), "1");
        assert_eq!(err.cause().to_string(), "kaboom");
    }

    #[test]
    fn test_describe() {
        let c = always(true).build(vec![Value::from(1), Value::from("a")]).unwrap();
        assert_eq!(c.describe(), "always(1, \"a\")");
        assert_eq!(c.name(), "always");
        assert_eq!(c.args().len(), 2);
        assert!(c.children().is_empty());
        assert_eq!(format!("{:?}", c), "Comparator(always(1, \"a\"))");
    }

    #[test]
    #[should_panic(expected = "boom(1) failed for 2: kaboom")]
    fn test_operator_panics_on_evaluation_error() {
        let def = ComparatorDef::new("boom", Arity::Exact(1), |_, _| Err("kaboom".into()));
        let c = def.build(vec![Value::from(1)]).unwrap();
        let _ = c == Value::from(2);
    }
}
