//! Error types
//!
//! Three failure modes exist, and each surfaces to the immediate caller:
//!
//! - [`ConfigurationError`]: a comparator could not be built (bad arguments,
//!   wrong arity, duplicate registration, ambiguous kwargs key). Raised at
//!   construction or parse time, never deferred to comparison time.
//! - [`EvaluationError`]: a predicate failed while comparing, e.g. `contains`
//!   against an integer. Never coerced to `false`.
//! - [`AttributeLookupError`]: [`all_attrs`](crate::all_attrs) could not find
//!   a named attribute on its target.
//!
//! [`Error`] unifies them so `?` works across the whole API.

use std::error::Error as StdError;
use std::fmt;

/// Boxed error produced by a predicate.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Why a comparator could not be constructed or registered.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationErrorKind {
    /// The number of arguments does not fit the comparator's arity.
    Arity {
        /// Human readable arity, e.g. `2` or `at least 1`.
        expected: String,
        /// Number of arguments supplied.
        actual: usize,
    },
    /// An argument was rejected by the comparator's validator.
    InvalidArgument(String),
    /// A comparator with this name is already registered.
    Duplicate,
    /// The name is not a valid comparator name.
    InvalidName,
    /// No comparator with this name is registered.
    Unknown,
    /// Several registered names match a kwargs key equally well.
    AmbiguousSuffix {
        /// The kwargs key being parsed.
        key: String,
        /// The competing comparator names.
        candidates: Vec<String>,
    },
}

/// A comparator could not be built.
///
/// # Example
///
/// ```rust
/// use comparators::within;
///
/// let err = within(400, 300).unwrap_err();
/// assert_eq!(err.comparator(), "within");
/// assert!(err.to_string().contains("within"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationError {
    comparator: String,
    kind: ConfigurationErrorKind,
}

impl ConfigurationError {
    /// Create a new configuration error for the named comparator.
    pub fn new(comparator: impl Into<String>, kind: ConfigurationErrorKind) -> Self {
        ConfigurationError {
            comparator: comparator.into(),
            kind,
        }
    }

    /// Shorthand for an [`ConfigurationErrorKind::InvalidArgument`] error.
    pub fn invalid_argument(comparator: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(comparator, ConfigurationErrorKind::InvalidArgument(reason.into()))
    }

    /// Name of the comparator that failed to build.
    pub fn comparator(&self) -> &str {
        &self.comparator
    }

    /// What went wrong.
    pub fn kind(&self) -> &ConfigurationErrorKind {
        &self.kind
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ConfigurationErrorKind::Arity { expected, actual } => write!(
                f,
                "comparator `{}` takes {} argument(s), got {}",
                self.comparator, expected, actual
            ),
            ConfigurationErrorKind::InvalidArgument(reason) => {
                write!(f, "invalid arguments for `{}`: {}", self.comparator, reason)
            }
            ConfigurationErrorKind::Duplicate => {
                write!(f, "comparator `{}` is already registered", self.comparator)
            }
            ConfigurationErrorKind::InvalidName => {
                write!(f, "`{}` is not a valid comparator name", self.comparator)
            }
            ConfigurationErrorKind::Unknown => {
                write!(f, "no comparator named `{}` is registered", self.comparator)
            }
            ConfigurationErrorKind::AmbiguousSuffix { key, candidates } => write!(
                f,
                "key `{}` matches several comparators equally well: {}",
                key,
                candidates.join(", ")
            ),
        }
    }
}

impl StdError for ConfigurationError {}

/// A predicate failed while comparing a candidate.
///
/// Carries the rendered comparator, the candidate and, when raised from
/// [`all_attrs`](crate::all_attrs), the field being compared.
///
/// # Example
///
/// ```rust
/// use comparators::{contains, Value};
///
/// let err = contains("x").equals(&Value::from(42)).unwrap_err();
/// assert_eq!(err.comparator(), "contains(\"x\")");
/// assert_eq!(err.candidate(), "42");
/// ```
#[derive(Debug)]
pub struct EvaluationError {
    comparator: String,
    candidate: String,
    field: Option<String>,
    source: BoxError,
}

impl EvaluationError {
    /// Wrap a predicate failure.
    pub fn new(
        comparator: impl Into<String>,
        candidate: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        EvaluationError {
            comparator: comparator.into(),
            candidate: candidate.into(),
            field: None,
            source: source.into(),
        }
    }

    /// Attach the name of the field being compared.
    ///
    /// An existing field is kept, so the innermost field wins.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        if self.field.is_none() {
            self.field = Some(field.into());
        }
        self
    }

    /// Rendered description of the failing comparator.
    pub fn comparator(&self) -> &str {
        &self.comparator
    }

    /// Rendered candidate value.
    pub fn candidate(&self) -> &str {
        &self.candidate
    }

    /// Field being compared, if known.
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// The underlying predicate error.
    pub fn cause(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.source.as_ref()
    }
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(
                f,
                "{} failed for field `{}` = {}: {}",
                self.comparator, field, self.candidate, self.source
            ),
            None => write!(
                f,
                "{} failed for {}: {}",
                self.comparator, self.candidate, self.source
            ),
        }
    }
}

impl StdError for EvaluationError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.source.as_ref())
    }
}

/// A named attribute is missing from the target of [`all_attrs`](crate::all_attrs).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeLookupError {
    field: String,
    expected: String,
}

impl AttributeLookupError {
    /// Create a lookup error for `field`, noting the comparator it was meant for.
    pub fn new(field: impl Into<String>, expected: impl Into<String>) -> Self {
        AttributeLookupError {
            field: field.into(),
            expected: expected.into(),
        }
    }

    /// The missing field.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Rendered comparator the field would have been compared to.
    pub fn expected(&self) -> &str {
        &self.expected
    }
}

impl fmt::Display for AttributeLookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "target has no attribute `{}` (expected {})",
            self.field, self.expected
        )
    }
}

impl StdError for AttributeLookupError {}

/// Any error raised by this crate.
#[derive(Debug)]
pub enum Error {
    /// See [`ConfigurationError`].
    Configuration(ConfigurationError),
    /// See [`EvaluationError`].
    Evaluation(EvaluationError),
    /// See [`AttributeLookupError`].
    AttributeLookup(AttributeLookupError),
}

impl Error {
    /// Returns true for configuration errors.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }

    /// Returns true for evaluation errors.
    pub fn is_evaluation(&self) -> bool {
        matches!(self, Error::Evaluation(_))
    }

    /// Returns true for attribute lookup errors.
    pub fn is_attribute_lookup(&self) -> bool {
        matches!(self, Error::AttributeLookup(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Configuration(e) => write!(f, "{}", e),
            Error::Evaluation(e) => write!(f, "{}", e),
            Error::AttributeLookup(e) => write!(f, "{}", e),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Configuration(e) => Some(e),
            Error::Evaluation(e) => Some(e),
            Error::AttributeLookup(e) => Some(e),
        }
    }
}

impl From<ConfigurationError> for Error {
    fn from(e: ConfigurationError) -> Self {
        Error::Configuration(e)
    }
}

impl From<EvaluationError> for Error {
    fn from(e: EvaluationError) -> Self {
        Error::Evaluation(e)
    }
}

impl From<AttributeLookupError> for Error {
    fn from(e: AttributeLookupError) -> Self {
        Error::AttributeLookup(e)
    }
}
