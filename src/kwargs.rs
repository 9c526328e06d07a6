//! Keyword-argument DSL
//!
//! Keys of the form `<field>_<comparator>` become `(field, comparator)`
//! pairs; any other key is a field compared for plain equality:
//!
//! ```rust
//! use comparators::prelude::*;
//!
//! let pairs = kwargs2cmp([
//!     ("status_lt", Expected::from(206)),
//!     ("body_len_within", Expected::from(vec![300, 400])),
//!     ("body", Expected::from("asdf")),
//! ])
//! .unwrap();
//!
//! let rendered: Vec<String> = pairs.iter().map(|(f, c)| format!("{}={}", f, c)).collect();
//! assert_eq!(
//!     rendered,
//!     ["status=lt(206)", "body_len=within(300, 400)", "body=eq(\"asdf\")"]
//! );
//! ```
//!
//! When several registered names end a key, the longest wins, so with both
//! `lt` and `not_lt` registered, `status_not_lt` reads as `status` +
//! `not_lt`. A list value is spread into positional arguments unless the
//! comparator takes exactly one argument: `[300, 400]` becomes
//! `within(300, 400)` but `one_of([1, 2])` keeps its list.

use crate::comparator::{eq, Arity, Comparator};
use crate::error::ConfigurationError;
use crate::registry::{snapshot, Registry};
use crate::value::Value;

/// Expected value for a kwargs key: a plain value or a ready comparator.
///
/// A comparator is used as-is and its key is taken verbatim as the field
/// name, so `("status", Expected::from(lt(206)))` means the same as
/// `("status_lt", Expected::from(206))`.
#[derive(Debug, Clone)]
pub enum Expected {
    /// A value, run through the suffix lookup.
    Value(Value),
    /// A comparator, used unchanged.
    Comparator(Comparator),
}

impl From<Comparator> for Expected {
    fn from(c: Comparator) -> Self {
        Expected::Comparator(c)
    }
}

impl<T: Into<Value>> From<T> for Expected {
    fn from(v: T) -> Self {
        Expected::Value(v.into())
    }
}

/// A field name paired with the comparator its value must satisfy.
pub type FieldComparator = (String, Comparator);

/// Lazy iterator produced by [`kwargs2compr`] and [`Registry::parse_kwargs`].
///
/// Yields one item per input entry, in input order.
#[derive(Debug)]
pub struct ParseKwargs<I> {
    registry: Registry,
    entries: I,
}

impl<I, K, V> Iterator for ParseKwargs<I>
where
    I: Iterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<Expected>,
{
    type Item = Result<FieldComparator, ConfigurationError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.entries.next()?;
        Some(parse_entry(&self.registry, key.as_ref(), value.into()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

fn parse_entry(
    registry: &Registry,
    key: &str,
    value: Expected,
) -> Result<FieldComparator, ConfigurationError> {
    let value = match value {
        Expected::Comparator(c) => return Ok((key.to_string(), c)),
        Expected::Value(value) => value,
    };

    match registry.split_key(key)? {
        Some((field, ctor)) => {
            let args = match (ctor.arity(), value) {
                (Arity::Exact(1), value) => vec![value],
                (_, Value::List(items)) => items,
                (_, value) => vec![value],
            };
            Ok((field.to_string(), ctor.call(args)?))
        }
        None => Ok((key.to_string(), eq(value))),
    }
}

impl Registry {
    /// Parse kwargs against this registry. See [`kwargs2compr`].
    ///
    /// The iterator keeps its own copy of the registry, so later
    /// registrations do not affect it.
    pub fn parse_kwargs<I, K, V>(&self, kwargs: I) -> ParseKwargs<I::IntoIter>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Expected>,
    {
        ParseKwargs {
            registry: self.clone(),
            entries: kwargs.into_iter(),
        }
    }
}

/// Lazily parse kwargs against the process-wide registry.
///
/// Each item is `Ok((field, comparator))` or the [`ConfigurationError`]
/// raised while building that entry's comparator.
///
/// # Example
///
/// ```rust
/// use comparators::prelude::*;
///
/// let mut parsed = kwargs2compr([("status_lt", 206)]);
/// let (field, c) = parsed.next().unwrap().unwrap();
/// assert_eq!(field, "status");
/// assert!(200 == c);
/// assert!(parsed.next().is_none());
/// ```
pub fn kwargs2compr<I, K, V>(kwargs: I) -> ParseKwargs<I::IntoIter>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<Expected>,
{
    ParseKwargs {
        registry: snapshot(),
        entries: kwargs.into_iter(),
    }
}

/// Eagerly parse kwargs against the process-wide registry.
///
/// # Errors
///
/// Stops at the first entry whose comparator cannot be built.
///
/// # Example
///
/// ```rust
/// use comparators::prelude::*;
///
/// assert!(kwargs2cmp([("size_within", vec![9, 1])]).is_err());
/// ```
pub fn kwargs2cmp<I, K, V>(kwargs: I) -> Result<Vec<FieldComparator>, ConfigurationError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<Expected>,
{
    kwargs2compr(kwargs).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::{lt, ComparatorDef};
    use crate::error::ConfigurationErrorKind;
    use std::collections::BTreeMap;

    fn single(key: &str, value: impl Into<Expected>) -> FieldComparator {
        let value: Expected = value.into();
        let mut pairs = kwargs2cmp([(key, value)]).unwrap();
        assert_eq!(pairs.len(), 1);
        pairs.remove(0)
    }

    #[test]
    fn test_suffix_builds_comparator() {
        let (field, c) = single("status_lt", 206);
        assert_eq!(field, "status");
        assert_eq!(c.to_string(), "lt(206)");
        assert!(c.equals(&Value::from(205)).unwrap());
        assert!(!c.equals(&Value::from(206)).unwrap());
    }

    #[test]
    fn test_list_spreads_into_arguments() {
        let (field, c) = single("body_len_within", vec![300, 400]);
        assert_eq!(field, "body_len");
        assert_eq!(c.to_string(), "within(300, 400)");
        assert!(c.equals(&Value::from(300)).unwrap());
        assert!(!c.equals(&Value::from(401)).unwrap());
    }

    #[test]
    fn test_single_argument_comparator_keeps_list() {
        let (field, c) = single("code_one_of", vec![200, 204]);
        assert_eq!(field, "code");
        assert!(c.equals(&Value::from(204)).unwrap());

        let (_, c) = single("tags_contains", "x");
        assert!(c.equals(&Value::from(vec!["x", "y"])).unwrap());
    }

    #[test]
    fn test_variadic_accepts_scalar() {
        let (_, c) = single("method_eq_any", "GET");
        assert_eq!(c.to_string(), "eq_any(\"GET\")");
        let (_, c) = single("method_match_any", vec!["GET", "HEAD"]);
        assert_eq!(c.to_string(), "match_any(eq(\"GET\"), eq(\"HEAD\"))");
    }

    #[test]
    fn test_no_suffix_is_plain_equality() {
        let (field, c) = single("body", "asdf");
        assert_eq!(field, "body");
        assert_eq!(c.to_string(), "eq(\"asdf\")");
        assert!(c.equals(&Value::from("asdf")).unwrap());

        let (field, _) = single("lt", 1);
        assert_eq!(field, "lt");
    }

    #[test]
    fn test_comparator_value_is_not_rewrapped() {
        let (field, c) = single("status_lt", lt(10));
        assert_eq!(field, "status_lt");
        assert_eq!(c.to_string(), "lt(10)");
    }

    #[test]
    fn test_order_is_preserved() {
        let fields: Vec<String> = kwargs2cmp([("z_gt", 1), ("a", 2), ("m_lt", 3)])
            .unwrap()
            .into_iter()
            .map(|(field, _)| field)
            .collect();
        assert_eq!(fields, ["z", "a", "m"]);
    }

    #[test]
    fn test_construction_errors_surface_per_entry() {
        let items: Vec<_> = kwargs2compr([
            ("ok_lt", Expected::from(1)),
            ("range_within", Expected::from(vec![5, 1])),
            ("pair_within", Expected::from(5)),
        ])
        .collect();
        assert!(items[0].is_ok());
        assert!(matches!(
            items[1].as_ref().unwrap_err().kind(),
            ConfigurationErrorKind::InvalidArgument(_)
        ));
        assert!(matches!(
            items[2].as_ref().unwrap_err().kind(),
            ConfigurationErrorKind::Arity { actual: 1, .. }
        ));
    }

    #[test]
    fn test_parse_against_custom_registry() {
        let mut registry = Registry::new();
        registry
            .register(ComparatorDef::new("is_even", Arity::Exact(1), |candidate, args| {
                let want_even = matches!(args[0], Value::Bool(true));
                Ok(candidate.as_i64().is_some_and(|n| (n % 2 == 0) == want_even))
            }))
            .unwrap();

        let pairs: Vec<_> = registry
            .parse_kwargs([("count_is_even", true), ("count_lt", true)])
            .collect::<Result<_, _>>()
            .unwrap();
        let (field, c) = &pairs[0];
        assert_eq!(field, "count");
        assert!(c.equals(&Value::from(4)).unwrap());
        // `lt` is not in this registry
        assert_eq!(pairs[1].0, "count_lt");
    }

    #[test]
    fn test_map_input() {
        let mut kwargs = BTreeMap::new();
        kwargs.insert("status_ge".to_string(), Value::from(200));
        kwargs.insert("status_lt".to_string(), Value::from(300));
        let pairs = kwargs2cmp(kwargs).unwrap();
        assert_eq!(pairs.len(), 2);
        assert!(pairs.iter().all(|(field, _)| field == "status"));
    }
}
