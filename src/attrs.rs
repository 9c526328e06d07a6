//! Matching field/comparator pairs against an object
//!
//! Targets expose their fields by name through [`Attributes`]. Structs get
//! an implementation from [`impl_attributes!`](crate::impl_attributes):
//!
//! ```rust
//! use comparators::prelude::*;
//! use comparators::impl_attributes;
//!
//! struct Response {
//!     status: u16,
//!     body: String,
//! }
//!
//! impl_attributes!(Response { status, body });
//!
//! let response = Response { status: 200, body: "asdf".to_string() };
//! let ok = all_attrs(&response, kwargs2compr([
//!     ("status_lt", Expected::from(206)),
//!     ("body", Expected::from("asdf")),
//! ]))
//! .unwrap();
//! assert!(ok);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::comparator::Comparator;
use crate::error::{AttributeLookupError, ConfigurationError, Error};
use crate::kwargs::FieldComparator;
use crate::value::Value;

/// Field lookup by name.
pub trait Attributes {
    /// Value of the named field, or `None` if there is no such field.
    fn attr(&self, name: &str) -> Option<Value>;
}

impl<T: Attributes + ?Sized> Attributes for &T {
    fn attr(&self, name: &str) -> Option<Value> {
        (**self).attr(name)
    }
}

impl Attributes for Value {
    fn attr(&self, name: &str) -> Option<Value> {
        self.as_map().and_then(|map| map.get(name)).cloned()
    }
}

impl<V: Clone + Into<Value>> Attributes for BTreeMap<String, V> {
    fn attr(&self, name: &str) -> Option<Value> {
        self.get(name).cloned().map(Into::into)
    }
}

impl<V: Clone + Into<Value>, S: BuildHasher> Attributes for HashMap<String, V, S> {
    fn attr(&self, name: &str) -> Option<Value> {
        self.get(name).cloned().map(Into::into)
    }
}

/// Implement [`Attributes`] for a struct by listing the fields to expose.
///
/// Each listed field must be `Clone` and convertible into [`Value`].
///
/// # Example
///
/// ```rust
/// use comparators::{impl_attributes, Attributes, Value};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl_attributes!(Point { x, y });
///
/// let p = Point { x: 1, y: 2 };
/// assert_eq!(p.attr("y"), Some(Value::from(2)));
/// assert_eq!(p.attr("z"), None);
/// ```
#[macro_export]
macro_rules! impl_attributes {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::Attributes for $ty {
            fn attr(&self, name: &str) -> ::std::option::Option<$crate::Value> {
                match name {
                    $(
                        stringify!($field) => ::std::option::Option::Some(
                            $crate::Value::from(::std::clone::Clone::clone(&self.$field)),
                        ),
                    )*
                    _ => ::std::option::Option::None,
                }
            }
        }
    };
}

/// Something usable as a `(field, comparator)` pair.
///
/// Implemented for plain pairs and for the `Result` items yielded by
/// [`kwargs2compr`](crate::kwargs2compr), so a lazy parse can be fed straight
/// into [`all_attrs`].
pub trait FieldPair {
    /// Produce the pair, or the error met while building it.
    fn into_pair(self) -> Result<FieldComparator, ConfigurationError>;
}

impl FieldPair for FieldComparator {
    fn into_pair(self) -> Result<FieldComparator, ConfigurationError> {
        Ok(self)
    }
}

impl FieldPair for (&str, Comparator) {
    fn into_pair(self) -> Result<FieldComparator, ConfigurationError> {
        Ok((self.0.to_string(), self.1))
    }
}

impl FieldPair for &FieldComparator {
    fn into_pair(self) -> Result<FieldComparator, ConfigurationError> {
        Ok(self.clone())
    }
}

impl FieldPair for Result<FieldComparator, ConfigurationError> {
    fn into_pair(self) -> Result<FieldComparator, ConfigurationError> {
        self
    }
}

fn check_pairs<T, I>(target: &T, pairs: I, missing_is_error: bool) -> Result<bool, Error>
where
    T: Attributes + ?Sized,
    I: IntoIterator,
    I::Item: FieldPair,
{
    // every pair is built before any is compared, so a bad entry is
    // reported regardless of the target's data
    let pairs = pairs
        .into_iter()
        .map(FieldPair::into_pair)
        .collect::<Result<Vec<_>, _>>()?;
    for (field, comparator) in pairs {
        let Some(actual) = target.attr(&field) else {
            if missing_is_error {
                return Err(AttributeLookupError::new(field, comparator.describe()).into());
            }
            return Ok(false);
        };
        let matched = comparator
            .equals(&actual)
            .map_err(|e| e.with_field(field.as_str()))?;
        if !matched {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Check every `(field, comparator)` pair against `target`'s attributes.
///
/// Pairs are checked in order and checking stops at the first mismatch.
/// No pairs means `true`.
///
/// # Errors
///
/// - [`Error::AttributeLookup`] when `target` has no such field.
/// - [`Error::Evaluation`] when a comparator fails; the error names the field.
/// - [`Error::Configuration`] when a pair from a lazy kwargs parse failed to
///   build. All pairs are built before the first comparison, so this does
///   not depend on the target or on entry order.
///
/// # Example
///
/// ```rust
/// use comparators::prelude::*;
/// use std::collections::BTreeMap;
///
/// let mut response = BTreeMap::new();
/// response.insert("status".to_string(), Value::from(404));
///
/// assert!(!all_attrs(&response, [("status", lt(400))]).unwrap());
///
/// let err = all_attrs(&response, [("body", eq("x"))]).unwrap_err();
/// assert!(err.is_attribute_lookup());
/// ```
pub fn all_attrs<T, I>(target: &T, pairs: I) -> Result<bool, Error>
where
    T: Attributes + ?Sized,
    I: IntoIterator,
    I::Item: FieldPair,
{
    check_pairs(target, pairs, true)
}

/// Like [`all_attrs`], but a missing key counts as a mismatch.
///
/// Suited to maps, where absent keys are ordinary.
///
/// # Example
///
/// ```rust
/// use comparators::prelude::*;
/// use std::collections::BTreeMap;
///
/// let mut headers = BTreeMap::new();
/// headers.insert("server".to_string(), "nginx");
///
/// assert!(all_items(&headers, [("server", startswith("ng"))]).unwrap());
/// assert!(!all_items(&headers, [("etag", eq("abc"))]).unwrap());
/// ```
pub fn all_items<T, I>(target: &T, pairs: I) -> Result<bool, Error>
where
    T: Attributes + ?Sized,
    I: IntoIterator,
    I::Item: FieldPair,
{
    check_pairs(target, pairs, false)
}
