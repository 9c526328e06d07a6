//! # Comparators
//!
//! First-class comparison values. A comparator binds an expected value *and*
//! the logic used to compare against it, so code that only knows how to
//! check `actual == expected` can check "less than", "within a range" or
//! "starts with" without changing.
//!
//! ## Quick Example
//!
//! ```rust
//! use comparators::prelude::*;
//!
//! // A validator that only ever does equality checks...
//! fn validate(actual: &[(&str, Value)], expected: &[(&str, Comparator)]) -> bool {
//!     expected.iter().all(|(field, want)| {
//!         actual.iter().any(|(name, value)| name == field && *value == *want)
//!     })
//! }
//!
//! let response = [("status", Value::from(200)), ("body_len", Value::from(350))];
//!
//! // ...can still check ranges and thresholds.
//! assert!(validate(
//!     &response,
//!     &[("status", lt(206)), ("body_len", within(300, 400).unwrap())],
//! ));
//! ```
//!
//! ## kwargs DSL
//!
//! Field names can carry the comparison as a suffix, which keeps call sites
//! flat:
//!
//! ```rust
//! use comparators::prelude::*;
//! use comparators::impl_attributes;
//!
//! struct Response {
//!     status: u16,
//!     body: String,
//!     body_len: usize,
//! }
//!
//! impl_attributes!(Response { status, body, body_len });
//!
//! let response = Response { status: 200, body: "asdf".into(), body_len: 350 };
//! let matched = all_attrs(&response, kwargs2compr([
//!     ("status_lt", Expected::from(206)),
//!     ("body_len_within", Expected::from(vec![300, 400])),
//!     ("body", Expected::from("asdf")),
//! ]))
//! .unwrap();
//! assert!(matched);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod attrs;
pub mod comparator;
pub mod error;
pub mod kwargs;
pub mod registry;
pub mod testing;
pub mod value;

// Re-exports
pub use attrs::{all_attrs, all_items, Attributes, FieldPair};
pub use comparator::{
    all_eq, contains, contains_dict, endswith, eq, eq_all, eq_any, ge, gt, le, lt, match_all,
    match_any, ne, one_of, re_match, re_search, shorter_than, startswith, within, Arity,
    Comparator, ComparatorDef, Mode,
};
pub use error::{
    AttributeLookupError, ConfigurationError, ConfigurationErrorKind, Error, EvaluationError,
};
pub use kwargs::{kwargs2cmp, kwargs2compr, Expected, FieldComparator, ParseKwargs};
pub use registry::{
    build, comparator, constructor, registered_names, replace_comparator, snapshot, Constructor,
    Registry,
};
pub use value::Value;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::attrs::{all_attrs, all_items, Attributes};
    pub use crate::comparator::{
        all_eq, contains, contains_dict, endswith, eq, eq_all, eq_any, ge, gt, le, lt, match_all,
        match_any, ne, one_of, re_match, re_search, shorter_than, startswith, within, Arity,
        Comparator, ComparatorDef,
    };
    pub use crate::error::Error;
    pub use crate::kwargs::{kwargs2cmp, kwargs2compr, Expected};
    pub use crate::registry::{comparator, registered_names, Registry};
    pub use crate::value::Value;
}
