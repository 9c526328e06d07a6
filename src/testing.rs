//! Testing utilities
//!
//! Assertion macros that report the rendered comparator and candidate on
//! failure, and (with the `proptest` feature) an [`Arbitrary`] implementation
//! for [`Value`](crate::Value).
//!
//! # Examples
//!
//! ```rust
//! use comparators::prelude::*;
//! use comparators::{assert_satisfies, assert_violates};
//!
//! assert_satisfies!(200, lt(206));
//! assert_violates!("qwer", startswith("as"));
//! ```
//!
//! [`Arbitrary`]: https://docs.rs/proptest/latest/proptest/arbitrary/trait.Arbitrary.html

/// Assert that a value satisfies a comparator.
///
/// Panics if the comparator rejects the value or fails to evaluate.
///
/// # Example
///
/// ```rust
/// use comparators::prelude::*;
/// use comparators::assert_satisfies;
///
/// assert_satisfies!(vec![5, 5, 5], all_eq(5));
/// ```
#[macro_export]
macro_rules! assert_satisfies {
    ($value:expr, $comparator:expr) => {{
        let value = $crate::Value::from($value);
        let comparator = $comparator;
        match comparator.equals(&value) {
            ::std::result::Result::Ok(true) => {}
            ::std::result::Result::Ok(false) => {
                panic!("Expected {} to satisfy {}", value, comparator);
            }
            ::std::result::Result::Err(e) => {
                panic!("Expected {} to satisfy {}, but evaluation failed: {}", value, comparator, e);
            }
        }
    }};
}

/// Assert that a value does not satisfy a comparator.
///
/// Panics if the comparator accepts the value or fails to evaluate.
///
/// # Example
///
/// ```rust
/// use comparators::prelude::*;
/// use comparators::assert_violates;
///
/// assert_violates!(vec![5, 5, 6], all_eq(5));
/// ```
#[macro_export]
macro_rules! assert_violates {
    ($value:expr, $comparator:expr) => {{
        let value = $crate::Value::from($value);
        let comparator = $comparator;
        match comparator.equals(&value) {
            ::std::result::Result::Ok(false) => {}
            ::std::result::Result::Ok(true) => {
                panic!("Expected {} to violate {}", value, comparator);
            }
            ::std::result::Result::Err(e) => {
                panic!("Expected {} to violate {}, but evaluation failed: {}", value, comparator, e);
            }
        }
    }};
}

#[cfg(feature = "proptest")]
use crate::Value;
#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::Int),
            (-1.0e9..1.0e9f64).prop_map(Value::Float),
            "[a-z]{0,8}".prop_map(Value::Str),
        ];
        leaf.prop_recursive(3, 24, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(Value::List),
                prop::collection::btree_map("[a-z]{1,4}", inner, 0..4).prop_map(Value::Map),
            ]
        })
        .boxed()
    }
}
