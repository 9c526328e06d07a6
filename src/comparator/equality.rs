//! `==` in both directions
//!
//! `candidate == comparator` and `comparator == candidate` run the same
//! predicate. `==` cannot report errors, so an evaluation error panics with
//! the rendered error (the assertion use case); call
//! [`Comparator::equals`] to handle it instead.
//!
//! Plain values also convert into comparators through [`eq`], which is how
//! `match_all`/`match_any` accept them.

use super::{eq, Comparator};
use crate::value::Value;

impl PartialEq<Value> for Comparator {
    fn eq(&self, other: &Value) -> bool {
        self.equals_or_panic(other)
    }
}

impl PartialEq<Comparator> for Value {
    fn eq(&self, other: &Comparator) -> bool {
        other.equals_or_panic(self)
    }
}

impl From<Value> for Comparator {
    fn from(value: Value) -> Self {
        eq(value)
    }
}

impl From<&Value> for Comparator {
    fn from(value: &Value) -> Self {
        eq(value.clone())
    }
}

macro_rules! plain_equality {
    ($($t:ty),* $(,)?) => {
        $(
            impl PartialEq<$t> for Comparator {
                fn eq(&self, other: &$t) -> bool {
                    self.equals_or_panic(&Value::from(other.clone()))
                }
            }

            impl PartialEq<Comparator> for $t {
                fn eq(&self, other: &Comparator) -> bool {
                    other.equals_or_panic(&Value::from(self.clone()))
                }
            }

            impl From<$t> for Comparator {
                fn from(value: $t) -> Self {
                    eq(value)
                }
            }
        )*
    };
}

plain_equality!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64, bool, char);
plain_equality!(&str, String);

impl PartialEq<str> for Comparator {
    fn eq(&self, other: &str) -> bool {
        self.equals_or_panic(&Value::from(other))
    }
}

impl PartialEq<Comparator> for str {
    fn eq(&self, other: &Comparator) -> bool {
        other.equals_or_panic(&Value::from(self))
    }
}

impl<T: Clone + Into<Value>> PartialEq<Vec<T>> for Comparator {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.equals_or_panic(&Value::from(other.as_slice()))
    }
}

impl<T: Clone + Into<Value>> PartialEq<Comparator> for Vec<T> {
    fn eq(&self, other: &Comparator) -> bool {
        other.equals_or_panic(&Value::from(self.as_slice()))
    }
}

impl<T: Clone + Into<Value>> PartialEq<Comparator> for [T] {
    fn eq(&self, other: &Comparator) -> bool {
        other.equals_or_panic(&Value::from(self))
    }
}

impl<T: Clone + Into<Value>, const N: usize> PartialEq<Comparator> for [T; N] {
    fn eq(&self, other: &Comparator) -> bool {
        other.equals_or_panic(&Value::from(self.as_slice()))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Comparator {
    fn from(values: Vec<T>) -> Self {
        eq(values)
    }
}

#[cfg(test)]
mod tests {
    use crate::comparator::{all_eq, contains, gt, lt, match_all, startswith, Comparator};
    use crate::value::Value;

    #[test]
    fn test_symmetry() {
        let c = gt(5);
        for y in [3, 5, 7] {
            assert_eq!(y == c, c == y);
            assert_eq!(Value::from(y) == c, c == Value::from(y));
        }
        assert_eq!("b" == gt("a"), gt("a") == "b");
        assert_eq!(String::from("b") == gt("a"), gt("a") == String::from("b"));
    }

    #[test]
    fn test_slices_and_arrays() {
        assert!([5, 5, 6] != all_eq(5));
        assert!([5; 10] == all_eq(5));
        let v = vec![1, 2, 3];
        assert!(v[..] == startswith(1));
        assert!(all_eq(5) == vec![5, 5]);
    }

    #[test]
    fn test_position_search() {
        let words = vec!["one", "two", "three", "four"];
        assert_eq!(words.iter().position(|w| *w == startswith("t")), Some(1));
        assert_eq!(words.iter().position(|w| *w == lt("a")), None);
    }

    #[test]
    fn test_plain_values_convert_to_equality() {
        let c: Comparator = 5.into();
        assert_eq!(c.to_string(), "eq(5)");
        let c: Comparator = "x".into();
        assert_eq!(c.to_string(), "eq(\"x\")");
        let c = match_all([Comparator::from(5), gt(1)]);
        assert!(5 == c);
    }

    #[test]
    #[should_panic(expected = "contains(1) failed for 7")]
    fn test_operator_panics_instead_of_mismatching() {
        let _ = 7 == contains(1);
    }
}
