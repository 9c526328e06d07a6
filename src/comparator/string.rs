//! Prefix and suffix comparators
//!
//! Both work on strings and on lists. A string candidate needs a string
//! reference; a list candidate takes a list reference (compared element-wise)
//! or a single element.

use std::sync::LazyLock;

use super::{Arity, Comparator, ComparatorDef};
use crate::error::BoxError;
use crate::value::Value;

#[derive(Clone, Copy)]
enum End {
    Start,
    Finish,
}

fn affix(end: End, candidate: &Value, reference: &Value) -> Result<bool, BoxError> {
    match (candidate, reference) {
        (Value::Str(s), Value::Str(part)) => Ok(match end {
            End::Start => s.starts_with(part.as_str()),
            End::Finish => s.ends_with(part.as_str()),
        }),
        (Value::List(items), Value::List(part)) => Ok(match end {
            End::Start => items.starts_with(part),
            End::Finish => items.ends_with(part),
        }),
        (Value::List(items), single) => Ok(match end {
            End::Start => items.first() == Some(single),
            End::Finish => items.last() == Some(single),
        }),
        _ => Err(format!(
            "{} {} has no {} {}",
            candidate.kind(),
            candidate,
            match end {
                End::Start => "prefix",
                End::Finish => "suffix",
            },
            reference
        )
        .into()),
    }
}

static STARTSWITH: LazyLock<ComparatorDef> = LazyLock::new(|| {
    ComparatorDef::new("startswith", Arity::Exact(1), |candidate, args| {
        affix(End::Start, candidate, &args[0])
    })
});

static ENDSWITH: LazyLock<ComparatorDef> = LazyLock::new(|| {
    ComparatorDef::new("endswith", Arity::Exact(1), |candidate, args| {
        affix(End::Finish, candidate, &args[0])
    })
});

pub(super) fn defs() -> Vec<ComparatorDef> {
    vec![STARTSWITH.clone(), ENDSWITH.clone()]
}

/// Match strings (or lists) starting with `prefix`.
///
/// # Example
///
/// ```rust
/// use comparators::prelude::*;
///
/// let words = ["one", "two", "three", "four"];
/// assert_eq!(words.iter().position(|w| *w == startswith("t")), Some(1));
/// assert!(vec![1, 2, 3] == startswith(vec![1, 2]));
/// ```
pub fn startswith(prefix: impl Into<Value>) -> Comparator {
    STARTSWITH.instantiate(vec![prefix.into()])
}

/// Match strings (or lists) ending with `suffix`.
///
/// # Example
///
/// ```rust
/// use comparators::prelude::*;
///
/// assert!("main.rs" == endswith(".rs"));
/// assert!("main.py" != endswith(".rs"));
/// ```
pub fn endswith(suffix: impl Into<Value>) -> Comparator {
    ENDSWITH.instantiate(vec![suffix.into()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startswith_str() {
        assert!(startswith("t").equals(&Value::from("two")).unwrap());
        assert!(!startswith("t").equals(&Value::from("one")).unwrap());
        assert!(startswith("").equals(&Value::from("")).unwrap());
    }

    #[test]
    fn test_endswith_str() {
        assert!(endswith(".rs").equals(&Value::from("lib.rs")).unwrap());
        assert!(!endswith(".rs").equals(&Value::from("lib.py")).unwrap());
    }

    #[test]
    fn test_list_affixes() {
        let list = Value::from(vec![1, 2, 3]);
        assert!(startswith(vec![1, 2]).equals(&list).unwrap());
        assert!(!startswith(vec![2]).equals(&list).unwrap());
        assert!(startswith(1).equals(&list).unwrap());
        assert!(endswith(3).equals(&list).unwrap());
        assert!(endswith(vec![2, 3]).equals(&list).unwrap());
        assert!(endswith(Vec::<i32>::new())
            .equals(&Value::from(Vec::<i32>::new()))
            .unwrap());
    }

    #[test]
    fn test_non_sequence_candidate_is_an_error() {
        let err = startswith("t").equals(&Value::from(12)).unwrap_err();
        assert_eq!(err.comparator(), "startswith(\"t\")");
        assert!(err.cause().to_string().contains("has no prefix"));

        assert!(startswith(1).equals(&Value::from("1")).is_err());
    }
}
