//! Property-based tests for comparator semantics

use comparators::prelude::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_gt_matches_native_ordering(x in any::<i64>(), y in any::<i64>()) {
        prop_assert_eq!(gt(x).equals(&Value::from(y)).unwrap(), y > x);
    }

    #[test]
    fn prop_lt_matches_native_ordering(x in any::<i64>(), y in any::<i64>()) {
        prop_assert_eq!(lt(x).equals(&Value::from(y)).unwrap(), y < x);
    }

    #[test]
    fn prop_within_is_inclusive(a in -1000i64..1000, b in -1000i64..1000, y in -1500i64..1500) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let c = within(lo, hi).unwrap();
        prop_assert_eq!(c.equals(&Value::from(y)).unwrap(), lo <= y && y <= hi);
    }

    #[test]
    fn prop_within_rejects_inverted_bounds(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(a > b);
        prop_assert!(within(a, b).is_err());
    }

    #[test]
    fn prop_contains_matches_str_contains(hay in "[a-c]{0,8}", needle in "[a-c]{0,3}") {
        let c = contains(needle.as_str());
        prop_assert_eq!(c.equals(&Value::from(hay.as_str())).unwrap(), hay.contains(&needle));
    }

    #[test]
    fn prop_startswith_matches_str_starts_with(s in "[a-c]{0,8}", prefix in "[a-c]{0,3}") {
        let c = startswith(prefix.as_str());
        prop_assert_eq!(c.equals(&Value::from(s.as_str())).unwrap(), s.starts_with(&prefix));
    }

    #[test]
    fn prop_shorter_than_matches_len(items in prop::collection::vec(any::<i32>(), 0..20), n in 0usize..20) {
        let c = shorter_than(n);
        prop_assert_eq!(c.equals(&Value::from(items.clone())).unwrap(), items.len() < n);
    }

    #[test]
    fn prop_all_eq_matches_iter_all(items in prop::collection::vec(0i32..3, 0..10), x in 0i32..3) {
        let c = all_eq(x);
        prop_assert_eq!(c.equals(&Value::from(items.clone())).unwrap(), items.iter().all(|i| *i == x));
    }

    #[test]
    fn prop_operator_is_symmetric(x in -100i64..100, y in -100i64..100) {
        for c in [gt(x), lt(x), eq(x), ne(x), ge(x), le(x)] {
            prop_assert_eq!(y == c, c == y);
            prop_assert_eq!(Value::from(y) == c, c == Value::from(y));
        }
    }

    #[test]
    fn prop_match_all_is_conjunction(x in -100i64..100, a in -100i64..100, b in -100i64..100) {
        let (c1, c2) = (gt(a), lt(b));
        let y = Value::from(x);
        let expected = c1.equals(&y).unwrap() && c2.equals(&y).unwrap();
        prop_assert_eq!(match_all([c1, c2]).equals(&y).unwrap(), expected);
    }

    #[test]
    fn prop_match_any_is_disjunction(x in -100i64..100, a in -100i64..100, b in -100i64..100) {
        let (c1, c2) = (gt(a), lt(b));
        let y = Value::from(x);
        let expected = c1.equals(&y).unwrap() || c2.equals(&y).unwrap();
        prop_assert_eq!(match_any([c1, c2]).equals(&y).unwrap(), expected);
    }

    #[test]
    fn prop_empty_combinators(x in any::<i64>(), s in "[a-z]{0,5}") {
        let all = match_all(Vec::<Comparator>::new());
        let any_of = match_any(Vec::<Comparator>::new());
        for candidate in [Value::from(x), Value::from(s.as_str()), Value::Null] {
            prop_assert!(all.equals(&candidate).unwrap());
            prop_assert!(!any_of.equals(&candidate).unwrap());
        }
    }

    #[test]
    fn prop_describe_includes_reference(x in any::<i64>()) {
        let rendered = gt(x).describe();
        let expected = format!("gt({})", x);
        prop_assert!(rendered.contains(&expected));
    }
}
