//! End-to-end scenarios
//!
//! Literal usage scenarios covering every public operation:
//! - Equality, inspection and extraction
//! - Dispatch with case_of
//! - map and chained bind
//! - Conditional attribute-set merging

use cfg_optional::attrs::{get_attr, make_attr_set, merge, AttrSet};
use cfg_optional::list::head;
use cfg_optional::{bind, case_of, create, empty, has_value, map, value, Optional, OptionalError};

fn safe_divide(a: i64, b: i64) -> Optional<i64> {
    if b == 0 {
        empty()
    } else {
        create(a / b)
    }
}

// ============================================================
// Construction and Inspection
// ============================================================

mod inspection_tests {
    use super::*;

    #[test]
    fn test_value_equality() {
        assert_eq!(create(42), create(42));
        assert_ne!(create(42), create(43));
        assert_ne!(create(42), empty());
    }

    #[test]
    fn test_has_value() {
        assert!(has_value(&create(42)));
        assert!(!has_value(&empty::<i32>()));
    }

    #[test]
    fn test_value_extraction() {
        assert_eq!(value(create("hello")), Ok("hello"));
        assert_eq!(value(empty::<&str>()), Err(OptionalError::EmptyOptional));
    }
}

// ============================================================
// Dispatch and Combinators
// ============================================================

mod combinator_tests {
    use super::*;

    #[test]
    fn test_case_of_present_and_absent() {
        let describe = |x: i32| format!("got: {x}");
        assert_eq!(case_of("default".to_string(), describe, create(100)), "got: 100");
        assert_eq!(case_of("default".to_string(), describe, empty()), "default");
    }

    #[test]
    fn test_map_doubles() {
        assert_eq!(map(|x| x * 2, create(5)), create(10));
        assert_eq!(map(|x: i32| x * 2, empty()), empty());
    }

    #[test]
    fn test_chained_bind() {
        let first = bind(|b| safe_divide(20, b), create(4));
        assert_eq!(first, create(5));
        let second = bind(|b| safe_divide(5, b), first);
        assert_eq!(second, create(1));
    }

    #[test]
    fn test_bind_short_circuits_on_zero() {
        let result = bind(|b| safe_divide(20, b), create(0));
        assert_eq!(result, empty());
        assert_eq!(bind(|b| safe_divide(5, b), result), empty());
    }
}

// ============================================================
// Attribute Sets and Lists
// ============================================================

mod adapter_tests {
    use super::*;

    fn bob() -> AttrSet<String> {
        AttrSet::from([("name".to_string(), "Bob".to_string())])
    }

    #[test]
    fn test_merge_present_attr() {
        let merged = merge(bob(), make_attr_set("age", create("30".to_string())));
        assert_eq!(
            merged,
            AttrSet::from([
                ("age".to_string(), "30".to_string()),
                ("name".to_string(), "Bob".to_string()),
            ])
        );
    }

    #[test]
    fn test_merge_absent_attr_is_no_change() {
        let merged = merge(bob(), make_attr_set("city", empty()));
        assert_eq!(merged, bob());
    }

    #[test]
    fn test_get_attr_boundaries() {
        let attrs = AttrSet::from([("a".to_string(), 1)]);
        assert_eq!(get_attr("missing", &attrs), empty());
        assert_eq!(get_attr("a", &attrs), create(1));
    }

    #[test]
    fn test_head_boundaries() {
        assert_eq!(head(Vec::<i32>::new()), empty());
        assert_eq!(head(vec![9]), create(9));
        assert_eq!(head(vec![1, 2, 3]), create(1));
    }

    #[test]
    fn test_lookup_then_head() {
        let attrs = AttrSet::from([("servers".to_string(), vec!["a", "b"])]);
        let first = get_attr("servers", &attrs).bind(head);
        assert_eq!(first, create("a"));
        let none = get_attr("clients", &attrs).bind(head);
        assert_eq!(none, empty());
    }
}
