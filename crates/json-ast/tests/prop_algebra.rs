//! Property-based checks for the algebra's laws.
//!
//! Strategies generate scalar and nested values (arrays and objects up to a
//! few levels deep). Floats are drawn from a finite range so structural
//! equality stays reflexive under test.

use json_ast::{escape, Diffable, JsonValue, Mergeable};
use proptest::prelude::*;

fn arb_scalar() -> impl Strategy<Value = JsonValue> {
    prop_oneof![
        Just(JsonValue::Null),
        any::<bool>().prop_map(JsonValue::from),
        (-1_000_000i64..1_000_000i64).prop_map(JsonValue::from),
        (-1.0e6f64..1.0e6f64).prop_map(JsonValue::from),
        "[a-z]{0,8}".prop_map(JsonValue::from),
    ]
}

fn arb_value() -> impl Strategy<Value = JsonValue> {
    arb_scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(JsonValue::Array),
            prop::collection::vec(("[a-z]{1,4}", inner), 0..4).prop_map(JsonValue::Object),
        ]
    })
}

proptest! {
    #[test]
    fn concat_is_associative(a in arb_value(), b in arb_value(), c in arb_value()) {
        let left = (a.clone() + b.clone()) + c.clone();
        let right = a + (b + c);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn nothing_is_a_two_sided_identity(a in arb_value()) {
        prop_assert_eq!(JsonValue::Nothing + a.clone(), a.clone());
        prop_assert_eq!(a.clone() + JsonValue::Nothing, a);
    }

    #[test]
    fn equality_is_reflexive(a in arb_value()) {
        prop_assert_eq!(a.clone(), a);
    }

    #[test]
    fn object_equality_ignores_field_order(
        fields in prop::collection::vec(("[a-z]{1,4}", arb_scalar()), 0..6),
    ) {
        let reversed: Vec<_> = fields.iter().rev().cloned().collect();
        prop_assert_eq!(JsonValue::Object(fields), JsonValue::Object(reversed));
    }

    #[test]
    fn values_is_idempotent(a in arb_value()) {
        prop_assert_eq!(a.values(), a.values());
    }

    #[test]
    fn diff_of_a_value_with_itself_is_empty(a in arb_value()) {
        prop_assert!(a.diff(&a.clone()).is_empty());
    }

    #[test]
    fn merge_with_nothing_is_identity(a in arb_value()) {
        prop_assert_eq!(a.clone().merge(JsonValue::Nothing), a.clone());
        prop_assert_eq!(JsonValue::Nothing.merge(a.clone()), a);
    }

    #[test]
    fn escaped_output_contains_no_raw_specials(s in ".*") {
        let out = escape(&s);
        prop_assert!(out.chars().all(|ch| {
            let cp = ch as u32;
            cp >= 0x20 && !(0x80..0xa0).contains(&cp) && !(0x2000..0x2100).contains(&cp)
        }), "escaped output contains raw special characters");
    }

    #[test]
    fn escape_passes_plain_text_through(s in "[a-zA-Z0-9 .,;!?-]*") {
        prop_assert_eq!(escape(&s), s);
    }
}
