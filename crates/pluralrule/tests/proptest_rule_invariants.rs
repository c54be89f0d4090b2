//! Property-based invariant tests for rule parsing and evaluation.
//!
//! Verifies structural guarantees of the parser and evaluator:
//!
//! 1. Parsing arbitrary input never panics and is deterministic
//! 2. Near-grammar input never panics and is deterministic
//! 3. Trailing-text errors carry the exact unconsumed suffix
//! 4. A parsed rule and one-shot evaluation agree on every count
//! 5. `is` compares for equality; `is not` is its exact negation
//! 6. `in` is inclusive on both bounds; `not in` is its inverse
//! 7. `within` agrees with `in` on integers
//! 8. `mod` follows native remainder arithmetic
//! 9. `and`/`or` chains bind the whole right-hand side

use pluralrule::{ParseError, evaluate, parse_rule};
use proptest::prelude::*;

// ═════════════════════════════════════════════════════════════════════════
// 1. Parsing arbitrary input never panics and is deterministic
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn parse_arbitrary_input_total(input in any::<String>()) {
        let first = parse_rule(&input);
        let second = parse_rule(&input);
        prop_assert_eq!(first, second, "non-deterministic parse for {:?}", input);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Near-grammar input never panics and is deterministic
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn parse_near_grammar_input_total(input in "[nisotandwrhm0-9 .]{0,32}") {
        let first = parse_rule(&input);
        let second = parse_rule(&input);
        prop_assert_eq!(first, second, "non-deterministic parse for {:?}", input);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Trailing-text errors carry the exact unconsumed suffix
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn error_positions_point_into_input(input in "[nisotandwrhm0-9 .]{0,32}") {
        match parse_rule(&input) {
            Ok(_) => {}
            Err(ParseError::Syntax { offset }) => {
                prop_assert!(offset <= input.len());
            }
            Err(ParseError::Trailing { offset, text }) => {
                prop_assert!(offset < input.len());
                prop_assert_eq!(&input[offset..], text.as_str());
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. A parsed rule and one-shot evaluation agree on every count
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn parse_once_agrees_with_evaluate(
        divisor in 1u64..=100,
        low in 0u64..=50,
        high in 0u64..=50,
        value in 0u64..=50,
        n in 0u64..=1000,
    ) {
        let text = format!("n mod {divisor} in {low}..{high} or n is {value}");
        let rule = parse_rule(&text).unwrap();
        prop_assert_eq!(Ok(rule.matches(n)), evaluate(&text, n));
        prop_assert_eq!(evaluate(&text, n), evaluate(&text, n));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. `is` compares for equality; `is not` is its exact negation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn is_matches_equality(value in 0u64..=1000, n in 0u64..=1000) {
        prop_assert_eq!(evaluate(&format!("n is {value}"), n), Ok(n == value));
        prop_assert_eq!(evaluate(&format!("n is not {value}"), n), Ok(n != value));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. `in` is inclusive on both bounds; `not in` is its inverse
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn in_tracks_inclusive_bounds(
        low in 0u64..=10_000,
        high in 0u64..=10_000,
        n in 0u64..=20_000,
    ) {
        let member = low <= n && n <= high;
        prop_assert_eq!(evaluate(&format!("n in {low}..{high}"), n), Ok(member));
        prop_assert_eq!(evaluate(&format!("n not in {low}..{high}"), n), Ok(!member));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. `within` agrees with `in` on integers
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn within_agrees_with_in(
        low in 0u64..=10_000,
        high in 0u64..=10_000,
        n in 0u64..=20_000,
    ) {
        prop_assert_eq!(
            evaluate(&format!("n within {low}..{high}"), n),
            evaluate(&format!("n in {low}..{high}"), n)
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. `mod` follows native remainder arithmetic
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn mod_matches_native_remainder(divisor in 1u64..=10_000, n in any::<u64>()) {
        let remainder = n % divisor;
        prop_assert_eq!(
            evaluate(&format!("n mod {divisor} is {remainder}"), n),
            Ok(true)
        );
        // The remainder is always strictly below the divisor.
        prop_assert_eq!(
            evaluate(&format!("n mod {divisor} is {divisor}"), n),
            Ok(false)
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 9. `and`/`or` chains bind the whole right-hand side
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn chain_groups_to_the_right(n in any::<u64>()) {
        let rule = "n mod 7 in 0..2 and n mod 2 is 0 or n mod 3 is 0";
        let expected = (n % 7 <= 2) && (n % 2 == 0 || n % 3 == 0);
        prop_assert_eq!(evaluate(rule, n), Ok(expected), "n = {}", n);
    }
}
