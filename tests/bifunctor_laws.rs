//! Property-based tests for Bifunctor laws.
//!
//! - **Identity Law**: `bimap(x, id, id) == x`
//! - **Composition Law**: `bimap(bimap(x, f1, g1), f2, g2) == bimap(x, f2 . f1, g2 . g1)`
//! - **first/second Consistency**: `bimap(x, f, g) == second(first(x, f), g)`

use lambars_optics::control::Either;
use lambars_optics::typeclass::{Bifunctor, EitherK, PairK, ResultBiK};
use proptest::prelude::*;

fn either_strategy() -> impl Strategy<Value = Either<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Either::Left),
        "[a-z]{0,8}".prop_map(Either::Right),
    ]
}

fn result_strategy() -> impl Strategy<Value = Result<String, i32>> {
    prop_oneof![any::<i32>().prop_map(Err), "[a-z]{0,8}".prop_map(Ok)]
}

// =============================================================================
// Identity Law
// =============================================================================

proptest! {
    #[test]
    fn prop_either_identity_law(value in either_strategy()) {
        prop_assert_eq!(EitherK::bimap(value.clone(), |a| a, |b| b), value);
    }

    #[test]
    fn prop_result_identity_law(value in result_strategy()) {
        prop_assert_eq!(ResultBiK::bimap(value.clone(), |a| a, |b| b), value);
    }

    #[test]
    fn prop_pair_identity_law(a in any::<i32>(), b in "[a-z]{0,8}") {
        prop_assert_eq!(PairK::bimap((a, b.clone()), |x| x, |y| y), (a, b));
    }
}

// =============================================================================
// Composition Law
// =============================================================================

proptest! {
    #[test]
    fn prop_either_composition_law(value in either_strategy()) {
        let f1 = |n: i32| i64::from(n);
        let f2 = |n: i64| n * 2;
        let g1 = |s: String| s.len();
        let g2 = |n: usize| n + 1;
        let left = EitherK::bimap(EitherK::bimap(value.clone(), f1, g1), f2, g2);
        let right = EitherK::bimap(value, |a| f2(f1(a)), |b| g2(g1(b)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_result_composition_law(value in result_strategy()) {
        let f1 = |n: i32| n.wrapping_add(1);
        let f2 = |n: i32| n.to_string();
        let g1 = |s: String| s.to_uppercase();
        let g2 = |s: String| s.len();
        let left = ResultBiK::bimap(ResultBiK::bimap(value.clone(), f1, g1), f2, g2);
        let right = ResultBiK::bimap(value, |a| f2(f1(a)), |b| g2(g1(b)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_pair_composition_law(a in any::<i16>(), b in any::<u8>()) {
        let f1 = |n: i16| i32::from(n);
        let f2 = |n: i32| n - 1;
        let g1 = |n: u8| u16::from(n);
        let g2 = |n: u16| n * 3;
        let left = PairK::bimap(PairK::bimap((a, b), f1, g1), f2, g2);
        let right = PairK::bimap((a, b), |x| f2(f1(x)), |y| g2(g1(y)));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// first / second Consistency
// =============================================================================

proptest! {
    #[test]
    fn prop_either_first_second_consistency(value in either_strategy()) {
        let f = |n: i32| n.wrapping_mul(5);
        let g = |s: String| s.len();
        let by_bimap = EitherK::bimap(value.clone(), f, g);
        let by_parts = EitherK::second(EitherK::first(value, f), g);
        prop_assert_eq!(by_bimap, by_parts);
    }

    #[test]
    fn prop_result_first_second_consistency(value in result_strategy()) {
        let f = |n: i32| n.wrapping_neg();
        let g = |s: String| s + "!";
        let by_bimap = ResultBiK::bimap(value.clone(), f, g);
        let by_parts = ResultBiK::first(ResultBiK::second(value, g), f);
        prop_assert_eq!(by_bimap, by_parts);
    }

    #[test]
    fn prop_pair_first_second_consistency(a in any::<i32>(), b in any::<i32>()) {
        let f = |n: i32| n.wrapping_add(2);
        let g = |n: i32| i64::from(n) * 4;
        prop_assert_eq!(PairK::bimap((a, b), f, g), PairK::second(PairK::first((a, b), f), g));
    }
}
