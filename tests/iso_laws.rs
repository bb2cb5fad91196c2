//! Property-based tests for Iso laws.
//!
//! - **Round-trip Law**: `view(mirror(i), view(i, s)) == s`
//! - **Inverse Round-trip Law**: `view(i, view(mirror(i), a)) == a`
//! - **Mirror Involution**: `mirror(mirror(i))` holds the very same functions
//!
//! The laws are also checked on the functions recovered by `un_iso`, and on
//! an iso used as a lens.

use lambars_optics::iso;
use lambars_optics::optics::standard_optics::{identity, swap};
use lambars_optics::optics::{Iso, OpticTypes, SimpleIso, over, review, set, un_iso, view};
use proptest::prelude::*;

// =============================================================================
// Test Isos
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Wrapper(i64);

fn wrapper_iso() -> SimpleIso<i64, Wrapper> {
    iso!(Wrapper, |wrapper: Wrapper| wrapper.0)
}

fn string_chars() -> SimpleIso<String, Vec<char>> {
    Iso::simple(
        |text: String| text.chars().collect(),
        |chars: Vec<char>| chars.into_iter().collect(),
    )
}

// =============================================================================
// Round-trip Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_wrapper_round_trip(value in any::<i64>()) {
        let iso = wrapper_iso();
        prop_assert_eq!(view(&iso.mirror(), view(&iso, value)), value);
    }

    #[test]
    fn prop_wrapper_inverse_round_trip(value in any::<i64>()) {
        let iso = wrapper_iso();
        prop_assert_eq!(view(&iso, view(&iso.mirror(), Wrapper(value))), Wrapper(value));
    }

    #[test]
    fn prop_string_chars_round_trip(text in ".{0,24}") {
        let iso = string_chars();
        prop_assert_eq!(view(&iso.mirror(), view(&iso, text.clone())), text);
    }

    #[test]
    fn prop_swap_round_trip(a in any::<i32>(), b in any::<u8>()) {
        let iso = swap::<i32, u8, i32, u8>();
        prop_assert_eq!(view(&iso.mirror(), view(&iso, (a, b))), (a, b));
        prop_assert_eq!(review(&iso, view(&iso, (a, b))), (a, b));
    }

    #[test]
    fn prop_identity_is_neutral(value in any::<i64>()) {
        let composed = identity::<i64, i64>().and_then(wrapper_iso());
        prop_assert_eq!(view(&composed, value), view(&wrapper_iso(), value));
        prop_assert_eq!(review(&composed, Wrapper(value)), value);
    }
}

// =============================================================================
// Mirror Involution
// =============================================================================

#[test]
fn mirror_of_mirror_shares_functions() {
    let iso = wrapper_iso();
    assert!(iso.mirror().mirror().shares_functions_with(&iso));
}

#[test]
fn clone_shares_functions() {
    let iso = string_chars();
    assert!(iso.clone().shares_functions_with(&iso));
}

// =============================================================================
// un_iso and Lens-like Use
// =============================================================================

proptest! {
    #[test]
    fn prop_un_iso_recovers_directions(value in any::<i64>()) {
        let (forward, backward) = un_iso(&wrapper_iso());
        prop_assert_eq!(forward(value), Wrapper(value));
        prop_assert_eq!(backward(Wrapper(value)), value);
    }

    #[test]
    fn prop_un_iso_of_composition(a in any::<i32>(), b in any::<u8>()) {
        let composed = swap::<i32, u8, i32, u8>().and_then(swap::<u8, i32, u8, i32>());
        let (forward, backward) = un_iso(&composed);
        prop_assert_eq!(forward((a, b)), (a, b));
        prop_assert_eq!(backward((a, b)), (a, b));
    }

    #[test]
    fn prop_iso_set_ignores_old_value(old in any::<i64>(), new in any::<i64>()) {
        prop_assert_eq!(set(&wrapper_iso(), Wrapper(new), old), new);
    }

    #[test]
    fn prop_iso_over_conjugates(value in -1000i64..1000) {
        let updated = over(&wrapper_iso(), |Wrapper(inner)| Wrapper(inner * 2), value);
        prop_assert_eq!(updated, value * 2);
    }
}
