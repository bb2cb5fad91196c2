//! Property-based tests for Lens laws.
//!
//! This module verifies that lenses satisfy the required laws when run
//! through the profunctor encoding:
//!
//! - **GetPut Law**: `set(l, view(l, s), s) == s`
//! - **PutGet Law**: `view(l, set(l, b, s)) == b`
//! - **PutPut Law**: `set(l, b2, set(l, b1, s)) == set(l, b2, s)`
//!
//! Using proptest, we generate random inputs to thoroughly verify these laws
//! across a wide range of values.

use lambars_optics::lens;
use lambars_optics::optics::standard_optics::{first, second};
use lambars_optics::optics::{AndThen, Lens, OpticTypes, SimpleLens, over, set, view};
use proptest::prelude::*;

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Clone, PartialEq, Debug)]
struct Person {
    name: String,
    age: u32,
}

#[derive(Clone, PartialEq, Debug)]
struct Address {
    street: String,
    city: String,
}

#[derive(Clone, PartialEq, Debug)]
struct PersonWithAddress {
    name: String,
    address: Address,
}

fn person_street() -> AndThen<SimpleLens<PersonWithAddress, Address>, SimpleLens<Address, String>> {
    lens!(PersonWithAddress, address).and_then(lens!(Address, street))
}

// =============================================================================
// Lens Laws for Point
// =============================================================================

proptest! {
    /// GetPut Law for Point.x: Getting and setting back yields the original
    #[test]
    fn prop_point_x_get_put_law(x in any::<i32>(), y in any::<i32>()) {
        let x_lens = lens!(Point, x);
        let point = Point { x, y };
        let value = view(&x_lens, point.clone());
        prop_assert_eq!(set(&x_lens, value, point.clone()), point);
    }

    /// PutGet Law for Point.x: Setting then getting yields the set value
    #[test]
    fn prop_point_x_put_get_law(x in any::<i32>(), y in any::<i32>(), new_value in any::<i32>()) {
        let x_lens = lens!(Point, x);
        let updated = set(&x_lens, new_value, Point { x, y });
        prop_assert_eq!(view(&x_lens, updated), new_value);
    }

    /// PutPut Law for Point.x: Two consecutive sets is equivalent to the last set
    #[test]
    fn prop_point_x_put_put_law(
        x in any::<i32>(),
        y in any::<i32>(),
        value1 in any::<i32>(),
        value2 in any::<i32>()
    ) {
        let x_lens = lens!(Point, x);
        let point = Point { x, y };
        let left = set(&x_lens, value2, set(&x_lens, value1, point.clone()));
        let right = set(&x_lens, value2, point);
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Lens Laws for Person
// =============================================================================

proptest! {
    #[test]
    fn prop_person_name_get_put_law(name in "[a-zA-Z]{0,12}", age in any::<u32>()) {
        let name_lens = lens!(Person, name);
        let person = Person { name, age };
        let value = view(&name_lens, person.clone());
        prop_assert_eq!(set(&name_lens, value, person.clone()), person);
    }

    #[test]
    fn prop_person_name_put_get_law(
        name in "[a-zA-Z]{0,12}",
        age in any::<u32>(),
        new_name in "[a-zA-Z]{0,12}"
    ) {
        let name_lens = lens!(Person, name);
        let updated = set(&name_lens, new_name.clone(), Person { name, age });
        prop_assert_eq!(view(&name_lens, updated), new_name);
    }

    #[test]
    fn prop_person_age_over_matches_get_then_set(name in "[a-z]{0,8}", age in 0u32..1000) {
        let age_lens = lens!(Person, age);
        let person = Person { name, age };
        let by_over = over(&age_lens, |a| a + 1, person.clone());
        let by_methods = age_lens.set(person.clone(), age_lens.get(&person) + 1);
        prop_assert_eq!(by_over, by_methods);
    }
}

// =============================================================================
// Lens Laws for Composed Lenses
// =============================================================================

proptest! {
    #[test]
    fn prop_composed_get_put_law(name in "[a-z]{0,8}", street in "[a-z ]{0,16}", city in "[a-z]{0,8}") {
        let street_lens = person_street();
        let person = PersonWithAddress { name, address: Address { street, city } };
        let value = view(&street_lens, person.clone());
        prop_assert_eq!(set(&street_lens, value, person.clone()), person);
    }

    #[test]
    fn prop_composed_put_get_law(
        name in "[a-z]{0,8}",
        street in "[a-z ]{0,16}",
        city in "[a-z]{0,8}",
        new_street in "[a-z ]{0,16}"
    ) {
        let street_lens = person_street();
        let person = PersonWithAddress { name, address: Address { street, city: city.clone() } };
        let updated = set(&street_lens, new_street.clone(), person);
        prop_assert_eq!(updated.address.city.clone(), city);
        prop_assert_eq!(view(&street_lens, updated), new_street);
    }

    #[test]
    fn prop_composed_put_put_law(
        street in "[a-z]{0,8}",
        value1 in "[a-z]{0,8}",
        value2 in "[a-z]{0,8}"
    ) {
        let street_lens = person_street();
        let person = PersonWithAddress {
            name: "n".to_string(),
            address: Address { street, city: "c".to_string() },
        };
        let left = set(&street_lens, value2.clone(), set(&street_lens, value1, person.clone()));
        let right = set(&street_lens, value2, person);
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Lens Laws for Tuple Lenses and Reified Lenses
// =============================================================================

proptest! {
    #[test]
    fn prop_first_and_second_laws(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
        let first_lens = first::<i64, i64, i64>();
        let second_lens = second::<i64, i64, i64>();
        prop_assert_eq!(set(&first_lens, view(&first_lens, (a, b)), (a, b)), (a, b));
        prop_assert_eq!(view(&first_lens, set(&first_lens, c, (a, b))), c);
        prop_assert_eq!(set(&second_lens, view(&second_lens, (a, b)), (a, b)), (a, b));
        prop_assert_eq!(view(&second_lens, set(&second_lens, c, (a, b))), c);
    }

    #[test]
    fn prop_from_optic_agrees_with_operations(a in any::<u16>(), b in any::<u16>(), c in any::<u16>()) {
        let composed = second::<(u16, u16), (u16, u16), ()>().and_then(first::<u16, u16, u16>());
        let reified = Lens::from_optic(composed.clone());
        let source = ((), (a, b));
        prop_assert_eq!(reified.get(&source), view(&composed, source));
        prop_assert_eq!(reified.set(source, c), set(&composed, c, source));
    }
}
