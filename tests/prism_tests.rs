//! Unit tests for Prism optics.
//!
//! - [`Prism`]: matcher/builder construction, `Prism::simple`, `matching`
//! - `preview`, `review` and `over` through the profunctor encoding
//! - [`prism!`] macro for single-field enum variants

use lambars_optics::control::Either;
use lambars_optics::optics::standard_optics::{ok, some};
use lambars_optics::optics::{OpticTypes, Prism, SimplePrism, over, preview, review, set};
use lambars_optics::prism;
use rstest::rstest;

// =============================================================================
// Outcome Scenario
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
enum Outcome {
    Success(i32),
    Failure(String),
}

fn success() -> SimplePrism<Outcome, i32> {
    prism!(Outcome, Success)
}

fn failure() -> SimplePrism<Outcome, String> {
    prism!(Outcome, Failure)
}

#[rstest]
#[case(Outcome::Success(42), Some(42))]
#[case(Outcome::Failure("timeout".to_string()), None)]
fn preview_success(#[case] outcome: Outcome, #[case] expected: Option<i32>) {
    assert_eq!(preview(&success(), outcome), expected);
}

#[rstest]
fn review_builds_success() {
    assert_eq!(review(&success(), 7), Outcome::Success(7));
    assert_eq!(
        review(&failure(), "boom".to_string()),
        Outcome::Failure("boom".to_string())
    );
}

#[rstest]
fn over_only_touches_matching_variant() {
    assert_eq!(
        over(&success(), |n| n * 2, Outcome::Success(21)),
        Outcome::Success(42)
    );
    let failed = Outcome::Failure("nope".to_string());
    assert_eq!(over(&success(), |n| n * 2, failed.clone()), failed);
}

#[rstest]
fn set_on_non_matching_is_noop() {
    let failed = Outcome::Failure("nope".to_string());
    assert_eq!(set(&success(), 0, failed.clone()), failed);
    assert_eq!(
        set(&failure(), "retry".to_string(), failed),
        Outcome::Failure("retry".to_string())
    );
}

#[rstest]
fn matching_exposes_raw_either() {
    assert_eq!(success().matching(Outcome::Success(1)), Either::Right(1));
    assert!(success().matching(Outcome::Failure(String::new())).is_left());
}

mod shapes {
    #[derive(Clone, PartialEq, Debug)]
    pub enum Shape {
        Circle(f64),
        Square(f64),
    }

    #[derive(Clone, PartialEq, Debug)]
    pub enum Tagged<T> {
        Value(T),
        Missing,
    }
}

#[rstest]
fn prism_macro_accepts_paths() {
    let circle = prism!(shapes::Shape, Circle);
    assert_eq!(preview(&circle, shapes::Shape::Circle(2.0)), Some(2.0));
    assert_eq!(preview(&circle, shapes::Shape::Square(2.0)), None);
    assert_eq!(review(&circle, 1.0), shapes::Shape::Circle(1.0));
}

#[rstest]
fn prism_macro_accepts_generic_paths() {
    let value = prism!(shapes::Tagged<char>, Value);
    assert_eq!(preview(&value, shapes::Tagged::Value('v')), Some('v'));
    assert_eq!(preview(&value, shapes::Tagged::Missing), None);
    assert_eq!(
        over(&value, |c| c.to_ascii_uppercase(), shapes::Tagged::Value('a')),
        shapes::Tagged::Value('A')
    );
}

// =============================================================================
// Constructors
// =============================================================================

#[rstest]
#[case("12", Some(12))]
#[case("x", None)]
fn simple_prism_from_partial_function(#[case] text: &str, #[case] expected: Option<u8>) {
    let number = Prism::simple(|text: &String| text.parse::<u8>().ok(), |n: u8| n.to_string());
    assert_eq!(preview(&number, text.to_string()), expected);
    assert_eq!(review(&number, 5), "5");
}

#[rstest]
fn prism_function_builds_type_changing_prism() {
    let wrapped = lambars_optics::optics::prism(
        |value: Vec<i32>| {
            if value.len() == 1 {
                Either::Right(value[0])
            } else {
                Either::Left(value.into_iter().map(|n| n.to_string()).collect::<Vec<_>>())
            }
        },
        |text: String| vec![text],
    );
    assert_eq!(over(&wrapped, |n| format!("<{n}>"), vec![3]), vec!["<3>".to_string()]);
    assert_eq!(
        over(&wrapped, |n| format!("<{n}>"), vec![1, 2]),
        vec!["1".to_string(), "2".to_string()]
    );
}

// =============================================================================
// Composition
// =============================================================================

#[rstest]
fn prism_then_prism_reaches_nested_success() {
    let nested = some::<Outcome, Outcome>().and_then(success());
    assert_eq!(preview(&nested, Some(Outcome::Success(3))), Some(3));
    assert_eq!(preview(&nested, None), None);
    assert_eq!(review(&nested, 4), Some(Outcome::Success(4)));
}

#[rstest]
fn result_prism_composes_with_enum_prism() {
    let nested = ok::<Outcome, Outcome, String>().and_then(failure());
    let source: Result<Outcome, String> = Ok(Outcome::Failure("a".to_string()));
    assert_eq!(preview(&nested, source), Some("a".to_string()));
    assert_eq!(
        over(&nested, |reason| reason + "!", Err("outer".to_string())),
        Err("outer".to_string())
    );
}
