//! IAI-Callgrind benchmark for optic operations.
//!
//! Measures instruction counts for `view`, `set`, `preview` and `review`
//! through single and composed optics.

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use lambars_optics::optics::standard_optics::{first, second, some};
use lambars_optics::optics::{OpticTypes, preview, review, set, view};
use std::hint::black_box;

fn setup_pair() -> (u64, String) {
    (42, "value".to_string())
}

fn setup_nested() -> (Option<(u64, u64)>, u8) {
    (Some((1, 2)), 0)
}

#[library_benchmark]
#[bench::with_setup(setup_pair())]
fn lens_view(pair: (u64, String)) -> u64 {
    black_box(view(&first::<u64, u64, String>(), black_box(pair)))
}

#[library_benchmark]
#[bench::with_setup(setup_pair())]
fn lens_set(pair: (u64, String)) -> (u64, String) {
    black_box(set(&first::<u64, u64, String>(), 7, black_box(pair)))
}

#[library_benchmark]
#[bench::with_setup(setup_nested())]
fn composed_preview(nested: (Option<(u64, u64)>, u8)) -> Option<u64> {
    let optic = first::<Option<(u64, u64)>, Option<(u64, u64)>, u8>()
        .and_then(some::<(u64, u64), (u64, u64)>())
        .and_then(second::<u64, u64, u64>());
    black_box(preview(&optic, black_box(nested)))
}

#[library_benchmark]
fn prism_review() -> Option<u64> {
    black_box(review(&some::<u64, u64>(), black_box(9)))
}

library_benchmark_group!(
    name = optics_group;
    benchmarks = lens_view, lens_set, composed_preview, prism_review
);

main!(library_benchmark_groups = optics_group);
