//! Benchmark for Result composition and Guard checks.
//!
//! Measures the cost of chaining domain operations and of building
//! `Error` values on the failure path.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use domain_kernel::combine_guards;
use domain_kernel::errs::{Error, Guard, Result, UnitResult};
use std::hint::black_box;

fn validate(value: i32) -> Result<i32> {
    combine_guards!(
        Guard::against_less_than(value, 1, "value"),
        Guard::against_greater_than(value, 1_000, "value"),
    )
    .map_or_else(|| Result::success(value), Result::failure)
}

// =============================================================================
// Result Benchmarks
// =============================================================================

fn benchmark_result_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("result_chain");

    for depth in [1, 10, 100] {
        group.bench_with_input(BenchmarkId::new("flat_map", depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let mut result: Result<i32> = Result::success(black_box(1));
                for _ in 0..depth {
                    result = result.flat_map(|value| validate(value).map(|value| value % 999 + 1));
                }
                black_box(result)
            });
        });
    }

    group.bench_function("failure_short_circuit", |bencher| {
        bencher.iter(|| {
            let mut result = validate(black_box(0));
            for _ in 0..100 {
                result = result.flat_map(validate);
            }
            black_box(result.is_failure())
        });
    });

    group.finish();
}

fn benchmark_unit_result_merge(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("unit_result_merge");

    group.bench_function("all_success", |bencher| {
        bencher.iter(|| {
            (0..100).fold(UnitResult::<Error>::success(), |accumulator, _| {
                accumulator.merge(black_box(UnitResult::success()))
            })
        });
    });

    group.bench_function("lazy_after_failure", |bencher| {
        bencher.iter(|| {
            (0..100).fold(
                UnitResult::failure(Error::new("x", "y")),
                |accumulator, index| {
                    accumulator.merge_with(|| validate(black_box(index)).map(|_| ()).into())
                },
            )
        });
    });

    group.finish();
}

// =============================================================================
// Error Benchmarks
// =============================================================================

fn benchmark_error_wire_format(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("error_wire_format");
    let error = Error::new("value.is.out.of.range", "Value 0 for x is out of range. Min value is 1, max value is 10.");
    let wire = error.serialize();

    group.bench_function("serialize", |bencher| {
        bencher.iter(|| black_box(&error).serialize());
    });

    group.bench_function("deserialize", |bencher| {
        bencher.iter(|| Error::deserialize(black_box(&wire)));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_result_chain,
    benchmark_unit_result_merge,
    benchmark_error_wire_format
);
criterion_main!(benches);
