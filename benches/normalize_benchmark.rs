// ============================================================================
// Answer Formatting Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Normalizer - Rounding and rendering across magnitude classes
// 2. Scientific Converter - Digit shifting in isolation
// 3. Operators - End-to-end evaluation through the calculator
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use funcqa_math::prelude::*;
use std::hint::black_box;

// ============================================================================
// Normalizer Benchmarks
// ============================================================================

fn benchmark_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    let values: [(&str, Number); 5] = [
        ("integer", Number::Integer(1_267_650_600_228_229_401)),
        ("moderate", Number::Real(52.3523)),
        ("small", Number::Real(0.00000233)),
        ("tiny", Number::Real(4.1234e-11)),
        ("huge", Number::Real(1.5e200)),
    ];

    for (label, value) in values {
        group.bench_with_input(BenchmarkId::new("default", label), &value, |b, &value| {
            b.iter(|| black_box(normalize(black_box(value))))
        });
    }

    group.finish();
}

// ============================================================================
// Scientific Converter Benchmarks
// ============================================================================

fn benchmark_scientific_to_decimal(c: &mut Criterion) {
    let mut group = c.benchmark_group("scientific_to_decimal");

    for input in ["1.23e-4", "5.67e+2", "1.7976931348623157e+308", "5e-324"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, input| {
            b.iter(|| black_box(scientific_to_decimal(black_box(input))))
        });
    }

    group.finish();
}

// ============================================================================
// Operator Benchmarks
// ============================================================================

fn benchmark_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("operations");
    let calculator = Calculator::default();

    let requests = [
        OperationRequest::new(Operation::Add, [1, 2, 3, 4, 5]),
        OperationRequest::new(Operation::Divide, [22, 7]),
        OperationRequest::new(Operation::Power, [2, 3, 2]),
        OperationRequest::new(Operation::Log, [8, 2]),
        OperationRequest::new(Operation::Choose, [100, 50]),
        OperationRequest::new(Operation::Lcm, [6, 8, 12, 15]),
    ];

    for request in &requests {
        group.bench_with_input(
            BenchmarkId::new("evaluate", request.operation.name()),
            request,
            |b, request| b.iter(|| black_box(calculator.evaluate_request(black_box(request)))),
        );
    }

    group.bench_function("batch", |b| {
        b.iter(|| black_box(calculator.evaluate_batch(black_box(&requests))))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_normalize,
    benchmark_scientific_to_decimal,
    benchmark_operations
);
criterion_main!(benches);
