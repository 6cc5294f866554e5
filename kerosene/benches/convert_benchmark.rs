use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use kerosene::{convert, parse_value, ConverterForm, Unit};

fn bench_convert(c: &mut Criterion) {
    c.bench_function("pounds to kilograms", |b| {
        b.iter(|| convert(black_box("100.00"), Unit::Pounds, Unit::Kilograms))
    });

    c.bench_function("unreadable input", |b| {
        b.iter(|| convert(black_box("abc"), Unit::Liters, Unit::Pounds))
    });

    c.bench_function("parse value", |b| {
        b.iter(|| parse_value(black_box("  -1234.5e-2 kg")))
    });
}

/// Benchmark a form edit followed by reading the output
fn bench_form(c: &mut Criterion) {
    let mut form = ConverterForm::new();

    c.bench_function("form edit", |b| {
        b.iter(|| {
            form.set_value(black_box("2500"));
            form.swap_units();
            black_box(form.output())
        })
    });
}

criterion_group!(benches, bench_convert, bench_form);
criterion_main!(benches);
