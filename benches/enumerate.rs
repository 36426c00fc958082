use chip_deduction::{Color, Deduction, Shape, Target};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_enumerate(c: &mut Criterion) {
    let fresh = Deduction::new();
    let mut narrowed = Deduction::new();
    narrowed.nobody(Color::Green).opponent(Shape::Circle, true);

    c.bench_function("enumerate_fresh_bag", |b| {
        b.iter(|| black_box(&fresh).enumerate(Target::Bag))
    });
    c.bench_function("enumerate_narrowed_opponent", |b| {
        b.iter(|| black_box(&narrowed).enumerate(Target::Opponent))
    });
    c.bench_function("guess_options", |b| b.iter(|| black_box(&fresh).guess_options()));
    c.bench_function("explain", |b| b.iter(|| black_box(&narrowed).explain()));
}

criterion_group!(benches, bench_enumerate);
criterion_main!(benches);
