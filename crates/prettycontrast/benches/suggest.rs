use criterion::{black_box, criterion_group, criterion_main, Criterion};
use prettycontrast::contrast::{apca_contrast, wcag_contrast};
use prettycontrast::optimize::{
    find_accessible_by_lightness, generate_color_suggestions, OptimizationOptions,
};
use prettycontrast::Rgb;

pub fn run_benchmarks(c: &mut Criterion) {
    let foreground = Rgb::new(0x64, 0x95, 0xed);
    let background = Rgb::WHITE;

    // Compare the two contrast metrics.
    let mut group = c.benchmark_group("contrast");
    group.bench_function("wcag", |b| {
        b.iter(|| wcag_contrast(black_box(foreground), black_box(background)))
    });
    group.bench_function("apca", |b| {
        b.iter(|| apca_contrast(black_box(foreground), black_box(background)))
    });
    group.finish();

    let mut group = c.benchmark_group("optimize");
    group.sample_size(50);

    group.bench_function("binary-search", |b| {
        b.iter(|| find_accessible_by_lightness(black_box(foreground), background, 4.5, true))
    });

    let options = OptimizationOptions::default();
    group.bench_function("sweep", |b| {
        b.iter(|| generate_color_suggestions(black_box(foreground), background, &options))
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
