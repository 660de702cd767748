//! Benchmarks for the CPU-side animation core.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use morphfield::glyph::{self, GlyphStyle};
use morphfield::{sampler, FieldConfig, ParticleField};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn bench_sphere_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("sphere_points");

    for n in [1_000usize, 12_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut rng = SmallRng::seed_from_u64(7);
            b.iter(|| black_box(sampler::sphere_points(n, 8.0, 0.25, &mut rng)))
        });
    }

    group.finish();
}

fn bench_silhouette(c: &mut Criterion) {
    let mut group = c.benchmark_group("silhouette");

    group.bench_function("vkr", |b| {
        let style = GlyphStyle::new();
        let mut rng = SmallRng::seed_from_u64(7);
        b.iter(|| black_box(glyph::silhouette("VKR", &style, &mut rng)))
    });

    group.bench_function("vkr_keep_all", |b| {
        let style = GlyphStyle::new().with_keep_probability(1.0);
        let mut rng = SmallRng::seed_from_u64(7);
        b.iter(|| black_box(glyph::silhouette("VKR", &style, &mut rng)))
    });

    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    group.bench_function("morphing_12k", |b| {
        let mut field = ParticleField::new(FieldConfig::new().with_auto_morph_delay(None));
        field.morph_to("VKR");
        // Zero delta keeps the morph in flight while still interpolating
        // the full buffer each tick.
        b.iter(|| field.tick(black_box(0.0)));
    });

    group.bench_function("settled_idle_12k", |b| {
        let mut field = ParticleField::new(FieldConfig::new().with_auto_morph_delay(None));
        field.morph_to("VKR");
        field.tick(3.0);
        assert!(field.settled());
        b.iter(|| field.tick(black_box(1.0 / 60.0)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_sphere_points,
    bench_silhouette,
    bench_tick
);
criterion_main!(benches);
