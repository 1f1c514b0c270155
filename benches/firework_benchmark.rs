/*
 * Firework Simulation Benchmark
 *
 * This file contains benchmarks for the firework simulation. It measures a
 * single firework tick across particle counts and the full show step with
 * and without parallel ticking.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fireworks::{Firework, Launch, Show, ShowParams, Simulate};
use nannou::prelude::*;
use std::time::Duration;

// Benchmark one tick of a single firework
fn bench_firework_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("firework_tick");

    for particle_count in [100, 500, 2000, 10000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(particle_count),
            particle_count,
            |b, &n| {
                let launch = Launch {
                    particle_count: n,
                    ..Launch::default()
                };
                let mut firework = Firework::seeded(launch, 1);

                b.iter(|| {
                    firework.tick(black_box(0.016), black_box(Vec3::ZERO));
                });
            },
        );
    }

    group.finish();
}

// Benchmark a whole show step, sequential against parallel
fn bench_show_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("show_step");

    for parallel in [false, true].iter() {
        group.bench_with_input(BenchmarkId::new("parallel", parallel), parallel, |b, &parallel| {
            let mut params = ShowParams::default();
            params.firework_count = 8;
            params.particles_per_firework = 2000;
            params.seed = Some(7);
            let mut show = Show::new(&params, Rect::from_w_h(1280.0, 720.0));

            b.iter(|| {
                show.step(black_box(0.016), parallel);
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_firework_tick, bench_show_step
}

criterion_main!(benches);
