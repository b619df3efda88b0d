//! Benchmarks for the step kernel and the generation jumper.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use life_engine::core::{Grid, RuleSet, SoupRng};
use life_engine::engine::{fingerprint, step, CancelToken, GenerationJumper, JumpConfig};
use life_engine::patterns;

fn bench_step(c: &mut Criterion) {
    let mut rng = SoupRng::new(42);
    let soup = Grid::soup(64, 64, 0.35, &mut rng);
    let rules = RuleSet::conway();

    c.bench_function("step_64x64_soup", |b| {
        b.iter(|| step(black_box(&soup), black_box(&rules)))
    });

    let gun = {
        let mut grid = Grid::new(40, 60);
        patterns::GOSPER_GLIDER_GUN.stamp(&mut grid, 2, 2);
        grid
    };

    c.bench_function("step_40x60_gun", |b| {
        b.iter(|| step(black_box(&gun), black_box(&rules)))
    });
}

fn bench_fingerprint(c: &mut Criterion) {
    let mut rng = SoupRng::new(42);
    let soup = Grid::soup(64, 64, 0.35, &mut rng);

    c.bench_function("fingerprint_64x64", |b| {
        b.iter(|| fingerprint(black_box(&soup)))
    });
}

fn bench_jump(c: &mut Criterion) {
    let rules = RuleSet::conway();
    let jumper = GenerationJumper::default();
    let token = CancelToken::new();

    // Ten million generations answered from a period-2 cycle.
    let blinker = patterns::BLINKER.grid(2);
    c.bench_function("jump_blinker_to_10M", |b| {
        b.iter(|| {
            jumper
                .state_at(black_box(&blinker), &rules, 10_000_000, &token)
                .unwrap()
        })
    });

    // Period-3 cycle with a nonzero residue after detection.
    let pulsar = patterns::PULSAR.grid(2);
    c.bench_function("jump_pulsar_to_10M+1", |b| {
        b.iter(|| {
            jumper
                .state_at(black_box(&pulsar), &rules, 10_000_001, &token)
                .unwrap()
        })
    });

    // Worst case: a soup that has to be simulated until it settles.
    let mut rng = SoupRng::new(7);
    let soup = Grid::soup(32, 32, 0.35, &mut rng);
    let settling = GenerationJumper::new(JumpConfig::default().with_max_iterations(50_000));
    c.bench_function("jump_32x32_soup_to_settle", |b| {
        b.iter(|| {
            let _ = settling.state_at(black_box(&soup), &rules, 50_000, &token);
        })
    });
}

criterion_group!(benches, bench_step, bench_fingerprint, bench_jump);
criterion_main!(benches);
