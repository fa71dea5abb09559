//! # Transform Benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use simpson_kin::{ArmSolution, CartesianPos, Params, SimpsonSolution};

fn transform_benchmark(c: &mut Criterion) {
    // ---- Build the solutions ----

    let independent = SimpsonSolution::new(&Params::default());
    let bolt_spacing = SimpsonSolution::new(&Params::bolt_spacing());

    // A small spiral of targets through the workspace
    let targets: Vec<CartesianPos> = (0..100)
        .map(|i| {
            let t = i as f64 * 0.1;
            CartesianPos::new(50.0 * t.cos(), 50.0 * t.sin(), 2.0 * i as f64)
        })
        .collect();

    let actuators: Vec<_> = targets
        .iter()
        .map(|t| bolt_spacing.cartesian_to_actuator(t))
        .collect();

    c.bench_function("SimpsonSolution::cartesian_to_actuator", |b| {
        b.iter(|| {
            for t in targets.iter() {
                black_box(independent.cartesian_to_actuator(black_box(t)));
            }
        })
    });

    c.bench_function("SimpsonSolution::actuator_to_cartesian", |b| {
        b.iter(|| {
            for a in actuators.iter() {
                black_box(bolt_spacing.actuator_to_cartesian(black_box(a)));
            }
        })
    });
}

criterion_group!(benches, transform_benchmark);
criterion_main!(benches);
