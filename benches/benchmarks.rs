use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use heat1d::discretization::generator::Preset;
use heat1d::numerics::metrics::compute_errors;
use heat1d::numerics::transient::TransientSolver;
use heat1d::numerics::tridiagonal::Tridiagonal;
use heat1d::numerics::{Scheme, StepInput};
use heat1d::physics::params::Parameters;
use nalgebra::DVector;

fn grid_sizes() -> Vec<usize> {
    vec![101, 1001, 10001]
}

fn solve_sizes() -> Vec<usize> {
    vec![51, 201]
}

/// Sine start on [0, 1] with r = 0.4 so both schemes are stable.
fn sine_problem(num_points: usize, num_steps: usize) -> Parameters {
    let dx = 1.0 / (num_points - 1) as f64;
    Parameters::new(1.0, num_points, 0.4 * dx * dx, num_steps, 1.0)
        .unwrap()
        .with_preset(Preset::SinPiX)
}

fn bench_single_step(c: &mut Criterion) {
    for scheme in Scheme::ALL {
        let mut group = c.benchmark_group(format!("{}_step", scheme));
        for &size in &grid_sizes() {
            let params = sine_problem(size, 1);
            let input = StepInput::from_parameters(&params);
            let u = params.initial_conditions.clone();
            group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &_| {
                b.iter(|| {
                    let next = scheme.step(std::hint::black_box(&u), &input);
                    std::hint::black_box(next);
                });
            });
        }
        group.finish();
    }
}

fn bench_tridiagonal_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("tridiagonal_solve");
    for &size in &grid_sizes() {
        let matrix = Tridiagonal::constant(size, -0.4, 1.8, -0.4);
        let rhs = DVector::from_fn(size, |i, _| (i as f64).sin());
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &_| {
            b.iter(|| {
                let x = matrix.solve(std::hint::black_box(&rhs));
                std::hint::black_box(x);
            });
        });
    }
    group.finish();
}

fn bench_full_solve(c: &mut Criterion) {
    for scheme in Scheme::ALL {
        let mut group = c.benchmark_group(format!("{}_solve", scheme));
        let solver = TransientSolver::new(scheme);
        for &size in &solve_sizes() {
            let params = sine_problem(size, 500);
            group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &_| {
                b.iter(|| {
                    let history = solver.solve(&params);
                    std::hint::black_box(history.map(|h| h.len()).unwrap_or(0));
                });
            });
        }
        group.finish();
    }
}

fn bench_error_metric(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_errors");
    for &size in &solve_sizes() {
        let params = sine_problem(size, 500);
        let history = TransientSolver::new(Scheme::Implicit).solve(&params).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &_| {
            b.iter_batched(
                || history.clone(),
                |h| {
                    let errors = compute_errors(&params, &h);
                    std::hint::black_box(errors);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_single_step,
    bench_tridiagonal_solve,
    bench_full_solve,
    bench_error_metric
);
criterion_main!(benches);
