use criterion::{black_box, criterion_group, criterion_main, Criterion};
use intersection_sim::{
    config::SimulationConfig,
    simulation::{LaneQueues, SignalController, SimulationState},
    compute::{CpuBackend, SimulationBackend},
};

fn benchmark_cpu_simulation(c: &mut Criterion) {
    let config = SimulationConfig::default();
    let mut backend = CpuBackend::new(&config, Some(42));
    let mut state = SimulationState::new(1.0 / 30.0);

    // Run past the first red phase so queues have formed
    for _ in 0..(20 * 30) {
        backend.update(&mut state).unwrap();
    }

    c.bench_function("cpu_simulation_update", |b| {
        b.iter(|| {
            backend.update(black_box(&mut state)).unwrap();
        })
    });
}

fn benchmark_simulation_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation_scaling");

    // Shorter intervals and gaps pack more vehicles onto each approach
    for (interval, gap) in [(2.0, 10.0), (0.5, 5.0), (0.1, 1.0)] {
        let mut config = SimulationConfig::default();
        config.vehicles.spawn.interval = interval;
        config.vehicles.vehicle.gap = gap;

        let mut backend = CpuBackend::new(&config, Some(42));
        let mut state = SimulationState::new(1.0 / 30.0);
        for _ in 0..(20 * 30) {
            backend.update(&mut state).unwrap();
        }

        group.bench_function(format!("cpu_{}_vehicles", state.active_vehicles()), |b| {
            b.iter(|| {
                backend.update(black_box(&mut state)).unwrap();
            });
        });
    }

    group.finish();
}

fn benchmark_lane_ordering(c: &mut Criterion) {
    let mut config = SimulationConfig::default();
    config.vehicles.spawn.interval = 0.1;
    let mut backend = CpuBackend::new(&config, Some(42));
    let mut state = SimulationState::new(1.0 / 30.0);
    for _ in 0..(12 * 30) {
        backend.update(&mut state).unwrap();
    }

    c.bench_function("lane_queue_build", |b| {
        b.iter(|| LaneQueues::build(black_box(&state.vehicles)))
    });
}

fn benchmark_signal_state(c: &mut Criterion) {
    let controller = SignalController::new(SimulationConfig::default().intersection.signals);

    c.bench_function("signal_state", |b| {
        b.iter(|| controller.signal_state(black_box(1234.5)))
    });
}

criterion_group!(
    benches,
    benchmark_cpu_simulation,
    benchmark_simulation_scaling,
    benchmark_lane_ordering,
    benchmark_signal_state
);
criterion_main!(benches);
