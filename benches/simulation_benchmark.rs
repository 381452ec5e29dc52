/*!
 * Simulation Benchmarks
 *
 * Measures tick loop throughput as the workload grows.
 */

use admission_scheduler::{ProcessRecord, SchedulerConfig, Simulation, TraceRecorder};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Staggered arrivals with varied service so both queues stay populated
fn workload(processes: usize) -> Vec<ProcessRecord> {
    (0..processes)
        .map(|i| {
            let service = 1 + (i as u64 * 7) % 13;
            let arrival = (i as u64 * 3) % 50;
            ProcessRecord::new(format!("P{}", i), service, arrival)
        })
        .collect()
}

/// Benchmark: full run into an in-memory recorder
fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation/full_run");

    for processes in [10usize, 100, 500].iter() {
        let records = workload(*processes);
        let config = SchedulerConfig::new(2, 1).with_quantum(3);

        group.bench_with_input(
            BenchmarkId::from_parameter(processes),
            &records,
            |b, records| {
                b.iter(|| {
                    let mut recorder = TraceRecorder::new();
                    let summary = Simulation::new(records.clone(), config)
                        .run(&mut recorder)
                        .unwrap();
                    black_box(summary)
                })
            },
        );
    }

    group.finish();
}

/// Benchmark: promotion-heavy workload where New rarely drains
fn bench_slow_promotion(c: &mut Criterion) {
    let records = workload(200);
    let config = SchedulerConfig::new(1, 3);

    c.bench_function("simulation/slow_promotion", |b| {
        b.iter(|| {
            let mut sim = Simulation::new(records.clone(), config);
            while let Some(snapshot) = sim.step() {
                black_box(snapshot);
            }
        })
    });
}

criterion_group!(benches, bench_full_run, bench_slow_promotion);
criterion_main!(benches);
