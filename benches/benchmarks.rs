//! Benchmarks for windowstats
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use windowstats::engine::{EngineConfig, SignalDescriptor, StatisticsEngine};
use windowstats::math;
use windowstats::statistics::WindowStatistics;

// ============================================================================
// Window Statistics Benchmarks
// ============================================================================

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("window_push");
    group.throughput(Throughput::Elements(1));

    // Push cost should not depend on the window size
    for capacity in [16u32, 1024, 65536] {
        group.bench_with_input(BenchmarkId::new("f64", capacity), &capacity, |b, &cap| {
            let mut stats = WindowStatistics::<f64>::new(cap).unwrap();
            let mut i = 0u64;
            b.iter(|| {
                stats.push(black_box((i % 1000) as f64), false).unwrap();
                i = i.wrapping_add(1);
            });
        });

        group.bench_with_input(BenchmarkId::new("i32", capacity), &capacity, |b, &cap| {
            let mut stats = WindowStatistics::<i32>::new(cap).unwrap();
            let mut i = 0i32;
            b.iter(|| {
                stats.push(black_box(i % 1000), false).unwrap();
                i = i.wrapping_add(1);
            });
        });
    }

    group.finish();
}

fn bench_rescan(c: &mut Criterion) {
    let mut group = c.benchmark_group("window_rescan");
    group.throughput(Throughput::Elements(1));

    // A descending ramp evicts the maximum on every push once the window is
    // full, so each push pays the full O(capacity) rescan.
    for capacity in [16u32, 1024, 65536] {
        group.bench_with_input(
            BenchmarkId::new("descending", capacity),
            &capacity,
            |b, &cap| {
                let mut stats = WindowStatistics::<i64>::new(cap).unwrap();
                let mut i = i64::MAX / 2;
                b.iter(|| {
                    stats.push(black_box(i), false).unwrap();
                    i -= 1;
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("descending_infinite", capacity),
            &capacity,
            |b, &cap| {
                let mut stats = WindowStatistics::<i64>::new(cap).unwrap();
                let mut i = i64::MAX / 2;
                b.iter(|| {
                    stats.push(black_box(i), true).unwrap();
                    i -= 1;
                });
            },
        );
    }

    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("window_query");

    group.bench_function("f64_all", |b| {
        let mut stats = WindowStatistics::<f64>::new(1024).unwrap();
        for i in 0..4096u64 {
            stats.push(i as f64, false).unwrap();
        }
        b.iter(|| {
            black_box(stats.average());
            black_box(stats.rms());
            black_box(stats.standard_deviation());
            black_box(stats.min());
            black_box(stats.max());
        });
    });

    group.bench_function("u32_all", |b| {
        let mut stats = WindowStatistics::<u32>::new(1024).unwrap();
        for i in 0..4096u32 {
            stats.push(i % 100, false).unwrap();
        }
        b.iter(|| {
            black_box(stats.average());
            black_box(stats.rms());
            black_box(stats.standard_deviation());
            black_box(stats.min());
            black_box(stats.max());
        });
    });

    group.finish();
}

// ============================================================================
// Integer Square Root Benchmarks
// ============================================================================

fn bench_isqrt(c: &mut Criterion) {
    let mut group = c.benchmark_group("isqrt");

    group.bench_function("u32", |b| {
        let mut n = 1u32;
        b.iter(|| {
            black_box(math::isqrt_u32(black_box(n)));
            n = n.wrapping_mul(2_654_435_761);
        });
    });

    group.bench_function("u64", |b| {
        let mut n = 1u64;
        b.iter(|| {
            black_box(math::isqrt_u64(black_box(n)));
            n = n.wrapping_mul(0x9e37_79b9_7f4a_7c15);
        });
    });

    group.finish();
}

// ============================================================================
// Engine Benchmarks
// ============================================================================

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    group.throughput(Throughput::Elements(1));

    group.bench_function("execute_f32_four_outputs", |b| {
        let mut engine = StatisticsEngine::new(EngineConfig::default());
        let outputs: Vec<_> = ["Avg", "Std", "Min", "Max"]
            .iter()
            .map(|name| SignalDescriptor::scalar(*name, "float32"))
            .collect();
        engine
            .setup(&[SignalDescriptor::scalar("In", "float32")], &outputs)
            .unwrap();

        let mut slots = [[0u8; 4]; 4];
        let mut i = 0u32;
        b.iter(|| {
            let sample = (i % 500) as f32;
            let [avg, std, min, max] = &mut slots;
            engine
                .execute(&sample.to_ne_bytes(), &mut [avg, std, min, max])
                .unwrap();
            i = i.wrapping_add(1);
        });
    });

    group.finish();
}

// ============================================================================
// Main
// ============================================================================

criterion_group!(
    benches,
    bench_push,
    bench_rescan,
    bench_query,
    bench_isqrt,
    bench_engine,
);

criterion_main!(benches);
