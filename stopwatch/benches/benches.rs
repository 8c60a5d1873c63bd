use criterion::Throughput;

use criterion::Criterion;
use criterion::{criterion_group, criterion_main};

use stopwatch::{Clock, DecimalNanoseconds, IntegerNanoseconds, Monotonic, Realtime, Stopwatch};

fn clocks(c: &mut Criterion) {
    let mut group = c.benchmark_group("clock");
    group.throughput(Throughput::Elements(1));
    group.bench_function("monotonic/now", |b| b.iter(Monotonic::now));
    group.bench_function("realtime/now", |b| b.iter(Realtime::now));

    group.finish();
}

fn elapsed(c: &mut Criterion) {
    let mut stopwatch: Stopwatch = Stopwatch::new();
    stopwatch.start();

    let mut group = c.benchmark_group("stopwatch");
    group.throughput(Throughput::Elements(1));
    group.bench_function("elapsed/live", |b| {
        b.iter(|| stopwatch.elapsed::<DecimalNanoseconds>())
    });

    stopwatch.stop();
    group.bench_function("elapsed/frozen", |b| {
        b.iter(|| stopwatch.elapsed::<IntegerNanoseconds>())
    });

    group.finish();
}

criterion_group!(benches, clocks, elapsed);
criterion_main!(benches);
