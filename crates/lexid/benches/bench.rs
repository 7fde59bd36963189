use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use lexid::{
    Alphabet, BasicMonoGenerator, LexConfig, LexId, LockMonoGenerator, MonotonicGenerator,
    RandSource, ThreadRandom, TimeSource, WallClock, batch_from_seed, decode, encode, increment,
};
use std::{
    sync::{Arc, Barrier},
    thread::scope,
    time::Instant,
};

struct FixedMockTime {
    millis: u64,
}

impl TimeSource for FixedMockTime {
    fn current_millis(&self) -> u64 {
        self.millis
    }
}

// Number of IDs generated per benchmark iteration (per-thread for
// multi-threaded).
const TOTAL_IDS: usize = 4096;

const MILLIS: u64 = 1_707_383_186_568;

/// Benchmarks a generator on the hot path.
fn bench_generator<G>(c: &mut Criterion, group_name: &str, generator_factory: impl Fn() -> G)
where
    G: MonotonicGenerator,
{
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                let generator = generator_factory();
                for _ in 0..TOTAL_IDS {
                    match generator.generate() {
                        Ok(id) => {
                            black_box(id);
                        }
                        Err(e) => panic!("unexpected error: {e:?}"),
                    }
                }
            }

            start.elapsed()
        });
    });

    group.finish();
}

/// Benchmarks a shared generator across threads.
fn bench_generator_contended<G>(c: &mut Criterion, group_name: &str, generator_fn: impl Fn() -> G)
where
    G: MonotonicGenerator + Send + Sync,
{
    let threads = num_cpus::get().clamp(2, 8);
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements((TOTAL_IDS * threads) as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}/threads/{threads}"), |b| {
        b.iter_custom(|iters| {
            let mut total = core::time::Duration::ZERO;
            for _ in 0..iters {
                let generator = Arc::new(generator_fn());
                let barrier = Arc::new(Barrier::new(threads + 1));

                let elapsed = scope(|s| {
                    for _ in 0..threads {
                        let generator = Arc::clone(&generator);
                        let barrier = Arc::clone(&barrier);
                        s.spawn(move || {
                            barrier.wait();
                            for _ in 0..TOTAL_IDS {
                                if let Ok(id) = generator.generate() {
                                    black_box(id);
                                }
                            }
                        });
                    }
                    barrier.wait();
                    Instant::now()
                });
                total += elapsed.elapsed();
            }
            total
        });
    });

    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let alphabet = Alphabet::DEFAULT;
    let mut group = c.benchmark_group("codec");

    group.bench_function("encode", |b| {
        b.iter(|| black_box(encode(black_box(u128::from(MILLIS)), &alphabet)));
    });
    group.bench_function("decode", |b| {
        b.iter(|| black_box(decode(black_box("0gzfy0hpvbcojf7hx"), &alphabet)));
    });
    group.bench_function("increment/no_carry", |b| {
        b.iter(|| black_box(increment(black_box("0gzfy0hpvbcojf7hx"), &alphabet)));
    });
    group.bench_function("increment/full_carry", |b| {
        b.iter(|| black_box(increment(black_box("0gzfy0hpvzzzzzzzz"), &alphabet)));
    });

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let config = LexConfig::default();
    let seed = LexId::new("0gzfy0hpv00000000");
    let mut group = c.benchmark_group("batch");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter(|| black_box(batch_from_seed(&config, &seed, TOTAL_IDS)));
    });

    group.finish();
}

fn bench_generators(c: &mut Criterion) {
    bench_generator(c, "mono/basic/fixed", || {
        BasicMonoGenerator::new(FixedMockTime { millis: MILLIS }, ThreadRandom)
    });
    bench_generator(c, "mono/lock/fixed", || {
        LockMonoGenerator::new(FixedMockTime { millis: MILLIS }, ThreadRandom)
    });
    bench_generator(c, "mono/basic/wall_clock", || {
        BasicMonoGenerator::new(WallClock::default(), ThreadRandom)
    });
    bench_generator_contended(c, "mono/lock/contended", || {
        LockMonoGenerator::new(WallClock::default(), ThreadRandom)
    });
}

fn bench_random(c: &mut Criterion) {
    c.bench_function("rand/pick", |b| {
        b.iter(|| black_box(ThreadRandom.pick(black_box(37))));
    });
}

criterion_group!(benches, bench_codec, bench_batch, bench_generators, bench_random);
criterion_main!(benches);
