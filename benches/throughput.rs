//! Single-threaded offer/poll throughput.

use std::hint::black_box;

use covering_ring::CoveringRing;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const BATCH: u64 = 1024;

fn bench_offer_poll(c: &mut Criterion) {
    let mut group = c.benchmark_group("offer_poll");
    group.throughput(Throughput::Elements(BATCH));

    for capacity in [64usize, 1024, 16384] {
        group.bench_with_input(
            BenchmarkId::new("interleaved", capacity),
            &capacity,
            |b, &capacity| {
                let ring = CoveringRing::new(capacity).unwrap();
                b.iter(|| {
                    for i in 0..BATCH {
                        ring.offer(black_box(i));
                        black_box(ring.poll());
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("batch", capacity),
            &capacity,
            |b, &capacity| {
                let ring = CoveringRing::new(capacity).unwrap();
                b.iter(|| {
                    for i in 0..BATCH {
                        ring.offer(black_box(i));
                    }
                    black_box(ring.poll_list(BATCH as usize));
                });
            },
        );
    }

    group.finish();
}

fn bench_overwrite(c: &mut Criterion) {
    let mut group = c.benchmark_group("overwrite");
    group.throughput(Throughput::Elements(BATCH));

    // Producer laps the ring repeatedly with no consumer.
    group.bench_function("offer_only_cap64", |b| {
        let ring = CoveringRing::new(64).unwrap();
        b.iter(|| {
            for i in 0..BATCH {
                ring.offer(black_box(i));
            }
        });
    });

    group.bench_function("offer_mut_only_cap64", |b| {
        let mut ring = CoveringRing::new(64).unwrap();
        b.iter(|| {
            for i in 0..BATCH {
                ring.offer_mut(black_box(i));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_offer_poll, bench_overwrite);
criterion_main!(benches);
