//! Heapsort Benchmarks
//!
//! Compares the counted and uncounted sort across input sizes, and against
//! the standard library's unstable sort for reference.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heapsort_bench
//!
//! # Only one size
//! cargo bench --bench heapsort_bench -- '/4096'
//! ```

use counted_heapsort::experiment::random_sequence;
use counted_heapsort::heapsort::heap_sort_uncounted;
use counted_heapsort::{heap_sort, CountingPolicy, OperationCounter};
use criterion::{
    criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

const SIZES: [usize; 4] = [64, 1024, 4096, 65536];

fn bench_heap_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_sort");

    for &size in &SIZES {
        let input = random_sequence(&mut StdRng::seed_from_u64(size as u64), size, i32::MAX);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("uncounted", size), &input, |b, input| {
            b.iter_batched_ref(
                || input.clone(),
                |data| heap_sort_uncounted(black_box(data)),
                BatchSize::SmallInput,
            )
        });

        for policy in [CountingPolicy::Inclusive, CountingPolicy::ValueComparisons] {
            let id = match policy {
                CountingPolicy::Inclusive => "counted_inclusive",
                CountingPolicy::ValueComparisons => "counted_value",
            };
            group.bench_with_input(BenchmarkId::new(id, size), &input, |b, input| {
                b.iter_batched_ref(
                    || (input.clone(), OperationCounter::with_policy(policy)),
                    |(data, counter)| {
                        heap_sort(black_box(data), counter);
                        black_box(counter.read())
                    },
                    BatchSize::SmallInput,
                )
            });
        }

        group.bench_with_input(BenchmarkId::new("std_unstable", size), &input, |b, input| {
            b.iter_batched_ref(
                || input.clone(),
                |data| black_box(data).sort_unstable(),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_heap_sort);
criterion_main!(benches);
