use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mola_list::LinkedList;
use rand::seq::SliceRandom;
use std::collections::VecDeque;
use std::hint::black_box;

const SAMPLE_SIZE: usize = 10_000;

// --- FIFO queue workload: add at the tail, pop at the head ---

fn queue_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue");
    group.throughput(Throughput::Elements(SAMPLE_SIZE as u64));

    group.bench_function(BenchmarkId::new("linked_list", SAMPLE_SIZE), |b| {
        b.iter(|| {
            let mut list = LinkedList::new();
            for i in 0..SAMPLE_SIZE {
                list.add(i);
            }
            while let Some(value) = list.pop() {
                black_box(value);
            }
        });
    });

    group.bench_function(BenchmarkId::new("vec_deque", SAMPLE_SIZE), |b| {
        b.iter(|| {
            let mut queue = VecDeque::new();
            for i in 0..SAMPLE_SIZE {
                queue.push_back(i);
            }
            while let Some(value) = queue.pop_front() {
                black_box(value);
            }
        });
    });

    group.finish();
}

// --- Lookup workload: identity, content and comparator matching ---

fn lookup_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    for size in [16usize, 256, 4096] {
        let keys: Vec<Vec<u8>> = (0..size).map(|i| format!("key{}", i).into_bytes()).collect();
        let by_content: LinkedList<Vec<u8>> = keys.iter().cloned().collect();
        let by_identity: LinkedList<&Vec<u8>> = keys.iter().collect();
        let numbers: LinkedList<usize> = (0..size).collect();
        let last = &keys[size - 1];

        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("inspect", size), &size, |b, _| {
            b.iter(|| black_box(by_content.inspect(last)));
        });

        group.bench_with_input(BenchmarkId::new("search", size), &size, |b, _| {
            b.iter(|| black_box(by_identity.search(&last)));
        });

        group.bench_with_input(BenchmarkId::new("select_one", size), &size, |b, _| {
            b.iter(|| black_box(numbers.select_one(usize::cmp, &(size - 1))));
        });
    }

    group.finish();
}

// --- Sorted insertion of shuffled keys ---

fn ordered_insert_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_insert");

    for size in [64usize, 512, 2048] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(BenchmarkId::new("shuffled", size), |b| {
            b.iter_with_setup(
                || {
                    let mut values: Vec<usize> = (0..size).collect();
                    values.shuffle(&mut rand::rng());
                    values
                },
                |values| {
                    let mut list = LinkedList::new();
                    for value in values {
                        list.ordered_insert(usize::cmp, value);
                    }
                    black_box(list)
                },
            );
        });
    }

    group.finish();
}

// --- Splicing: transplant is O(1) regardless of the segment length ---

fn transplant_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("transplant");

    for size in [16usize, 4096] {
        group.bench_function(BenchmarkId::new("segment", size), |b| {
            b.iter_with_setup(
                || {
                    let target: LinkedList<usize> = (0..size).collect();
                    let segment: LinkedList<usize> = (0..size).collect();
                    (target, segment)
                },
                |(mut target, mut segment)| {
                    target.transplant(&mut segment);
                    black_box((target, segment))
                },
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    queue_benchmark,
    lookup_benchmark,
    ordered_insert_benchmark,
    transplant_benchmark
);
criterion_main!(benches);
