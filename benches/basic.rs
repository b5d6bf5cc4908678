//! See `README.md`

use core::hint;
use criterion::{Bencher, Criterion, criterion_group, criterion_main};
use placedvec::PlacedVec;
use smallvec::SmallVec;
use std::sync::OnceLock;

use rand::Rng;

const SMALL_SIZE: usize = 16;
const SMALL_SIZE_1: usize = 17;
const LARGE_SIZE: usize = 40000;

/// A function used to generate a random amount of data.
///
/// We use random data to simulate real-world scenarios and
/// avoid excessive optimization by the compiler when it knows the context.
#[inline(never)]
fn gen_one(start: usize, end: usize) -> usize {
    let mut rng = rand::rng();
    rng.random_range(start..end)
}

/// The amount of data used in small data testing,
/// is randomly generated to avoid the compiler optimizing based on accurate data volume.
static SMALL_BOUND: OnceLock<usize> = OnceLock::new();

/// The amount of data used in large data testing,
/// is randomly generated to avoid the compiler optimizing based on accurate data volume.
static LARGE_BOUND: OnceLock<usize> = OnceLock::new();

fn small_bound() -> usize {
    *SMALL_BOUND.get_or_init(|| gen_one(SMALL_SIZE - 2, SMALL_SIZE + 1))
}

fn large_bound() -> usize {
    *LARGE_BOUND.get_or_init(|| gen_one(LARGE_SIZE - 100, LARGE_SIZE + 100))
}

fn push_small(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_small");
    let bound = small_bound();

    group.bench_function("placed_vec", |b: &mut Bencher| {
        b.iter(|| {
            let mut vec = PlacedVec::<u64, SMALL_SIZE>::new();
            for i in 0..bound {
                vec.push(i as u64);
            }
            hint::black_box(&vec);
        })
    });

    group.bench_function("small_vec", |b: &mut Bencher| {
        b.iter(|| {
            let mut vec = SmallVec::<[u64; SMALL_SIZE]>::new();
            for i in 0..bound {
                vec.push(i as u64);
            }
            hint::black_box(&vec);
        })
    });

    group.bench_function("std_vec", |b: &mut Bencher| {
        b.iter(|| {
            let mut vec = Vec::<u64>::new();
            for i in 0..bound {
                vec.push(i as u64);
            }
            hint::black_box(&vec);
        })
    });

    group.finish();
}

fn push_large(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_large");
    let bound = large_bound();

    group.bench_function("placed_vec", |b: &mut Bencher| {
        b.iter(|| {
            let mut vec = PlacedVec::<u64, SMALL_SIZE>::new();
            for i in 0..bound {
                vec.push(i as u64);
            }
            hint::black_box(&vec);
        })
    });

    group.bench_function("small_vec", |b: &mut Bencher| {
        b.iter(|| {
            let mut vec = SmallVec::<[u64; SMALL_SIZE]>::new();
            for i in 0..bound {
                vec.push(i as u64);
            }
            hint::black_box(&vec);
        })
    });

    group.bench_function("std_vec", |b: &mut Bencher| {
        b.iter(|| {
            let mut vec = Vec::<u64>::new();
            for i in 0..bound {
                vec.push(i as u64);
            }
            hint::black_box(&vec);
        })
    });

    group.finish();
}

/// Spill just past the inline capacity, shrink, and bring the data home.
fn place_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("place_round_trip");
    let bound = gen_one(SMALL_SIZE_1, SMALL_SIZE_1 + 4);

    group.bench_function("placed_vec", |b: &mut Bencher| {
        b.iter(|| {
            let mut vec = PlacedVec::<u64, SMALL_SIZE>::new();
            for i in 0..bound {
                vec.push(i as u64);
            }
            vec.truncate(SMALL_SIZE / 2);
            hint::black_box(vec.put_in_place());
            hint::black_box(&vec);
        })
    });

    group.bench_function("small_vec", |b: &mut Bencher| {
        b.iter(|| {
            let mut vec = SmallVec::<[u64; SMALL_SIZE]>::new();
            for i in 0..bound {
                vec.push(i as u64);
            }
            vec.truncate(SMALL_SIZE / 2);
            vec.shrink_to_fit();
            hint::black_box(&vec);
        })
    });

    group.finish();
}

fn index_small(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_small");
    let bound = small_bound();

    let placed = {
        let mut vec = PlacedVec::<u64, SMALL_SIZE>::new();
        for i in 0..bound {
            vec.push(i as u64);
        }
        vec
    };
    group.bench_function("placed_vec", |b: &mut Bencher| {
        b.iter(|| {
            let mut sum = 0u64;
            for i in 0..bound {
                sum = sum.wrapping_add(placed[i]);
            }
            hint::black_box(sum);
        })
    });

    let small: SmallVec<[u64; SMALL_SIZE]> = (0..bound as u64).collect();
    group.bench_function("small_vec", |b: &mut Bencher| {
        b.iter(|| {
            let mut sum = 0u64;
            for i in 0..bound {
                sum = sum.wrapping_add(small[i]);
            }
            hint::black_box(sum);
        })
    });

    group.finish();
}

criterion_group!(benches, push_small, push_large, place_round_trip, index_small);
criterion_main!(benches);
