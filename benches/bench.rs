use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::prelude::*;

use grove::{Map, Vector};

fn random_keys(count: usize) -> Vec<u64> {
    let mut rng = rand::thread_rng();
    let mut keys: Vec<u64> = (0..count as u64).collect();

    keys.shuffle(&mut rng);

    keys
}

fn build_map(keys: &[u64]) -> Map<u64, u64> {
    let mut map = Map::new();

    for &key in keys {
        map.insert(key, key);
    }

    map
}

fn containers_benchmark(c: &mut Criterion) {
    c.bench_function("map 10K random insertions", |b| {
        b.iter_batched(
            || random_keys(10_000),
            |keys| build_map(&keys),
            BatchSize::LargeInput,
        )
    });

    c.bench_function("map 10K sequential insertions", |b| {
        b.iter_batched(
            || (0..10_000u64).map(|k| (k, k)).collect::<Vec<_>>(),
            |entries| entries.into_iter().collect::<Map<_, _>>(),
            BatchSize::LargeInput,
        )
    });

    c.bench_function("map random lookups", |b| {
        b.iter_batched(
            || {
                let keys = random_keys(10_000);
                (build_map(&keys), random_keys(1_000))
            },
            |(map, probes)| probes.iter().filter(|key| map.contains_key(key)).count(),
            BatchSize::LargeInput,
        )
    });

    c.bench_function("map random removals", |b| {
        b.iter_batched(
            || {
                let keys = random_keys(10_000);
                (build_map(&keys), random_keys(1_000))
            },
            |(mut map, probes)| {
                for key in probes {
                    map.remove(&key);
                }
                map
            },
            BatchSize::LargeInput,
        )
    });

    c.bench_function("map inorder iteration", |b| {
        b.iter_batched(
            || build_map(&random_keys(10_000)),
            |map| map.iter().map(|(_, v)| *v).sum::<u64>(),
            BatchSize::LargeInput,
        )
    });

    c.bench_function("vector 100K pushes", |b| {
        b.iter(|| {
            let mut v = Vector::new();
            for i in 0..100_000u64 {
                v.push(i);
            }
            v
        })
    });
}

criterion_group!(benches, containers_benchmark);
criterion_main!(benches);
