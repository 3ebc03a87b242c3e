//! Plan cache benchmarks — hit path + insert under eviction pressure.

use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use smallvec::smallvec;

use plancache::{
    CapacityLimit, PlanCache, PlanHandle, PlanKey, PlanMemory, Precision, TransformKind,
};

struct BenchPlan {
    bytes: u64,
}

impl PlanHandle for BenchPlan {
    fn memory(&self) -> PlanMemory {
        PlanMemory::WorkArea(self.bytes)
    }

    fn kind_label(&self) -> &'static str {
        "plan1d"
    }
}

fn bench_key(n: usize) -> PlanKey {
    PlanKey {
        shape: smallvec![n, 256],
        transform: TransformKind::ComplexToComplex,
        precision: Precision::Single,
        batch: 1,
        device: 0,
    }
}

fn hit_benchmark(c: &mut Criterion) {
    let mut cache = PlanCache::new(CapacityLimit::Bounded(64), CapacityLimit::Unbounded);
    for n in 0..64 {
        cache
            .put(bench_key(n), Arc::new(BenchPlan { bytes: 1024 }))
            .unwrap();
    }
    let key = bench_key(32);
    c.bench_function("get_hit_promote", |b| {
        b.iter(|| std::hint::black_box(cache.get(&key).unwrap()));
    });
}

fn insert_eviction_benchmark(c: &mut Criterion) {
    c.bench_function("put_with_eviction", |b| {
        let mut cache = PlanCache::new(CapacityLimit::Bounded(32), CapacityLimit::Unbounded);
        let mut n = 0usize;
        b.iter(|| {
            n = n.wrapping_add(1);
            cache
                .put(bench_key(n), Arc::new(BenchPlan { bytes: 1024 }))
                .unwrap();
        });
    });
}

criterion_group!(benches, hit_benchmark, insert_eviction_benchmark);
criterion_main!(benches);
