//! Throughput benchmarks across the three length classes.
//!
//! No `_ref` comparison bench: there is no baseline "unoptimized"
//! implementation distinct from this one, unlike the teacher's
//! reference-vs-hardware split — the CLMUL backend selection already
//! lives inside a single `hash` call and picks the best available path
//! at runtime.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use umash::{hash, Params, PH_WORDS};

fn params() -> Params {
    let poly_seed = [[0u64, 0x1234_5678_9abc_def1], [0u64, 0x0fed_cba9_8765_4321]];
    let mut ph_seed = [0u64; PH_WORDS];
    for (i, slot) in ph_seed.iter_mut().enumerate() {
        *slot = (i as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15).wrapping_add(1);
    }
    Params::new(poly_seed, ph_seed).unwrap()
}

fn bench_hash(c: &mut Criterion) {
    let params = params();
    let mut group = c.benchmark_group("umash");

    for &size in &[8usize, 16, 64, 256, 1024, 16 * 1024] {
        let data = vec![0xabu8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| hash(&params, 0, false, data));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_hash);
criterion_main!(benches);
