//! Criterion benchmarks for planar area measurement and exact-area fitting.
//! Focus sizes: vertices per ring in {8, 64, 512, 4096}.
//! Results: by default under target/criterion.

use areafit::api::{collection_area, fit_area, MatchCfg, Projector};
use areafit::{Collection, LonLat, Polygon, Xy};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_parcel(pr: &Projector, n: usize, seed: u64) -> Collection {
    let mut rng = StdRng::seed_from_u64(seed);
    let c = pr.forward(LonLat::new(rng.gen_range(-120.0..120.0), rng.gen_range(-55.0..55.0)));
    let r = rng.gen_range(100.0..5_000.0);
    let ring = (0..n)
        .map(|k| {
            let th = (k as f64) * std::f64::consts::TAU / (n as f64);
            let rr = r * rng.gen_range(0.9..1.1);
            pr.inverse(c + Xy::new(th.cos() * rr, th.sin() * rr))
        })
        .collect();
    Collection::from_polygons([Polygon::new(ring, vec![])])
}

fn bench_fit(c: &mut Criterion) {
    let pr = Projector::default();
    let mut group = c.benchmark_group("areafit");
    for &n in &[8usize, 64, 512, 4096] {
        group.bench_with_input(BenchmarkId::new("collection_area", n), &n, |b, &n| {
            let fc = random_parcel(&pr, n, 43);
            b.iter(|| collection_area(&pr, black_box(&fc)))
        });

        group.bench_with_input(BenchmarkId::new("fit_area_x1.5", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let fc = random_parcel(&pr, n, 44);
                    let target = collection_area(&pr, &fc) * 1.5 + 0.003;
                    (fc, target)
                },
                |(fc, target)| {
                    let _res = fit_area(&pr, &fc, target, MatchCfg::default());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fit);
criterion_main!(benches);
