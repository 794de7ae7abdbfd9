use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexa::{contains_barycentric, Hexagon, Vector2};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("containment");

    let hexagon = Hexagon::new(1.0, true).unwrap();
    let mut rng = Pcg64::seed_from_u64(0);
    let rect = hexagon.rect().grow(0.25);
    let points: Vec<Vector2> = (0..1000)
        .map(|_| Vector2::new(rng.gen_range(rect.x), rng.gen_range(rect.y)))
        .collect();

    group.bench_function("edge test", |b| {
        b.iter(|| {
            points
                .iter()
                .filter(|p| hexagon.contains(black_box(**p)))
                .count()
        })
    });
    group.bench_function("barycentric", |b| {
        b.iter(|| {
            points
                .iter()
                .filter(|p| contains_barycentric(black_box(**p), 1.0, true))
                .count()
        })
    });
    group.bench_function("wedge lookup", |b| {
        b.iter(|| {
            points
                .iter()
                .filter_map(|p| hexagon.wedge_at(black_box(*p)))
                .count()
        })
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
