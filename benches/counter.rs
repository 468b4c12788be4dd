use criterion::{Criterion, black_box, criterion_group, criterion_main};
use growable_collections::ClampedCounter;

fn bench_counter(c: &mut Criterion) {
    let mut group = c.benchmark_group("ClampedCounter (Arithmetic)");
    let deltas: Vec<i32> = (0..256).map(|i| (i * 37 % 301) - 150).collect();

    group.bench_function("add_assign / sub_assign", |b| {
        b.iter(|| {
            let mut hp = ClampedCounter::new(100).unwrap();
            for d in &deltas {
                hp += black_box(*d);
                hp -= black_box(*d / 2);
            }
            hp
        })
    });

    group.bench_function("compare", |b| {
        let base = ClampedCounter::default() - 50;
        b.iter(|| {
            deltas
                .iter()
                .filter(|d| black_box(base + **d) > base)
                .count()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_counter);
criterion_main!(benches);
