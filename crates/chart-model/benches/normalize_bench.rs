use chart_model::normalize_series;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};
use serde_json::{json, Value};

fn gen_series(series: usize, points: usize) -> Value {
    let list: Vec<Value> = (0..series)
        .map(|s| {
            let data: Vec<f64> = (0..points)
                .map(|i| (i as f64 * 0.01).sin() * 10.0 + s as f64)
                .collect();
            json!({"label": format!("series-{s}"), "data": data})
        })
        .collect();
    Value::Array(list)
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for &(series, points) in &[(4usize, 10_000usize), (16, 10_000), (4, 100_000)] {
        let raw = gen_series(series, points);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("s{series}_p{points}")),
            &raw,
            |b, raw| {
                b.iter(|| black_box(normalize_series(raw)));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
