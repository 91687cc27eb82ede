use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};
use sparkchart_core::{ChartOptions, CurveKind, LineGenerator, render_line};

fn gen_series(n: usize) -> Vec<f64> {
    // simple waveform with drift
    (0..n).map(|i| (i as f64 * 0.01).sin() * 10.0 + i as f64 * 0.0001).collect()
}

fn bench_curves(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve");
    let pts: Vec<Option<(f64, f64)>> = gen_series(10_000).into_iter().enumerate().map(|(i, y)| Some((i as f64, y))).collect();
    let kinds = [
        ("linear", CurveKind::Linear),
        ("cardinal", CurveKind::Cardinal { tension: 0.0 }),
        ("catmull_rom", CurveKind::CatmullRom { alpha: 0.5 }),
    ];
    for (name, kind) in kinds {
        let generator = LineGenerator::new().with_curve(kind);
        group.bench_with_input(BenchmarkId::from_parameter(name), &generator, |b, g| {
            b.iter(|| { let _ = black_box(g.generate(pts.iter().copied())); });
        });
    }
    group.finish();
}

fn bench_render_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_line");
    for &n in &[100usize, 1_000usize, 10_000usize] {
        let data = gen_series(n);
        group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}")), &data, |b, d| {
            b.iter(|| { let _ = black_box(render_line(d.iter().copied(), &ChartOptions::default())); });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_curves, bench_render_line);
criterion_main!(benches);
