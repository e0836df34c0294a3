use criterion::{Criterion, criterion_group, criterion_main};
use stat_radar::api::{RadarChartConfig, RadarSurface, StatExtractor};
use stat_radar::core::{PropertyValue, RawRecord, StatPoint, StatSeries, choose_scale};
use stat_radar::render::NullRenderer;
use std::hint::black_box;

fn bench_extract_10k(c: &mut Criterion) {
    let extractor = StatExtractor::default();
    let records: Vec<RawRecord> = (0..10_000)
        .map(|i| {
            let points = match i % 3 {
                0 => PropertyValue::number(f64::from(i % 500)),
                1 => PropertyValue::formula_number(Some(f64::from(i % 250))),
                _ => PropertyValue::rollup_number(None),
            };
            RawRecord::new(format!("page-{i}"))
                .with_property("Stat Name", PropertyValue::title(format!("Stat {i:05}")))
                .with_property("Points", points)
        })
        .collect();

    c.bench_function("extract_10k", |b| {
        b.iter(|| {
            let _ = extractor.extract(black_box(&records));
        })
    });
}

fn bench_choose_scale_10k(c: &mut Criterion) {
    let values: Vec<f64> = (0..10_000).map(|i| f64::from(i % 480) * 1.01).collect();

    c.bench_function("choose_scale_10k", |b| {
        b.iter(|| {
            let _ = choose_scale(black_box(&values));
        })
    });
}

fn bench_surface_render_12_axes(c: &mut Criterion) {
    let mut surface = RadarSurface::new(NullRenderer::default(), RadarChartConfig::default())
        .expect("surface init");
    let series: StatSeries = (0..12)
        .map(|i| StatPoint::new(format!("Stat {i}"), f64::from(i * 17)))
        .collect();

    c.bench_function("surface_render_12_axes", |b| {
        b.iter(|| {
            let _ = surface
                .render(black_box(&series))
                .expect("render should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_extract_10k,
    bench_choose_scale_10k,
    bench_surface_render_12_axes
);
criterion_main!(benches);
