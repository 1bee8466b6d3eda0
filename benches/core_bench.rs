use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use map_sketch::app::interactions::snap::snap_to_features;
use map_sketch::app::sketch::{axis_guides, GuideFeatureSet};
use map_sketch::{FeatureStore, SketchGeometry, StrokeStyle};
use std::hint::black_box;

fn stroke() -> StrokeStyle {
    StrokeStyle::new([0.0, 0.0, 0.0, 1.0], 5.0)
}

/// Store mit vielen Zickzack-Linien als Snap-Ziel-Kulisse.
fn build_synthetic_store(feature_count: usize) -> FeatureStore {
    let mut store = FeatureStore::new();

    for index in 0..feature_count {
        let row = (index / 100) as f32;
        let column = (index % 100) as f32;
        let origin = Vec2::new(column * 20.0, row * 20.0);
        store.add(
            SketchGeometry::LineString(vec![
                origin,
                origin + Vec2::new(10.0, 0.0),
                origin + Vec2::new(10.0, 10.0),
            ]),
            stroke(),
        );
    }

    store.ensure_spatial_index();
    store
}

fn build_query_points(count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let x = ((i * 13) % 2000) as f32 + 0.37;
            let y = ((i * 7) % 2000) as f32 + 0.63;
            Vec2::new(x, y)
        })
        .collect()
}

fn bench_guide_replace(c: &mut Criterion) {
    c.bench_function("guide_replace_cycle", |b| {
        let mut store = FeatureStore::new();
        let mut set = GuideFeatureSet::new();
        let mut anchor = Vec2::ZERO;

        b.iter(|| {
            anchor += Vec2::new(1.0, 0.5);
            let segments = axis_guides(black_box(anchor), 100_000.0);
            set.replace(&segments, stroke(), &mut store);
            black_box(store.len())
        })
    });
}

fn bench_snap_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("snap_queries");

    for &feature_count in &[100usize, 1_000usize] {
        let store = build_synthetic_store(feature_count);
        let query_points = build_query_points(256);

        group.bench_with_input(
            BenchmarkId::new("snap_batch", feature_count),
            &store,
            |b, store| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for point in &query_points {
                        if snap_to_features(black_box(*point), store, 2.0).is_some() {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                })
            },
        );
    }

    group.finish();
}

fn bench_index_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_rebuild");

    for &feature_count in &[1_000usize, 10_000usize] {
        group.bench_with_input(
            BenchmarkId::new("ensure_spatial_index", feature_count),
            &feature_count,
            |b, &count| {
                let mut store = build_synthetic_store(count);
                b.iter(|| {
                    // Mutation invalidiert den Index, danach voller Neuaufbau
                    let id = store.add(
                        SketchGeometry::LineString(vec![Vec2::ZERO, Vec2::new(1.0, 1.0)]),
                        stroke(),
                    );
                    store.ensure_spatial_index();
                    store.remove(id);
                    store.ensure_spatial_index();
                    black_box(store.vertex_index().len())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_guide_replace,
    bench_snap_queries,
    bench_index_rebuild
);
criterion_main!(benches);
