//! Benchmark for the bad-module analysis
//!
//! Measures:
//! - Full analysis time vs. fraction of flagged units
//! - Clustering alone on a dense flagged set
//! - Overlap grouping alone

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pixel_bad_modules::{
    AnalysisConfig, BadModuleAnalysis, ClusterBuilder, DetectorCatalog, FlaggedSet,
    OverlapAnalyzer, Region, SpanComputer, SyntheticGeometry,
};

/// Every `stride`-th unit of the catalog, plus its successor so that
/// multi-unit clusters appear
fn flagged_with_stride(catalog: &DetectorCatalog, stride: usize) -> FlaggedSet {
    let ids: Vec<_> = catalog.records().into_iter().map(|record| record.id).collect();
    ids.iter()
        .enumerate()
        .filter(|(i, _)| i % stride == 0 || i % stride == 1)
        .map(|(_, &id)| id)
        .collect()
}

fn bench_full_analysis(c: &mut Criterion) {
    let catalog = SyntheticGeometry::phase1().build().unwrap();
    let mut group = c.benchmark_group("full_analysis");

    for stride in [100usize, 20, 10] {
        let flagged = flagged_with_stride(&catalog, stride);
        group.bench_with_input(
            BenchmarkId::from_parameter(flagged.len()),
            &flagged,
            |b, flagged| {
                let analysis = BadModuleAnalysis::new(&catalog, AnalysisConfig::default()).unwrap();
                b.iter(|| black_box(analysis.run(black_box(flagged)).unwrap()));
            },
        );
    }

    group.finish();
}

fn bench_clustering(c: &mut Criterion) {
    let catalog = SyntheticGeometry::phase1().build().unwrap();
    let flagged = flagged_with_stride(&catalog, 4);
    let builder = ClusterBuilder::new(&catalog);

    c.bench_function("clustering_dense", |b| {
        b.iter(|| {
            let barrel = builder.build_clusters(Region::Barrel, black_box(&flagged));
            let endcap = builder.build_clusters(Region::Endcap, black_box(&flagged));
            black_box((barrel, endcap))
        });
    });
}

fn bench_overlap_grouping(c: &mut Criterion) {
    let catalog = SyntheticGeometry::phase1().build().unwrap();
    let flagged = flagged_with_stride(&catalog, 10);
    let builder = ClusterBuilder::new(&catalog);
    let computer = SpanComputer::new(&catalog);

    let barrel = computer
        .compute_spans(&builder.build_clusters(Region::Barrel, &flagged))
        .unwrap();
    let endcap = computer
        .compute_spans(&builder.build_clusters(Region::Endcap, &flagged))
        .unwrap();
    let analyzer = OverlapAnalyzer::default();

    c.bench_function("overlap_grouping", |b| {
        b.iter(|| black_box(analyzer.find_overlap_groups(black_box(&barrel), black_box(&endcap)).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_full_analysis,
    bench_clustering,
    bench_overlap_grouping
);
criterion_main!(benches);
