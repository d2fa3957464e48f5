//! Benchmarks for the synastry pipeline
//!
//! Run with: `cargo bench --bench synastry_overlay`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ziwei_analyzer::chart::stars::*;
use ziwei_analyzer::chart::{Brightness, ChartBuilder, ChartIndex, Marker, MarkerCategory, TransformKind};
use ziwei_analyzer::explanation::ExplanationGenerator;
use ziwei_analyzer::patterns::PatternEngine;
use ziwei_analyzer::synastry::{project, ScoringConfig, SynastryScorer};
use ziwei_analyzer::utils::BucketTable;

fn populated(offset: usize) -> ChartIndex {
    let chart = ChartBuilder::new()
        .branch_offset(offset)
        .marker(0, Marker::new(ZI_WEI, MarkerCategory::Major).with_brightness(Brightness::Miao))
        .stars(0, &[TIAN_FU, ZUO_FU, "红鸾"])
        .marker(
            2,
            Marker::new(TAI_YANG, MarkerCategory::Major)
                .with_brightness(Brightness::Wang)
                .with_transform(TransformKind::Lu),
        )
        .stars(2, &[JU_MEN, WEN_CHANG, "天刑"])
        .stars(4, &[WU_QU, QI_SHA, YOU_BI, LU_CUN])
        .stars(6, &[LIAN_ZHEN, TAN_LANG, QING_YANG, "天喜"])
        .stars(8, &[TIAN_XIANG, WEN_QU, TIAN_MA, SAN_TAI, BA_ZUO])
        .stars(10, &[TIAN_LIANG, TIAN_TONG, HUO_XING, "孤辰"])
        .build()
        .unwrap();
    ChartIndex::build(&chart)
}

fn bench_project(c: &mut Criterion) {
    let (a, b) = (populated(2), populated(5));
    c.bench_function("project", |bench| bench.iter(|| project(black_box(&a), black_box(&b))));
}

fn bench_score(c: &mut Criterion) {
    let (a, b) = (populated(2), populated(5));
    let scorer = SynastryScorer::new(ScoringConfig::default());
    c.bench_function("score", |bench| bench.iter(|| scorer.score(black_box(&a), black_box(&b))));
}

fn bench_score_and_render(c: &mut Criterion) {
    let (a, b) = (populated(2), populated(5));
    let scorer = SynastryScorer::new(ScoringConfig::default());
    let generator = ExplanationGenerator::default();
    let buckets = BucketTable::default();
    c.bench_function("score_and_render", |bench| {
        bench.iter(|| {
            let score = scorer.score(black_box(&a), black_box(&b));
            generator.generate("A", "B", &score, &buckets)
        })
    });
}

fn bench_patterns(c: &mut Criterion) {
    let a = populated(2);
    let engine = PatternEngine::default();
    c.bench_function("detect_patterns", |bench| bench.iter(|| engine.detect(black_box(&a)).unwrap()));
}

criterion_group!(benches, bench_project, bench_score, bench_score_and_render, bench_patterns);
criterion_main!(benches);
