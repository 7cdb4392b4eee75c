use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use numen_base::{
    CycleSnapshot, IdentityProfile, ScorerConfig, karmic_path, letter_distribution, lo_shu_grid,
    pinnacles, reduce, score,
};

fn birth() -> NaiveDate {
    NaiveDate::from_ymd_opt(1990, 5, 15).unwrap_or_default()
}

fn reduce_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");
    group.bench_function("preserve_masters", |b| {
        b.iter(|| reduce(black_box(987_654_321), true))
    });
    group.bench_function("plain", |b| b.iter(|| reduce(black_box(987_654_321), false)));
    group.finish();
}

fn identity_bench(c: &mut Criterion) {
    let name = "Alexandria Catherine Montgomery";
    let birth = birth();

    let mut group = c.benchmark_group("identity");
    group.bench_function("profile", |b| {
        b.iter(|| IdentityProfile::compute(black_box(name), black_box(birth)))
    });
    group.bench_function("letter_distribution", |b| {
        b.iter(|| letter_distribution(black_box(name)))
    });
    group.bench_function("karmic_path", |b| {
        b.iter(|| karmic_path(black_box(birth), black_box(name)))
    });
    group.finish();
}

fn date_bench(c: &mut Criterion) {
    let birth = birth();
    let on = NaiveDate::from_ymd_opt(2024, 11, 29).unwrap_or_default();

    let mut group = c.benchmark_group("dates");
    group.bench_function("cycles", |b| {
        b.iter(|| CycleSnapshot::compute(black_box(birth), black_box(on)))
    });
    group.bench_function("lo_shu_grid", |b| b.iter(|| lo_shu_grid(black_box(birth))));
    group.bench_function("pinnacles", |b| b.iter(|| pinnacles(black_box(birth))));
    group.finish();
}

fn scorer_bench(c: &mut Criterion) {
    let cfg = ScorerConfig::address();
    c.bench_function("score_address", |b| {
        b.iter(|| score(black_box(4), black_box(6), &cfg))
    });
}

criterion_group!(
    benches,
    reduce_bench,
    identity_bench,
    date_bench,
    scorer_bench
);
criterion_main!(benches);
