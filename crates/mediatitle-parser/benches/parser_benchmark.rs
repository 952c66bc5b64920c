//! Benchmarks for mediatitle-parser.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mediatitle_parser::numeral::parse_numeral;
use mediatitle_parser::parse;

const LATIN_SAMPLES: &[&str] = &[
    "Breaking Bad S01",
    "Game of Thrones Season 1",
    "The Office [Season 04] (2007)",
    "[Sakurato] Spy x Family [S02] [2023]",
    "Movie_Title_2021",
];

const CHINESE_SAMPLES: &[&str] = &[
    "权力的游戏 第一季",
    "绝命毒师 第二部",
    "庆余年[第二季](2024)",
    "名侦探柯南 第二十季",
    "家有儿女 · 第三部 - ",
];

const NO_MATCH_SAMPLES: &[&str] = &["Inception", "Room 1408", "Movie 1080p 2021", ""];

fn bench_parse_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_single");

    group.bench_function("latin_season", |b| {
        b.iter(|| parse(black_box("Breaking Bad S01")))
    });

    group.bench_function("chinese_season", |b| {
        b.iter(|| parse(black_box("权力的游戏 第一季")))
    });

    group.bench_function("season_and_year", |b| {
        b.iter(|| parse(black_box("The Office [Season 04] (2007)")))
    });

    // Falls through all eight season rules and all three year rules
    group.bench_function("no_match", |b| b.iter(|| parse(black_box("Inception"))));

    group.finish();
}

fn bench_parse_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_batch");

    for (name, samples) in [
        ("latin", LATIN_SAMPLES),
        ("chinese", CHINESE_SAMPLES),
        ("no_match", NO_MATCH_SAMPLES),
    ] {
        group.throughput(Throughput::Elements(samples.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), samples, |b, samples| {
            b.iter(|| {
                for sample in samples.iter() {
                    black_box(parse(black_box(sample)));
                }
            })
        });
    }

    group.finish();
}

fn bench_numerals(c: &mut Criterion) {
    let mut group = c.benchmark_group("numeral");

    for token in ["七", "十二", "三十", "三十二", "12"] {
        group.bench_with_input(BenchmarkId::from_parameter(token), token, |b, token| {
            b.iter(|| parse_numeral(black_box(token)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_single, bench_parse_batch, bench_numerals);
criterion_main!(benches);
