//! Benchmarks for parsing, syllabification and word analysis.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hebphonics::prelude::*;

/// Genesis 1:1, pointed and accented
const VERSE: &[&str] = &[
    "בְּרֵאשִׁ֖ית",
    "בָּרָ֣א",
    "אֱלֹהִ֑ים",
    "אֵ֥ת",
    "הַשָּׁמַ֖יִם",
    "וְאֵ֥ת",
    "הָאָֽרֶץ",
];

/// Words that exercise the sheva and qamats stages
const HARD_WORDS: &[&str] = &["וְיִשְׁתַּחֲוּוּ", "רַעְמְסֵס", "חָכְמַת", "פָשְׂתָה", "יְחִֽידְךָ"];

fn bench_lex(c: &mut Criterion) {
    let parser = Parser::default();
    c.bench_function("lex_verse", |b| {
        b.iter(|| {
            for word in VERSE {
                black_box(parser.lex(black_box(word)).unwrap());
            }
        });
    });
}

fn bench_parse(c: &mut Criterion) {
    let parser = Parser::default();
    let mut group = c.benchmark_group("parse");

    for (name, words) in [("verse", VERSE), ("hard_words", HARD_WORDS)] {
        group.throughput(Throughput::Elements(words.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), words, |b, words| {
            b.iter(|| {
                for word in words.iter() {
                    black_box(parser.parse(black_box(word)).unwrap());
                }
            });
        });
    }
    group.finish();
}

fn bench_syllabify(c: &mut Criterion) {
    let parser = Parser::default();
    let parsed: Vec<Vec<Cluster>> = VERSE.iter().map(|w| parser.parse(w).unwrap()).collect();
    let mut group = c.benchmark_group("syllabify");

    for strict in [false, true] {
        group.bench_with_input(BenchmarkId::from_parameter(strict), &strict, |b, &strict| {
            b.iter(|| {
                for clusters in &parsed {
                    let mut clusters = clusters.clone();
                    black_box(parser.syllabify(&mut clusters, strict));
                }
            });
        });
    }
    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let parser = Parser::default();
    let mut group = c.benchmark_group("analyze");
    group.throughput(Throughput::Elements(VERSE.len() as u64));
    group.bench_function("verse", |b| {
        b.iter(|| {
            for word in VERSE {
                black_box(Word::analyze(&parser, black_box(word)).unwrap());
            }
        });
    });
    group.finish();
}

fn bench_auxiliary(c: &mut Criterion) {
    let mut group = c.benchmark_group("auxiliary");
    group.bench_function("gematria", |b| {
        b.iter(|| {
            for word in VERSE {
                black_box(gematria(black_box(word)));
            }
        });
    });
    group.bench_function("shemot", |b| {
        let stripped: Vec<String> = VERSE.iter().map(|w| strip(w)).collect();
        b.iter(|| {
            for word in &stripped {
                black_box(is_sacred_name(black_box(word)));
            }
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_lex,
    bench_parse,
    bench_syllabify,
    bench_analyze,
    bench_auxiliary
);
criterion_main!(benches);
