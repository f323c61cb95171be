use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use thai_core::segmenter::{PathPolicy, Segmenter, Tokenize};
use thai_core::syllable::Syllabifier;

const SENTENCES: &[&str] = &[
    "ฉันกินข้าว",
    "วันนี้ฝนตกหนักมาก",
    "พวกเราไปโรงเรียนด้วยกันทุกวัน",
    "คนไทยชอบกินอาหารไทยที่ร้านอาหารใกล้บ้าน",
];

fn bench_policies(c: &mut Criterion) {
    let mm = Segmenter::with_default_words(PathPolicy::MaximumMatching);
    let greedy = mm.with_policy(PathPolicy::GreedyLongestMatch);
    let long_text: String = SENTENCES.concat().repeat(20);

    let mut group = c.benchmark_group("tokenize");
    for (name, seg) in [("maximum-matching", &mm), ("greedy-longest-match", &greedy)] {
        group.bench_with_input(BenchmarkId::new(name, "sentences"), &seg, |b, seg| {
            b.iter(|| {
                for s in SENTENCES {
                    black_box(seg.tokenize(black_box(s)).ok());
                }
            })
        });
        group.bench_with_input(BenchmarkId::new(name, "long"), &seg, |b, seg| {
            b.iter(|| black_box(seg.tokenize(black_box(&long_text)).ok()))
        });
    }
    group.finish();
}

fn bench_syllabify(c: &mut Criterion) {
    let syl = Syllabifier::with_defaults();
    c.bench_function("syllabify/sentences", |b| {
        b.iter(|| {
            for s in SENTENCES {
                black_box(syl.syllabify(black_box(s)).ok());
            }
        })
    });
}

criterion_group!(benches, bench_policies, bench_syllabify);
criterion_main!(benches);
