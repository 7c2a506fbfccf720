use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use papercheck::{
    FrequencyTable, PapercheckConfig, compare_texts, cosine_similarity, fingerprint,
    hamming_distance, tokenize,
};
use std::hint::black_box;

const PARAGRAPH: &str = "SimHash是一种用于文本相似度计算的哈希算法，它可以将高维的文本特征\
    映射到低维的哈希值，适用于大规模文本查重场景。Rust gives you memory safety \
    without a garbage collector; ownership rules are checked at compile time. ";

fn big_text() -> String {
    PARAGRAPH.repeat(2_000)
}

fn tokenize_bench(c: &mut Criterion) {
    let text = big_text();
    let mut group = c.benchmark_group("tokenize");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("big_text", |b| {
        b.iter(|| black_box(tokenize(black_box(text.as_str()))));
    });
    group.finish();
}

fn fingerprint_bench(c: &mut Criterion) {
    let text = big_text();
    let mut group = c.benchmark_group("fingerprint");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("big_text", |b| {
        b.iter(|| black_box(fingerprint(black_box(text.as_str()))));
    });
    group.finish();
}

fn score_bench(c: &mut Criterion) {
    let a = fingerprint(PARAGRAPH);
    let b = fingerprint("completely different words here");
    c.bench_function("hamming_distance", |bench| {
        bench.iter(|| black_box(hamming_distance(black_box(a), black_box(b))));
    });

    let text = big_text();
    let left = FrequencyTable::from_text(text.as_str());
    let right = FrequencyTable::from_text(PARAGRAPH);
    c.bench_function("cosine_similarity", |bench| {
        bench.iter(|| black_box(cosine_similarity(black_box(&left), black_box(&right))));
    });
}

fn pipeline_bench(c: &mut Criterion) {
    let original = big_text();
    let candidate = original.replace("ownership", "borrowing");
    let cfg = PapercheckConfig::default();
    c.bench_function("compare_texts_big_text", |b| {
        b.iter(|| {
            let cmp = compare_texts(black_box(&original), black_box(&candidate), &cfg)
                .expect("bench compare");
            black_box(cmp);
        });
    });
}

criterion_group!(
    benches,
    tokenize_bench,
    fingerprint_bench,
    score_bench,
    pipeline_bench
);
criterion_main!(benches);
