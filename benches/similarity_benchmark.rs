use criterion::{black_box, criterion_group, criterion_main, Criterion};
use osborn_case_engine::{
    similarity::{compare_topics, levenshtein_distance},
    text::{extract_keywords, normalize, segment},
};

fn bench_topic_similarity(c: &mut Criterion) {
    c.bench_function("compare_short_cjk", |b| {
        b.iter(|| black_box(compare_topics(black_box("智能手表应用"), black_box("智能手机应用"))));
    });

    c.bench_function("compare_mixed", |b| {
        b.iter(|| {
            black_box(compare_topics(
                black_box("Smart Home 智能家居控制系统 2.0"),
                black_box("智能家居语音助手 for Smart Home"),
            ))
        });
    });

    let long_a = "基于人工智能的个性化在线教育平台，".repeat(8);
    let long_b = "面向中小学生的智能化在线学习系统，".repeat(8);
    c.bench_function("compare_long", |b| {
        b.iter(|| black_box(compare_topics(&long_a, &long_b)));
    });

    c.bench_function("levenshtein_long", |b| {
        b.iter(|| black_box(levenshtein_distance(&long_a, &long_b)));
    });
}

fn bench_preprocessing(c: &mut Criterion) {
    let text = "通过先进技术解决特定用户痛点，提供智能化、高效化的解决方案 (SaaS / App)";

    c.bench_function("normalize", |b| {
        b.iter(|| black_box(normalize(black_box(text))));
    });

    let normalized = normalize(text);
    c.bench_function("segment", |b| {
        b.iter(|| black_box(segment(black_box(&normalized))));
    });

    c.bench_function("extract_keywords", |b| {
        b.iter(|| black_box(extract_keywords(black_box(text))));
    });
}

criterion_group!(benches, bench_topic_similarity, bench_preprocessing);
criterion_main!(benches);
