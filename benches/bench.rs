// Criterion benchmarks for the LinkMatch normalizer

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linkmatch::core::normalize;
use serde_json::{json, Value};

fn ranked_payload(n: usize) -> Value {
    let matches: Vec<Value> = (0..n)
        .map(|i| {
            json!({
                "profile": {
                    "profile_id": format!("p{}", i),
                    "name": format!("Candidate {}", i),
                    "age": 25 + (i % 10),
                    "job_title": "Engineer",
                    "industry": "Technology",
                    "skills": ["Rust", "SQL", "Figma"],
                    "goals": ["Ship something", "Mentor someone"],
                },
                "compatibility_score": (i % 100) as f64,
                "match_type": "Industry Match",
                "reasons": ["Shared industry", "Overlapping skills"],
            })
        })
        .collect();
    json!({ "matches": matches })
}

fn flat_payload(n: usize) -> Value {
    let profiles: Vec<Value> = (0..n)
        .map(|i| {
            json!({
                "profile_id": format!("p{}", i),
                "name": format!("Candidate {}", i),
                "age": 25 + (i % 10),
            })
        })
        .collect();
    json!({ "profiles": profiles })
}

fn bench_normalize_ranked(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_ranked");
    for size in [10, 100, 1000] {
        let payload = ranked_payload(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &payload, |b, payload| {
            b.iter(|| normalize(black_box(payload)));
        });
    }
    group.finish();
}

fn bench_normalize_flat(c: &mut Criterion) {
    let payload = flat_payload(100);
    c.bench_function("normalize_flat_100", |b| {
        b.iter(|| normalize(black_box(&payload)));
    });
}

criterion_group!(benches, bench_normalize_ranked, bench_normalize_flat);
criterion_main!(benches);
