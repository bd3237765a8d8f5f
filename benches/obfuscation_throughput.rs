use criterion::{criterion_group, criterion_main, Criterion};
use script_obfuscator::obfuscator::Obfuscator;
use std::hint::black_box;

fn sample_artifact(functions: usize) -> String {
    let mut text = String::from("/* Copyright (c) upstream authors. All rights reserved. */\n");
    for i in 0..functions {
        text.push_str(&format!(
            "function handler{}(payload) {{\n    renderOverlay(payload, \"slot {}\");\n    return notifyUser(payload);\n}}\n",
            i, i
        ));
    }
    text
}

fn eligible_words() -> Vec<String> {
    vec![
        "renderOverlay".to_string(),
        "notifyUser".to_string(),
        "fetchOrders".to_string(),
    ]
}

fn benchmark_transform(c: &mut Criterion) {
    let small = sample_artifact(10);
    let large = sample_artifact(1000);

    let mut group = c.benchmark_group("obfuscate_text");

    group.bench_function("small_artifact", |b| {
        b.iter(|| {
            let mut obfuscator = Obfuscator::new(eligible_words());
            obfuscator.obfuscate_text(black_box(&small))
        });
    });

    group.bench_function("large_artifact", |b| {
        b.iter(|| {
            let mut obfuscator = Obfuscator::new(eligible_words());
            obfuscator.obfuscate_text(black_box(&large))
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_transform);
criterion_main!(benches);
