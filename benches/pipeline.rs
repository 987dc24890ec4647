//! Benchmarks for entry authoring and asset preparation.

use std::fs;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempfile::tempdir;

use skinshop::{normalize_hex, AuthoringSession, Project};

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for input in ["f", "#a1", "abc", "#1A2B3C"] {
        group.bench_function(input, |b| b.iter(|| normalize_hex(black_box(input))));
    }

    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let files: Vec<String> = (1..=16).map(|i| format!("layer{:02}.png", i)).collect();

    let mut answers = vec!["Bench".to_string(), "4".to_string()];
    for i in 1..=16 {
        answers.push(i.to_string());
        if i % 4 == 0 {
            answers.push("erase".to_string());
        } else {
            answers.extend(["f", "00f", "#a1", "1a2b3c"].map(String::from));
            answers.push("n".to_string());
        }
    }

    c.bench_function("session_16_layers", |b| {
        b.iter(|| {
            let mut session = AuthoringSession::new(files.clone());
            for answer in &answers {
                session.submit(black_box(answer)).unwrap();
            }
            session.finish().unwrap().to_pretty_json().unwrap()
        })
    });
}

fn bench_asset_map(c: &mut Criterion) {
    let dir = tempdir().unwrap();
    let features = dir.path().join("public/assets/features");
    for feature in ["eyes", "mouth", "hair", "hats"] {
        let folder = features.join(feature).join("variants");
        fs::create_dir_all(&folder).unwrap();
        for i in 0..25 {
            fs::write(features.join(feature).join(format!("{}.png", i)), "x").unwrap();
            fs::write(folder.join(format!("{}.png", i)), "x").unwrap();
        }
    }

    let project = Project::with_defaults(dir.path());
    c.bench_function("collect_asset_map", |b| {
        b.iter(|| skinshop::prepare::collect_asset_map(black_box(&project)).unwrap())
    });
}

criterion_group!(benches, bench_normalize, bench_session, bench_asset_map);
criterion_main!(benches);
