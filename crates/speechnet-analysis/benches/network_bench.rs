use criterion::{black_box, criterion_group, criterion_main, Criterion};

use speechnet_analysis::edges::aggregate;
use speechnet_analysis::layout::{KamadaKawai, LayoutProvider};
use speechnet_analysis::network::{build_network, SpeechGraph};
use speechnet_analysis::stats::compute_stats;
use speechnet_core::types::{AnnotationRecord, NetworkParams};

const TAGS: [&str; 3] = ["direct_speech", "indirect_speech", "narrated_character_speech"];

/// A novella-sized corpus: 5K records over 40 characters, each record
/// addressing one or two neighbours of its speaker.
fn build_corpus() -> Vec<AnnotationRecord> {
    let characters: Vec<String> = (0..40).map(|i| format!("character_{i}")).collect();
    (0..5_000)
        .map(|i| {
            let speaker = &characters[(i * 7) % characters.len()];
            let first = &characters[(i * 7 + 1) % characters.len()];
            let second = &characters[(i * 13 + 5) % characters.len()];
            let addressees = if i % 3 == 0 {
                vec![first.as_str(), second.as_str()]
            } else {
                vec![first.as_str()]
            };
            let start = i as f64 * 10.0;
            AnnotationRecord::new(start, start + 8.0, TAGS[i % TAGS.len()])
                .with_speakers([speaker.as_str()])
                .with_addressees(addressees)
                .with_text("Wo ist der Rappe, den ich Euch in Pfand gelassen habe?")
        })
        .collect()
}

fn build_graph() -> SpeechGraph {
    let edges = aggregate(&build_corpus(), &NetworkParams::default()).unwrap();
    let graph = build_network(&edges);
    assert!(
        graph.node_count() >= 30,
        "Should have ~40 nodes, got {}",
        graph.node_count()
    );
    graph
}

fn bench_aggregate_5k_records(c: &mut Criterion) {
    let records = build_corpus();
    let params = NetworkParams::default();

    c.bench_function("aggregate_5k_records", |b| {
        b.iter(|| aggregate(black_box(&records), &params).unwrap());
    });
}

fn bench_compute_stats(c: &mut Criterion) {
    let graph = build_graph();

    c.bench_function("compute_stats_40_nodes", |b| {
        b.iter(|| compute_stats(black_box(&graph)));
    });
}

fn bench_kamada_kawai(c: &mut Criterion) {
    let graph = build_graph();
    let provider = KamadaKawai::default();

    c.bench_function("kamada_kawai_40_nodes", |b| {
        b.iter(|| provider.layout(black_box(&graph)));
    });
}

criterion_group!(
    benches,
    bench_aggregate_5k_records,
    bench_compute_stats,
    bench_kamada_kawai
);
criterion_main!(benches);
