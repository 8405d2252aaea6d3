//! Benchmarks for corpus embedding and nearest-neighbor queries.
//!
//! Uses a synthetic corpus of 1,000 speakers by default. Set
//! `BENCH_FULL_SCALE=1` to run against 20,000 speakers:
//!
//! ```bash
//! BENCH_FULL_SCALE=1 cargo bench -p podium-vector
//! ```

use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};

use podium_core::types::{DistanceMetric, SpeakerRecord};
use podium_vector::document::{build_documents, DocumentMetadata};
use podium_vector::embedding::{EmbeddingService, MockEmbedding};
use podium_vector::index::{InMemoryIndex, VectorStore};

const CI_SPEAKER_COUNT: usize = 1_000;
const FULL_SCALE_SPEAKER_COUNT: usize = 20_000;

fn speaker_count() -> usize {
    if std::env::var("BENCH_FULL_SCALE").is_ok() {
        FULL_SCALE_SPEAKER_COUNT
    } else {
        CI_SPEAKER_COUNT
    }
}

fn synthetic_speaker(index: usize) -> SpeakerRecord {
    SpeakerRecord {
        name: format!("Speaker {}", index),
        title: "Program Manager, Unmanned Systems".to_string(),
        company: format!("Contractor {}", index % 50),
        session_title: "Counter-UAS in contested environments".to_string(),
        session_description: "Lessons learned fielding autonomous platforms \
                              alongside special operations forces."
            .to_string(),
        speaking_time: "May 7, 2025 10:00 AM".to_string(),
        location: format!("Room {}", index % 20),
        detailed_bio: format!(
            "Speaker {} has spent fifteen years in acquisition and procurement.",
            index
        ),
        ..Default::default()
    }
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to build tokio runtime")
}

fn build_index(
    rt: &tokio::runtime::Runtime,
    count: usize,
) -> (InMemoryIndex<DocumentMetadata>, MockEmbedding) {
    let speakers: Vec<SpeakerRecord> = (0..count).map(synthetic_speaker).collect();
    let documents = build_documents(&speakers);
    let texts: Vec<String> = documents.iter().map(|d| d.text.clone()).collect();

    let embedder = MockEmbedding::new();
    let vectors = rt
        .block_on(embedder.embed_batch(&texts))
        .expect("embedding failed");

    let index = InMemoryIndex::new(DistanceMetric::Cosine);
    index
        .add(
            vectors
                .into_iter()
                .zip(documents.into_iter().map(|d| d.metadata))
                .collect(),
        )
        .expect("index load failed");
    (index, embedder)
}

fn bench_query(c: &mut Criterion) {
    let rt = runtime();
    let (index, embedder) = build_index(&rt, speaker_count());
    let query = rt
        .block_on(embedder.embed("drone contractor with procurement experience"))
        .expect("embedding failed");

    let mut group = c.benchmark_group("vector_query");
    group.measurement_time(Duration::from_secs(10));
    group.bench_function("top_5", |b| {
        b.iter(|| index.query(&query, 5).expect("query failed"))
    });
    group.bench_function("top_100", |b| {
        b.iter(|| index.query(&query, 100).expect("query failed"))
    });
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let rt = runtime();
    let mut group = c.benchmark_group("index_build");
    group.sample_size(10);
    group.bench_function("mock_embed_and_load", |b| {
        b.iter(|| build_index(&rt, CI_SPEAKER_COUNT))
    });
    group.finish();
}

criterion_group!(benches, bench_query, bench_build);
criterion_main!(benches);
