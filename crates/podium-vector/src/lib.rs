//! Podium vector crate - speaker documents, embedding service, vector index.
//!
//! Turns speaker records into deterministic text documents, embeds them
//! through an `EmbeddingService` (ONNX in production, a hash-based mock in
//! tests) and answers k-nearest-neighbor queries from an in-memory index.

pub mod document;
pub mod embedding;
pub mod index;

pub use document::{build_document, build_documents, DocumentMetadata, SpeakerDocument};
pub use embedding::{DynEmbeddingService, EmbeddingService, MockEmbedding, OnnxEmbeddingService};
pub use index::{InMemoryIndex, Neighbor, VectorStore};
