//! Embedding service trait and implementations.
//!
//! - `OnnxEmbeddingService` loads a sentence-transformer ONNX model (e.g.
//!   all-MiniLM-L6-v2) via ort and tokenizes with the HuggingFace tokenizers
//!   crate. This is the production embedding backend.
//! - `MockEmbedding` provides deterministic hash-based vectors for testing.
//!
//! Embedding is a pure function of the input text: batch and single calls
//! produce identical vectors for identical strings, and empty strings are
//! accepted.

use std::collections::hash_map::DefaultHasher;
use std::future::Future;
use std::hash::{Hash, Hasher};
use std::path::Path;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use ort::session::Session;
use ort::value::TensorRef;
use podium_core::error::PodiumError;
use tokenizers::Tokenizer;
use tracing::{debug, info};

/// Service for generating text embeddings.
///
/// Implementations convert text into fixed-dimensional vectors. The same
/// service embeds the speaker corpus at build time and each query at search
/// time, so the dimension must never change for the lifetime of a service.
pub trait EmbeddingService: Send + Sync {
    /// Generate an embedding vector for the given text.
    fn embed(&self, text: &str) -> impl Future<Output = Result<Vec<f32>, PodiumError>> + Send;

    /// Embed many texts, one vector per input in input order.
    fn embed_batch(
        &self,
        texts: &[String],
    ) -> impl Future<Output = Result<Vec<Vec<f32>>, PodiumError>> + Send {
        async move {
            let mut vectors = Vec::with_capacity(texts.len());
            for text in texts {
                vectors.push(self.embed(text).await?);
            }
            Ok(vectors)
        }
    }

    /// Return the dimensionality of vectors produced by this service.
    fn dimensions(&self) -> usize;
}

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Object-safe version of [`EmbeddingService`] for dynamic dispatch.
///
/// A blanket implementation is provided so that every `EmbeddingService`
/// automatically implements `DynEmbeddingService`.
pub trait DynEmbeddingService: Send + Sync {
    /// Generate an embedding vector for the given text (boxed future).
    fn embed_boxed<'a>(&'a self, text: &'a str) -> BoxFuture<'a, Result<Vec<f32>, PodiumError>>;

    /// Embed many texts (boxed future).
    fn embed_batch_boxed<'a>(
        &'a self,
        texts: &'a [String],
    ) -> BoxFuture<'a, Result<Vec<Vec<f32>>, PodiumError>>;

    /// Return the dimensionality of vectors produced by this service.
    fn dimensions(&self) -> usize;
}

impl<T: EmbeddingService> DynEmbeddingService for T {
    fn embed_boxed<'a>(&'a self, text: &'a str) -> BoxFuture<'a, Result<Vec<f32>, PodiumError>> {
        Box::pin(self.embed(text))
    }

    fn embed_batch_boxed<'a>(
        &'a self,
        texts: &'a [String],
    ) -> BoxFuture<'a, Result<Vec<Vec<f32>>, PodiumError>> {
        Box::pin(self.embed_batch(texts))
    }

    fn dimensions(&self) -> usize {
        EmbeddingService::dimensions(self)
    }
}

fn l2_normalize(values: &mut [f32]) {
    let norm: f32 = values.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        for val in values.iter_mut() {
            *val /= norm;
        }
    }
}

// ---------------------------------------------------------------------------
// OnnxEmbeddingService - real ONNX Runtime inference
// ---------------------------------------------------------------------------

/// ONNX Runtime-backed embedding service using a sentence-transformer model.
///
/// Expects a model directory containing:
/// - `model.onnx`: the sentence-transformer ONNX export
/// - `tokenizer.json`: the HuggingFace fast-tokenizer file
///
/// The model should accept `input_ids`, `attention_mask` and
/// `token_type_ids` as i64 inputs and produce token-level embeddings.
/// Masked mean pooling followed by L2 normalization yields one vector per
/// input.
#[derive(Clone)]
pub struct OnnxEmbeddingService {
    session: Arc<Mutex<Session>>,
    tokenizer: Arc<Tokenizer>,
    dimensions: usize,
}

impl std::fmt::Debug for OnnxEmbeddingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxEmbeddingService")
            .field("dimensions", &self.dimensions)
            .finish()
    }
}

impl OnnxEmbeddingService {
    /// Load a sentence-transformer model from the given directory.
    ///
    /// The directory must contain `model.onnx` and `tokenizer.json`.
    pub fn from_directory(model_dir: &Path) -> Result<Self, PodiumError> {
        Self::from_files(
            &model_dir.join("model.onnx"),
            &model_dir.join("tokenizer.json"),
        )
    }

    /// Load from explicit model and tokenizer file paths.
    pub fn from_files(model_path: &Path, tokenizer_path: &Path) -> Result<Self, PodiumError> {
        if !model_path.exists() {
            return Err(PodiumError::Embedding(format!(
                "ONNX model not found at {}",
                model_path.display()
            )));
        }
        if !tokenizer_path.exists() {
            return Err(PodiumError::Embedding(format!(
                "Tokenizer not found at {}",
                tokenizer_path.display()
            )));
        }

        let session = Session::builder()
            .map_err(|e| PodiumError::Embedding(format!("ONNX session builder: {}", e)))?
            .with_intra_threads(1)
            .map_err(|e| PodiumError::Embedding(format!("ONNX set threads: {}", e)))?
            .commit_from_file(model_path)
            .map_err(|e| PodiumError::Embedding(format!("ONNX load model: {}", e)))?;

        // Output is [batch, seq_len, hidden_dim]; MiniLM reports 384.
        let dimensions = session
            .outputs()
            .first()
            .and_then(|out| out.dtype().tensor_shape())
            .and_then(|shape| shape.last().copied())
            .map(|d| if d > 0 { d as usize } else { 384 })
            .unwrap_or(384);

        let tokenizer = Tokenizer::from_file(tokenizer_path)
            .map_err(|e| PodiumError::Embedding(format!("Failed to load tokenizer: {}", e)))?;

        info!(
            model = %model_path.display(),
            dimensions,
            "Loaded ONNX embedding model"
        );

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            tokenizer: Arc::new(tokenizer),
            dimensions,
        })
    }

    /// Tokenize, run inference, and mean-pool the output.
    fn embed_sync(&self, text: &str) -> Result<Vec<f32>, PodiumError> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| PodiumError::Embedding(format!("Tokenization failed: {}", e)))?;

        let input_ids: Vec<i64> = encoding.get_ids().iter().map(|&id| id as i64).collect();
        let attention_mask: Vec<i64> = encoding
            .get_attention_mask()
            .iter()
            .map(|&m| m as i64)
            .collect();
        let token_type_ids: Vec<i64> = encoding
            .get_type_ids()
            .iter()
            .map(|&t| t as i64)
            .collect();

        let seq_len = input_ids.len();

        let ids_array = ndarray::Array2::from_shape_vec((1, seq_len), input_ids)
            .map_err(|e| PodiumError::Embedding(format!("input_ids array: {}", e)))?;
        let mask_array = ndarray::Array2::from_shape_vec((1, seq_len), attention_mask.clone())
            .map_err(|e| PodiumError::Embedding(format!("attention_mask array: {}", e)))?;
        let type_array = ndarray::Array2::from_shape_vec((1, seq_len), token_type_ids)
            .map_err(|e| PodiumError::Embedding(format!("token_type_ids array: {}", e)))?;

        let ids_ref = TensorRef::from_array_view(&ids_array)
            .map_err(|e| PodiumError::Embedding(format!("TensorRef input_ids: {}", e)))?;
        let mask_ref = TensorRef::from_array_view(&mask_array)
            .map_err(|e| PodiumError::Embedding(format!("TensorRef attention_mask: {}", e)))?;
        let type_ref = TensorRef::from_array_view(&type_array)
            .map_err(|e| PodiumError::Embedding(format!("TensorRef token_type_ids: {}", e)))?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| PodiumError::Embedding(format!("Session lock poisoned: {}", e)))?;
        let outputs = session
            .run(ort::inputs![ids_ref, mask_ref, type_ref])
            .map_err(|e| PodiumError::Embedding(format!("ONNX inference failed: {}", e)))?;

        let (shape, data) = outputs[0]
            .try_extract_tensor::<f32>()
            .map_err(|e| PodiumError::Embedding(format!("Extract embeddings: {}", e)))?;

        let shape_dims: Vec<i64> = shape.iter().copied().collect();
        let hidden_dim = match shape_dims.as_slice() {
            [.., _, last] => *last as usize,
            _ => {
                return Err(PodiumError::Embedding(format!(
                    "Unexpected output shape: {:?}",
                    shape_dims
                )))
            }
        };
        if hidden_dim != self.dimensions {
            return Err(PodiumError::Embedding(format!(
                "dimension mismatch: model produced {}, expected {}",
                hidden_dim, self.dimensions
            )));
        }

        // Mean pooling over the sequence dimension, masked by attention_mask.
        let mut pooled = vec![0.0f32; hidden_dim];
        let mut count = 0.0f32;

        for (tok_idx, &mask_val) in attention_mask.iter().enumerate() {
            if mask_val > 0 {
                let offset = tok_idx * hidden_dim;
                for (dim, slot) in pooled.iter_mut().enumerate() {
                    *slot += data[offset + dim];
                }
                count += 1.0;
            }
        }

        if count > 0.0 {
            for val in &mut pooled {
                *val /= count;
            }
        }

        l2_normalize(&mut pooled);
        Ok(pooled)
    }
}

impl EmbeddingService for OnnxEmbeddingService {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, PodiumError> {
        // ONNX Runtime inference is CPU-bound; run on a blocking thread.
        let svc = self.clone();
        let text_owned = text.to_string();

        tokio::task::spawn_blocking(move || svc.embed_sync(&text_owned))
            .await
            .map_err(|e| PodiumError::Embedding(format!("Embedding task panicked: {}", e)))?
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, PodiumError> {
        let svc = self.clone();
        let texts_owned = texts.to_vec();

        tokio::task::spawn_blocking(move || {
            let vectors = texts_owned
                .iter()
                .map(|text| svc.embed_sync(text))
                .collect::<Result<Vec<_>, _>>()?;
            debug!(count = vectors.len(), "Embedded batch");
            Ok(vectors)
        })
        .await
        .map_err(|e| PodiumError::Embedding(format!("Embedding task panicked: {}", e)))?
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}

// ---------------------------------------------------------------------------
// MockEmbedding - deterministic hash-based vectors for testing
// ---------------------------------------------------------------------------

/// Mock embedding service that returns deterministic unit vectors.
///
/// The output is derived from a hash of the input text, so identical inputs
/// always produce identical outputs. This allows exercising the full build
/// and query path without a real model.
#[derive(Debug, Clone)]
pub struct MockEmbedding {
    dimensions: usize,
}

impl Default for MockEmbedding {
    fn default() -> Self {
        Self { dimensions: 384 }
    }
}

impl MockEmbedding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock producing vectors of the given dimension.
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self { dimensions }
    }

    fn hash_to_vector(&self, text: &str) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.dimensions);
        for i in 0..self.dimensions {
            let mut hasher = DefaultHasher::new();
            text.hash(&mut hasher);
            i.hash(&mut hasher);
            let h = hasher.finish();
            let val = ((h as f64) / (u64::MAX as f64)) * 2.0 - 1.0;
            result.push(val as f32);
        }

        // Unit length, matching OnnxEmbeddingService, keeps distances in [0, 2].
        l2_normalize(&mut result);
        result
    }
}

impl EmbeddingService for MockEmbedding {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, PodiumError> {
        Ok(self.hash_to_vector(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}
