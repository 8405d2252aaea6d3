//! In-memory vector index with brute-force nearest-neighbor search.
//!
//! The index is bulk-loaded exactly once and is query-only afterwards. All
//! searches are O(n), which is fine for conference-sized corpora.

use std::sync::RwLock;

use podium_core::error::PodiumError;
use podium_core::types::DistanceMetric;

/// A single neighbor returned from a vector query.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor<M> {
    /// Metadata stored alongside the matching vector.
    pub metadata: M,
    /// Distance to the query under the index metric (smaller is closer).
    pub distance: f64,
}

/// Nearest-neighbor store over fixed-dimension vectors.
pub trait VectorStore<M>: Send + Sync {
    /// Bulk-load all entries. May be called only once.
    fn add(&self, entries: Vec<(Vec<f32>, M)>) -> Result<(), PodiumError>;

    /// Return up to `k` neighbors ordered by ascending distance.
    ///
    /// `k` larger than the corpus returns every entry.
    fn query(&self, vector: &[f32], k: usize) -> Result<Vec<Neighbor<M>>, PodiumError>;

    /// Number of stored vectors.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug)]
struct VectorEntry<M> {
    embedding: Vec<f32>,
    metadata: M,
}

#[derive(Debug)]
struct LoadedIndex<M> {
    dimensions: usize,
    entries: Vec<VectorEntry<M>>,
}

/// Brute-force index over an in-memory vector list.
///
/// Thread-safe via interior `RwLock`; after loading only read locks are taken.
#[derive(Debug)]
pub struct InMemoryIndex<M> {
    metric: DistanceMetric,
    state: RwLock<Option<LoadedIndex<M>>>,
}

impl<M> InMemoryIndex<M> {
    /// Create an empty index using the given metric.
    pub fn new(metric: DistanceMetric) -> Self {
        Self {
            metric,
            state: RwLock::new(None),
        }
    }

    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }
}

impl<M> Default for InMemoryIndex<M> {
    fn default() -> Self {
        Self::new(DistanceMetric::default())
    }
}

impl<M: Clone + Send + Sync> VectorStore<M> for InMemoryIndex<M> {
    fn add(&self, entries: Vec<(Vec<f32>, M)>) -> Result<(), PodiumError> {
        let mut state = self
            .state
            .write()
            .map_err(|e| PodiumError::Index(format!("Lock poisoned: {}", e)))?;

        if state.is_some() {
            return Err(PodiumError::Index("index is already loaded".to_string()));
        }

        let dimensions = match entries.first() {
            Some((vector, _)) if !vector.is_empty() => vector.len(),
            Some(_) => {
                return Err(PodiumError::Embedding(
                    "cannot index zero-length vectors".to_string(),
                ))
            }
            None => {
                return Err(PodiumError::Index(
                    "cannot load an index with no entries".to_string(),
                ))
            }
        };

        if let Some(pos) = entries.iter().position(|(v, _)| v.len() != dimensions) {
            return Err(PodiumError::Embedding(format!(
                "dimension mismatch at entry {}: expected {}, got {}",
                pos,
                dimensions,
                entries[pos].0.len()
            )));
        }

        *state = Some(LoadedIndex {
            dimensions,
            entries: entries
                .into_iter()
                .map(|(embedding, metadata)| VectorEntry {
                    embedding,
                    metadata,
                })
                .collect(),
        });
        Ok(())
    }

    fn query(&self, vector: &[f32], k: usize) -> Result<Vec<Neighbor<M>>, PodiumError> {
        let state = self
            .state
            .read()
            .map_err(|e| PodiumError::Index(format!("Lock poisoned: {}", e)))?;
        let loaded = state
            .as_ref()
            .ok_or_else(|| PodiumError::Index("index has not been loaded".to_string()))?;

        if vector.len() != loaded.dimensions {
            return Err(PodiumError::Embedding(format!(
                "query dimension {} does not match index dimension {}",
                vector.len(),
                loaded.dimensions
            )));
        }

        let mut scored: Vec<(usize, f64)> = loaded
            .entries
            .iter()
            .enumerate()
            .map(|(pos, entry)| (pos, distance(self.metric, vector, &entry.embedding)))
            .collect();

        // Stable sort: equal distances keep dataset order.
        scored.sort_by(|a, b| a.1.total_cmp(&b.1));
        scored.truncate(k.min(loaded.entries.len()));

        Ok(scored
            .into_iter()
            .map(|(pos, distance)| Neighbor {
                metadata: loaded.entries[pos].metadata.clone(),
                distance,
            })
            .collect())
    }

    fn len(&self) -> usize {
        self.state
            .read()
            .map(|s| s.as_ref().map_or(0, |loaded| loaded.entries.len()))
            .unwrap_or(0)
    }
}

/// Distance between two equal-length vectors under `metric`.
pub fn distance(metric: DistanceMetric, a: &[f32], b: &[f32]) -> f64 {
    match metric {
        DistanceMetric::Cosine => (1.0 - cosine_similarity(a, b)).max(0.0),
        DistanceMetric::Euclidean => a
            .iter()
            .zip(b.iter())
            .map(|(x, y)| (*x as f64 - *y as f64).powi(2))
            .sum::<f64>()
            .sqrt(),
    }
}

/// Compute cosine similarity between two vectors.
///
/// Returns 0.0 if either vector has zero magnitude.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (*x as f64) * (*y as f64))
        .sum();

    let mag_a: f64 = a.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();
    let mag_b: f64 = b.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();

    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }

    dot / (mag_a * mag_b)
}
