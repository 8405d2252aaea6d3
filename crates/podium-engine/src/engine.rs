//! Recommendation engine: index build at startup, ranked queries afterwards.
//!
//! Build: dataset → speaker documents → batch embedding → vector index.
//! Query: embed → k-nearest neighbors → relevance score → explanation and
//! contact projection → stable sort by score.
//!
//! The engine is built once and then only read, so a single instance can be
//! shared behind an `Arc` by any number of concurrent callers.

use tracing::{debug, error, info};

use podium_core::config::SearchConfig;
use podium_core::error::{PodiumError, Result};
use podium_core::types::{SpeakerDataset, SpeakerRecord};
use podium_vector::document::{build_documents, DocumentMetadata};
use podium_vector::embedding::{DynEmbeddingService, EmbeddingService};
use podium_vector::index::{Neighbor, VectorStore};

use crate::catalog::SpeakerCatalog;
use crate::contact::extract_contact_info;
use crate::explain::explain;
use crate::scoring::{relevance_from_distance, round_score};
use crate::types::{DatasetStats, Recommendation, SessionDetails};

/// Default number of recommendations when the caller does not specify one.
pub const DEFAULT_TOP_K: usize = 5;

/// Tunables for a [`RecommendationEngine`].
#[derive(Debug, Clone)]
pub struct EngineOptions {
    pub default_top_k: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            default_top_k: DEFAULT_TOP_K,
        }
    }
}

impl From<&SearchConfig> for EngineOptions {
    fn from(config: &SearchConfig) -> Self {
        Self {
            default_top_k: config.default_top_k.max(1),
        }
    }
}

/// Semantic speaker recommender over a fully built vector index.
pub struct RecommendationEngine {
    catalog: SpeakerCatalog,
    embedder: Box<dyn DynEmbeddingService>,
    index: Box<dyn VectorStore<DocumentMetadata>>,
    options: EngineOptions,
}

impl std::fmt::Debug for RecommendationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecommendationEngine")
            .field("speakers", &self.catalog.len())
            .field("indexed", &self.index.len())
            .field("dimensions", &self.embedder.dimensions())
            .field("options", &self.options)
            .finish()
    }
}

impl RecommendationEngine {
    /// Build the engine: embed every speaker and load the index.
    ///
    /// Fails on an empty or invalid dataset, any embedding failure, or any
    /// index failure. A partially built engine is never returned.
    pub async fn build(
        dataset: SpeakerDataset,
        embedder: impl EmbeddingService + 'static,
        index: impl VectorStore<DocumentMetadata> + 'static,
        options: EngineOptions,
    ) -> Result<Self> {
        Self::build_dyn(dataset, Box::new(embedder), Box::new(index), options).await
    }

    /// Build from pre-boxed collaborators, for providers chosen at runtime.
    pub async fn build_dyn(
        dataset: SpeakerDataset,
        embedder: Box<dyn DynEmbeddingService>,
        index: Box<dyn VectorStore<DocumentMetadata>>,
        options: EngineOptions,
    ) -> Result<Self> {
        dataset.validate()?;

        let documents = build_documents(&dataset.speakers);
        info!(documents = documents.len(), "Created speaker documents");

        let texts: Vec<String> = documents.iter().map(|d| d.text.clone()).collect();
        let vectors = embedder.embed_batch_boxed(&texts).await.map_err(|e| {
            error!(error = %e, "Failed to embed speaker corpus");
            e
        })?;

        if vectors.len() != documents.len() {
            return Err(PodiumError::Embedding(format!(
                "provider returned {} vectors for {} documents",
                vectors.len(),
                documents.len()
            )));
        }
        let dimensions = embedder.dimensions();
        check_dimensions(&vectors, dimensions)?;

        let entries = vectors
            .into_iter()
            .zip(documents.into_iter().map(|d| d.metadata))
            .collect();
        index.add(entries).map_err(|e| {
            error!(error = %e, "Failed to load vector index");
            e
        })?;

        info!(
            speakers = dataset.speakers.len(),
            dimensions,
            "Indexed speakers in vector index"
        );

        Ok(Self {
            catalog: SpeakerCatalog::new(dataset.speakers),
            embedder,
            index,
            options,
        })
    }

    /// Recommend speakers for a free-text query.
    ///
    /// `top_k` defaults to the configured value when `None` and must be
    /// positive. Results are ordered by non-increasing relevance score and
    /// never exceed the corpus size.
    pub async fn recommend(
        &self,
        query: &str,
        top_k: Option<usize>,
    ) -> Result<Vec<Recommendation>> {
        let top_k = top_k.unwrap_or(self.options.default_top_k);
        if top_k == 0 {
            return Err(PodiumError::InvalidRequest(
                "top_k must be a positive integer".to_string(),
            ));
        }

        let query_vec = self.embedder.embed_boxed(query).await.map_err(|e| {
            error!(error = %e, query, "Failed to embed query");
            e
        })?;
        if query_vec.len() != self.embedder.dimensions() {
            return Err(PodiumError::Embedding(format!(
                "query vector has dimension {}, expected {}",
                query_vec.len(),
                self.embedder.dimensions()
            )));
        }

        let neighbors = self.index.query(&query_vec, top_k).map_err(|e| {
            error!(error = %e, query, "Vector index query failed");
            e
        })?;

        let mut recommendations = neighbors
            .iter()
            .map(|neighbor| self.to_recommendation(query, neighbor))
            .collect::<Result<Vec<_>>>()?;

        recommendations.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));

        info!(
            query,
            top_k,
            returned = recommendations.len(),
            "Generated recommendations"
        );
        Ok(recommendations)
    }

    fn to_recommendation(
        &self,
        query: &str,
        neighbor: &Neighbor<DocumentMetadata>,
    ) -> Result<Recommendation> {
        let speaker = neighbor
            .metadata
            .ordinal()
            .and_then(|ordinal| self.catalog.get(ordinal))
            .ok_or_else(|| {
                PodiumError::Index(format!(
                    "index entry {:?} does not refer to a loaded speaker",
                    neighbor.metadata.speaker_index
                ))
            })?;

        let score = relevance_from_distance(neighbor.distance);
        debug!(
            speaker = %speaker.name,
            distance = neighbor.distance,
            score,
            "Scored neighbor"
        );

        Ok(Recommendation {
            speaker: speaker.clone(),
            relevance_score: round_score(score),
            explanation: explain(query, speaker, score),
            contact_info: extract_contact_info(speaker),
            session_details: SessionDetails::from(speaker),
        })
    }

    pub fn get_all(&self) -> &[SpeakerRecord] {
        self.catalog.get_all()
    }

    pub fn get_by_name(&self, name: &str) -> Option<&SpeakerRecord> {
        self.catalog.get_by_name(name)
    }

    pub fn search_by_keyword(&self, keyword: &str) -> Vec<&SpeakerRecord> {
        self.catalog.search_by_keyword(keyword)
    }

    pub fn stats(&self) -> DatasetStats {
        self.catalog.stats()
    }
}

fn check_dimensions(vectors: &[Vec<f32>], expected: usize) -> Result<()> {
    match vectors.iter().position(|v| v.len() != expected) {
        Some(pos) => Err(PodiumError::Embedding(format!(
            "vector {} has dimension {}, expected {}",
            pos,
            vectors[pos].len(),
            expected
        ))),
        None => Ok(()),
    }
}
