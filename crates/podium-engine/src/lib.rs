//! Podium engine crate - speaker recommendation orchestration and lookup.
//!
//! `RecommendationEngine` builds the vector index from a speaker dataset at
//! startup and answers free-text queries with ranked, explained
//! recommendations. `SpeakerCatalog` provides exact-name and keyword lookup
//! over the raw records without touching the vector pipeline.

pub mod catalog;
pub mod contact;
pub mod engine;
pub mod explain;
pub mod scoring;
pub mod types;

pub use catalog::SpeakerCatalog;
pub use engine::{EngineOptions, RecommendationEngine};
pub use types::{DatasetStats, Recommendation, SessionDetails};
