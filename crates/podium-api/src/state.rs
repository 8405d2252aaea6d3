//! Application state shared across all route handlers.

use std::sync::Arc;
use std::time::Instant;

use podium_core::config::PodiumConfig;
use podium_engine::RecommendationEngine;

/// Shared application state.
///
/// The engine is fully built before the state exists and is only read
/// afterwards, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RecommendationEngine>,
    pub config: Arc<PodiumConfig>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    pub fn new(engine: RecommendationEngine, config: PodiumConfig) -> Self {
        Self {
            engine: Arc::new(engine),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Largest `top_k` a client may request.
    pub fn max_top_k(&self) -> usize {
        self.config.search.max_top_k
    }
}
