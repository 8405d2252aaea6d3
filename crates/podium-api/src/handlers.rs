//! Route handler functions for all API endpoints.
//!
//! Each handler extracts query/path/body parameters via axum extractors,
//! calls into the shared engine and returns JSON responses.

use std::time::Instant;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use podium_core::types::SpeakerRecord;
use podium_engine::{DatasetStats, Recommendation};

use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Request types
// =============================================================================

/// Request body for POST /recommend.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub query: String,
    /// Number of recommendations; the engine default when omitted.
    pub top_k: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct KeywordParams {
    pub keyword: Option<String>,
}

// =============================================================================
// Response types
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub total_speakers: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub query: String,
    pub recommendations: Vec<Recommendation>,
    pub total_found: usize,
    pub processing_time_ms: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SpeakersResponse {
    pub speakers: Vec<SpeakerRecord>,
    pub total: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct KeywordSearchResponse {
    pub keyword: String,
    pub speakers: Vec<SpeakerRecord>,
    pub total: usize,
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /health - liveness and corpus size.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        total_speakers: state.engine.get_all().len(),
    })
}

/// POST /recommend - ranked speakers for a free-text query.
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, ApiError> {
    if request.query.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Field 'query' must not be empty".to_string(),
        ));
    }

    // Oversized requests are capped here; the engine caps again at corpus size.
    let top_k = request.top_k.map(|k| k.min(state.max_top_k()));

    let started = Instant::now();
    let recommendations = state
        .engine
        .recommend(&request.query, top_k)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, query = %request.query, "Recommendation failed");
            ApiError::from(e)
        })?;
    let processing_time_ms = started.elapsed().as_secs_f64() * 1000.0;

    tracing::debug!(
        query = %request.query,
        total_found = recommendations.len(),
        processing_time_ms,
        "Recommend request served"
    );

    Ok(Json(RecommendResponse {
        total_found: recommendations.len(),
        query: request.query,
        recommendations,
        processing_time_ms: (processing_time_ms * 100.0).round() / 100.0,
    }))
}

/// GET /speakers - every speaker in dataset order.
pub async fn list_speakers(State(state): State<AppState>) -> Json<SpeakersResponse> {
    let speakers = state.engine.get_all().to_vec();
    Json(SpeakersResponse {
        total: speakers.len(),
        speakers,
    })
}

/// GET /speakers/search?keyword= - case-insensitive substring filter.
pub async fn search_speakers(
    State(state): State<AppState>,
    Query(params): Query<KeywordParams>,
) -> Result<Json<KeywordSearchResponse>, ApiError> {
    let keyword = params.keyword.ok_or_else(|| {
        ApiError::BadRequest("Parameter 'keyword' is required".to_string())
    })?;

    let speakers: Vec<SpeakerRecord> = state
        .engine
        .search_by_keyword(&keyword)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(KeywordSearchResponse {
        total: speakers.len(),
        keyword,
        speakers,
    }))
}

/// GET /speakers/{name} - exact, case-insensitive name lookup.
pub async fn get_speaker(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<SpeakerRecord>, ApiError> {
    state
        .engine
        .get_by_name(&name)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Speaker '{}' not found", name)))
}

/// GET /stats - aggregate dataset counts.
pub async fn stats(State(state): State<AppState>) -> Json<DatasetStats> {
    Json(state.engine.stats())
}
