//! Podium service binary - composition root.
//!
//! 1. Parse CLI and load configuration from TOML
//! 2. Load and validate the speaker dataset
//! 3. Choose the embedding provider (ONNX model or deterministic mock)
//! 4. Build the recommendation engine (embeds and indexes every speaker)
//! 5. Serve the axum REST API

mod cli;

use std::path::Path;

use clap::Parser;

use podium_core::config::PodiumConfig;
use podium_core::error::PodiumError;
use podium_core::types::SpeakerDataset;
use podium_engine::{EngineOptions, RecommendationEngine};
use podium_vector::document::DocumentMetadata;
use podium_vector::embedding::{DynEmbeddingService, MockEmbedding, OnnxEmbeddingService};
use podium_vector::index::{InMemoryIndex, VectorStore};

use podium_api::state::AppState;

use cli::CliArgs;

/// Pick the embedding provider from configuration.
///
/// A configured model directory must load; there is no silent fallback to
/// the mock once a real model was asked for.
fn select_embedder(config: &PodiumConfig) -> Result<Box<dyn DynEmbeddingService>, PodiumError> {
    match config.search.model_dir {
        Some(ref dir) => {
            let service = OnnxEmbeddingService::from_directory(Path::new(dir))?;
            if service.dimensions() != config.search.embedding_dim {
                tracing::warn!(
                    model_dimensions = service.dimensions(),
                    configured = config.search.embedding_dim,
                    "Model dimension differs from configured embedding_dim; using the model's"
                );
            }
            tracing::info!(
                model = %config.search.embedding_model,
                dir = %dir,
                "Using ONNX embedding provider"
            );
            Ok(Box::new(service))
        }
        None => {
            tracing::warn!(
                dimensions = config.search.embedding_dim,
                "No model_dir configured; using deterministic mock embeddings"
            );
            Ok(Box::new(MockEmbedding::with_dimensions(
                config.search.embedding_dim,
            )))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config.
    let config_file = args.resolve_config_path();
    let mut config = PodiumConfig::load_or_default(&config_file);
    if let Some(data_file) = args.resolve_data_file() {
        config.general.data_file = data_file;
    }
    if let Some(model_dir) = args.resolve_model_dir() {
        config.search.model_dir = Some(model_dir);
    }
    if let Some(level) = args.resolve_log_level() {
        config.general.log_level = level;
    }
    config.general.port = args.resolve_port(config.general.port);

    // Tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.general.log_level)),
        )
        .init();

    tracing::info!("Starting Podium v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration loaded");

    // Dataset.
    let dataset = SpeakerDataset::load(Path::new(&config.general.data_file)).map_err(|e| {
        tracing::error!(path = %config.general.data_file, error = %e, "Failed to load speaker dataset");
        e
    })?;

    // Engine.
    let embedder = select_embedder(&config)?;
    let index = InMemoryIndex::<DocumentMetadata>::new(config.search.metric);
    tracing::info!(
        metric = ?index.metric(),
        dimensions = embedder.dimensions(),
        "Vector index configured"
    );
    let index: Box<dyn VectorStore<DocumentMetadata>> = Box::new(index);
    let engine = RecommendationEngine::build_dyn(
        dataset,
        embedder,
        index,
        EngineOptions::from(&config.search),
    )
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "Failed to build recommendation engine");
        e
    })?;

    let stats = engine.stats();
    tracing::info!(
        speakers = stats.total_speakers,
        with_bios = stats.speakers_with_detailed_bios,
        companies = stats.unique_companies,
        "Recommendation engine ready"
    );

    // API server.
    let state = AppState::new(engine, config.clone());
    podium_api::start_server(&config, state).await?;

    Ok(())
}
