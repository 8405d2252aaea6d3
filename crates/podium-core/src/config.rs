use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{PodiumError, Result};
use crate::types::DistanceMetric;

/// Top-level configuration for Podium.
///
/// Loaded from `~/.podium/config.toml` by default. Every section falls back
/// to its defaults when omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PodiumConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

impl PodiumConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: PodiumConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| PodiumError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Speaker dataset JSON file (top-level `speakers` array).
    pub data_file: String,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
    /// Interface the host service binds to.
    pub host: String,
    /// HTTP port for the host service.
    pub port: u16,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_file: "data/speakers.json".to_string(),
            log_level: "info".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

/// Embedding and retrieval settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Embedding model name (informational, logged at startup).
    pub embedding_model: String,
    /// Directory holding `model.onnx` and `tokenizer.json`.
    ///
    /// When unset the deterministic mock embedder is used.
    pub model_dir: Option<String>,
    /// Expected embedding dimension.
    pub embedding_dim: usize,
    /// Number of recommendations when the caller does not ask for a count.
    pub default_top_k: usize,
    /// Largest `top_k` the host service accepts.
    pub max_top_k: usize,
    /// Distance metric used by the vector index.
    pub metric: DistanceMetric,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            embedding_model: "all-MiniLM-L6-v2".to_string(),
            model_dir: None,
            embedding_dim: 384,
            default_top_k: 5,
            max_top_k: 100,
            metric: DistanceMetric::Cosine,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = PodiumConfig::default();
        assert_eq!(config.general.data_file, "data/speakers.json");
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.general.host, "127.0.0.1");
        assert_eq!(config.general.port, 8000);
        assert_eq!(config.search.embedding_dim, 384);
        assert_eq!(config.search.default_top_k, 5);
        assert_eq!(config.search.metric, DistanceMetric::Cosine);
        assert!(config.search.model_dir.is_none());
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
[general]
data_file = "/srv/podium/sof_week.json"
log_level = "debug"
port = 9090

[search]
model_dir = "/models/minilm"
default_top_k = 10
metric = "euclidean"
"#;
        let file = create_temp_config(content);
        let config = PodiumConfig::load(file.path()).unwrap();
        assert_eq!(config.general.data_file, "/srv/podium/sof_week.json");
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.general.port, 9090);
        assert_eq!(config.search.model_dir.as_deref(), Some("/models/minilm"));
        assert_eq!(config.search.default_top_k, 10);
        assert_eq!(config.search.metric, DistanceMetric::Euclidean);
        // Unspecified keys keep their defaults.
        assert_eq!(config.search.max_top_k, 100);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let file = create_temp_config("[general]\nlog_level = \"warn\"\n");
        let config = PodiumConfig::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "warn");
        assert_eq!(config.general.port, 8000);
        assert_eq!(config.search.embedding_model, "all-MiniLM-L6-v2");
    }

    #[test]
    fn test_load_invalid_toml() {
        let file = create_temp_config("this is not [valid toml");
        let result = PodiumConfig::load(file.path());
        assert!(matches!(result, Err(PodiumError::Config(_))));
    }

    #[test]
    fn test_load_unknown_metric_rejected() {
        let file = create_temp_config("[search]\nmetric = \"manhattan\"\n");
        assert!(PodiumConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = PodiumConfig::load_or_default(Path::new("/nonexistent/config.toml"));
        assert_eq!(config.general.data_file, "data/speakers.json");
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = PodiumConfig::default();
        config.search.default_top_k = 7;
        config.save(&path).unwrap();

        let reloaded = PodiumConfig::load(&path).unwrap();
        assert_eq!(reloaded.search.default_top_k, 7);
        assert_eq!(reloaded.general.port, config.general.port);
    }
}
