//! CLI argument definitions for the Podium service.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

/// Podium - semantic speaker recommendations for conference attendees.
#[derive(Parser, Debug)]
#[command(name = "podium", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// API server port.
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// Speaker dataset JSON file.
    #[arg(short = 'd', long = "data-file")]
    pub data_file: Option<PathBuf>,

    /// Directory with `model.onnx` and `tokenizer.json`.
    #[arg(short = 'm', long = "model-dir")]
    pub model_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > PODIUM_CONFIG env var > ~/.podium/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        self.resolve_config_path_with(std::env::var("PODIUM_CONFIG").ok())
    }

    fn resolve_config_path_with(&self, env_value: Option<String>) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Some(p) = env_value {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the API server port.
    ///
    /// Priority: --port flag > PODIUM_PORT env var > config file value > 8000.
    pub fn resolve_port(&self, config_port: u16) -> u16 {
        self.resolve_port_with(std::env::var("PODIUM_PORT").ok(), config_port)
    }

    fn resolve_port_with(&self, env_value: Option<String>, config_port: u16) -> u16 {
        if let Some(p) = self.port {
            return p;
        }
        if let Some(p) = env_value.and_then(|v| v.parse::<u16>().ok()) {
            return p;
        }
        if config_port != 0 {
            return config_port;
        }
        8000
    }

    /// Dataset path override, if given on the command line.
    pub fn resolve_data_file(&self) -> Option<String> {
        self.data_file
            .as_ref()
            .map(|p| p.to_string_lossy().to_string())
    }

    /// Model directory override, if given on the command line.
    pub fn resolve_model_dir(&self) -> Option<String> {
        self.model_dir
            .as_ref()
            .map(|p| p.to_string_lossy().to_string())
    }

    pub fn resolve_log_level(&self) -> Option<String> {
        self.log_level.clone()
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".podium").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".podium").join("config.toml");
    }
    PathBuf::from("config.toml")
}
