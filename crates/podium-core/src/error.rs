use thiserror::Error;

/// Top-level error type for Podium.
///
/// Startup failures (`Dataset`, `Embedding`, `Index`) abort engine
/// construction. At query time `Embedding` and `Index` abort only the query
/// that raised them. A missing speaker is never an error; lookups return
/// `Option`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PodiumError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Index error: {0}")]
    Index(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for PodiumError {
    fn from(err: toml::de::Error) -> Self {
        PodiumError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for PodiumError {
    fn from(err: toml::ser::Error) -> Self {
        PodiumError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for PodiumError {
    fn from(err: serde_json::Error) -> Self {
        PodiumError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Podium operations.
pub type Result<T> = std::result::Result<T, PodiumError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PodiumError::Dataset("no speakers".to_string());
        assert_eq!(err.to_string(), "Dataset error: no speakers");
    }

    #[test]
    fn test_error_display_all_variants() {
        let cases: Vec<(PodiumError, &str)> = vec![
            (
                PodiumError::Config("bad key".to_string()),
                "Configuration error: bad key",
            ),
            (
                PodiumError::Embedding("model missing".to_string()),
                "Embedding error: model missing",
            ),
            (
                PodiumError::Index("already loaded".to_string()),
                "Index error: already loaded",
            ),
            (
                PodiumError::InvalidRequest("top_k must be positive".to_string()),
                "Invalid request: top_k must be positive",
            ),
            (
                PodiumError::Api("bind failed".to_string()),
                "API error: bind failed",
            ),
            (
                PodiumError::Serialization("invalid json".to_string()),
                "Serialization error: invalid json",
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let podium_err: PodiumError = io_err.into();
        assert!(matches!(podium_err, PodiumError::Io(_)));
        assert!(podium_err.to_string().starts_with("I/O error:"));
        assert!(podium_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_from_toml_de() {
        let err: std::result::Result<toml::Value, _> = toml::from_str("invalid = [[[");
        let podium_err: PodiumError = err.unwrap_err().into();
        assert!(matches!(podium_err, PodiumError::Config(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let err: std::result::Result<serde_json::Value, _> = serde_json::from_str("{ nope }");
        let podium_err: PodiumError = err.unwrap_err().into();
        assert!(matches!(podium_err, PodiumError::Serialization(_)));
    }

    #[test]
    fn test_result_type_with_question_mark() {
        fn inner() -> Result<String> {
            let io_result: std::result::Result<i32, std::io::Error> = Ok(42);
            let value = io_result?;
            Ok(value.to_string())
        }

        assert_eq!(inner().unwrap(), "42");
    }
}
