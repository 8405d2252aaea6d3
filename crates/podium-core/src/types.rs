use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::info;

use crate::error::{PodiumError, Result};

// =============================================================================
// Enums
// =============================================================================

/// Distance metric used by the vector index.
///
/// Both metrics report distances in `[0, 2]` for unit-length vectors, which
/// is the range the relevance mapping assumes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    /// `1 - cosine_similarity`.
    #[default]
    Cosine,
    /// L2 distance.
    Euclidean,
}

// =============================================================================
// Speaker data
// =============================================================================

/// One conference speaker as produced by the scraping and cleaning pipeline.
///
/// Missing or `null` string fields deserialize to empty strings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeakerRecord {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub company: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub session_title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub session_description: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub speaking_time: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub detailed_bio: String,
    pub image_url: Option<String>,
    /// Provenance tag from the scraper. Not used for ranking.
    pub extraction_method: Option<String>,
}

impl SpeakerRecord {
    /// True if the bio holds anything besides whitespace.
    pub fn has_detailed_bio(&self) -> bool {
        !self.detailed_bio.trim().is_empty()
    }

    /// Lowercased concatenation of the fields used for keyword search.
    pub fn searchable_text(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.name, self.title, self.company, self.session_title, self.detailed_bio
        )
        .to_lowercase()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// The persisted speaker dataset.
///
/// Only `speakers` is interpreted; the provenance fields are carried through
/// unchanged.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SpeakerDataset {
    pub speakers: Vec<SpeakerRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scraped_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_speakers: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SpeakerDataset {
    /// Wrap an in-memory list of speakers.
    pub fn new(speakers: Vec<SpeakerRecord>) -> Self {
        Self {
            speakers,
            ..Default::default()
        }
    }

    /// Read, parse and validate a dataset file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PodiumError::Dataset(format!("cannot read {}: {}", path.display(), e))
        })?;
        let dataset = Self::from_json_str(&content)?;
        info!(
            path = %path.display(),
            speakers = dataset.speakers.len(),
            "Speaker dataset loaded"
        );
        Ok(dataset)
    }

    /// Parse and validate a dataset from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let dataset: SpeakerDataset = serde_json::from_str(json)
            .map_err(|e| PodiumError::Dataset(format!("malformed dataset: {}", e)))?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Reject empty datasets and speakers without a name.
    pub fn validate(&self) -> Result<()> {
        if self.speakers.is_empty() {
            return Err(PodiumError::Dataset(
                "dataset contains no speakers".to_string(),
            ));
        }
        if let Some(pos) = self.speakers.iter().position(|s| s.name.trim().is_empty()) {
            return Err(PodiumError::Dataset(format!(
                "speaker at position {} has no name",
                pos
            )));
        }
        Ok(())
    }
}
