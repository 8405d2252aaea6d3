use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use podium_core::types::SpeakerRecord;

/// Session projection attached to every recommendation.
///
/// All four fields are always present, empty when the record has no value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDetails {
    pub title: String,
    pub time: String,
    pub location: String,
    pub description: String,
}

impl From<&SpeakerRecord> for SessionDetails {
    fn from(speaker: &SpeakerRecord) -> Self {
        Self {
            title: speaker.session_title.clone(),
            time: speaker.speaking_time.clone(),
            location: speaker.location.clone(),
            description: speaker.session_description.clone(),
        }
    }
}

/// One ranked answer to a recommendation query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub speaker: SpeakerRecord,
    /// Relevance in `[0.0, 1.0]`, rounded to three decimals.
    pub relevance_score: f64,
    pub explanation: String,
    /// Contact channel → value (`email`, `company`, `session_contact`).
    pub contact_info: BTreeMap<String, String>,
    pub session_details: SessionDetails,
}

/// Aggregate counts over the loaded dataset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub total_speakers: usize,
    pub speakers_with_detailed_bios: usize,
    pub unique_companies: usize,
    /// Distinct non-empty companies, sorted.
    pub companies: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_details_from_record() {
        let speaker = SpeakerRecord {
            name: "Jane".into(),
            session_title: "Keynote".into(),
            speaking_time: "9:00 AM".into(),
            ..Default::default()
        };
        let details = SessionDetails::from(&speaker);
        assert_eq!(details.title, "Keynote");
        assert_eq!(details.time, "9:00 AM");
        assert_eq!(details.location, "");
        assert_eq!(details.description, "");
    }

    #[test]
    fn test_session_details_serializes_all_keys() {
        let json = serde_json::to_value(SessionDetails::default()).unwrap();
        let obj = json.as_object().unwrap();
        for key in ["title", "time", "location", "description"] {
            assert_eq!(obj.get(key).and_then(|v| v.as_str()), Some(""));
        }
        assert_eq!(obj.len(), 4);
    }
}
