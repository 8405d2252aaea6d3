//! Speaker record → embeddable text document.
//!
//! The document text is a pure function of the record: populated fields are
//! emitted as `Label: value` segments in a fixed order and joined with
//! `" | "`. Identical records always produce byte-identical text.

use serde::{Deserialize, Serialize};

use podium_core::types::SpeakerRecord;

const SEPARATOR: &str = " | ";

/// Compact projection stored next to each vector in the index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Ordinal of the speaker in the source dataset, as a string.
    pub speaker_index: String,
    pub has_detailed_bio: bool,
    pub speaker_name: String,
    pub speaker_title: String,
    pub speaker_company: String,
}

impl DocumentMetadata {
    /// Parse the ordinal back into a dataset position.
    pub fn ordinal(&self) -> Option<usize> {
        self.speaker_index.parse().ok()
    }
}

/// The searchable representation of one speaker.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeakerDocument {
    pub ordinal: usize,
    pub text: String,
    pub metadata: DocumentMetadata,
}

/// Build the document for the speaker at `ordinal`.
pub fn build_document(ordinal: usize, speaker: &SpeakerRecord) -> SpeakerDocument {
    let fields: [(&str, &str); 8] = [
        ("Name", speaker.name.as_str()),
        ("Title", speaker.title.as_str()),
        ("Company", speaker.company.as_str()),
        ("Session", speaker.session_title.as_str()),
        ("Session Description", speaker.session_description.as_str()),
        ("Location", speaker.location.as_str()),
        ("Speaking Time", speaker.speaking_time.as_str()),
        ("Bio", speaker.detailed_bio.as_str()),
    ];

    let text = fields
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(label, value)| format!("{}: {}", label, value))
        .collect::<Vec<_>>()
        .join(SEPARATOR);

    SpeakerDocument {
        ordinal,
        text,
        metadata: DocumentMetadata {
            speaker_index: ordinal.to_string(),
            has_detailed_bio: speaker.has_detailed_bio(),
            speaker_name: speaker.name.clone(),
            speaker_title: speaker.title.clone(),
            speaker_company: speaker.company.clone(),
        },
    }
}

/// Build one document per speaker, in dataset order.
pub fn build_documents(speakers: &[SpeakerRecord]) -> Vec<SpeakerDocument> {
    speakers
        .iter()
        .enumerate()
        .map(|(ordinal, speaker)| build_document(ordinal, speaker))
        .collect()
}
