//! Human-readable match explanations.
//!
//! Purely cosmetic: a lexical check of which speaker fields share a token
//! with the query. Nothing here feeds back into ranking.

use podium_core::types::SpeakerRecord;

/// Fields checked for lexical overlap, with the label used in explanations.
fn labelled_fields(speaker: &SpeakerRecord) -> [(&'static str, &str); 5] {
    [
        ("name", speaker.name.as_str()),
        ("professional title", speaker.title.as_str()),
        ("company", speaker.company.as_str()),
        ("session topic", speaker.session_title.as_str()),
        ("professional background", speaker.detailed_bio.as_str()),
    ]
}

/// Labels of the fields where any whitespace token of the query appears as
/// a case-insensitive substring.
pub fn matched_fields(query: &str, speaker: &SpeakerRecord) -> Vec<&'static str> {
    let query_lower = query.to_lowercase();
    let tokens: Vec<&str> = query_lower.split_whitespace().collect();

    labelled_fields(speaker)
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .filter(|(_, value)| {
            let value_lower = value.to_lowercase();
            tokens.iter().any(|token| value_lower.contains(token))
        })
        .map(|(label, _)| label)
        .collect()
}

/// Qualitative band for a relevance score.
pub fn relevance_band(score: f64) -> &'static str {
    if score > 0.7 {
        "highly relevant"
    } else if score > 0.5 {
        "relevant"
    } else {
        "somewhat relevant"
    }
}

fn as_percent(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

/// Explain why `speaker` was returned for `query` at the given score.
pub fn explain(query: &str, speaker: &SpeakerRecord, score: f64) -> String {
    let matches = matched_fields(query, speaker);
    if matches.is_empty() {
        return format!(
            "This speaker shows semantic relevance (score: {}) based on the overall context and professional background.",
            as_percent(score)
        );
    }

    format!(
        "This speaker is {} based on matches in: {}. The semantic similarity score is {}.",
        relevance_band(score),
        matches.join(", "),
        as_percent(score)
    )
}
