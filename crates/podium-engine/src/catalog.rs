//! Exact-name lookup and keyword filtering over the raw speaker records.
//!
//! Independent of the vector pipeline; every operation is a linear scan in
//! dataset order.

use std::collections::BTreeSet;

use podium_core::types::SpeakerRecord;

use crate::types::DatasetStats;

/// Read-only view over the loaded speakers.
#[derive(Debug, Clone, Default)]
pub struct SpeakerCatalog {
    speakers: Vec<SpeakerRecord>,
}

impl SpeakerCatalog {
    pub fn new(speakers: Vec<SpeakerRecord>) -> Self {
        Self { speakers }
    }

    /// Speaker at a dataset ordinal.
    pub fn get(&self, ordinal: usize) -> Option<&SpeakerRecord> {
        self.speakers.get(ordinal)
    }

    /// All speakers in dataset order.
    pub fn get_all(&self) -> &[SpeakerRecord] {
        &self.speakers
    }

    /// Case-insensitive exact name match. The first match wins.
    pub fn get_by_name(&self, name: &str) -> Option<&SpeakerRecord> {
        let wanted = name.to_lowercase();
        self.speakers
            .iter()
            .find(|speaker| speaker.name.to_lowercase() == wanted)
    }

    /// Speakers whose name, title, company, session title or bio contains
    /// `keyword` (case-insensitive), in dataset order.
    pub fn search_by_keyword(&self, keyword: &str) -> Vec<&SpeakerRecord> {
        let keyword = keyword.to_lowercase();
        self.speakers
            .iter()
            .filter(|speaker| speaker.searchable_text().contains(&keyword))
            .collect()
    }

    pub fn stats(&self) -> DatasetStats {
        let companies: BTreeSet<&str> = self
            .speakers
            .iter()
            .map(|s| s.company.as_str())
            .filter(|c| !c.is_empty())
            .collect();

        DatasetStats {
            total_speakers: self.speakers.len(),
            speakers_with_detailed_bios: self
                .speakers
                .iter()
                .filter(|s| s.has_detailed_bio())
                .count(),
            unique_companies: companies.len(),
            companies: companies.into_iter().map(String::from).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.speakers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speakers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speaker(name: &str, title: &str, company: &str, bio: &str) -> SpeakerRecord {
        SpeakerRecord {
            name: name.into(),
            title: title.into(),
            company: company.into(),
            detailed_bio: bio.into(),
            ..Default::default()
        }
    }

    fn catalog() -> SpeakerCatalog {
        SpeakerCatalog::new(vec![
            speaker("Jane Doe", "Cybersecurity Director", "Acme Defense", ""),
            speaker("John Roe", "Drone Program Manager", "SkyWorks", "UAS veteran"),
            speaker("JANE DOE", "Duplicate", "Acme Defense", ""),
            SpeakerRecord {
                name: "Ada Park".into(),
                session_description: "drone swarms".into(),
                ..Default::default()
            },
        ])
    }

    #[test]
    fn test_get_by_name_case_insensitive() {
        let catalog = catalog();
        let found = catalog.get_by_name("jane doe").unwrap();
        assert_eq!(found.name, "Jane Doe");
        assert_eq!(found.title, "Cybersecurity Director");
    }

    #[test]
    fn test_get_by_name_missing() {
        assert!(catalog().get_by_name("Nobody").is_none());
        // No trimming or partial matching.
        assert!(catalog().get_by_name("jane").is_none());
        assert!(catalog().get_by_name(" jane doe").is_none());
    }

    #[test]
    fn test_search_by_keyword_preserves_order() {
        let catalog = catalog();
        let hits = catalog.search_by_keyword("ACME");
        let names: Vec<_> = hits.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Jane Doe", "JANE DOE"]);
    }

    #[test]
    fn test_search_ignores_session_description() {
        let catalog = catalog();
        let hits = catalog.search_by_keyword("drone");
        let names: Vec<_> = hits.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["John Roe"]);
    }

    #[test]
    fn test_search_matches_bio() {
        assert_eq!(catalog().search_by_keyword("uas vet").len(), 1);
    }

    #[test]
    fn test_get_all_and_get() {
        let catalog = catalog();
        assert_eq!(catalog.get_all().len(), 4);
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get(1).unwrap().name, "John Roe");
        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn test_stats() {
        let stats = catalog().stats();
        assert_eq!(stats.total_speakers, 4);
        assert_eq!(stats.speakers_with_detailed_bios, 1);
        assert_eq!(stats.unique_companies, 2);
        assert_eq!(stats.companies, vec!["Acme Defense", "SkyWorks"]);
    }
}
