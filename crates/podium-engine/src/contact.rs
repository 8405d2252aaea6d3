//! Best-effort contact channel extraction.

use std::collections::BTreeMap;

use podium_core::types::SpeakerRecord;

/// First whitespace-delimited token of `bio` that looks like an email
/// address, with surrounding `.,!?` removed.
pub fn find_email(bio: &str) -> Option<String> {
    bio.split_whitespace()
        .find(|word| word.contains('@') && word.contains('.'))
        .map(|word| {
            word.trim_matches(|c| matches!(c, '.' | ',' | '!' | '?'))
                .to_string()
        })
}

/// Derive contact channels for a speaker.
///
/// Keys: `email` (from the bio), `company`, and `session_contact` when both
/// the speaking time and location are known. Missing data simply omits the
/// key.
pub fn extract_contact_info(speaker: &SpeakerRecord) -> BTreeMap<String, String> {
    let mut contact = BTreeMap::new();

    if let Some(email) = find_email(&speaker.detailed_bio) {
        contact.insert("email".to_string(), email);
    }

    if !speaker.company.is_empty() {
        contact.insert("company".to_string(), speaker.company.clone());
    }

    if !speaker.location.is_empty() && !speaker.speaking_time.is_empty() {
        contact.insert(
            "session_contact".to_string(),
            format!("{} at {}", speaker.speaking_time, speaker.location),
        );
    }

    contact
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_in_sentence() {
        assert_eq!(
            find_email("reach me at jane.doe@example.com for info").as_deref(),
            Some("jane.doe@example.com")
        );
    }

    #[test]
    fn test_email_trailing_punctuation_stripped() {
        assert_eq!(
            find_email("Contact: ops@sof.mil.").as_deref(),
            Some("ops@sof.mil")
        );
        assert_eq!(
            find_email("write to a.b@c.org, or call").as_deref(),
            Some("a.b@c.org")
        );
    }

    #[test]
    fn test_first_email_wins() {
        assert_eq!(
            find_email("x@one.com then y@two.com").as_deref(),
            Some("x@one.com")
        );
    }

    #[test]
    fn test_at_sign_without_dot_is_ignored() {
        assert_eq!(find_email("follow @janedoe on social"), None);
        assert_eq!(find_email(""), None);
    }

    #[test]
    fn test_full_contact_info() {
        let speaker = SpeakerRecord {
            name: "Jane Doe".into(),
            company: "Acme Defense".into(),
            location: "Room 12".into(),
            speaking_time: "May 7, 10:00 AM".into(),
            detailed_bio: "Email jane@acme.com!".into(),
            ..Default::default()
        };
        let contact = extract_contact_info(&speaker);
        assert_eq!(contact.get("email").map(String::as_str), Some("jane@acme.com"));
        assert_eq!(contact.get("company").map(String::as_str), Some("Acme Defense"));
        assert_eq!(
            contact.get("session_contact").map(String::as_str),
            Some("May 7, 10:00 AM at Room 12")
        );
    }

    #[test]
    fn test_session_contact_needs_time_and_location() {
        let speaker = SpeakerRecord {
            name: "Jane Doe".into(),
            location: "Room 12".into(),
            ..Default::default()
        };
        let contact = extract_contact_info(&speaker);
        assert!(!contact.contains_key("session_contact"));
        assert!(contact.is_empty());
    }
}
