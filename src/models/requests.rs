//! Request DTOs for the request backend API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::store::ANONYMOUS;

/// Request body for submitting a song request (POST /requests)
///
/// # Fields
/// - `music`: The requested song; required, rejected when missing or blank
/// - `name`: Optional requester name (defaults to "Anonymous")
///
/// `music` is optional at the serde level so a missing field produces the
/// same descriptive 400 as a blank one instead of a deserialization error.
#[derive(Debug, Clone, Deserialize)]
pub struct AddRequest {
    /// The requested song
    #[serde(default)]
    pub music: Option<String>,
    /// Optional requester name
    #[serde(default)]
    pub name: Option<String>,
}

impl AddRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        match self.music.as_deref().map(str::trim) {
            None => Some("Music request is required".to_string()),
            Some("") => Some("Music request cannot be empty".to_string()),
            Some(_) => None,
        }
    }

    /// The submitted song title with surrounding whitespace removed.
    pub fn music(&self) -> &str {
        self.music.as_deref().unwrap_or("").trim()
    }

    /// The requester name to store: trimmed, "Anonymous" when absent or blank.
    pub fn requester_name(&self) -> &str {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => ANONYMOUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_request_deserialize() {
        let json = r#"{"music": "Song A", "name": "Alice"}"#;
        let req: AddRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.music.as_deref(), Some("Song A"));
        assert_eq!(req.name.as_deref(), Some("Alice"));
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_add_request_without_name() {
        let json = r#"{"music": "Song A"}"#;
        let req: AddRequest = serde_json::from_str(json).unwrap();
        assert!(req.name.is_none());
        assert_eq!(req.requester_name(), "Anonymous");
    }

    #[test]
    fn test_validate_missing_music() {
        let json = r#"{"name": "Alice"}"#;
        let req: AddRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.validate().as_deref(), Some("Music request is required"));
    }

    #[test]
    fn test_validate_blank_music() {
        let req = AddRequest {
            music: Some("   ".to_string()),
            name: None,
        };
        assert_eq!(
            req.validate().as_deref(),
            Some("Music request cannot be empty")
        );
    }

    #[test]
    fn test_music_is_trimmed() {
        let req = AddRequest {
            music: Some("  Song A  ".to_string()),
            name: None,
        };
        assert_eq!(req.music(), "Song A");
    }

    #[test]
    fn test_blank_name_defaults_anonymous() {
        let req = AddRequest {
            music: Some("Song A".to_string()),
            name: Some("   ".to_string()),
        };
        assert_eq!(req.requester_name(), "Anonymous");
    }
}
