//! MusicBrainz search API Data Transfer Objects
//!
//! These types match EXACTLY what the MusicBrainz search API returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the archive resolver - it converts
//! results to plain URLs.
//!
//! API Reference: https://musicbrainz.org/doc/MusicBrainz_API/Search
//!
//! We use the /release-group and /recording search endpoints to turn an
//! (artist, album) or (artist, title) pair into MBIDs.

use serde::{Deserialize, Serialize};

/// Release-group search response
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReleaseGroupSearchResponse {
    /// Matching release groups, best score first
    #[serde(default)]
    pub release_groups: Vec<ReleaseGroup>,
}

/// Release group (an abstract album across all editions)
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReleaseGroup {
    /// MusicBrainz release group ID
    pub id: String,
    /// Title
    pub title: String,
    /// Search match score (0-100)
    pub score: Option<i32>,
    /// Concrete releases in this group
    #[serde(default)]
    pub releases: Vec<ReleaseRef>,
}

/// Release reference inside a search result
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReleaseRef {
    /// MusicBrainz release ID
    pub id: String,
    /// Release title
    pub title: Option<String>,
}

/// Recording search response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordingSearchResponse {
    /// Matching recordings, best score first
    #[serde(default)]
    pub recordings: Vec<Recording>,
}

/// Recording (one performance of a song)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Recording {
    /// MusicBrainz recording ID
    pub id: String,
    /// Recording title
    pub title: String,
    /// Search match score (0-100)
    pub score: Option<i32>,
    /// Releases this recording appears on
    #[serde(default)]
    pub releases: Vec<RecordingRelease>,
}

/// Release attached to a recording search result
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RecordingRelease {
    /// MusicBrainz release ID
    pub id: String,
    /// Release title
    pub title: Option<String>,
    /// Release group this release belongs to
    pub release_group: Option<ReleaseGroupRef>,
}

/// Bare release-group reference
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReleaseGroupRef {
    /// MusicBrainz release group ID
    pub id: String,
}

/// Error response from MusicBrainz API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub error: String,
    pub help: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    /// Test parsing a release-group search response
    #[test]
    fn test_parse_release_group_search() {
        let json = r#"{
            "created": "2024-01-15T10:00:00.000Z",
            "count": 1,
            "offset": 0,
            "release-groups": [{
                "id": "rg-123",
                "score": 100,
                "title": "Discovery",
                "primary-type": "Album",
                "releases": [
                    {"id": "rel-1", "title": "Discovery", "status": "Official"},
                    {"id": "rel-2", "title": "Discovery (Japan)"}
                ]
            }]
        }"#;

        let response: ReleaseGroupSearchResponse =
            serde_json::from_str(json).expect("Should parse release-group search");

        assert_eq!(response.release_groups.len(), 1);
        let group = &response.release_groups[0];
        assert_eq!(group.id, "rg-123");
        assert_eq!(group.title, "Discovery");
        assert_eq!(group.score, Some(100));
        assert_eq!(group.releases.len(), 2);
        assert_eq!(group.releases[0].id, "rel-1");
    }

    /// Test parsing a release group with no releases attached
    #[test]
    fn test_parse_release_group_without_releases() {
        let json = r#"{
            "release-groups": [{
                "id": "rg-bare",
                "title": "Untitled",
                "score": 72
            }]
        }"#;

        let response: ReleaseGroupSearchResponse =
            serde_json::from_str(json).expect("Should parse bare release group");

        assert!(response.release_groups[0].releases.is_empty());
    }

    /// Test parsing a recording search response
    #[test]
    fn test_parse_recording_search() {
        let json = r#"{
            "count": 2,
            "recordings": [{
                "id": "rec-123",
                "score": 100,
                "title": "One More Time",
                "length": 320000,
                "releases": [{
                    "id": "rel-1",
                    "title": "Discovery",
                    "release-group": {
                        "id": "rg-123",
                        "title": "Discovery",
                        "primary-type": "Album"
                    }
                }]
            }]
        }"#;

        let response: RecordingSearchResponse =
            serde_json::from_str(json).expect("Should parse recording search");

        assert_eq!(response.recordings.len(), 1);
        let recording = &response.recordings[0];
        assert_eq!(recording.id, "rec-123");
        assert_eq!(recording.title, "One More Time");
        assert_eq!(recording.releases.len(), 1);

        let release = &recording.releases[0];
        assert_eq!(release.id, "rel-1");
        let group = release.release_group.as_ref().unwrap();
        assert_eq!(group.id, "rg-123");
    }

    /// Test parsing an empty search result
    #[test]
    fn test_parse_empty_search() {
        let json = r#"{"count": 0, "recordings": []}"#;

        let response: RecordingSearchResponse =
            serde_json::from_str(json).expect("Should parse empty search");

        assert!(response.recordings.is_empty());
    }

    /// Test parsing error response
    #[test]
    fn test_parse_error_response() {
        let json = r#"{
            "error": "Invalid query syntax",
            "help": "For usage, please see: https://musicbrainz.org/doc/MusicBrainz_API"
        }"#;

        let error: ApiError = serde_json::from_str(json).expect("Should parse error");
        assert_eq!(error.error, "Invalid query syntax");
        assert!(error.help.is_some());
    }
}
