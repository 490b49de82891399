//! Last.fm API Data Transfer Objects
//!
//! Field names follow the audioscrobbler JSON exactly. Image arrays are
//! ordered small to large and carry the URL in a `#text` member; entries
//! with an empty `#text` are placeholders for sizes Last.fm doesn't have.
//!
//! Known quirk: the API reports some failures as HTTP 200 with an error
//! body instead of a payload, so every payload field here is optional.

use serde::Deserialize;

/// One entry of a size-ordered image array
#[derive(Debug, Clone, Deserialize)]
pub struct ImageRef {
    /// Image URL; empty when Last.fm has no file for this size
    #[serde(rename = "#text", default)]
    pub url: String,
    /// Size name (small, medium, large, extralarge, mega)
    #[serde(default)]
    pub size: String,
}

/// Response wrapper for `artist.getinfo`
#[derive(Debug, Deserialize)]
pub struct ArtistInfoResponse {
    pub artist: Option<ArtistInfo>,
}

#[derive(Debug, Deserialize)]
pub struct ArtistInfo {
    pub name: String,
    #[serde(default)]
    pub image: Vec<ImageRef>,
}

/// Response wrapper for `track.getInfo`
#[derive(Debug, Deserialize)]
pub struct TrackInfoResponse {
    pub track: Option<TrackInfo>,
}

#[derive(Debug, Deserialize)]
pub struct TrackInfo {
    pub name: String,
    /// Containing album; absent for tracks Last.fm can't place
    pub album: Option<TrackAlbum>,
}

#[derive(Debug, Deserialize)]
pub struct TrackAlbum {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: Vec<ImageRef>,
}

/// Response wrapper for `track.search`
#[derive(Debug, Deserialize)]
pub struct TrackSearchResponse {
    pub results: Option<SearchResults>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResults {
    #[serde(rename = "trackmatches")]
    pub track_matches: TrackMatches,
}

#[derive(Debug, Deserialize)]
pub struct TrackMatches {
    #[serde(default)]
    pub track: Vec<TrackMatch>,
}

/// One `track.search` candidate. Unlike `track.getInfo`, the artist here
/// is a plain string, not an object.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackMatch {
    pub name: String,
    pub artist: String,
    #[serde(default)]
    pub image: Vec<ImageRef>,
}

/// Error body Last.fm returns for rejected calls
#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub error: i32,
    pub message: String,
}
