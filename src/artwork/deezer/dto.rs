//! Deezer API Data Transfer Objects
//!
//! Every search endpoint wraps its results in a `data` array. Image
//! variants come as `picture_*` (artists) or `cover_*` (albums) fields
//! from small to xl; any of them can be absent or empty.

use serde::Deserialize;

/// `/search` response (tracks)
#[derive(Debug, Deserialize)]
pub struct TrackSearchResponse {
    #[serde(default)]
    pub data: Vec<TrackResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackResult {
    pub title: String,
    pub artist: ArtistRef,
    pub album: AlbumRef,
}

/// `/search/album` response
#[derive(Debug, Deserialize)]
pub struct AlbumSearchResponse {
    #[serde(default)]
    pub data: Vec<AlbumResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumResult {
    pub title: String,
    pub artist: ArtistRef,
    pub cover_medium: Option<String>,
    pub cover_big: Option<String>,
    pub cover_xl: Option<String>,
}

/// `/search/artist` response
#[derive(Debug, Deserialize)]
pub struct ArtistSearchResponse {
    #[serde(default)]
    pub data: Vec<ArtistResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistResult {
    pub name: String,
    pub picture_medium: Option<String>,
    pub picture_big: Option<String>,
    pub picture_xl: Option<String>,
}

/// Artist reference embedded in track and album results
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistRef {
    pub name: String,
}

/// Album reference embedded in track results, carrying the cover variants
#[derive(Debug, Clone, Deserialize)]
pub struct AlbumRef {
    pub title: String,
    pub cover_medium: Option<String>,
    pub cover_big: Option<String>,
    pub cover_xl: Option<String>,
}
