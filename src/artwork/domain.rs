//! Internal domain models for artwork resolution and music search.
//!
//! These types are OUR types - they don't change when provider APIs change.
//! All provider responses get converted into these via each provider's adapter.

/// Entity kinds the resolver can fetch artwork for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtKind {
    Artist,
    Album,
    Track,
}

impl ArtKind {
    /// Stable tag used as the first segment of cache keys
    pub fn tag(&self) -> &'static str {
        match self {
            ArtKind::Artist => "artist",
            ArtKind::Album => "album",
            ArtKind::Track => "track",
        }
    }
}

/// A single artwork lookup request.
///
/// Holds the raw caller-supplied strings; normalization happens in
/// [`cache_key`](ArtQuery::cache_key) so logically-identical lookups
/// always share one cache entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtQuery {
    Artist { name: String },
    Album { artist: String, album: String },
    Track { artist: String, title: String },
}

impl ArtQuery {
    pub fn kind(&self) -> ArtKind {
        match self {
            ArtQuery::Artist { .. } => ArtKind::Artist,
            ArtQuery::Album { .. } => ArtKind::Album,
            ArtQuery::Track { .. } => ArtKind::Track,
        }
    }

    /// True when any required field is empty after trimming.
    /// Blank queries short-circuit before any cache or network access.
    pub fn is_blank(&self) -> bool {
        match self {
            ArtQuery::Artist { name } => name.trim().is_empty(),
            ArtQuery::Album { artist, album } => {
                artist.trim().is_empty() || album.trim().is_empty()
            }
            ArtQuery::Track { artist, title } => {
                artist.trim().is_empty() || title.trim().is_empty()
            }
        }
    }

    /// Normalized cache key: kind tag plus lowercased, trimmed fields,
    /// joined by `|`. Two lookups that differ only in casing or padding
    /// produce the same key.
    pub fn cache_key(&self) -> String {
        match self {
            ArtQuery::Artist { name } => format!("artist|{}", normalize(name)),
            ArtQuery::Album { artist, album } => {
                format!("album|{}|{}", normalize(artist), normalize(album))
            }
            ArtQuery::Track { artist, title } => {
                format!("track|{}|{}", normalize(artist), normalize(title))
            }
        }
    }
}

/// Trimmed, lowercased form used in cache and dedup keys
pub(crate) fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// A resolved image URL plus the provider that produced it.
/// The source name feeds diagnostics only; correctness never depends on it.
#[derive(Debug, Clone)]
pub struct ProviderHit {
    pub url: String,
    pub source: &'static str,
}

/// Errors a provider adapter can produce.
///
/// These never escape the resolver or search layers: both collapse any
/// error into "no result" at their public boundary, logging it first.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    #[error("Provider not configured (missing API key)")]
    Unconfigured,

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}")]
    Http { status: u16 },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("API error: {0}")]
    Api(String),
}

/// Which catalog entity a search hit describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Track,
    Album,
}

impl SearchKind {
    pub fn tag(&self) -> &'static str {
        match self {
            SearchKind::Track => "track",
            SearchKind::Album => "album",
        }
    }
}

/// Which provider produced a search hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchSource {
    Itunes,
    Deezer,
    LastFm,
}

impl SearchSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchSource::Itunes => "itunes",
            SearchSource::Deezer => "deezer",
            SearchSource::LastFm => "lastfm",
        }
    }
}

/// One candidate from the combined music search
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub kind: SearchKind,
    pub title: String,
    pub artist: String,
    /// Containing album, for track hits that carry one
    pub album: Option<String>,
    /// Release year as a display string
    pub year: Option<String>,
    /// Thumbnail/cover URL
    pub cover: Option<String>,
    pub source: SearchSource,
}

impl SearchHit {
    /// Identity for cross-provider deduplication: lowercase
    /// `(artist, title, kind)`. First occurrence wins in a merge.
    pub fn dedup_key(&self) -> String {
        format!(
            "{}|{}|{}",
            normalize(&self.artist),
            normalize(&self.title),
            self.kind.tag()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_shapes() {
        let artist = ArtQuery::Artist {
            name: "Radiohead".to_string(),
        };
        assert_eq!(artist.cache_key(), "artist|radiohead");

        let album = ArtQuery::Album {
            artist: "Daft Punk".to_string(),
            album: "Discovery".to_string(),
        };
        assert_eq!(album.cache_key(), "album|daft punk|discovery");

        let track = ArtQuery::Track {
            artist: "The Beatles".to_string(),
            title: "Help!".to_string(),
        };
        assert_eq!(track.cache_key(), "track|the beatles|help!");
    }

    #[test]
    fn test_cache_key_ignores_case_and_padding() {
        let a = ArtQuery::Track {
            artist: "The Beatles".to_string(),
            title: "Help!".to_string(),
        };
        let b = ArtQuery::Track {
            artist: "  the beatles ".to_string(),
            title: "HELP!".to_string(),
        };
        assert_eq!(a.cache_key(), b.cache_key());
    }

    #[test]
    fn test_blank_detection() {
        assert!(
            ArtQuery::Artist {
                name: "   ".to_string()
            }
            .is_blank()
        );
        assert!(
            ArtQuery::Album {
                artist: "A".to_string(),
                album: String::new()
            }
            .is_blank()
        );
        assert!(
            !ArtQuery::Track {
                artist: "A".to_string(),
                title: "B".to_string()
            }
            .is_blank()
        );
    }

    #[test]
    fn test_dedup_key_ignores_case() {
        let a = SearchHit {
            kind: SearchKind::Track,
            title: "Hotline Bling".to_string(),
            artist: "Drake".to_string(),
            album: None,
            year: None,
            cover: None,
            source: SearchSource::Itunes,
        };
        let b = SearchHit {
            title: "HOTLINE BLING".to_string(),
            artist: "drake".to_string(),
            source: SearchSource::Deezer,
            ..a.clone()
        };
        assert_eq!(a.dedup_key(), b.dedup_key());
    }

    #[test]
    fn test_dedup_key_distinguishes_kind() {
        let track = SearchHit {
            kind: SearchKind::Track,
            title: "Discovery".to_string(),
            artist: "Daft Punk".to_string(),
            album: None,
            year: None,
            cover: None,
            source: SearchSource::Itunes,
        };
        let album = SearchHit {
            kind: SearchKind::Album,
            ..track.clone()
        };
        assert_ne!(track.dedup_key(), album.dedup_key());
    }
}
