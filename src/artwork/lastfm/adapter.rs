//! Adapter mapping Last.fm responses onto the provider traits.

use async_trait::async_trait;

use super::client::LastFmClient;
use super::dto;
use crate::artwork::domain::{ProviderError, SearchHit, SearchKind, SearchSource};
use crate::artwork::traits::{ArtSource, CatalogSearch};

/// Last.fm as an artwork and track-search provider.
///
/// Artist images come from `artist.getinfo`; track art reuses the track's
/// album image from `track.getInfo`. Album lookups are not served here.
pub struct LastFmArt {
    client: LastFmClient,
}

impl LastFmArt {
    pub fn new(client: LastFmClient) -> Self {
        Self { client }
    }
}

/// Pick the last entry with a non-empty URL. Last.fm orders images small
/// to large, so the last usable one is the largest available.
fn pick_image(images: &[dto::ImageRef]) -> Option<String> {
    images
        .iter()
        .rev()
        .find(|image| !image.url.is_empty())
        .map(|image| image.url.clone())
}

#[async_trait]
impl ArtSource for LastFmArt {
    fn name(&self) -> &'static str {
        "lastfm"
    }

    fn available(&self) -> bool {
        self.client.has_key()
    }

    async fn artist_image(&self, name: &str) -> Result<Option<String>, ProviderError> {
        let response = self.client.artist_info(name).await?;
        Ok(response.artist.as_ref().and_then(|a| pick_image(&a.image)))
    }

    async fn track_image(&self, artist: &str, title: &str) -> Result<Option<String>, ProviderError> {
        let response = self.client.track_info(artist, title).await?;
        Ok(response
            .track
            .as_ref()
            .and_then(|t| t.album.as_ref())
            .and_then(|album| pick_image(&album.image)))
    }
}

#[async_trait]
impl CatalogSearch for LastFmArt {
    fn name(&self) -> &'static str {
        "lastfm"
    }

    fn available(&self) -> bool {
        self.client.has_key()
    }

    async fn search_tracks(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchHit>, ProviderError> {
        let response = self.client.search_tracks(query, limit).await?;
        let matches = response
            .results
            .map(|r| r.track_matches.track)
            .unwrap_or_default();
        Ok(matches.into_iter().map(to_hit).collect())
    }

    /// Last.fm has no album search worth surfacing here
    async fn search_albums(
        &self,
        _query: &str,
        _limit: usize,
    ) -> Result<Vec<SearchHit>, ProviderError> {
        Ok(Vec::new())
    }
}

fn to_hit(candidate: dto::TrackMatch) -> SearchHit {
    let cover = pick_image(&candidate.image);
    SearchHit {
        kind: SearchKind::Track,
        title: candidate.name,
        artist: candidate.artist,
        album: None,
        year: None,
        cover,
        source: SearchSource::LastFm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(url: &str, size: &str) -> dto::ImageRef {
        dto::ImageRef {
            url: url.to_string(),
            size: size.to_string(),
        }
    }

    #[test]
    fn test_pick_image_takes_last_non_empty() {
        let images = vec![
            image("https://img.example/small.png", "small"),
            image("https://img.example/large.png", "large"),
            image("", "mega"),
        ];
        assert_eq!(
            pick_image(&images).as_deref(),
            Some("https://img.example/large.png")
        );
    }

    #[test]
    fn test_pick_image_all_empty() {
        let images = vec![image("", "small"), image("", "large")];
        assert_eq!(pick_image(&images), None);
        assert_eq!(pick_image(&[]), None);
    }

    #[test]
    fn test_keyless_adapter_is_unavailable() {
        let adapter = LastFmArt::new(LastFmClient::new(None));
        assert!(!ArtSource::available(&adapter));
        assert!(!CatalogSearch::available(&adapter));
    }

    #[test]
    fn test_search_hit_mapping() {
        let candidate = dto::TrackMatch {
            name: "Hotline Bling".to_string(),
            artist: "Drake".to_string(),
            image: vec![
                image("https://img.example/34s.png", "small"),
                image("https://img.example/174s.png", "large"),
            ],
        };

        let hit = to_hit(candidate);
        assert_eq!(hit.kind, SearchKind::Track);
        assert_eq!(hit.title, "Hotline Bling");
        assert_eq!(hit.artist, "Drake");
        assert_eq!(hit.cover.as_deref(), Some("https://img.example/174s.png"));
        assert_eq!(hit.source, SearchSource::LastFm);
    }
}
