//! Adapter mapping Deezer responses onto the provider traits.

use async_trait::async_trait;

use super::client::DeezerClient;
use super::dto;
use crate::artwork::domain::{ProviderError, SearchHit, SearchKind, SearchSource};
use crate::artwork::traits::{ArtSource, CatalogSearch};

/// Deezer as an artwork and search provider for all three entity kinds.
/// Track artwork reuses the track's album cover.
pub struct DeezerArt {
    client: DeezerClient,
}

impl DeezerArt {
    pub fn new(client: DeezerClient) -> Self {
        Self { client }
    }
}

/// Largest named variant present: xl, then big, then medium.
/// Empty strings count as absent.
fn best_image(xl: Option<&str>, big: Option<&str>, medium: Option<&str>) -> Option<String> {
    [xl, big, medium]
        .into_iter()
        .flatten()
        .find(|url| !url.is_empty())
        .map(str::to_string)
}

fn album_cover(album: &dto::AlbumRef) -> Option<String> {
    best_image(
        album.cover_xl.as_deref(),
        album.cover_big.as_deref(),
        album.cover_medium.as_deref(),
    )
}

#[async_trait]
impl ArtSource for DeezerArt {
    fn name(&self) -> &'static str {
        "deezer"
    }

    async fn artist_image(&self, name: &str) -> Result<Option<String>, ProviderError> {
        let response = self.client.search_artists(name, 1).await?;
        Ok(response.data.first().and_then(|artist| {
            best_image(
                artist.picture_xl.as_deref(),
                artist.picture_big.as_deref(),
                artist.picture_medium.as_deref(),
            )
        }))
    }

    async fn album_image(&self, artist: &str, album: &str) -> Result<Option<String>, ProviderError> {
        let query = format!("{artist} {album}");
        let response = self.client.search_albums(&query, 1).await?;
        Ok(response.data.first().and_then(|result| {
            best_image(
                result.cover_xl.as_deref(),
                result.cover_big.as_deref(),
                result.cover_medium.as_deref(),
            )
        }))
    }

    async fn track_image(&self, artist: &str, title: &str) -> Result<Option<String>, ProviderError> {
        let query = format!("{artist} {title}");
        let response = self.client.search_tracks(&query, 1).await?;
        Ok(response
            .data
            .first()
            .and_then(|track| album_cover(&track.album)))
    }
}

#[async_trait]
impl CatalogSearch for DeezerArt {
    fn name(&self) -> &'static str {
        "deezer"
    }

    async fn search_tracks(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchHit>, ProviderError> {
        let response = self.client.search_tracks(query, limit).await?;
        Ok(response.data.into_iter().map(track_hit).collect())
    }

    async fn search_albums(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchHit>, ProviderError> {
        let response = self.client.search_albums(query, limit).await?;
        Ok(response.data.into_iter().map(album_hit).collect())
    }
}

fn track_hit(track: dto::TrackResult) -> SearchHit {
    let cover = album_cover(&track.album);
    SearchHit {
        kind: SearchKind::Track,
        title: track.title,
        artist: track.artist.name,
        album: Some(track.album.title),
        year: None,
        cover,
        source: SearchSource::Deezer,
    }
}

fn album_hit(album: dto::AlbumResult) -> SearchHit {
    let cover = best_image(
        album.cover_xl.as_deref(),
        album.cover_big.as_deref(),
        album.cover_medium.as_deref(),
    );
    SearchHit {
        kind: SearchKind::Album,
        title: album.title,
        artist: album.artist.name,
        album: None,
        year: None,
        cover,
        source: SearchSource::Deezer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_image_prefers_xl() {
        let url = best_image(Some("xl.jpg"), Some("big.jpg"), Some("medium.jpg"));
        assert_eq!(url.as_deref(), Some("xl.jpg"));
    }

    #[test]
    fn test_best_image_falls_through_missing_and_empty() {
        assert_eq!(
            best_image(None, Some("big.jpg"), Some("medium.jpg")).as_deref(),
            Some("big.jpg")
        );
        assert_eq!(
            best_image(Some(""), None, Some("medium.jpg")).as_deref(),
            Some("medium.jpg")
        );
        assert_eq!(best_image(None, None, None), None);
        assert_eq!(best_image(Some(""), Some(""), Some("")), None);
    }

    #[test]
    fn test_track_hit_uses_album_cover() {
        let track = dto::TrackResult {
            title: "Harder, Better, Faster, Stronger".to_string(),
            artist: dto::ArtistRef {
                name: "Daft Punk".to_string(),
            },
            album: dto::AlbumRef {
                title: "Discovery".to_string(),
                cover_medium: Some("medium.jpg".to_string()),
                cover_big: Some("big.jpg".to_string()),
                cover_xl: None,
            },
        };

        let hit = track_hit(track);
        assert_eq!(hit.kind, SearchKind::Track);
        assert_eq!(hit.artist, "Daft Punk");
        assert_eq!(hit.album.as_deref(), Some("Discovery"));
        assert_eq!(hit.cover.as_deref(), Some("big.jpg"));
        assert_eq!(hit.source, SearchSource::Deezer);
    }
}
