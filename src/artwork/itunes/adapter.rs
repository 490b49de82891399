//! Adapter mapping iTunes search results onto the provider traits.

use async_trait::async_trait;

use super::client::ItunesClient;
use super::dto;
use crate::artwork::domain::{ProviderError, SearchHit, SearchKind, SearchSource};
use crate::artwork::traits::{ArtSource, CatalogSearch};

/// iTunes as an album/track artwork and search provider.
///
/// No artist images: iTunes has no reliable artist-image endpoint, so the
/// default `Ok(None)` stands for that kind.
pub struct ItunesArt {
    client: ItunesClient,
}

impl ItunesArt {
    pub fn new(client: ItunesClient) -> Self {
        Self { client }
    }
}

/// Full-size rewrite for resolver artwork, where the `bb`-suffixed
/// thumbnail convention applies. A URL without the expected token passes
/// through unchanged.
fn upscale_artwork(url: &str) -> String {
    url.replace("100x100bb", "512x512bb")
}

/// Milder rewrite for search-result thumbnails
fn upscale_thumb(url: &str) -> String {
    url.replace("100x100", "300x300")
}

/// First artwork URL in a result list, upscaled for resolver use
fn first_artwork(response: &dto::SearchResponse) -> Option<String> {
    response
        .results
        .iter()
        .find_map(|result| result.artwork_url_100.as_deref())
        .map(upscale_artwork)
}

#[async_trait]
impl ArtSource for ItunesArt {
    fn name(&self) -> &'static str {
        "itunes"
    }

    async fn album_image(&self, artist: &str, album: &str) -> Result<Option<String>, ProviderError> {
        let term = format!("{artist} {album}");
        let response = self.client.search_albums(&term, 1).await?;
        Ok(first_artwork(&response))
    }

    async fn track_image(&self, artist: &str, title: &str) -> Result<Option<String>, ProviderError> {
        let term = format!("{artist} {title}");
        let response = self.client.search_tracks(&term, 1).await?;
        Ok(first_artwork(&response))
    }
}

#[async_trait]
impl CatalogSearch for ItunesArt {
    fn name(&self) -> &'static str {
        "itunes"
    }

    async fn search_tracks(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchHit>, ProviderError> {
        let response = self.client.search_tracks(query, limit).await?;
        Ok(response.results.into_iter().filter_map(track_hit).collect())
    }

    async fn search_albums(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchHit>, ProviderError> {
        let response = self.client.search_albums(query, limit).await?;
        Ok(response.results.into_iter().filter_map(album_hit).collect())
    }
}

fn track_hit(result: dto::SearchResult) -> Option<SearchHit> {
    let title = result.track_name?;
    Some(SearchHit {
        kind: SearchKind::Track,
        title,
        artist: result.artist_name.unwrap_or_default(),
        album: result.collection_name,
        year: result.release_date.as_deref().map(release_year),
        cover: result.artwork_url_100.as_deref().map(upscale_thumb),
        source: SearchSource::Itunes,
    })
}

fn album_hit(result: dto::SearchResult) -> Option<SearchHit> {
    let title = result.collection_name?;
    Some(SearchHit {
        kind: SearchKind::Album,
        title,
        artist: result.artist_name.unwrap_or_default(),
        album: None,
        year: result.release_date.as_deref().map(release_year),
        cover: result.artwork_url_100.as_deref().map(upscale_thumb),
        source: SearchSource::Itunes,
    })
}

/// Year portion of an ISO-8601 timestamp
fn release_year(date: &str) -> String {
    date.chars().take(4).collect()
}
