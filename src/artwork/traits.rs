//! Trait definitions for artwork and catalog-search providers.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code wires the real provider adapters; resolver and search
//! tests substitute the mocks below.

use async_trait::async_trait;

use super::domain::{ArtQuery, ProviderError, SearchHit};

/// A provider that can resolve artwork URLs for some entity kinds.
///
/// Not every provider supports every kind: the per-kind methods default
/// to `Ok(None)` ("nothing here"), and adapters override only what their
/// API can serve. `Ok(None)` also covers a genuine no-artwork answer;
/// errors are reserved for failed attempts (network, HTTP status,
/// malformed body).
#[async_trait]
pub trait ArtSource: Send + Sync {
    /// Short provider name for logs
    fn name(&self) -> &'static str;

    /// Whether the provider can be called at all. Keyed providers
    /// report `false` without credentials and are skipped silently.
    fn available(&self) -> bool {
        true
    }

    async fn artist_image(&self, _name: &str) -> Result<Option<String>, ProviderError> {
        Ok(None)
    }

    async fn album_image(
        &self,
        _artist: &str,
        _album: &str,
    ) -> Result<Option<String>, ProviderError> {
        Ok(None)
    }

    async fn track_image(
        &self,
        _artist: &str,
        _title: &str,
    ) -> Result<Option<String>, ProviderError> {
        Ok(None)
    }

    /// Dispatch a query to the matching per-kind method
    async fn lookup(&self, query: &ArtQuery) -> Result<Option<String>, ProviderError> {
        match query {
            ArtQuery::Artist { name } => self.artist_image(name).await,
            ArtQuery::Album { artist, album } => self.album_image(artist, album).await,
            ArtQuery::Track { artist, title } => self.track_image(artist, title).await,
        }
    }
}

/// A provider that can search its catalog for tracks and albums.
#[async_trait]
pub trait CatalogSearch: Send + Sync {
    /// Short provider name for logs
    fn name(&self) -> &'static str;

    /// Whether the provider can be called at all (see [`ArtSource::available`])
    fn available(&self) -> bool {
        true
    }

    async fn search_tracks(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchHit>, ProviderError>;

    async fn search_albums(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchHit>, ProviderError>;
}
