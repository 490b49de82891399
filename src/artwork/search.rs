//! Combined music search across catalog providers.
//!
//! Tracks and albums are searched over an ordered source list where the
//! first source returning any hits wins (fallback, not merge). Last.fm's
//! track search sits outside that list: its hits join the others in the
//! final deduplicated merge when a key is configured.

use std::collections::HashSet;
use std::sync::Arc;

use crate::artwork::deezer::{DeezerArt, DeezerClient};
use crate::artwork::domain::{SearchHit, SearchKind};
use crate::artwork::itunes::{ItunesArt, ItunesClient};
use crate::artwork::lastfm::{LastFmArt, LastFmClient};
use crate::artwork::ratelimit::{RESOLVER_MIN_DELAY, RateGate};
use crate::artwork::traits::CatalogSearch;

/// Catalog search over an ordered provider list.
///
/// Never fails: blank queries, provider errors, and empty catalogs all
/// come back as empty lists.
pub struct MusicSearch {
    sources: Vec<Arc<dyn CatalogSearch>>,
    lastfm: Option<Arc<dyn CatalogSearch>>,
    gate: Arc<RateGate>,
}

impl MusicSearch {
    pub fn new(sources: Vec<Arc<dyn CatalogSearch>>, gate: Arc<RateGate>) -> Self {
        Self {
            sources,
            lastfm: None,
            gate,
        }
    }

    /// Add a Last.fm source whose track hits join the merged results
    pub fn with_lastfm(mut self, source: Arc<dyn CatalogSearch>) -> Self {
        self.lastfm = Some(source);
        self
    }

    /// Production wiring: iTunes first, Deezer as fallback, Last.fm
    /// merged in when a key is configured.
    pub fn standard(lastfm_api_key: Option<String>) -> Self {
        let itunes: Arc<dyn CatalogSearch> = Arc::new(ItunesArt::new(ItunesClient::new()));
        let deezer: Arc<dyn CatalogSearch> = Arc::new(DeezerArt::new(DeezerClient::new()));
        let lastfm: Arc<dyn CatalogSearch> =
            Arc::new(LastFmArt::new(LastFmClient::new(lastfm_api_key)));

        Self::new(
            vec![itunes, deezer],
            Arc::new(RateGate::new(RESOLVER_MIN_DELAY)),
        )
        .with_lastfm(lastfm)
    }

    /// Track hits from the first source that has any
    pub async fn search_tracks(&self, query: &str, limit: usize) -> Vec<SearchHit> {
        self.first_non_empty(query, limit, SearchKind::Track).await
    }

    /// Album hits from the first source that has any
    pub async fn search_albums(&self, query: &str, limit: usize) -> Vec<SearchHit> {
        self.first_non_empty(query, limit, SearchKind::Album).await
    }

    /// Track and album searches run concurrently; each side degrades to
    /// an empty list on its own.
    pub async fn search_music(
        &self,
        query: &str,
        limit_per_type: usize,
    ) -> (Vec<SearchHit>, Vec<SearchHit>) {
        tokio::join!(
            self.search_tracks(query, limit_per_type),
            self.search_albums(query, limit_per_type)
        )
    }

    /// The full combined search: tracks, albums, and Last.fm's track
    /// matches, merged and deduplicated
    pub async fn search_merged(&self, query: &str, limit: usize) -> Vec<SearchHit> {
        let ((tracks, albums), lastfm) = tokio::join!(
            self.search_music(query, limit),
            self.lastfm_tracks(query, limit)
        );
        merge_results(vec![tracks, albums, lastfm])
    }

    async fn first_non_empty(&self, query: &str, limit: usize, kind: SearchKind) -> Vec<SearchHit> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        for source in &self.sources {
            if !source.available() {
                tracing::debug!("Skipping {} (not configured)", source.name());
                continue;
            }

            self.gate.wait().await;
            let result = match kind {
                SearchKind::Track => source.search_tracks(query, limit).await,
                SearchKind::Album => source.search_albums(query, limit).await,
            };

            match result {
                Ok(hits) if !hits.is_empty() => {
                    tracing::debug!("{} {} hits from {}", hits.len(), kind.tag(), source.name());
                    return hits;
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!("Search via {} failed for {:?}: {}", source.name(), query, e);
                }
            }
        }
        Vec::new()
    }

    /// Last.fm's track search, degraded to empty when keyless or failing
    async fn lastfm_tracks(&self, query: &str, limit: usize) -> Vec<SearchHit> {
        let Some(source) = &self.lastfm else {
            return Vec::new();
        };
        if query.trim().is_empty() || !source.available() {
            return Vec::new();
        }

        self.gate.wait().await;
        match source.search_tracks(query, limit).await {
            Ok(hits) => hits,
            Err(e) => {
                tracing::warn!("Last.fm search failed for {:?}: {}", query, e);
                Vec::new()
            }
        }
    }
}

/// Merge hit lists into one, deduplicated by the lowercase
/// (artist, title, kind) triple. The first occurrence wins, so earlier
/// lists take priority over later ones.
pub fn merge_results(lists: Vec<Vec<SearchHit>>) -> Vec<SearchHit> {
    let mut seen = HashSet::new();
    let mut merged = Vec::new();
    for hit in lists.into_iter().flatten() {
        if seen.insert(hit.dedup_key()) {
            merged.push(hit);
        }
    }
    merged
}
