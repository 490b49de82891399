//! Multi-provider artwork resolver.
//!
//! Walks an explicit, ordered provider chain per entity kind; the first
//! non-empty URL wins. Every outcome, including a confirmed miss, is
//! written back to the cache so repeat lookups never touch the network.

use std::sync::Arc;

use crate::artwork::cache::UrlCache;
use crate::artwork::concurrency::{HYDRATE_WORKERS, map_concurrent};
use crate::artwork::deezer::{DeezerArt, DeezerClient};
use crate::artwork::domain::{ArtKind, ArtQuery, ProviderError, ProviderHit};
use crate::artwork::itunes::{ItunesArt, ItunesClient};
use crate::artwork::lastfm::{LastFmArt, LastFmClient};
use crate::artwork::ratelimit::{RESOLVER_MIN_DELAY, RateGate};
use crate::artwork::traits::ArtSource;

/// Ordered provider chains, one per entity kind.
///
/// Order is the fallback priority. Providers appear in several chains
/// behind shared `Arc`s, so a keyed provider constructed once serves
/// every chain that lists it.
pub struct ProviderChains {
    pub artist: Vec<Arc<dyn ArtSource>>,
    pub album: Vec<Arc<dyn ArtSource>>,
    pub track: Vec<Arc<dyn ArtSource>>,
}

/// Cache-first artwork resolver over the provider chains.
///
/// The public methods never fail: blank input, provider errors, and
/// all-provider misses all come back as the empty string.
pub struct ArtworkResolver {
    cache: Box<dyn UrlCache>,
    gate: Arc<RateGate>,
    chains: ProviderChains,
}

impl ArtworkResolver {
    pub fn new(cache: Box<dyn UrlCache>, gate: Arc<RateGate>, chains: ProviderChains) -> Self {
        Self {
            cache,
            gate,
            chains,
        }
    }

    /// Production wiring: Last.fm then Deezer for artists, iTunes then
    /// Deezer for albums, Last.fm then iTunes then Deezer for tracks,
    /// all pacing through one shared gate.
    pub fn standard(cache: Box<dyn UrlCache>, lastfm_api_key: Option<String>) -> Self {
        let lastfm: Arc<dyn ArtSource> = Arc::new(LastFmArt::new(LastFmClient::new(lastfm_api_key)));
        let itunes: Arc<dyn ArtSource> = Arc::new(ItunesArt::new(ItunesClient::new()));
        let deezer: Arc<dyn ArtSource> = Arc::new(DeezerArt::new(DeezerClient::new()));

        let chains = ProviderChains {
            artist: vec![lastfm.clone(), deezer.clone()],
            album: vec![itunes.clone(), deezer.clone()],
            track: vec![lastfm, itunes, deezer],
        };

        Self::new(cache, Arc::new(RateGate::new(RESOLVER_MIN_DELAY)), chains)
    }

    /// Artist image URL, or empty string
    pub async fn artist_image(&self, name: &str) -> String {
        self.resolve(ArtQuery::Artist {
            name: name.to_string(),
        })
        .await
    }

    /// Album cover URL, or empty string
    pub async fn album_image(&self, artist: &str, album: &str) -> String {
        self.resolve(ArtQuery::Album {
            artist: artist.to_string(),
            album: album.to_string(),
        })
        .await
    }

    /// Track artwork URL (usually the containing album's cover), or
    /// empty string
    pub async fn track_image(&self, artist: &str, title: &str) -> String {
        self.resolve(ArtQuery::Track {
            artist: artist.to_string(),
            title: title.to_string(),
        })
        .await
    }

    /// Resolve artwork for a batch of artists with at most
    /// [`HYDRATE_WORKERS`] lookups in flight. Results line up with the
    /// input order.
    pub async fn artist_images(&self, names: &[String]) -> Vec<String> {
        map_concurrent(names, HYDRATE_WORKERS, |name| self.artist_image(name)).await
    }

    async fn resolve(&self, query: ArtQuery) -> String {
        if query.is_blank() {
            return String::new();
        }

        let key = query.cache_key();
        if let Some(url) = self.cache.get(&key) {
            tracing::debug!("Artwork cache hit for {}", key);
            return url;
        }

        let url = match self.try_chain(&query).await {
            Some(hit) => {
                tracing::debug!("Resolved {} via {}", key, hit.source);
                hit.url
            }
            None => String::new(),
        };

        self.cache.set(&key, &url);
        url
    }

    /// Walk the chain for the query's kind; first non-empty URL wins.
    /// Unavailable providers are skipped without burning gate time, and
    /// a provider failure only logs - the chain moves on.
    async fn try_chain(&self, query: &ArtQuery) -> Option<ProviderHit> {
        for source in self.chain_for(query.kind()) {
            if !source.available() {
                tracing::debug!("Skipping {} (not configured)", source.name());
                continue;
            }

            self.gate.wait().await;
            match source.lookup(query).await {
                Ok(Some(url)) if !url.is_empty() => {
                    return Some(ProviderHit {
                        url,
                        source: source.name(),
                    });
                }
                Ok(_) => {}
                Err(ProviderError::Unconfigured) => {
                    tracing::debug!("Provider {} not configured", source.name());
                }
                Err(e) => {
                    tracing::warn!(
                        "Provider {} failed for {}: {}",
                        source.name(),
                        query.cache_key(),
                        e
                    );
                }
            }
        }
        None
    }

    fn chain_for(&self, kind: ArtKind) -> &[Arc<dyn ArtSource>] {
        match kind {
            ArtKind::Artist => &self.chains.artist,
            ArtKind::Album => &self.chains.album,
            ArtKind::Track => &self.chains.track,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artwork::cache::MemoryCache;
    use crate::artwork::traits::mocks::MockArt;
    use std::time::Duration;

    fn resolver_with(chains: ProviderChains) -> ArtworkResolver {
        ArtworkResolver::new(
            Box::new(MemoryCache::new()),
            Arc::new(RateGate::new(Duration::ZERO)),
            chains,
        )
    }

    fn chains_for_all(sources: Vec<Arc<dyn ArtSource>>) -> ProviderChains {
        ProviderChains {
            artist: sources.clone(),
            album: sources.clone(),
            track: sources,
        }
    }

    #[tokio::test]
    async fn test_first_provider_wins() {
        let one = Arc::new(MockArt::hit("one", "https://img.example/one.jpg"));
        let two = Arc::new(MockArt::hit("two", "https://img.example/two.jpg"));
        let sources: Vec<Arc<dyn ArtSource>> = vec![one.clone(), two.clone()];
        let resolver = resolver_with(chains_for_all(sources));

        let url = resolver.artist_image("Radiohead").await;
        assert_eq!(url, "https://img.example/one.jpg");
        assert_eq!(one.call_count(), 1);
        assert_eq!(two.call_count(), 0);
    }

    #[tokio::test]
    async fn test_chain_falls_through_miss_and_error() {
        let miss = Arc::new(MockArt::miss("miss"));
        let broken = Arc::new(MockArt::failing(
            "broken",
            ProviderError::Network("timeout".to_string()),
        ));
        let hit = Arc::new(MockArt::hit("hit", "https://img.example/found.jpg"));
        let sources: Vec<Arc<dyn ArtSource>> = vec![miss.clone(), broken.clone(), hit.clone()];
        let resolver = resolver_with(chains_for_all(sources));

        let url = resolver.album_image("Daft Punk", "Discovery").await;
        assert_eq!(url, "https://img.example/found.jpg");
        assert_eq!(miss.call_count(), 1);
        assert_eq!(broken.call_count(), 1);
        assert_eq!(hit.call_count(), 1);
    }

    #[tokio::test]
    async fn test_all_miss_caches_empty_result() {
        let one = Arc::new(MockArt::miss("one"));
        let two = Arc::new(MockArt::miss("two"));
        let sources: Vec<Arc<dyn ArtSource>> = vec![one.clone(), two.clone()];
        let resolver = resolver_with(chains_for_all(sources));

        assert_eq!(resolver.track_image("Nobody", "Nothing").await, "");

        // The miss is terminal: the second lookup is served from cache
        assert_eq!(resolver.track_image("Nobody", "Nothing").await, "");
        assert_eq!(one.call_count(), 1);
        assert_eq!(two.call_count(), 1);
    }

    #[tokio::test]
    async fn test_cache_hit_skips_providers() {
        let hit = Arc::new(MockArt::hit("hit", "https://img.example/r.jpg"));
        let sources: Vec<Arc<dyn ArtSource>> = vec![hit.clone()];
        let resolver = resolver_with(chains_for_all(sources));

        assert_eq!(resolver.artist_image("Radiohead").await, "https://img.example/r.jpg");
        // Same logical query, different casing
        assert_eq!(resolver.artist_image("RADIOHEAD").await, "https://img.example/r.jpg");
        assert_eq!(hit.call_count(), 1);
    }

    #[tokio::test]
    async fn test_blank_input_short_circuits() {
        let hit = Arc::new(MockArt::hit("hit", "https://img.example/x.jpg"));
        let sources: Vec<Arc<dyn ArtSource>> = vec![hit.clone()];
        let resolver = resolver_with(chains_for_all(sources));

        assert_eq!(resolver.artist_image("   ").await, "");
        assert_eq!(resolver.album_image("", "Discovery").await, "");
        assert_eq!(resolver.track_image("Daft Punk", "").await, "");
        assert_eq!(hit.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unavailable_provider_is_skipped() {
        let keyless = Arc::new(MockArt::unavailable("keyless"));
        let hit = Arc::new(MockArt::hit("hit", "https://img.example/d.jpg"));
        let sources: Vec<Arc<dyn ArtSource>> = vec![keyless.clone(), hit.clone()];
        let resolver = resolver_with(chains_for_all(sources));

        let url = resolver.artist_image("Radiohead").await;
        assert_eq!(url, "https://img.example/d.jpg");
        assert_eq!(keyless.call_count(), 0);
        assert_eq!(hit.call_count(), 1);
    }

    #[tokio::test]
    async fn test_unconfigured_error_moves_to_next_provider() {
        let unconfigured = Arc::new(MockArt::failing("keyed", ProviderError::Unconfigured));
        let hit = Arc::new(MockArt::hit("hit", "https://img.example/d.jpg"));
        let sources: Vec<Arc<dyn ArtSource>> = vec![unconfigured.clone(), hit.clone()];
        let resolver = resolver_with(chains_for_all(sources));

        assert_eq!(resolver.artist_image("Radiohead").await, "https://img.example/d.jpg");
    }

    #[tokio::test]
    async fn test_artist_images_line_up_with_input() {
        let hit = Arc::new(MockArt::hit("hit", "https://img.example/a.jpg"));
        let sources: Vec<Arc<dyn ArtSource>> = vec![hit.clone()];
        let resolver = resolver_with(chains_for_all(sources));

        let names = vec![
            "Radiohead".to_string(),
            "   ".to_string(),
            "Daft Punk".to_string(),
        ];
        let urls = resolver.artist_images(&names).await;

        assert_eq!(
            urls,
            vec![
                "https://img.example/a.jpg".to_string(),
                String::new(),
                "https://img.example/a.jpg".to_string(),
            ]
        );
        // The blank entry never reached a provider
        assert_eq!(hit.call_count(), 2);
    }
}
