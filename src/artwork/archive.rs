//! MusicBrainz + Cover Art Archive resolver.
//!
//! The archival alternative to the multi-provider chains: search
//! MusicBrainz for an MBID, then ask the Cover Art Archive for that
//! entity's front cover. Keyless and canonical, but slower - both hosts
//! share the stricter 1200 ms gate.

use crate::artwork::cache::UrlCache;
use crate::artwork::coverart::{ArtEntity, CoverArtClient};
use crate::artwork::domain::{ArtQuery, ProviderError};
use crate::artwork::musicbrainz::{MusicBrainzClient, dto};
use crate::artwork::ratelimit::{MUSICBRAINZ_MIN_DELAY, RateGate};

/// Resolves album and track covers through MusicBrainz and the Cover Art
/// Archive, with its own cache store (`musicbrainz.json`).
///
/// Same contract as the multi-provider resolver: never fails, empty
/// string on blank input or when nothing has art, every outcome cached.
pub struct ArchiveResolver {
    cache: Box<dyn UrlCache>,
    gate: RateGate,
    musicbrainz: MusicBrainzClient,
    coverart: CoverArtClient,
}

impl ArchiveResolver {
    pub fn new(cache: Box<dyn UrlCache>) -> Self {
        Self {
            cache,
            gate: RateGate::new(MUSICBRAINZ_MIN_DELAY),
            musicbrainz: MusicBrainzClient::new(),
            coverart: CoverArtClient::new(),
        }
    }

    /// Front cover URL for an album, or empty string
    pub async fn album_cover(&self, artist: &str, album: &str) -> String {
        self.resolve(ArtQuery::Album {
            artist: artist.to_string(),
            album: album.to_string(),
        })
        .await
    }

    /// Front cover URL for the release a track appears on, or empty string
    pub async fn track_cover(&self, artist: &str, title: &str) -> String {
        self.resolve(ArtQuery::Track {
            artist: artist.to_string(),
            title: title.to_string(),
        })
        .await
    }

    async fn resolve(&self, query: ArtQuery) -> String {
        if query.is_blank() {
            return String::new();
        }

        let key = query.cache_key();
        if let Some(url) = self.cache.get(&key) {
            tracing::debug!("Archive cache hit for {}", key);
            return url;
        }

        let outcome = match &query {
            ArtQuery::Album { artist, album } => self.lookup_album(artist, album).await,
            ArtQuery::Track { artist, title } => self.lookup_track(artist, title).await,
            // The archive stores release art only
            ArtQuery::Artist { .. } => Ok(String::new()),
        };

        let url = match outcome {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Archive lookup failed for {}: {}", key, e);
                String::new()
            }
        };

        self.cache.set(&key, &url);
        url
    }

    async fn lookup_album(&self, artist: &str, album: &str) -> Result<String, ProviderError> {
        self.gate.wait().await;
        let groups = self.musicbrainz.search_release_groups(artist, album).await?;
        Ok(self.try_candidates(album_candidates(&groups)).await)
    }

    async fn lookup_track(&self, artist: &str, title: &str) -> Result<String, ProviderError> {
        self.gate.wait().await;
        let recordings = self.musicbrainz.search_recordings(artist, title).await?;
        Ok(self.try_candidates(track_candidates(&recordings)).await)
    }

    /// Ask the archive for each candidate MBID in order; first art wins.
    /// Individual archive failures are logged and skipped.
    async fn try_candidates(&self, candidates: Vec<(ArtEntity, String)>) -> String {
        for (entity, mbid) in candidates {
            self.gate.wait().await;
            match self.coverart.front_cover(entity, &mbid).await {
                Ok(Some(url)) if !url.is_empty() => return url,
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(
                        "Cover Art Archive error for {} {}: {}",
                        entity.path(),
                        mbid,
                        e
                    );
                }
            }
        }
        String::new()
    }
}

/// Candidate (entity, MBID) pairs for an album search, in preference
/// order: the top group's release-group art, then its first release.
fn album_candidates(groups: &[dto::ReleaseGroup]) -> Vec<(ArtEntity, String)> {
    let Some(group) = groups.first() else {
        return Vec::new();
    };

    let mut candidates = vec![(ArtEntity::ReleaseGroup, group.id.clone())];
    if let Some(release) = group.releases.first() {
        candidates.push((ArtEntity::Release, release.id.clone()));
    }
    candidates
}

/// Candidate pairs for a track search: the top recording's first release,
/// preferring its release-group art over the release's own.
fn track_candidates(recordings: &[dto::Recording]) -> Vec<(ArtEntity, String)> {
    let Some(recording) = recordings.first() else {
        return Vec::new();
    };
    let Some(release) = recording.releases.first() else {
        return Vec::new();
    };

    let mut candidates = Vec::new();
    if let Some(group) = &release.release_group {
        candidates.push((ArtEntity::ReleaseGroup, group.id.clone()));
    }
    candidates.push((ArtEntity::Release, release.id.clone()));
    candidates
}
