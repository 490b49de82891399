//! MusicBrainz HTTP client
//!
//! Handles communication with the MusicBrainz web service search endpoints.

use serde::de::DeserializeOwned;

use super::dto;
use crate::artwork::domain::ProviderError;

/// MusicBrainz search client
pub struct MusicBrainzClient {
    http_client: reqwest::Client,
    base_url: String,
}

/// User agent string - MusicBrainz requires this
const USER_AGENT: &str = concat!(
    "CoverScout/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/cover-scout)"
);

/// Results to request per search; the first usable one wins anyway
const SEARCH_LIMIT: usize = 5;

impl MusicBrainzClient {
    /// Create a new client
    pub fn new() -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: "https://musicbrainz.org/ws/2".to_string(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Search release groups matching an (artist, album) pair.
    /// Results come back best score first.
    pub async fn search_release_groups(
        &self,
        artist: &str,
        album: &str,
    ) -> Result<Vec<dto::ReleaseGroup>, ProviderError> {
        let query = format!(
            "releasegroup:{} AND artist:{}",
            lucene_quote(album),
            lucene_quote(artist)
        );
        let url = self.search_url("release-group", &query);
        let response: dto::ReleaseGroupSearchResponse = self.get_json(&url).await?;
        Ok(response.release_groups)
    }

    /// Search recordings matching an (artist, title) pair.
    pub async fn search_recordings(
        &self,
        artist: &str,
        title: &str,
    ) -> Result<Vec<dto::Recording>, ProviderError> {
        let query = format!(
            "recording:{} AND artist:{}",
            lucene_quote(title),
            lucene_quote(artist)
        );
        let url = self.search_url("recording", &query);
        let response: dto::RecordingSearchResponse = self.get_json(&url).await?;
        Ok(response.recordings)
    }

    fn search_url(&self, entity: &str, query: &str) -> String {
        format!(
            "{}/{}?query={}&fmt=json&limit={}",
            self.base_url,
            entity,
            urlencoding::encode(query),
            SEARCH_LIMIT
        )
    }

    /// Send the HTTP request and parse the response
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ProviderError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            // Try to parse error response
            if let Ok(error) = response.json::<dto::ApiError>().await {
                return Err(ProviderError::Api(error.error));
            }
            return Err(ProviderError::Http {
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))
    }
}

impl Default for MusicBrainzClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Quote a value for a Lucene field query, stripping embedded quotes
/// so user input cannot break out of the phrase.
fn lucene_quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', ""))
}
