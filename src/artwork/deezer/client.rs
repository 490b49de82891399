//! Deezer HTTP client
//!
//! Keyless public search endpoints; one per entity type.

use super::dto;
use crate::artwork::domain::ProviderError;

/// Deezer API client
pub struct DeezerClient {
    http_client: reqwest::Client,
    base_url: String,
}

const API_ROOT: &str = "https://api.deezer.com";

impl DeezerClient {
    /// Create a new client
    pub fn new() -> Self {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: API_ROOT.to_string(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// `/search` - track candidates
    pub async fn search_tracks(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<dto::TrackSearchResponse, ProviderError> {
        let url = self.search_url("/search", query, limit);
        self.get_json(&url).await
    }

    /// `/search/album` - album candidates
    pub async fn search_albums(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<dto::AlbumSearchResponse, ProviderError> {
        let url = self.search_url("/search/album", query, limit);
        self.get_json(&url).await
    }

    /// `/search/artist` - artist candidates
    pub async fn search_artists(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<dto::ArtistSearchResponse, ProviderError> {
        let url = self.search_url("/search/artist", query, limit);
        self.get_json(&url).await
    }

    fn search_url(&self, path: &str, query: &str, limit: usize) -> String {
        format!(
            "{}{}?q={}&limit={}",
            self.base_url,
            path,
            urlencoding::encode(query),
            limit
        )
    }

    /// Send the HTTP request and parse the response
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ProviderError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
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

impl Default for DeezerClient {
    fn default() -> Self {
        Self::new()
    }
}
