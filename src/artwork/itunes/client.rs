//! iTunes Search HTTP client
//!
//! Keyless public endpoint. Entity filters pick the result type:
//! `album` for albums, `musicTrack` for tracks.

use super::dto;
use crate::artwork::domain::ProviderError;

/// iTunes Search API client
pub struct ItunesClient {
    http_client: reqwest::Client,
    base_url: String,
}

const API_ROOT: &str = "https://itunes.apple.com/search";

impl ItunesClient {
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

    /// Search albums (`entity=album`)
    pub async fn search_albums(
        &self,
        term: &str,
        limit: usize,
    ) -> Result<dto::SearchResponse, ProviderError> {
        self.search(term, "album", limit).await
    }

    /// Search tracks (`entity=musicTrack`)
    pub async fn search_tracks(
        &self,
        term: &str,
        limit: usize,
    ) -> Result<dto::SearchResponse, ProviderError> {
        self.search(term, "musicTrack", limit).await
    }

    async fn search(
        &self,
        term: &str,
        entity: &str,
        limit: usize,
    ) -> Result<dto::SearchResponse, ProviderError> {
        let url = format!(
            "{}?term={}&entity={}&limit={}",
            self.base_url,
            urlencoding::encode(term),
            entity,
            limit
        );

        let response = self
            .http_client
            .get(&url)
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
            .json::<dto::SearchResponse>()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))
    }
}

impl Default for ItunesClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ItunesClient::new();
        assert_eq!(client.base_url, "https://itunes.apple.com/search");
    }

    #[test]
    fn test_client_with_custom_url() {
        let client = ItunesClient::with_base_url("http://localhost:8080");
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
