//! Last.fm HTTP client
//!
//! Thin wrapper over the audioscrobbler 2.0 REST API. Every method needs
//! an API key; a key-less client returns `ProviderError::Unconfigured`
//! from each call instead of touching the network.

use super::dto;
use crate::artwork::domain::ProviderError;

/// Last.fm API client
pub struct LastFmClient {
    api_key: Option<String>,
    http_client: reqwest::Client,
    base_url: String,
}

const API_ROOT: &str = "https://ws.audioscrobbler.com/2.0/";

impl LastFmClient {
    /// Create a new client; `api_key = None` yields a client whose calls
    /// all report `Unconfigured`
    pub fn new(api_key: Option<String>) -> Self {
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
            api_key,
            http_client,
            base_url: API_ROOT.to_string(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Whether an API key is configured
    pub fn has_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// `artist.getinfo` - artist details including the image array
    pub async fn artist_info(&self, artist: &str) -> Result<dto::ArtistInfoResponse, ProviderError> {
        let url = format!(
            "{}?method=artist.getinfo&artist={}&api_key={}&format=json",
            self.base_url,
            urlencoding::encode(artist),
            self.key()?
        );
        self.get_json(&url).await
    }

    /// `track.getInfo` - track details including the album image array
    pub async fn track_info(
        &self,
        artist: &str,
        track: &str,
    ) -> Result<dto::TrackInfoResponse, ProviderError> {
        let url = format!(
            "{}?method=track.getInfo&artist={}&track={}&api_key={}&format=json",
            self.base_url,
            urlencoding::encode(artist),
            urlencoding::encode(track),
            self.key()?
        );
        self.get_json(&url).await
    }

    /// `track.search` - free-text track candidates
    pub async fn search_tracks(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<dto::TrackSearchResponse, ProviderError> {
        let url = format!(
            "{}?method=track.search&track={}&limit={}&api_key={}&format=json",
            self.base_url,
            urlencoding::encode(query),
            limit,
            self.key()?
        );
        self.get_json(&url).await
    }

    fn key(&self) -> Result<&str, ProviderError> {
        self.api_key.as_deref().ok_or(ProviderError::Unconfigured)
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
            // Rejected calls usually carry a structured error body
            if let Ok(error) = response.json::<dto::ApiError>().await {
                return Err(ProviderError::Api(error.message));
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
