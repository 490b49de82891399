//! Cover Art Archive HTTP client
//!
//! Lists the cover art for an MBID and picks a front-cover URL.

use super::dto;
use crate::artwork::domain::ProviderError;

/// Entity kinds the archive stores art for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtEntity {
    /// One specific pressing/edition
    Release,
    /// The abstract album across all editions
    ReleaseGroup,
}

impl ArtEntity {
    pub fn path(&self) -> &'static str {
        match self {
            ArtEntity::Release => "release",
            ArtEntity::ReleaseGroup => "release-group",
        }
    }
}

/// Cover Art Archive client
pub struct CoverArtClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl CoverArtClient {
    /// Create a new client
    pub fn new() -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: "https://coverartarchive.org".to_string(),
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

    /// Get a front-cover URL for an entity, or None when the archive has
    /// no art for it. Prefers the 500px thumbnail over the full image.
    pub async fn front_cover(
        &self,
        entity: ArtEntity,
        mbid: &str,
    ) -> Result<Option<String>, ProviderError> {
        let url = self.art_url(entity, mbid);

        let response = self
            .http_client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();

        // The archive answers 404 for entities it has no art for
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            return Err(ProviderError::Http {
                status: status.as_u16(),
            });
        }

        let listing = response
            .json::<dto::CoverArtResponse>()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        Ok(pick_front(&listing.images))
    }

    fn art_url(&self, entity: ArtEntity, mbid: &str) -> String {
        format!("{}/{}/{}", self.base_url, entity.path(), mbid)
    }
}

impl Default for CoverArtClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Choose a URL from a cover art listing: the front image if one is
/// flagged, otherwise the first image; 500px thumbnail over full size.
fn pick_front(images: &[dto::Image]) -> Option<String> {
    let image = images
        .iter()
        .find(|image| image.front)
        .or_else(|| images.first())?;

    [image.thumbnails.large.as_deref(), Some(image.image.as_str())]
        .into_iter()
        .flatten()
        .find(|url| !url.is_empty())
        .map(str::to_string)
}
