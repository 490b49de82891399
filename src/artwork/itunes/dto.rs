//! iTunes Search API Data Transfer Objects
//!
//! One result shape covers both entity types; album results leave the
//! track fields null and vice versa, hence everything is optional.

use serde::Deserialize;

/// Top-level `/search` response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub result_count: u32,
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

/// One search result (album or track depending on the entity filter)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub track_name: Option<String>,
    pub artist_name: Option<String>,
    pub collection_name: Option<String>,
    /// 100x100 thumbnail; larger sizes come from rewriting this URL
    pub artwork_url_100: Option<String>,
    /// ISO-8601 release timestamp
    pub release_date: Option<String>,
}
