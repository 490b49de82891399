//! Cover Art Archive client
//!
//! Resolves front-cover URLs for MusicBrainz releases and release groups.
//! No API key required, but please respect their rate limits.
//!
//! API: https://coverartarchive.org

mod client;
pub mod dto;

pub use client::{ArtEntity, CoverArtClient};
