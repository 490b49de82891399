//! iTunes Search API integration
//!
//! Keyless album and track lookups via the public search endpoint. Artist
//! images are not served - iTunes has no reliable artist-image endpoint.
//!
//! API docs: https://developer.apple.com/library/archive/documentation/AudioVideo/Conceptual/iTuneSearchAPI/

mod adapter;
mod client;
pub mod dto;

pub use adapter::ItunesArt;
pub use client::ItunesClient;
