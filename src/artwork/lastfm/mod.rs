//! Last.fm API integration
//!
//! Artist images and track-album artwork from the audioscrobbler 2.0 API,
//! plus track search for the combined music search. All methods require an
//! API key; without one the provider reports itself unavailable.
//!
//! API docs: https://www.last.fm/api

mod adapter;
mod client;
pub mod dto;

pub use adapter::LastFmArt;
pub use client::LastFmClient;
