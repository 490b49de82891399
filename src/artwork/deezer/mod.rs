//! Deezer API integration
//!
//! Keyless artist, album and track lookups via the public search
//! endpoints. Track artwork comes from the track's album cover.
//!
//! API docs: https://developers.deezer.com/api

mod adapter;
mod client;
pub mod dto;

pub use adapter::DeezerArt;
pub use client::DeezerClient;
