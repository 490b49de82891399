//! MusicBrainz search client
//!
//! Finds MBIDs for albums (release-group search) and tracks (recording
//! search) so the Cover Art Archive can be asked for art by ID.
//! See: https://musicbrainz.org/doc/MusicBrainz_API/Search
//!
//! IMPORTANT: MusicBrainz requires a User-Agent header and rate limits to
//! roughly 1 req/sec. Callers pace requests through the archive gate.

mod client;
pub mod dto;

pub use client::MusicBrainzClient;
