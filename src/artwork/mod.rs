//! Artwork resolution and music search - finds cover/artist images and catalog matches from external services.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types that represent our business logic
//! - **API DTOs** (`lastfm/dto.rs`, `itunes/dto.rs`, `deezer/dto.rs`, ...) - Exact API response shapes
//! - **Adapters** - Convert DTOs to domain models behind the provider traits
//! - **Clients** - HTTP clients for external APIs
//! - **Resolver / Search** - High-level orchestration: cache, rate gate, provider chains
//! - **Archive** - The separate MusicBrainz + Cover Art Archive path
//!
//! This decoupling means:
//! 1. API changes don't ripple through our codebase
//! 2. We can test API contracts independently
//! 3. We can swap providers without changing business logic
//!
//! # Usage
//!
//! ```ignore
//! use artwork::{ArtworkResolver, JsonFileCache};
//!
//! let cache = JsonFileCache::open(JsonFileCache::artwork_store(None));
//! let resolver = ArtworkResolver::standard(Box::new(cache), Some("api-key".to_string()));
//!
//! // Resolve an album cover (empty string when nothing is found)
//! let url = resolver.album_image("Daft Punk", "Discovery").await;
//! println!("Cover: {url}");
//! ```

pub mod domain;
pub mod cache;
pub mod concurrency;
pub mod ratelimit;
pub mod traits;
pub mod lastfm;
pub mod itunes;
pub mod deezer;
pub mod musicbrainz;
pub mod coverart;
pub mod archive;
pub mod resolver;
pub mod search;

pub use archive::ArchiveResolver;
pub use cache::{JsonFileCache, MemoryCache, UrlCache};
pub use domain::{ArtKind, ArtQuery, ProviderError, SearchHit, SearchKind, SearchSource};
pub use ratelimit::RateGate;
pub use resolver::{ArtworkResolver, ProviderChains};
pub use search::{MusicSearch, merge_results};
pub use traits::{ArtSource, CatalogSearch};
