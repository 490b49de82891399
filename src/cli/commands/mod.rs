//! CLI command definitions and dispatch.
//!
//! This module provides the command-line interface for Cover Scout.
//! Each subcommand is implemented in its own submodule for maintainability:
//! - `art`: Artwork resolution (artist, album, track, batch hydration)
//! - `search`: Combined catalog search
//! - `cache`: Cache store maintenance
//! - `config`: API key and config management

mod art;
mod cache;
mod config;
mod search;

use clap::{Parser, Subcommand};
use tokio::runtime::Runtime;

pub use art::{cmd_album, cmd_artist, cmd_hydrate, cmd_track};
pub use cache::{cmd_cache_clear, cmd_cache_stats};
pub use config::{cmd_set_key, cmd_show_config};
pub use search::cmd_search;

/// Cover Scout CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve an artist image URL
    Artist {
        /// Artist name
        name: String,
        /// Last.fm API key (or set LASTFM_API_KEY env var)
        #[arg(short, long, env = "LASTFM_API_KEY")]
        api_key: Option<String>,
    },
    /// Resolve an album cover URL
    Album {
        /// Artist name
        artist: String,
        /// Album title
        album: String,
        /// Use the MusicBrainz + Cover Art Archive resolver instead
        #[arg(long)]
        archive: bool,
        /// Last.fm API key (or set LASTFM_API_KEY env var)
        #[arg(short, long, env = "LASTFM_API_KEY")]
        api_key: Option<String>,
    },
    /// Resolve artwork for a track
    Track {
        /// Artist name
        artist: String,
        /// Track title
        title: String,
        /// Use the MusicBrainz + Cover Art Archive resolver instead
        #[arg(long)]
        archive: bool,
        /// Last.fm API key (or set LASTFM_API_KEY env var)
        #[arg(short, long, env = "LASTFM_API_KEY")]
        api_key: Option<String>,
    },
    /// Search provider catalogs for tracks and albums
    Search {
        /// Free-text query
        query: String,
        /// Maximum results per result type
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
        /// Last.fm API key (or set LASTFM_API_KEY env var)
        #[arg(short, long, env = "LASTFM_API_KEY")]
        api_key: Option<String>,
    },
    /// Resolve artist images for several artists at once
    Hydrate {
        /// Artist names
        names: Vec<String>,
        /// Last.fm API key (or set LASTFM_API_KEY env var)
        #[arg(short, long, env = "LASTFM_API_KEY")]
        api_key: Option<String>,
    },
    /// Inspect or clear the cache stores
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Cache maintenance actions
#[derive(Subcommand)]
pub enum CacheAction {
    /// Show entry counts for both cache stores
    Stats,
    /// Delete every cached lookup result
    Clear,
}

/// Configuration actions
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Store the Last.fm API key in the config file
    SetKey {
        /// The API key to store
        key: String,
    },
    /// Print the current configuration
    Show,
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let rt = Runtime::new()?;

    match &cli.command {
        Commands::Artist { name, api_key } => cmd_artist(&rt, name, api_key.as_deref()),
        Commands::Album {
            artist,
            album,
            archive,
            api_key,
        } => cmd_album(&rt, artist, album, *archive, api_key.as_deref()),
        Commands::Track {
            artist,
            title,
            archive,
            api_key,
        } => cmd_track(&rt, artist, title, *archive, api_key.as_deref()),
        Commands::Search {
            query,
            limit,
            api_key,
        } => cmd_search(&rt, query, *limit, api_key.as_deref()),
        Commands::Hydrate { names, api_key } => cmd_hydrate(&rt, names, api_key.as_deref()),
        Commands::Cache { action } => match action {
            CacheAction::Stats => cmd_cache_stats(),
            CacheAction::Clear => cmd_cache_clear(),
        },
        Commands::Config { action } => match action {
            ConfigAction::SetKey { key } => cmd_set_key(key),
            ConfigAction::Show => cmd_show_config(),
        },
    }
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Last.fm key to use: the CLI flag/env value when non-blank, otherwise
/// the configured one
pub(crate) fn effective_api_key(
    cli_key: Option<&str>,
    config: &crate::config::Config,
) -> Option<String> {
    cli_key
        .filter(|key| !key.trim().is_empty())
        .map(str::to_string)
        .or_else(|| {
            config
                .credentials
                .lastfm_api_key
                .clone()
                .filter(|key| !key.trim().is_empty())
        })
}

/// Open the multi-provider cache store configured in `config`
pub(crate) fn open_artwork_cache(config: &crate::config::Config) -> crate::artwork::JsonFileCache {
    crate::artwork::JsonFileCache::open(crate::artwork::JsonFileCache::artwork_store(
        config.cache.dir.as_deref(),
    ))
}

/// Open the MusicBrainz cache store configured in `config`
pub(crate) fn open_archive_cache(config: &crate::config::Config) -> crate::artwork::JsonFileCache {
    crate::artwork::JsonFileCache::open(crate::artwork::JsonFileCache::musicbrainz_store(
        config.cache.dir.as_deref(),
    ))
}

/// Print a resolved URL, or a miss marker when empty
pub(crate) fn print_outcome(label: &str, url: &str) {
    if url.is_empty() {
        println!("✗ No artwork found for {}", label);
    } else {
        println!("✓ {}", url);
    }
}
