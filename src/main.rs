//! Cover Scout - artwork and catalog lookups for music libraries.
//!
//! Resolves artist images and album/track covers from public music APIs
//! (Last.fm, iTunes, Deezer, MusicBrainz + Cover Art Archive) and searches
//! their catalogs, with a persistent local cache and polite rate pacing.

pub mod artwork;
pub mod cli;
pub mod config;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("cover_scout=info".parse().unwrap()))
        .init();

    cli::run_command(&args)
}
