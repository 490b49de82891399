//! Cache store maintenance commands.

use crate::artwork::UrlCache;
use crate::config;

use super::{open_archive_cache, open_artwork_cache};

/// Show entry counts for both cache stores
pub fn cmd_cache_stats() -> anyhow::Result<()> {
    let config = config::load();
    let artwork = open_artwork_cache(&config);
    let archive = open_archive_cache(&config);

    println!("Cache stores:");
    println!("  artwork:     {} entries", artwork.len());
    println!("  musicbrainz: {} entries", archive.len());
    Ok(())
}

/// Delete every cached lookup result
pub fn cmd_cache_clear() -> anyhow::Result<()> {
    let config = config::load();
    let artwork = open_artwork_cache(&config);
    let archive = open_archive_cache(&config);

    let removed = artwork.len() + archive.len();
    artwork.clear();
    archive.clear();

    println!("✓ Cleared {} cached entries", removed);
    Ok(())
}
