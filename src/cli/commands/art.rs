//! Artwork resolution commands.

use tokio::runtime::Runtime;

use crate::artwork::{ArchiveResolver, ArtworkResolver};
use crate::config;

use super::{effective_api_key, open_archive_cache, open_artwork_cache, print_outcome};

/// Resolve an artist image URL
pub fn cmd_artist(rt: &Runtime, name: &str, api_key: Option<&str>) -> anyhow::Result<()> {
    let config = config::load();
    let api_key = effective_api_key(api_key, &config);
    let resolver = ArtworkResolver::standard(Box::new(open_artwork_cache(&config)), api_key);

    let url = rt.block_on(resolver.artist_image(name));
    print_outcome(name, &url);
    Ok(())
}

/// Resolve an album cover URL
pub fn cmd_album(
    rt: &Runtime,
    artist: &str,
    album: &str,
    archive: bool,
    api_key: Option<&str>,
) -> anyhow::Result<()> {
    let config = config::load();
    let label = format!("{} - {}", artist, album);

    let url = if archive {
        let resolver = ArchiveResolver::new(Box::new(open_archive_cache(&config)));
        rt.block_on(resolver.album_cover(artist, album))
    } else {
        let api_key = effective_api_key(api_key, &config);
        let resolver = ArtworkResolver::standard(Box::new(open_artwork_cache(&config)), api_key);
        rt.block_on(resolver.album_image(artist, album))
    };

    print_outcome(&label, &url);
    Ok(())
}

/// Resolve artwork for a track
pub fn cmd_track(
    rt: &Runtime,
    artist: &str,
    title: &str,
    archive: bool,
    api_key: Option<&str>,
) -> anyhow::Result<()> {
    let config = config::load();
    let label = format!("{} - {}", artist, title);

    let url = if archive {
        let resolver = ArchiveResolver::new(Box::new(open_archive_cache(&config)));
        rt.block_on(resolver.track_cover(artist, title))
    } else {
        let api_key = effective_api_key(api_key, &config);
        let resolver = ArtworkResolver::standard(Box::new(open_artwork_cache(&config)), api_key);
        rt.block_on(resolver.track_image(artist, title))
    };

    print_outcome(&label, &url);
    Ok(())
}

/// Resolve artist images for several artists at once
pub fn cmd_hydrate(rt: &Runtime, names: &[String], api_key: Option<&str>) -> anyhow::Result<()> {
    if names.is_empty() {
        println!("Nothing to hydrate.");
        return Ok(());
    }

    let config = config::load();
    let api_key = effective_api_key(api_key, &config);
    let resolver = ArtworkResolver::standard(Box::new(open_artwork_cache(&config)), api_key);

    let urls = rt.block_on(resolver.artist_images(names));

    let mut found = 0;
    for (name, url) in names.iter().zip(&urls) {
        if url.is_empty() {
            println!("✗ {}", name);
        } else {
            println!("✓ {}: {}", name, url);
            found += 1;
        }
    }
    println!();
    println!("{}/{} artists resolved", found, names.len());
    Ok(())
}
