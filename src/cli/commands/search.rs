//! Combined music search command.

use tokio::runtime::Runtime;

use crate::artwork::{MusicSearch, SearchHit};
use crate::config;

use super::effective_api_key;

/// Search provider catalogs for tracks and albums
pub fn cmd_search(
    rt: &Runtime,
    query: &str,
    limit: usize,
    api_key: Option<&str>,
) -> anyhow::Result<()> {
    let config = config::load();
    let api_key = effective_api_key(api_key, &config);
    let search = MusicSearch::standard(api_key);

    let hits = rt.block_on(search.search_merged(query, limit));

    if hits.is_empty() {
        println!("✗ No results for {:?}", query);
        return Ok(());
    }

    println!("{} results for {:?}:", hits.len(), query);
    println!();
    for hit in &hits {
        print_hit(hit);
    }
    Ok(())
}

fn print_hit(hit: &SearchHit) {
    let mut line = format!("[{}] {} - {}", hit.kind.tag(), hit.artist, hit.title);
    if let Some(album) = &hit.album {
        line.push_str(&format!(" ({})", album));
    }
    if let Some(year) = &hit.year {
        line.push_str(&format!(" [{}]", year));
    }
    println!("  {} <{}>", line, hit.source.as_str());
    if let Some(cover) = &hit.cover {
        println!("      cover: {}", cover);
    }
}
