//! Configuration commands.

use crate::config;

/// Store the Last.fm API key in the config file
pub fn cmd_set_key(key: &str) -> anyhow::Result<()> {
    let mut config = config::load();
    config.credentials.lastfm_api_key = Some(key.to_string());
    config::save(&config)?;
    println!("✓ Last.fm API key saved");
    Ok(())
}

/// Print the current configuration without echoing secrets
pub fn cmd_show_config() -> anyhow::Result<()> {
    let config = config::load();

    match config::config_path() {
        Some(path) => println!("Config file: {:?}", path),
        None => println!("Config file: <no config directory>"),
    }

    match &config.credentials.lastfm_api_key {
        Some(key) => println!("  lastfm_api_key: set ({} chars)", key.len()),
        None => println!("  lastfm_api_key: not set"),
    }
    match &config.cache.dir {
        Some(dir) => println!("  cache dir: {:?}", dir),
        None => println!("  cache dir: default"),
    }
    Ok(())
}
