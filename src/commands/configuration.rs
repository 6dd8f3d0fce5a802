// Configuration display command

use anyhow::{Context, Result};

use crate::Config;

pub fn handle_config(config: &Config, path_only: bool) -> Result<()> {
    let path = Config::config_path()?;

    if path_only {
        println!("{}", path.display());
        return Ok(());
    }

    let status = if path.exists() { "" } else { " (not found, defaults)" };
    println!("# {}{}", path.display(), status);
    let rendered = config.to_toml().context("Failed to serialize config")?;
    print!("{}", rendered);

    Ok(())
}
