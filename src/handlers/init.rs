use crate::config::{global_config_path, save_global_config, types::Config};
use crate::error::{ConfigError, Result};
use colored::Colorize;

pub fn handle_init(token: Option<String>, force: bool) -> Result<()> {
    let path = global_config_path()
        .ok_or_else(|| ConfigError::WriteFailed("home directory not found".to_string()))?;

    if path.exists() && !force {
        println!(
            "{} {} already exists (use --force to overwrite)",
            "⚠".yellow(),
            path.display()
        );
        return Ok(());
    }

    let mut config = Config::default();
    config.digitalocean.token = token;
    let written = save_global_config(&config)?;

    println!("{} Wrote {}", "✓".green(), written.display());
    Ok(())
}
