pub mod types;

use crate::error::{ConfigError, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".do-create.toml";

/// Environment variable holding the access token
pub const TOKEN_ENV: &str = "DIGITALOCEAN_TOKEN";
/// Environment variable overriding the API URL
pub const API_URL_ENV: &str = "DO_CREATE_API_URL";

/// Get the global config file path (~/.do-create.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Get the local config file path (./.do-create.toml)
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

/// Load configuration
///
/// An explicit path must exist and parse. Otherwise the local file in the
/// current directory is tried first, then the global one, then defaults.
/// Environment overrides are applied last.
pub fn load_config(explicit: Option<&Path>) -> Result<types::Config> {
    let mut config = match explicit {
        Some(path) => read_config(path)?,
        None => find_config()?.unwrap_or_default(),
    };
    apply_env_overrides(&mut config);
    Ok(config)
}

fn find_config() -> Result<Option<types::Config>> {
    let candidates = env::current_dir()
        .ok()
        .map(|dir| local_config_path(&dir))
        .into_iter()
        .chain(global_config_path());

    for path in candidates {
        if path.exists() {
            log::debug!("Loading configuration from {}", path.display());
            return read_config(&path).map(Some);
        }
    }
    Ok(None)
}

pub fn read_config(path: &Path) -> Result<types::Config> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| {
        ConfigError::ParsingFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

fn apply_env_overrides(config: &mut types::Config) {
    if let Some(token) = env::var(TOKEN_ENV).ok().filter(|t| !t.is_empty()) {
        config.digitalocean.token = Some(token);
    }
    if let Some(url) = env::var(API_URL_ENV).ok().filter(|u| !u.is_empty()) {
        config.digitalocean.api_url = url;
    }
}

/// Save configuration to the global config file, returning its path
pub fn save_global_config(config: &types::Config) -> Result<PathBuf> {
    save_config_to(global_config_path(), config)
}

fn save_config_to(path: Option<PathBuf>, config: &types::Config) -> Result<PathBuf> {
    let path =
        path.ok_or_else(|| ConfigError::WriteFailed("home directory not found".to_string()))?;
    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::WriteFailed(e.to_string()))?;
    fs::write(&path, content)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = types::Config::default();
        assert_eq!(config.digitalocean.droplet_size, "s-1vcpu-1gb");
        assert!(config.digitalocean.token.is_none());
        assert!(config.ui.retry_prompt);
    }

    #[test]
    fn test_read_partial_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[digitalocean]
token = "dop_v1_abc"
droplet_size = "s-2vcpu-2gb"

[ui]
retry_prompt = false
"#
        )
        .unwrap();

        let config = read_config(file.path()).unwrap();
        assert_eq!(config.digitalocean.token.as_deref(), Some("dop_v1_abc"));
        assert_eq!(config.digitalocean.droplet_size, "s-2vcpu-2gb");
        // Unset keys keep their defaults
        assert_eq!(config.digitalocean.image, "ubuntu-22-04-x64");
        assert!(!config.ui.retry_prompt);
    }

    #[test]
    fn test_invalid_config_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[digitalocean\ntoken = ").unwrap();
        let err = read_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid configuration file"));
    }

    #[test]
    fn test_config_roundtrips_through_toml() {
        let config = types::Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: types::Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_save_without_home_fails() {
        let err = save_config_to(None, &types::Config::default()).unwrap_err();
        assert!(matches!(
            err,
            crate::error::DoCreateError::Config(ConfigError::WriteFailed(_))
        ));
    }

    #[test]
    fn test_save_writes_readable_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut config = types::Config::default();
        config.digitalocean.token = Some("dop_v1_saved".to_string());

        let path = save_config_to(Some(local_config_path(dir.path())), &config).unwrap();
        assert_eq!(read_config(&path).unwrap(), config);
    }
}
