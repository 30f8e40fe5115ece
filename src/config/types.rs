use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub digitalocean: DigitalOceanConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// DigitalOcean account and droplet settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigitalOceanConfig {
    pub api_url: String,
    /// Personal access token; `DIGITALOCEAN_TOKEN` takes precedence
    pub token: Option<String>,
    pub droplet_size: String,
    pub image: String,
    pub tags: Vec<String>,
}

impl Default for DigitalOceanConfig {
    fn default() -> Self {
        Self {
            api_url: crate::digitalocean::client::DIGITALOCEAN_API_URL.to_string(),
            token: None,
            droplet_size: "s-1vcpu-1gb".to_string(),
            image: "ubuntu-22-04-x64".to_string(),
            tags: vec!["outline".to_string()],
        }
    }
}

/// Terminal front end settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// JSON file of message overrides
    pub messages: Option<PathBuf>,
    /// Ask before retrying a failed region fetch
    pub retry_prompt: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            messages: None,
            retry_prompt: true,
        }
    }
}
