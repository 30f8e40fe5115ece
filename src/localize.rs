//! Message lookup for user-facing strings
//!
//! Messages are flat `key -> template` pairs. Templates reference arguments
//! as `{name}`.

use crate::error::{ConfigError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Looks up a user-facing message by key
pub trait Localize: Send + Sync {
    /// Localized message for `key` with `{name}` placeholders replaced from `args`
    fn localize(&self, key: &str, args: &[(&str, &str)]) -> String;
}

/// Built-in English messages
static DEFAULT_MESSAGES: &[(&str, &str)] = &[
    ("city-ams", "Amsterdam"),
    ("city-blr", "Bangalore"),
    ("city-fra", "Frankfurt"),
    ("city-lon", "London"),
    ("city-nyc", "New York"),
    ("city-sfo", "San Francisco"),
    ("city-sgp", "Singapore"),
    ("city-syd", "Sydney"),
    ("city-tor", "Toronto"),
    ("server-name", "Outline Server {serverLocation}"),
    ("error-do-regions", "Failed to get list of available regions"),
    ("region-picker-title", "Create your server"),
    (
        "region-picker-description",
        "Select the location where you want to run your server.",
    ),
    ("region-picker-prompt", "Select server location:"),
    ("region-picker-unavailable", "No locations are available right now."),
    ("retry-prompt", "Something went wrong. Retry?"),
    ("creating-server", "Creating server in {serverLocation}..."),
];

/// In-memory message table
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self {
            messages: DEFAULT_MESSAGES
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl MessageCatalog {
    /// Catalog with no messages; every lookup returns its key
    pub fn empty() -> Self {
        Self {
            messages: HashMap::new(),
        }
    }

    /// Built-in messages overridden by the flat JSON object in `path`
    pub fn with_overrides_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let overrides: HashMap<String, String> = serde_json::from_str(&content)
            .map_err(|e| ConfigError::InvalidMessages(format!("{}: {}", path.display(), e)))?;
        let mut catalog = Self::default();
        catalog.extend(overrides);
        Ok(catalog)
    }

    pub fn extend(&mut self, messages: impl IntoIterator<Item = (String, String)>) {
        self.messages.extend(messages);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }
}

impl Localize for MessageCatalog {
    fn localize(&self, key: &str, args: &[(&str, &str)]) -> String {
        let Some(template) = self.get(key) else {
            log::debug!("Missing message for key '{}'", key);
            return key.to_string();
        };
        args.iter().fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{}}}", name), value)
        })
    }
}
