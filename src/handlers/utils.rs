use crate::config::types::Config;
use crate::digitalocean::{DigitalOceanClient, DropletSpec, ManagedServer};
use crate::error::{DoCreateError, Result};
use crate::localize::MessageCatalog;
use colored::Colorize;

/// Build the DigitalOcean account from configuration
///
/// A token passed on the command line wins over the configured one.
pub fn build_account(config: &Config, token: Option<String>) -> Result<DigitalOceanClient> {
    let token = token
        .or_else(|| config.digitalocean.token.clone())
        .filter(|t| !t.trim().is_empty())
        .ok_or(DoCreateError::MissingToken)?;

    let client = DigitalOceanClient::with_url(
        config.digitalocean.api_url.as_str(),
        token,
        DropletSpec::from(&config.digitalocean),
    )?;
    Ok(client)
}

/// Built-in messages, with overrides from the configured messages file
pub fn load_catalog(config: &Config) -> Result<MessageCatalog> {
    match &config.ui.messages {
        Some(path) => MessageCatalog::with_overrides_from(path),
        None => Ok(MessageCatalog::default()),
    }
}

pub fn print_server(server: &ManagedServer, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(server)?);
        return Ok(());
    }

    println!("\n{} Server created", "✓".green());
    println!("  {:<8} {}", "Name:".dimmed(), server.name.cyan());
    println!("  {:<8} {}", "ID:".dimmed(), server.id);
    println!("  {:<8} {}", "Region:".dimmed(), server.region);
    println!("  {:<8} {}", "Status:".dimmed(), server.status);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token() {
        let config = Config::default();
        assert!(matches!(
            build_account(&config, None),
            Err(DoCreateError::MissingToken)
        ));
        assert!(matches!(
            build_account(&config, Some("  ".to_string())),
            Err(DoCreateError::MissingToken)
        ));
    }

    #[test]
    fn test_cli_token_wins() {
        let mut config = Config::default();
        config.digitalocean.token = Some("from-config".to_string());
        config.digitalocean.api_url = "https://do.example.com".to_string();

        let client = build_account(&config, Some("from-cli".to_string())).unwrap();
        assert_eq!(client.api_url(), "https://do.example.com");
        assert!(build_account(&config, None).is_ok());
    }

    #[test]
    fn test_default_catalog() {
        let catalog = load_catalog(&Config::default()).unwrap();
        assert_eq!(catalog.get("city-lon"), Some("London"));
    }
}
