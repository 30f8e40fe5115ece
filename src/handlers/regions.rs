use crate::config::types::Config;
use crate::digitalocean::Account;
use crate::error::Result;
use crate::flow::locations_from_region_map;
use crate::handlers::utils::{build_account, load_catalog};
use crate::wizard::display_header;
use colored::Colorize;

pub async fn handle_regions(config: &Config, token: Option<String>, json: bool) -> Result<()> {
    let account = build_account(config, token)?;
    let catalog = load_catalog(config)?;

    let map = account.get_region_map().await?;
    let locations = locations_from_region_map(&catalog, &map);

    if json {
        println!("{}", serde_json::to_string_pretty(&locations)?);
        return Ok(());
    }

    display_header(
        "DigitalOcean Locations",
        &format!(
            "Locations that can host a {} droplet.",
            account.droplet_spec().size
        ),
    );

    for (location, regions) in locations.iter().zip(map.values()) {
        let slugs: Vec<String> = regions.iter().map(|r| r.to_string()).collect();
        println!(
            "  {} {:<16} {}",
            status_indicator(location.available),
            location.name,
            slugs.join(", ").dimmed()
        );
    }

    let available = locations.iter().filter(|l| l.available).count();
    println!("\n  {}", availability_summary(available));
    Ok(())
}

fn status_indicator(available: bool) -> String {
    if available {
        "✓".green().to_string()
    } else {
        "✗".red().to_string()
    }
}

fn availability_summary(count: usize) -> String {
    let count_text = if count > 0 {
        count.to_string().cyan()
    } else {
        count.to_string().dimmed()
    };
    format!("{} {}", count_text, "available locations".dimmed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_summary() {
        colored::control::set_override(false);
        assert_eq!(availability_summary(3), "3 available locations");
        assert_eq!(availability_summary(0), "0 available locations");
    }

    #[test]
    fn test_status_indicator() {
        colored::control::set_override(false);
        assert_eq!(status_indicator(true), "✓");
        assert_eq!(status_indicator(false), "✗");
    }
}
