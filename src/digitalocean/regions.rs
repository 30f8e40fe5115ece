//! Static DigitalOcean city data and region grouping

use super::types::{Region, RegionId, RegionMap};

const FLAG_IMAGE_DIR: &str = "images/flags";

/// City id -> country flag image name
static CITY_FLAGS: &[(&str, &str)] = &[
    ("ams", "netherlands"),
    ("sgp", "singapore"),
    ("blr", "india"),
    ("fra", "germany"),
    ("lon", "uk"),
    ("sfo", "us"),
    ("tor", "canada"),
    ("nyc", "us"),
];

/// Flag image path for a city, empty when the city has no flag
pub fn flag_for_city(city_id: &str) -> String {
    CITY_FLAGS
        .iter()
        .find(|(city, _)| *city == city_id)
        .map(|(_, country)| format!("{}/{}.png", FLAG_IMAGE_DIR, country))
        .unwrap_or_default()
}

/// Group API regions by city
///
/// Every city seen in `regions` gets an entry. A region is listed under its
/// city only when it is available and offers `size`.
pub fn group_regions_by_city(regions: &[Region], size: &str) -> RegionMap {
    let mut map = RegionMap::new();
    for region in regions {
        let id = RegionId::new(region.slug.as_str());
        let entry = map.entry(id.city_id()).or_default();
        if region.available && region.sizes.iter().any(|s| s == size) {
            entry.push(id);
        }
    }
    map
}
