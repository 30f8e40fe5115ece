//! Picker-facing location model built from a region map

use crate::digitalocean::{flag_for_city, RegionId, RegionMap};
use crate::localize::Localize;
use serde::Serialize;

/// One selectable entry of a region picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    /// Region to create the server in; `None` when the city has no available region
    pub id: Option<RegionId>,
    /// Localized city name
    pub name: String,
    /// Flag image path, empty when unknown
    pub flag: String,
    pub available: bool,
}

/// Build the picker entry for a city from its available regions
pub fn create_location_model(
    localizer: &impl Localize,
    city_id: &str,
    region_ids: &[RegionId],
) -> Location {
    Location {
        id: region_ids.first().cloned(),
        name: localized_city_name(localizer, city_id),
        flag: flag_for_city(city_id),
        available: !region_ids.is_empty(),
    }
}

/// One location per city, in region map order
pub fn locations_from_region_map(localizer: &impl Localize, map: &RegionMap) -> Vec<Location> {
    map.iter()
        .map(|(city_id, region_ids)| create_location_model(localizer, city_id, region_ids))
        .collect()
}

/// Default server name for a region, e.g. "Outline Server Amsterdam"
pub fn make_localized_server_name(localizer: &impl Localize, region_id: &RegionId) -> String {
    let server_location = localized_city_name(localizer, &region_id.city_id());
    localizer.localize("server-name", &[("serverLocation", &server_location)])
}

pub fn localized_city_name(localizer: &impl Localize, city_id: &str) -> String {
    localizer.localize(&format!("city-{}", city_id), &[])
}
