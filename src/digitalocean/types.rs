//! Request and response types for the DigitalOcean v2 API
//!
//! Also holds the domain types handed back to callers of an [`Account`](super::Account):
//! [`RegionId`], [`RegionMap`] and [`ManagedServer`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of a DigitalOcean region (datacenter slug, e.g. "ams3")
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(String);

impl RegionId {
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// City identifier of this region: the first three characters, lowercased
    ///
    /// "ams3" -> "ams", "NYC1" -> "nyc"
    pub fn city_id(&self) -> String {
        self.0.chars().take(3).collect::<String>().to_lowercase()
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RegionId {
    fn from(slug: &str) -> Self {
        Self::new(slug)
    }
}

/// City id -> regions in that city that can host a new server, in API order.
///
/// An empty vector means the city exists but nothing there is available.
pub type RegionMap = BTreeMap<String, Vec<RegionId>>;

/// A server created through an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedServer {
    /// Droplet ID
    pub id: u64,
    /// Droplet name
    pub name: String,
    /// Region the droplet was created in
    pub region: RegionId,
    /// Droplet status as reported at creation time ("new", "active", ...)
    pub status: String,
}

/// Region entry from `GET /v2/regions`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub sizes: Vec<String>,
    pub available: bool,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Response body of `GET /v2/regions`
#[derive(Debug, Clone, Deserialize)]
pub struct RegionsResponse {
    pub regions: Vec<Region>,
}

/// Request body of `POST /v2/droplets`
#[derive(Debug, Clone, Serialize)]
pub struct CreateDropletRequest {
    pub name: String,
    pub region: String,
    pub size: String,
    pub image: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Droplet entry as returned by the droplet endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct Droplet {
    pub id: u64,
    pub name: String,
    pub status: String,
    pub region: DropletRegion,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DropletRegion {
    pub slug: String,
}

/// Response body of `POST /v2/droplets`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDropletResponse {
    pub droplet: Droplet,
}

impl From<Droplet> for ManagedServer {
    fn from(droplet: Droplet) -> Self {
        ManagedServer {
            id: droplet.id,
            name: droplet.name,
            region: RegionId::new(droplet.region.slug),
            status: droplet.status,
        }
    }
}

/// Error body returned by the API on failure
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub id: Option<String>,
    pub message: String,
}
