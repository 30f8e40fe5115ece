//! DigitalOcean account access
//!
//! [`Account`] is the capability a region-selection flow needs from a cloud
//! account: list where servers can be created, and create one.
//! [`DigitalOceanClient`] is the REST implementation.

pub mod client;
pub mod error;
pub mod regions;
pub mod types;

pub use client::{DigitalOceanClient, DropletSpec};
pub use error::{AccountError, Result};
pub use regions::{flag_for_city, group_regions_by_city};
pub use types::{ManagedServer, RegionId, RegionMap};

use std::future::Future;

/// Cloud account that can list regions and create servers
pub trait Account: Send + Sync {
    /// Regions that can host a new server, grouped by city
    fn get_region_map(&self) -> impl Future<Output = Result<RegionMap>> + Send;

    /// Create a server named `name` in `region`
    fn create_server(
        &self,
        region: &RegionId,
        name: &str,
    ) -> impl Future<Output = Result<ManagedServer>> + Send;
}
