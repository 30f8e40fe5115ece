//! Region selection flow
//!
//! Drives a single "pick a region, get a server" interaction:
//!
//! 1. reset the picker
//! 2. fetch the region map through the caller's retry policy
//! 3. publish one [`Location`] per city to the picker
//! 4. wait for the picker to report a selection through the [`SelectionHandle`]
//! 5. create the server and return it
//!
//! A failed region fetch is reported to the user and leaves the picker empty.
//! `start` then keeps waiting for a selection; [`FlowState::AwaitingSelection`]
//! carries `degraded: true` so callers can tell this apart.

mod location;
mod retry;
mod selection;

pub use location::{
    create_location_model, localized_city_name, locations_from_region_map,
    make_localized_server_name, Location,
};
pub use retry::{Retry, SingleAttempt};
pub use selection::SelectionHandle;

use crate::digitalocean::{Account, AccountError, ManagedServer, RegionId, RegionMap};
use crate::localize::Localize;
use crate::notification::NotificationManager;
use parking_lot::Mutex;
use thiserror::Error;

/// Picker UI driven by the flow
pub trait RegionPicker: Send + Sync {
    /// Clear any previous selection and show the picker as loading
    fn reset(&self);

    /// Replace the selectable locations
    fn set_locations(&self, locations: Vec<Location>);
}

/// Where a flow currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    LoadingRegions,
    /// Waiting for the user; `degraded` when the region fetch failed
    AwaitingSelection { degraded: bool },
    CreatingServer,
    Resolved,
}

/// Errors that end a `start` call
#[derive(Debug, Error)]
pub enum FlowError {
    /// Server creation failed
    #[error("Failed to create server: {0}")]
    Account(#[from] AccountError),

    /// A later `start` call took over the selection listener
    #[error("Region selection was superseded by a newer request")]
    Superseded,
}

pub struct RegionSelectionFlow<P, N, L> {
    picker: P,
    notifications: N,
    localizer: L,
    selection: SelectionHandle,
    state: Mutex<FlowState>,
}

impl<P, N, L> RegionSelectionFlow<P, N, L>
where
    P: RegionPicker,
    N: NotificationManager,
    L: Localize,
{
    pub fn new(picker: P, notifications: N, localizer: L) -> Self {
        Self {
            picker,
            notifications,
            localizer,
            selection: SelectionHandle::new(),
            state: Mutex::new(FlowState::Idle),
        }
    }

    /// Handle the picker uses to report the chosen region
    pub fn selection_handle(&self) -> SelectionHandle {
        self.selection.clone()
    }

    pub fn picker(&self) -> &P {
        &self.picker
    }

    pub fn localizer(&self) -> &L {
        &self.localizer
    }

    pub fn state(&self) -> FlowState {
        *self.state.lock()
    }

    /// Run the flow against `account` and return the server it created
    ///
    /// Pending until a region is selected; there is no timeout. Dropping the
    /// returned future abandons the flow.
    pub async fn start<A, R>(&self, account: &A, retry: &R) -> Result<ManagedServer, FlowError>
    where
        A: Account,
        R: Retry,
    {
        self.set_state(FlowState::LoadingRegions);
        self.picker.reset();

        let locations = match retry.retry(|| account.get_region_map()).await {
            Ok(map) => Some(self.locations(&map)),
            Err(e) => {
                log::error!("Failed to get list of available regions: {}", e);
                self.notifications
                    .show_error(&self.localizer.localize("error-do-regions", &[]));
                None
            }
        };

        // Listen before publishing so a picker reacting to the new locations
        // cannot select into the void.
        let selection = self.selection.listen();
        let degraded = locations.is_none();
        self.picker.set_locations(locations.unwrap_or_default());
        self.set_state(FlowState::AwaitingSelection { degraded });

        let region_id = selection.await.map_err(|_| FlowError::Superseded)?;

        self.set_state(FlowState::CreatingServer);
        match self.create_server(account, &region_id).await {
            Ok(server) => {
                self.set_state(FlowState::Resolved);
                Ok(server)
            }
            Err(e) => {
                log::error!("Failed to create server in {}: {}", region_id, e);
                self.set_state(FlowState::Idle);
                Err(e.into())
            }
        }
    }

    /// Picker entries for a region map
    pub fn locations(&self, map: &RegionMap) -> Vec<Location> {
        locations_from_region_map(&self.localizer, map)
    }

    pub fn create_location_model(&self, city_id: &str, region_ids: &[RegionId]) -> Location {
        create_location_model(&self.localizer, city_id, region_ids)
    }

    pub fn make_localized_server_name(&self, region_id: &RegionId) -> String {
        make_localized_server_name(&self.localizer, region_id)
    }

    async fn create_server<A: Account>(
        &self,
        account: &A,
        region_id: &RegionId,
    ) -> Result<ManagedServer, AccountError> {
        let name = self.make_localized_server_name(region_id);
        log::info!("Creating server '{}' in {}", name, region_id);
        account.create_server(region_id, &name).await
    }

    fn set_state(&self, state: FlowState) {
        log::trace!("Region selection flow -> {:?}", state);
        *self.state.lock() = state;
    }
}
