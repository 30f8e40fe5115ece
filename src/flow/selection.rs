//! One-shot delivery of the region selection event

use crate::digitalocean::RegionId;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::oneshot;

/// Handle through which a picker reports the region the user chose
///
/// At most one listener is pending at a time. Registering a new listener
/// drops the previous one, so its receiver sees the channel closed.
#[derive(Debug, Clone, Default)]
pub struct SelectionHandle {
    listener: Arc<Mutex<Option<oneshot::Sender<RegionId>>>>,
}

impl SelectionHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a selection to the pending listener
    ///
    /// Returns false when nobody was listening or the listener was abandoned.
    pub fn region_selected(&self, region_id: RegionId) -> bool {
        match self.listener.lock().take() {
            Some(sender) => {
                log::debug!("Region selected: {}", region_id);
                sender.send(region_id).is_ok()
            }
            None => {
                log::warn!("Ignoring selection of {}: no flow is waiting", region_id);
                false
            }
        }
    }

    pub fn is_listening(&self) -> bool {
        self.listener
            .lock()
            .as_ref()
            .is_some_and(|sender| !sender.is_closed())
    }

    pub(crate) fn listen(&self) -> oneshot::Receiver<RegionId> {
        let (sender, receiver) = oneshot::channel();
        if self.listener.lock().replace(sender).is_some() {
            log::debug!("Replacing pending selection listener");
        }
        receiver
    }
}
