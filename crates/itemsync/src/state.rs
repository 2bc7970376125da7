//! Application state.
//!
//! Cloned for each request handler. Holds the item service and the startup
//! provisioning report; nothing in it is mutated after startup.

use std::sync::Arc;

use itemsync_core::provision::ProvisionReport;

use crate::service::ItemService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Item service over the configured backends.
    pub items: Arc<ItemService>,
    /// Outcome of startup provisioning, served by `/readyz`.
    pub provisioning: Arc<ProvisionReport>,
}

impl AppState {
    /// Creates a new AppState.
    pub fn new(items: ItemService, provisioning: ProvisionReport) -> Self {
        Self {
            items: Arc::new(items),
            provisioning: Arc::new(provisioning),
        }
    }
}

#[cfg(test)]
impl Default for AppState {
    /// In-memory backends, fully provisioned.
    fn default() -> Self {
        use crate::storage::inmemory::{InMemoryBlobStore, InMemoryItemTable};

        let service = ItemService::new(
            Arc::new(InMemoryItemTable::new()),
            Arc::new(InMemoryBlobStore::new()),
        );
        Self::new(service, ProvisionReport::new())
    }
}
