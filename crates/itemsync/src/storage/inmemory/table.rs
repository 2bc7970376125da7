//! In-memory item table.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use itemsync_core::item::Item;
use itemsync_core::provision::ProvisionOutcome;
use itemsync_core::storage::{ItemTable, Provision, RepositoryError, Result};

/// In-memory item table for testing.
///
/// Data is not persisted and will be lost when the table is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryItemTable {
    items: Arc<RwLock<HashMap<String, Item>>>,
    unavailable: Arc<AtomicBool>,
}

impl Default for InMemoryItemTable {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryItemTable {
    /// Creates a new empty table.
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(HashMap::new())),
            unavailable: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Makes every subsequent operation fail with `ConnectionFailed` (or succeed
    /// again when `false`).
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of stored items.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(RepositoryError::ConnectionFailed(
                "in-memory table unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ItemTable for InMemoryItemTable {
    async fn get_item(&self, id: &str) -> Result<Option<Item>> {
        self.check_available()?;
        let items = self.items.read().await;
        Ok(items.get(id).cloned())
    }

    async fn put_item_if_absent(&self, item: &Item) -> Result<()> {
        self.check_available()?;
        let mut items = self.items.write().await;
        if items.contains_key(&item.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Item",
                id: item.id.clone(),
            });
        }
        items.insert(item.id.clone(), item.clone());
        Ok(())
    }

    async fn put_item(&self, item: &Item) -> Result<()> {
        self.check_available()?;
        let mut items = self.items.write().await;
        items.insert(item.id.clone(), item.clone());
        Ok(())
    }

    async fn delete_item(&self, id: &str) -> Result<()> {
        self.check_available()?;
        let mut items = self.items.write().await;
        items.remove(id);
        Ok(())
    }

    async fn scan_items(&self) -> Result<Vec<Item>> {
        self.check_available()?;
        let items = self.items.read().await;
        Ok(items.values().cloned().collect())
    }
}

#[async_trait]
impl Provision for InMemoryItemTable {
    fn resource(&self) -> String {
        "table (in-memory)".to_string()
    }

    async fn ensure_provisioned(&self) -> Result<ProvisionOutcome> {
        self.check_available()?;
        Ok(ProvisionOutcome::AlreadyExists)
    }
}
