use std::sync::Arc;

use itemsync_core::item::{
    rename_item, validate_item_name, DeleteConfirmation, Item, ItemIdGenerator,
    ItemServiceError,
};
use itemsync_core::storage::{
    encode_item_blob, item_blob_key, BlobStore, ItemTable, ITEM_BLOB_CONTENT_TYPE,
};

type Result<T> = std::result::Result<T, ItemServiceError>;

/// Orchestrates item operations across the item table and the blob store.
pub struct ItemService {
    table: Arc<dyn ItemTable>,
    blobs: Arc<dyn BlobStore>,
    ids: ItemIdGenerator,
}

impl ItemService {
    /// Creates a new service over the given backends.
    pub fn new(table: Arc<dyn ItemTable>, blobs: Arc<dyn BlobStore>) -> Self {
        Self {
            table,
            blobs,
            ids: ItemIdGenerator::new(),
        }
    }

    /// Lists every item in the table.
    pub async fn list_items(&self) -> Result<Vec<Item>> {
        let items = self.table.scan_items().await?;
        tracing::debug!(count = items.len(), "Listed items");
        Ok(items)
    }

    /// Gets a single item. Only the table is consulted.
    pub async fn get_item(&self, id: &str) -> Result<Item> {
        self.table
            .get_item(id)
            .await?
            .ok_or_else(|| ItemServiceError::NotFound { id: id.to_string() })
    }

    /// Creates a new item with a freshly generated id.
    pub async fn create_item(&self, name: &str) -> Result<Item> {
        validate_item_name(name)?;

        let item = Item::new(self.ids.next_id(), name);

        // 1. Persist to the table; an id collision surfaces as a conflict
        self.table.put_item_if_absent(&item).await?;

        // 2. Mirror to the blob store
        self.mirror_item(&item).await;

        tracing::info!(item_id = %item.id, name = %item.name, "Created item");
        Ok(item)
    }

    /// Replaces the name of an existing item.
    pub async fn update_item(&self, id: &str, name: &str) -> Result<Item> {
        validate_item_name(name)?;

        let existing = self.get_item(id).await?;
        let item = rename_item(&existing, name);

        // 1. Persist to the table (last write wins)
        self.table.put_item(&item).await?;

        // 2. Mirror to the blob store
        self.mirror_item(&item).await;

        tracing::info!(item_id = %item.id, name = %item.name, "Updated item");
        Ok(item)
    }

    /// Deletes an existing item from both stores.
    pub async fn delete_item(&self, id: &str) -> Result<DeleteConfirmation> {
        self.get_item(id).await?;

        // 1. Remove from the table
        self.table.delete_item(id).await?;

        // 2. Remove the mirrored blob
        let key = item_blob_key(id);
        if let Err(err) = self.blobs.delete_object(&key).await {
            tracing::warn!(
                item_id = %id,
                key = %key,
                error = %err,
                "Failed to delete item blob, blob store is out of sync"
            );
        }

        tracing::info!(item_id = %id, "Deleted item");
        Ok(DeleteConfirmation::deleted())
    }

    /// Writes the blob copy of `item`. Failures are logged, never returned.
    async fn mirror_item(&self, item: &Item) {
        let key = item_blob_key(&item.id);

        let body = match encode_item_blob(item) {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!(item_id = %item.id, error = %err, "Failed to encode item blob");
                return;
            }
        };

        if let Err(err) = self
            .blobs
            .put_object(&key, body, ITEM_BLOB_CONTENT_TYPE)
            .await
        {
            tracing::warn!(
                item_id = %item.id,
                key = %key,
                error = %err,
                "Failed to write item blob, blob store is out of sync"
            );
        }
    }
}
