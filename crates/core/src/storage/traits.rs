use async_trait::async_trait;

use crate::item::Item;
use crate::provision::ProvisionOutcome;

use super::Result;

/// Key-value table holding the authoritative copy of every item.
#[async_trait]
pub trait ItemTable: Send + Sync {
    /// Gets an item by its id.
    async fn get_item(&self, id: &str) -> Result<Option<Item>>;

    /// Stores a new item, failing with `AlreadyExists` if the id is taken.
    async fn put_item_if_absent(&self, item: &Item) -> Result<()>;

    /// Stores an item unconditionally (last write wins).
    async fn put_item(&self, item: &Item) -> Result<()>;

    /// Deletes an item by its id. Deleting a missing id is not an error.
    async fn delete_item(&self, id: &str) -> Result<()>;

    /// Returns every item in the table, in backend order.
    async fn scan_items(&self) -> Result<Vec<Item>>;
}

/// Object store holding the redundant copy of every item.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Writes `body` under `key`, replacing any existing object.
    async fn put_object(&self, key: &str, body: Vec<u8>, content_type: &str) -> Result<()>;

    /// Deletes the object under `key`.
    async fn delete_object(&self, key: &str) -> Result<()>;
}

/// A backing resource that can be created on demand at startup.
#[async_trait]
pub trait Provision: Send + Sync {
    /// Human-readable resource description, e.g. `table items`.
    fn resource(&self) -> String;

    /// Ensures the resource exists, creating it if missing.
    async fn ensure_provisioned(&self) -> Result<ProvisionOutcome>;
}
