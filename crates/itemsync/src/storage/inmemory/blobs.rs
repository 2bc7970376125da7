//! In-memory blob store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use itemsync_core::provision::ProvisionOutcome;
use itemsync_core::storage::{BlobStore, Provision, RepositoryError, Result};

/// A stored object and its content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub body: Vec<u8>,
    pub content_type: String,
}

/// In-memory blob store for testing.
#[derive(Debug, Clone)]
pub struct InMemoryBlobStore {
    objects: Arc<RwLock<HashMap<String, StoredObject>>>,
    unavailable: Arc<AtomicBool>,
}

impl Default for InMemoryBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryBlobStore {
    /// Creates a new empty blob store.
    pub fn new() -> Self {
        Self {
            objects: Arc::new(RwLock::new(HashMap::new())),
            unavailable: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Makes every subsequent operation fail with `ConnectionFailed` (or succeed
    /// again when `false`).
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Returns the object stored under `key`, if any.
    pub async fn object(&self, key: &str) -> Option<StoredObject> {
        self.objects.read().await.get(key).cloned()
    }

    /// Number of stored objects.
    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(RepositoryError::ConnectionFailed(
                "in-memory blob store unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn put_object(&self, key: &str, body: Vec<u8>, content_type: &str) -> Result<()> {
        self.check_available()?;
        let mut objects = self.objects.write().await;
        objects.insert(
            key.to_string(),
            StoredObject {
                body,
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }

    async fn delete_object(&self, key: &str) -> Result<()> {
        self.check_available()?;
        let mut objects = self.objects.write().await;
        objects.remove(key);
        Ok(())
    }
}

#[async_trait]
impl Provision for InMemoryBlobStore {
    fn resource(&self) -> String {
        "bucket (in-memory)".to_string()
    }

    async fn ensure_provisioned(&self) -> Result<ProvisionOutcome> {
        self.check_available()?;
        Ok(ProvisionOutcome::AlreadyExists)
    }
}
