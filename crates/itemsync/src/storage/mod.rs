//! Storage backend implementations.
//!
//! This module provides concrete implementations of the storage traits defined in
//! `itemsync_core::storage`. The implementations are selected at compile time via
//! feature flags.
//!
//! # Feature Flags
//!
//! - `aws` (default): DynamoDB item table and S3 blob store
//! - `inmemory`: HashMap-backed table and blob store, nothing persisted
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time.
//!
//! # Examples
//!
//! Build with AWS backends (default):
//! ```bash
//! cargo build -p itemsync
//! ```
//!
//! Build with in-memory backends:
//! ```bash
//! cargo build -p itemsync --no-default-features --features inmemory
//! ```

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "aws", feature = "inmemory"))]
compile_error!(
    "Features 'aws' and 'inmemory' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "aws", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'aws' or 'inmemory' feature. \
    Example: cargo build -p itemsync --features aws"
);

use std::sync::Arc;

use itemsync_core::storage::{BlobStore, ItemTable, Provision};

use crate::config::Config;

#[cfg(feature = "aws")]
pub mod client;

#[cfg(feature = "aws")]
pub mod dynamodb;

#[cfg(feature = "aws")]
pub mod s3;

#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;

/// The backends the item service runs on, plus the resources to provision at
/// startup.
pub struct Backends {
    pub table: Arc<dyn ItemTable>,
    pub blobs: Arc<dyn BlobStore>,
    pub provisioners: Vec<Arc<dyn Provision>>,
}

/// Connects to DynamoDB and S3.
///
/// Clients are built once here and shared for the life of the process.
#[cfg(feature = "aws")]
pub async fn connect(config: &Config) -> anyhow::Result<Backends> {
    let sdk_config = client::load_sdk_config(config).await;

    let table = Arc::new(dynamodb::DynamoDbItemTable::new(
        client::dynamodb_client(&sdk_config),
        config.table_name.clone(),
    ));
    let blobs = Arc::new(s3::S3BlobStore::new(
        client::s3_client(&sdk_config),
        config.bucket_name.clone(),
    ));

    let provisioners: Vec<Arc<dyn Provision>> = vec![
        table.clone() as Arc<dyn Provision>,
        blobs.clone() as Arc<dyn Provision>,
    ];

    Ok(Backends {
        table,
        blobs,
        provisioners,
    })
}

/// Creates empty in-memory backends.
#[cfg(all(feature = "inmemory", not(feature = "aws")))]
pub async fn connect(config: &Config) -> anyhow::Result<Backends> {
    tracing::warn!(
        table = %config.table_name,
        bucket = %config.bucket_name,
        "Using in-memory storage, nothing will be persisted"
    );

    let table = Arc::new(inmemory::InMemoryItemTable::new());
    let blobs = Arc::new(inmemory::InMemoryBlobStore::new());

    let provisioners: Vec<Arc<dyn Provision>> = vec![
        table.clone() as Arc<dyn Provision>,
        blobs.clone() as Arc<dyn Provision>,
    ];

    Ok(Backends {
        table,
        blobs,
        provisioners,
    })
}
