//! In-memory storage backend for testing.
//!
//! This module provides in-memory implementations of the item table and the blob
//! store that keep all data in HashMaps wrapped in `Arc<RwLock<_>>`. Both can be
//! switched to an unavailable mode to simulate backend outages.
//!
//! # Example
//!
//! ```rust,ignore
//! use itemsync::storage::inmemory::{InMemoryBlobStore, InMemoryItemTable};
//!
//! let table = InMemoryItemTable::new();
//! let blobs = InMemoryBlobStore::new();
//! ```

mod blobs;
mod table;

pub use blobs::{InMemoryBlobStore, StoredObject};
pub use table::InMemoryItemTable;
