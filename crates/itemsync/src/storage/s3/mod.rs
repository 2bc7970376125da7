//! S3 blob store.
//!
//! Objects are written under `items/<id>.json` in a single bucket.

mod bucket;
mod error;

pub use bucket::S3BlobStore;
