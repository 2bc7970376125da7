mod error;
mod keys;
mod traits;

pub use error::{RepositoryError, Result};
pub use keys::{encode_item_blob, item_blob_key, ITEM_BLOB_CONTENT_TYPE};
pub use traits::{BlobStore, ItemTable, Provision};
