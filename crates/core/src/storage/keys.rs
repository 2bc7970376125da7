//! Blob key derivation and blob encoding.
//!
//! Every item is mirrored to `items/<id>.json` as the JSON encoding of the item.

use crate::item::Item;

use super::RepositoryError;

pub const ITEM_BLOB_PREFIX: &str = "items/";
pub const ITEM_BLOB_SUFFIX: &str = ".json";
pub const ITEM_BLOB_CONTENT_TYPE: &str = "application/json";

/// Generate the blob key for an item.
///
/// Pattern: `items/<id>.json`
pub fn item_blob_key(id: &str) -> String {
    format!("{ITEM_BLOB_PREFIX}{id}{ITEM_BLOB_SUFFIX}")
}

/// Encodes an item as the JSON body stored in the blob store.
pub fn encode_item_blob(item: &Item) -> Result<Vec<u8>, RepositoryError> {
    serde_json::to_vec(item).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_blob_key() {
        assert_eq!(
            item_blob_key("1700000000000-abc123xyz"),
            "items/1700000000000-abc123xyz.json"
        );
    }

    #[test]
    fn test_encoded_blob_matches_item_json() {
        let item = Item::new("1700000000000-abc123xyz", "test match");

        let bytes = encode_item_blob(&item).unwrap();

        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"id":"1700000000000-abc123xyz","name":"test match"}"#
        );
    }
}
