use serde::{Deserialize, Serialize};

/// A named item persisted to both the item table and the blob store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Server-generated identifier. Never reused.
    pub id: String,
    pub name: String,
}

impl Item {
    /// Creates an item from an already generated id.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_serializes_to_id_and_name_only() {
        let item = Item::new("1700000000000-abc123xyz", "test item");

        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "id": "1700000000000-abc123xyz", "name": "test item" })
        );
    }
}
