//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and items.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use itemsync_core::item::Item;
use itemsync_core::storage::RepositoryError;

/// Partition key attribute.
pub const ID_ATTRIBUTE: &str = "id";
pub const NAME_ATTRIBUTE: &str = "name";

/// Build the key map for an item id.
pub fn item_key(id: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([(ID_ATTRIBUTE.to_string(), AttributeValue::S(id.to_string()))])
}

/// Convert an Item to a DynamoDB item.
pub fn item_to_attributes(item: &Item) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (ID_ATTRIBUTE.to_string(), AttributeValue::S(item.id.clone())),
        (NAME_ATTRIBUTE.to_string(), AttributeValue::S(item.name.clone())),
    ])
}

/// Convert a DynamoDB item to an Item.
pub fn attributes_to_item(
    attributes: &HashMap<String, AttributeValue>,
) -> Result<Item, RepositoryError> {
    Ok(Item {
        id: get_string(attributes, ID_ATTRIBUTE)?,
        name: get_string(attributes, NAME_ATTRIBUTE)?,
    })
}

/// Decide where the next scan page starts.
///
/// Returns `None` once the scan is complete: DynamoDB omits `LastEvaluatedKey` (or
/// returns it empty) on the final page.
pub fn next_start_key(
    last_evaluated_key: Option<HashMap<String, AttributeValue>>,
) -> Option<HashMap<String, AttributeValue>> {
    last_evaluated_key.filter(|key| !key.is_empty())
}

/// Get a required string attribute.
fn get_string(
    attributes: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    attributes
        .get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_round_trips_through_attributes() {
        let item = Item::new("1700000000000-abc123xyz", "test item");

        let attributes = item_to_attributes(&item);

        assert_eq!(attributes.len(), 2);
        assert_eq!(
            attributes.get("id"),
            Some(&AttributeValue::S("1700000000000-abc123xyz".to_string()))
        );
        assert_eq!(attributes_to_item(&attributes).unwrap(), item);
    }

    #[test]
    fn test_item_key_only_has_id() {
        let key = item_key("abc");
        assert_eq!(key.len(), 1);
        assert_eq!(key.get("id"), Some(&AttributeValue::S("abc".to_string())));
    }

    #[test]
    fn test_missing_name_is_invalid_data() {
        let attributes = item_key("abc");

        let result = attributes_to_item(&attributes);

        assert_eq!(
            result,
            Err(RepositoryError::InvalidData(
                "Missing or invalid field: name".to_string()
            ))
        );
    }

    #[test]
    fn test_scan_stops_without_last_evaluated_key() {
        assert_eq!(next_start_key(None), None);
    }

    #[test]
    fn test_scan_stops_on_empty_last_evaluated_key() {
        assert_eq!(next_start_key(Some(HashMap::new())), None);
    }

    #[test]
    fn test_scan_continues_from_last_evaluated_key() {
        let key = item_key("1700000000000-abc123xyz");

        assert_eq!(next_start_key(Some(key.clone())), Some(key));
    }

    #[test]
    fn test_non_string_name_is_invalid_data() {
        let mut attributes = item_key("abc");
        attributes.insert("name".to_string(), AttributeValue::N("42".to_string()));

        assert!(matches!(
            attributes_to_item(&attributes),
            Err(RepositoryError::InvalidData(_))
        ));
    }
}
