use super::error::ItemError;
use super::types::Item;

/// Validates the name supplied for a create or update.
///
/// Only an empty name is rejected; whitespace is kept as given.
pub fn validate_item_name(name: &str) -> Result<(), ItemError> {
    if name.is_empty() {
        return Err(ItemError::NameRequired);
    }
    Ok(())
}

/// Returns the full replacement for `item` with a new name. The id is preserved.
pub fn rename_item(item: &Item, name: impl Into<String>) -> Item {
    Item {
        id: item.id.clone(),
        name: name.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_is_rejected() {
        assert_eq!(validate_item_name(""), Err(ItemError::NameRequired));
    }

    #[test]
    fn test_non_empty_name_is_accepted() {
        assert_eq!(validate_item_name("test item"), Ok(()));
        assert_eq!(validate_item_name(" "), Ok(()));
    }

    #[test]
    fn test_rename_keeps_id() {
        let item = Item::new("1700000000000-k3j9x0a1b", "old name");

        let renamed = rename_item(&item, "new name");

        assert_eq!(renamed.id, item.id);
        assert_eq!(renamed.name, "new name");
    }
}
