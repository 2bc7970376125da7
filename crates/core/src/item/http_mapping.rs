//! Pure functions for mapping item service errors to HTTP responses.
//!
//! Store errors never leak their detail to clients; they collapse to a generic
//! message and a 500.

use super::ItemServiceError;

/// Maps an [`ItemServiceError`] to an HTTP status code.
///
/// - `InvalidInput` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
/// - `Conflict` -> 409 (Conflict)
/// - `Store` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use itemsync_core::item::{item_error_to_status_code, ItemServiceError};
///
/// let error = ItemServiceError::NotFound { id: "abc".to_string() };
/// assert_eq!(item_error_to_status_code(&error), 404);
/// ```
pub fn item_error_to_status_code(error: &ItemServiceError) -> u16 {
    match error {
        ItemServiceError::InvalidInput(_) => 400,
        ItemServiceError::NotFound { .. } => 404,
        ItemServiceError::Conflict { .. } => 409,
        ItemServiceError::Store(_) => 500,
    }
}

/// Returns the client-facing message for an [`ItemServiceError`].
pub fn item_error_message(error: &ItemServiceError) -> String {
    match error {
        ItemServiceError::InvalidInput(err) => err.to_string(),
        ItemServiceError::NotFound { .. } => "not found".to_string(),
        ItemServiceError::Conflict { .. } => "Item already exists".to_string(),
        ItemServiceError::Store(_) => "Internal server error".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemError;
    use crate::storage::RepositoryError;

    #[test]
    fn test_invalid_input_maps_to_400() {
        let error = ItemServiceError::InvalidInput(ItemError::NameRequired);
        assert_eq!(item_error_to_status_code(&error), 400);
        assert_eq!(item_error_message(&error), "name required");
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let error = ItemServiceError::NotFound {
            id: "does-not-exist".to_string(),
        };
        assert_eq!(item_error_to_status_code(&error), 404);
        assert_eq!(item_error_message(&error), "not found");
    }

    #[test]
    fn test_conflict_maps_to_409() {
        let error = ItemServiceError::Conflict {
            id: "1700000000000-aaaaaaaaa".to_string(),
        };
        assert_eq!(item_error_to_status_code(&error), 409);
        assert_eq!(item_error_message(&error), "Item already exists");
    }

    #[test]
    fn test_store_error_maps_to_500_without_detail() {
        let error = ItemServiceError::Store(RepositoryError::QueryFailed(
            "Throughput exceeded, please retry".to_string(),
        ));
        assert_eq!(item_error_to_status_code(&error), 500);
        assert_eq!(item_error_message(&error), "Internal server error");
    }
}
