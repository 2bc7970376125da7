use thiserror::Error;

use crate::storage::RepositoryError;

/// Errors that can occur when validating item input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("name required")]
    NameRequired,
}

/// Outcome of a failed item service operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemServiceError {
    #[error(transparent)]
    InvalidInput(#[from] ItemError),
    #[error("Item not found: {id}")]
    NotFound { id: String },
    #[error("Item already exists: {id}")]
    Conflict { id: String },
    #[error("Store error: {0}")]
    Store(RepositoryError),
}

impl From<RepositoryError> for ItemServiceError {
    /// Repository failures surface as store errors, except for an id collision.
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::AlreadyExists { id, .. } => ItemServiceError::Conflict { id },
            other => ItemServiceError::Store(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_error_display() {
        assert_eq!(ItemError::NameRequired.to_string(), "name required");
    }

    #[test]
    fn test_invalid_input_is_transparent() {
        let error = ItemServiceError::from(ItemError::NameRequired);
        assert_eq!(error.to_string(), "name required");
    }

    #[test]
    fn test_already_exists_becomes_conflict() {
        let error = ItemServiceError::from(RepositoryError::AlreadyExists {
            entity_type: "Item",
            id: "42-abc".to_string(),
        });
        assert_eq!(
            error,
            ItemServiceError::Conflict {
                id: "42-abc".to_string()
            }
        );
    }

    #[test]
    fn test_other_repository_errors_become_store_errors() {
        let error = ItemServiceError::from(RepositoryError::ConnectionFailed(
            "timeout after 30s".to_string(),
        ));
        assert!(matches!(error, ItemServiceError::Store(_)));
        assert_eq!(
            error.to_string(),
            "Store error: Connection failed: timeout after 30s"
        );
    }
}
