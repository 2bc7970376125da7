//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `itemsync_core::storage`.

use std::error::Error;
use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use itemsync_core::storage::RepositoryError;

/// Map any DynamoDB SDK error to RepositoryError.
///
/// Timeouts and dispatch failures become `ConnectionFailed`; everything the service
/// answered with becomes `QueryFailed` carrying the operation name.
pub fn map_sdk_error<E, R>(err: SdkError<E, R>, operation: &'static str) -> RepositoryError
where
    E: Error + Send + Sync + 'static,
    R: Debug + Send + Sync + 'static,
{
    match err {
        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) => {
            RepositoryError::ConnectionFailed(DisplayErrorContext(&err).to_string())
        }
        err => RepositoryError::QueryFailed(format!(
            "{operation} failed: {}",
            DisplayErrorContext(&err)
        )),
    }
}

/// Map a PutItem SDK error to RepositoryError.
///
/// A failed `attribute_not_exists(id)` condition becomes `AlreadyExists`.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    id: impl Into<String>,
) -> RepositoryError {
    if matches!(
        err.as_service_error(),
        Some(PutItemError::ConditionalCheckFailedException(_))
    ) {
        return RepositoryError::AlreadyExists {
            entity_type: "Item",
            id: id.into(),
        };
    }

    map_sdk_error(err, "PutItem")
}
