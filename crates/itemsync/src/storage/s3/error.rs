//! S3 error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `itemsync_core::storage`.

use std::error::Error;
use std::fmt::Debug;

use aws_sdk_s3::error::{DisplayErrorContext, SdkError};
use itemsync_core::storage::RepositoryError;

/// Map any S3 SDK error to RepositoryError.
///
/// Timeouts and dispatch failures become `ConnectionFailed`; everything the service
/// answered with becomes `QueryFailed` carrying the operation name.
pub fn map_s3_error<E, R>(err: SdkError<E, R>, operation: &'static str) -> RepositoryError
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

/// Whether a failed HeadBucket means the bucket is missing.
///
/// HeadBucket responses carry no body, so a 404 may arrive without the modeled
/// `NotFound` error; either signal counts.
pub fn is_missing_bucket(modeled_not_found: bool, status: Option<u16>) -> bool {
    modeled_not_found || status == Some(404)
}

#[cfg(test)]
mod tests {
    use aws_sdk_s3::operation::put_object::PutObjectError;

    use super::*;

    #[test]
    fn test_modeled_not_found_is_missing() {
        assert!(is_missing_bucket(true, Some(404)));
        assert!(is_missing_bucket(true, None));
    }

    #[test]
    fn test_bare_404_is_missing() {
        assert!(is_missing_bucket(false, Some(404)));
    }

    #[test]
    fn test_other_failures_are_not_missing() {
        assert!(!is_missing_bucket(false, Some(403)));
        assert!(!is_missing_bucket(false, None));
    }

    #[test]
    fn test_timeout_is_connection_failed() {
        let err: SdkError<PutObjectError, ()> = SdkError::timeout_error("deadline elapsed");

        assert!(matches!(
            map_s3_error(err, "PutObject"),
            RepositoryError::ConnectionFailed(_)
        ));
    }
}
