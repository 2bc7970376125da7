//! S3 blob store implementation.

use async_trait::async_trait;
use aws_sdk_s3::operation::create_bucket::CreateBucketError;
use aws_sdk_s3::operation::head_bucket::HeadBucketError;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};
use aws_sdk_s3::Client;

use itemsync_core::provision::{
    calculate_provision_plan, format_provision_plan, ProvisionOutcome, ProvisionPlan,
};
use itemsync_core::storage::{BlobStore, Provision, Result};

use super::error::{is_missing_bucket, map_s3_error};

/// Region where buckets are created without a location constraint.
const DEFAULT_REGION: &str = "us-east-1";

/// S3-backed blob store.
pub struct S3BlobStore {
    client: Client,
    bucket: String,
}

impl S3BlobStore {
    /// Creates a new blob store writing to `bucket`.
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Get the bucket name.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Returns whether the bucket exists.
    async fn bucket_exists(&self) -> Result<bool> {
        match self.client.head_bucket().bucket(&self.bucket).send().await {
            Ok(_) => Ok(true),
            Err(err) => {
                let modeled_not_found =
                    matches!(err.as_service_error(), Some(HeadBucketError::NotFound(_)));
                let status = err.raw_response().map(|r| r.status().as_u16());
                if is_missing_bucket(modeled_not_found, status) {
                    Ok(false)
                } else {
                    Err(map_s3_error(err, "HeadBucket"))
                }
            }
        }
    }

    /// Creates the bucket. Returns `false` if it turned out to exist already.
    async fn create_bucket(&self) -> Result<bool> {
        let mut request = self.client.create_bucket().bucket(&self.bucket);

        // us-east-1 rejects an explicit location constraint
        let region = self.client.config().region().map(|r| r.as_ref().to_string());
        if let Some(region) = region.filter(|r| r != DEFAULT_REGION) {
            request = request.create_bucket_configuration(
                CreateBucketConfiguration::builder()
                    .location_constraint(BucketLocationConstraint::from(region.as_str()))
                    .build(),
            );
        }

        match request.send().await {
            Ok(_) => Ok(true),
            Err(err) => match err.as_service_error() {
                Some(CreateBucketError::BucketAlreadyOwnedByYou(_))
                | Some(CreateBucketError::BucketAlreadyExists(_)) => Ok(false),
                _ => Err(map_s3_error(err, "CreateBucket")),
            },
        }
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    async fn put_object(&self, key: &str, body: Vec<u8>, content_type: &str) -> Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| map_s3_error(e, "PutObject"))?;

        Ok(())
    }

    async fn delete_object(&self, key: &str) -> Result<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| map_s3_error(e, "DeleteObject"))?;

        Ok(())
    }
}

#[async_trait]
impl Provision for S3BlobStore {
    fn resource(&self) -> String {
        format!("bucket {}", self.bucket())
    }

    async fn ensure_provisioned(&self) -> Result<ProvisionOutcome> {
        let exists = self.bucket_exists().await?;
        let plan = calculate_provision_plan(exists, &self.resource());

        tracing::info!(plan = %format_provision_plan(&plan), "S3 provisioning plan");

        match plan {
            ProvisionPlan::NoChanges { .. } => Ok(ProvisionOutcome::AlreadyExists),
            ProvisionPlan::Create { .. } => {
                if self.create_bucket().await? {
                    Ok(ProvisionOutcome::Created)
                } else {
                    Ok(ProvisionOutcome::AlreadyExists)
                }
            }
        }
    }
}
