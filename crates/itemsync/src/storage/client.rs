//! AWS SDK client setup.
//!
//! One `SdkConfig` is loaded at startup and both service clients are derived from it.

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_dynamodb::config::Credentials;

use crate::config::Config;

/// Provider name reported by the static credentials.
const CREDENTIALS_PROVIDER: &str = "itemsync-env";

/// Loads the shared SDK configuration: region, static credentials and the optional
/// endpoint override.
pub async fn load_sdk_config(config: &Config) -> SdkConfig {
    let credentials = Credentials::new(
        config.access_key_id.clone(),
        config.secret_access_key.clone(),
        None,
        None,
        CREDENTIALS_PROVIDER,
    );

    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .credentials_provider(credentials);

    if let Some(endpoint) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }

    loader.load().await
}

/// Creates a DynamoDB client.
pub fn dynamodb_client(sdk_config: &SdkConfig) -> aws_sdk_dynamodb::Client {
    aws_sdk_dynamodb::Client::new(sdk_config)
}

/// Creates an S3 client using path-style addressing (`endpoint/bucket/key`), which
/// local S3-compatible endpoints require.
pub fn s3_client(sdk_config: &SdkConfig) -> aws_sdk_s3::Client {
    let s3_config = aws_sdk_s3::config::Builder::from(sdk_config)
        .force_path_style(true)
        .build();
    aws_sdk_s3::Client::from_conf(s3_config)
}
