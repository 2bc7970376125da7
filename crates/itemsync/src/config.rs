use std::env;

/// Default endpoint, pointing at a local LocalStack instance.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:4566";

/// Storage configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Endpoint override for DynamoDB and S3. `None` uses the SDK default endpoints.
    pub endpoint_url: Option<String>,
    /// AWS region (default: "us-east-1")
    pub region: String,
    /// Static access key id (default: "test")
    pub access_key_id: String,
    /// Static secret access key (default: "test")
    pub secret_access_key: String,
    /// DynamoDB table holding items (default: "items")
    pub table_name: String,
    /// S3 bucket mirroring items (default: "items-bucket")
    pub bucket_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `AWS_ENDPOINT` - Endpoint override (default: "http://localhost:4566", empty disables)
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `AWS_ACCESS_KEY_ID` - Access key id (default: "test")
    /// - `AWS_SECRET_ACCESS_KEY` - Secret access key (default: "test")
    /// - `DYNAMODB_TABLE_NAME` - Table name (default: "items")
    /// - `S3_BUCKET_NAME` - Bucket name (default: "items-bucket")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let endpoint_url = match lookup("AWS_ENDPOINT") {
            Some(url) if url.is_empty() => None,
            Some(url) => Some(url),
            None => Some(DEFAULT_ENDPOINT.to_string()),
        };

        Self {
            endpoint_url,
            region: lookup("AWS_REGION").unwrap_or_else(|| "us-east-1".to_string()),
            access_key_id: lookup("AWS_ACCESS_KEY_ID").unwrap_or_else(|| "test".to_string()),
            secret_access_key: lookup("AWS_SECRET_ACCESS_KEY")
                .unwrap_or_else(|| "test".to_string()),
            table_name: lookup("DYNAMODB_TABLE_NAME").unwrap_or_else(|| "items".to_string()),
            bucket_name: lookup("S3_BUCKET_NAME").unwrap_or_else(|| "items-bucket".to_string()),
        }
    }

    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local endpoint ({url})"),
            None => format!("AWS (region: {})", self.region),
        }
    }
}
