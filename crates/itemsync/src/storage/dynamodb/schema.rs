//! Item table schema and creation.

use std::time::Duration;

use aws_sdk_dynamodb::operation::create_table::CreateTableError;
use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType,
    TableStatus,
};
use aws_sdk_dynamodb::Client;
use itemsync_core::storage::{RepositoryError, Result};

use super::conversions::ID_ATTRIBUTE;
use super::error::map_sdk_error;

/// Maximum number of status polls while waiting for a new table.
const ACTIVATION_MAX_ATTEMPTS: u32 = 30;
/// Delay between status polls.
const ACTIVATION_POLL_DELAY: Duration = Duration::from_secs(1);

/// Table schema configuration (pure data).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    /// String partition key. The table has no sort key.
    pub partition_key: String,
}

/// Returns the table configuration for items.
pub fn items_table_config(table_name: &str) -> TableConfig {
    TableConfig {
        table_name: table_name.to_string(),
        partition_key: ID_ATTRIBUTE.to_string(),
    }
}

/// Fetches the table status, returns None if the table doesn't exist.
pub async fn get_table_status(client: &Client, table_name: &str) -> Result<Option<TableStatus>> {
    match client.describe_table().table_name(table_name).send().await {
        Ok(response) => Ok(Some(
            response
                .table()
                .and_then(|table| table.table_status())
                .cloned()
                .unwrap_or(TableStatus::Active),
        )),
        Err(err) => {
            if matches!(
                err.as_service_error(),
                Some(DescribeTableError::ResourceNotFoundException(_))
            ) {
                Ok(None)
            } else {
                Err(map_sdk_error(err, "DescribeTable"))
            }
        }
    }
}

/// Creates the table with on-demand billing.
///
/// Returns `false` if another process created it first.
pub async fn create_table(client: &Client, config: &TableConfig) -> Result<bool> {
    let key_schema = KeySchemaElement::builder()
        .attribute_name(&config.partition_key)
        .key_type(KeyType::Hash)
        .build()
        .map_err(|e| RepositoryError::InvalidData(e.to_string()))?;

    let attribute_definition = AttributeDefinition::builder()
        .attribute_name(&config.partition_key)
        .attribute_type(ScalarAttributeType::S)
        .build()
        .map_err(|e| RepositoryError::InvalidData(e.to_string()))?;

    let result = client
        .create_table()
        .table_name(&config.table_name)
        .key_schema(key_schema)
        .attribute_definitions(attribute_definition)
        .billing_mode(BillingMode::PayPerRequest)
        .send()
        .await;

    match result {
        Ok(_) => Ok(true),
        Err(err)
            if matches!(
                err.as_service_error(),
                Some(CreateTableError::ResourceInUseException(_))
            ) =>
        {
            Ok(false)
        }
        Err(err) => Err(map_sdk_error(err, "CreateTable")),
    }
}

/// Polls until the table reports ACTIVE.
pub async fn wait_for_table_active(client: &Client, table_name: &str) -> Result<()> {
    for _ in 0..ACTIVATION_MAX_ATTEMPTS {
        if let Some(TableStatus::Active) = get_table_status(client, table_name).await? {
            return Ok(());
        }
        tokio::time::sleep(ACTIVATION_POLL_DELAY).await;
    }

    Err(RepositoryError::QueryFailed(format!(
        "Timeout waiting for table '{table_name}' to become active"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_table_config() {
        let config = items_table_config("items");

        assert_eq!(config.table_name, "items");
        assert_eq!(config.partition_key, "id");
    }
}
