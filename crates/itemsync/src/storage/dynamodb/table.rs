//! DynamoDB item table implementation.
//!
//! Implements the storage traits from `itemsync_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use itemsync_core::item::Item;
use itemsync_core::provision::{
    calculate_provision_plan, format_provision_plan, ProvisionOutcome, ProvisionPlan,
};
use itemsync_core::storage::{ItemTable, Provision, Result};

use super::conversions::{
    attributes_to_item, item_key, item_to_attributes, next_start_key, ID_ATTRIBUTE,
};
use super::error::{map_put_item_error, map_sdk_error};
use super::schema::{self, items_table_config};

/// DynamoDB-backed item table.
pub struct DynamoDbItemTable {
    client: Client,
    table_name: String,
}

impl DynamoDbItemTable {
    /// Creates a new table adapter with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl ItemTable for DynamoDbItemTable {
    async fn get_item(&self, id: &str) -> Result<Option<Item>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(item_key(id)))
            .send()
            .await
            .map_err(|e| map_sdk_error(e, "GetItem"))?;

        match result.item {
            Some(attributes) => Ok(Some(attributes_to_item(&attributes)?)),
            None => Ok(None),
        }
    }

    async fn put_item_if_absent(&self, item: &Item) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_to_attributes(item)))
            .condition_expression(format!("attribute_not_exists({ID_ATTRIBUTE})"))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, item.id.clone()))?;

        Ok(())
    }

    async fn put_item(&self, item: &Item) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_to_attributes(item)))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, item.id.clone()))?;

        Ok(())
    }

    async fn delete_item(&self, id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(item_key(id)))
            .send()
            .await
            .map_err(|e| map_sdk_error(e, "DeleteItem"))?;

        Ok(())
    }

    async fn scan_items(&self) -> Result<Vec<Item>> {
        let mut items = Vec::new();
        let mut start_key = None;

        // Scan pages are capped at 1 MB; follow LastEvaluatedKey to the end
        loop {
            let page = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(|e| map_sdk_error(e, "Scan"))?;

            for attributes in page.items() {
                items.push(attributes_to_item(attributes)?);
            }

            start_key = next_start_key(page.last_evaluated_key);
            if start_key.is_none() {
                break;
            }
        }

        Ok(items)
    }
}

#[async_trait]
impl Provision for DynamoDbItemTable {
    fn resource(&self) -> String {
        format!("table {}", self.table_name())
    }

    async fn ensure_provisioned(&self) -> Result<ProvisionOutcome> {
        let status = schema::get_table_status(&self.client, &self.table_name).await?;
        let plan = calculate_provision_plan(status.is_some(), &self.resource());

        tracing::info!(plan = %format_provision_plan(&plan), "DynamoDB provisioning plan");

        match plan {
            ProvisionPlan::NoChanges { .. } => Ok(ProvisionOutcome::AlreadyExists),
            ProvisionPlan::Create { .. } => {
                let config = items_table_config(&self.table_name);
                let created = schema::create_table(&self.client, &config).await?;
                schema::wait_for_table_active(&self.client, &self.table_name).await?;

                if created {
                    Ok(ProvisionOutcome::Created)
                } else {
                    Ok(ProvisionOutcome::AlreadyExists)
                }
            }
        }
    }
}
