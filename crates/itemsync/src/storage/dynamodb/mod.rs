//! DynamoDB item table.
//!
//! Items live in a single table keyed by `id` (string partition key, no sort key).

mod conversions;
mod error;
mod schema;
mod table;

pub use table::DynamoDbItemTable;
