mod error;
mod http_mapping;
mod id;
mod operations;
mod requests;
mod types;

pub use error::{ItemError, ItemServiceError};
pub use http_mapping::{item_error_message, item_error_to_status_code};
pub use id::ItemIdGenerator;
pub use operations::{rename_item, validate_item_name};
pub use requests::{DeleteConfirmation, ItemPayload};
pub use types::Item;
