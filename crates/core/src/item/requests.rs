//! API request and response types for item operations.

use serde::{Deserialize, Serialize};

/// Body of `POST /items` and `PUT /items/{id}`.
///
/// `name` is optional at the decoding layer so that a missing field reaches
/// validation instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ItemPayload {
    /// The supplied name, or an empty string when absent.
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// Body returned by `DELETE /items/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

impl DeleteConfirmation {
    pub fn deleted() -> Self {
        Self {
            message: "deleted".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_without_name_decodes() {
        let payload: ItemPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.name, None);
        assert_eq!(payload.name_or_empty(), "");
    }

    #[test]
    fn test_payload_ignores_unknown_fields() {
        let payload: ItemPayload =
            serde_json::from_str(r#"{"name":"widget","id":"client-chosen"}"#).unwrap();
        assert_eq!(payload.name_or_empty(), "widget");
    }

    #[test]
    fn test_delete_confirmation_shape() {
        let json = serde_json::to_value(DeleteConfirmation::deleted()).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "deleted" }));
    }
}
