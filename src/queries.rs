//! Operation parameter structs.
//!
//! These are the query objects the host platform's data layer hands to each
//! CRUD operation. Field names follow the platform's wire format
//! (`mailboxID`, `pageLimit`), so they deserialize directly from the query
//! JSON the platform stores.

use serde::Deserialize;
use serde_json::Value;

/// Parameters for the `create` operation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuery {
    /// The JSON payload to POST to the base resource URL.
    pub json: Value,
}

/// Parameters for the `update` operation.
///
/// The target resource identity must already be encoded in the base URL or
/// in the payload itself; this adapter does not validate it.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateQuery {
    /// The JSON payload to PUT to the base resource URL.
    pub json: Value,
}

/// Parameters for the `delete` operation.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteQuery {
    /// ID appended to the base URL as `<base>/<id>`.
    pub id: String,
}

/// Parameters for the `read` operation.
///
/// With an `id`, a single conversation is fetched; without one, the
/// conversation list is paged through and accumulated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReadQuery {
    /// Conversation ID for a single-resource read.
    #[serde(default)]
    pub id: Option<String>,

    /// Restricts the list to one mailbox (query parameter `mailboxId`).
    #[serde(default, rename = "mailboxID")]
    pub mailbox_id: Option<String>,

    /// Caps the number of pages fetched during list pagination,
    /// independent of the server-reported total. `0` means no limit.
    #[serde(default, rename = "pageLimit")]
    pub page_limit: u32,

    /// Raw query string that replaces the entire query, including any
    /// `mailboxId` set above. Callers wanting both must encode the mailbox
    /// filter into `params` themselves.
    #[serde(default)]
    pub params: Option<String>,
}

impl ReadQuery {
    /// Creates an empty read query (lists every conversation).
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets a single conversation by ID.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Restricts the list to one mailbox.
    pub fn with_mailbox_id(mut self, mailbox_id: impl Into<String>) -> Self {
        self.mailbox_id = Some(mailbox_id.into());
        self
    }

    /// Caps the number of pages fetched.
    pub fn with_page_limit(mut self, page_limit: u32) -> Self {
        self.page_limit = page_limit;
        self
    }

    /// Replaces the entire query string with a raw, pre-encoded value.
    pub fn with_params(mut self, params: impl Into<String>) -> Self {
        self.params = Some(params.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_read_query_deserializes_wire_names() {
        let query: ReadQuery = serde_json::from_value(json!({
            "mailboxID": "3",
            "pageLimit": 2
        }))
        .unwrap();

        assert_eq!(query.mailbox_id.as_deref(), Some("3"));
        assert_eq!(query.page_limit, 2);
        assert!(query.id.is_none());
        assert!(query.params.is_none());
    }

    #[test]
    fn test_read_query_defaults() {
        let query: ReadQuery = serde_json::from_value(json!({})).unwrap();
        assert_eq!(query.page_limit, 0);
    }

    #[test]
    fn test_create_query_carries_payload() {
        let query: CreateQuery = serde_json::from_value(json!({
            "json": {"subject": "Printer down"}
        }))
        .unwrap();

        assert_eq!(query.json["subject"], "Printer down");
    }
}
