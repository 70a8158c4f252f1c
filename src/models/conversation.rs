//! Conversation list envelope types.
//!
//! FreeScout wraps list results in a HAL-style envelope. Only the two fields
//! the pagination loop reads are typed; the conversations themselves stay
//! opaque `Value`s so the adapter never over-specifies an API it does not own.

use serde::Deserialize;
use serde_json::Value;

/// One page of a conversation list response.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationPage {
    /// Embedded resources per the HAL convention.
    #[serde(rename = "_embedded")]
    pub embedded: EmbeddedConversations,

    /// Server-reported pagination state.
    pub page: PageMetadata,
}

/// The `_embedded` block of a list page.
#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddedConversations {
    /// The conversations on this page, in server order.
    #[serde(default)]
    pub conversations: Vec<Value>,
}

/// Server-declared pagination metadata.
///
/// `total_pages` may change between pages, e.g. if records are added while
/// the loop runs; each page's value is taken as current, no reconciliation.
#[derive(Debug, Clone, Deserialize)]
pub struct PageMetadata {
    /// Total number of pages the server currently reports.
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

/// Result of a `read` operation.
///
/// A `read` with an `id` yields a single conversation; without one it yields
/// the flat accumulation of every fetched list page.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadResponse {
    /// A single conversation, with `_embedded.threads` lifted to a
    /// top-level `threads` field.
    Conversation(Value),
    /// Accumulated conversations across pages, in page order.
    Conversations(Vec<Value>),
}

impl ReadResponse {
    /// Returns the single conversation, if this was an `id` read.
    pub fn into_conversation(self) -> Option<Value> {
        match self {
            ReadResponse::Conversation(value) => Some(value),
            ReadResponse::Conversations(_) => None,
        }
    }

    /// Returns the accumulated list, if this was a list read.
    pub fn into_conversations(self) -> Option<Vec<Value>> {
        match self {
            ReadResponse::Conversation(_) => None,
            ReadResponse::Conversations(items) => Some(items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_deserializes_envelope_fields() {
        let page: ConversationPage = serde_json::from_value(json!({
            "_embedded": {
                "conversations": [{"id": 1}, {"id": 2}]
            },
            "page": {
                "size": 50,
                "totalElements": 2,
                "totalPages": 1,
                "number": 1
            }
        }))
        .unwrap();

        assert_eq!(page.embedded.conversations.len(), 2);
        assert_eq!(page.page.total_pages, 1);
    }

    #[test]
    fn test_page_tolerates_missing_conversations() {
        let page: ConversationPage = serde_json::from_value(json!({
            "_embedded": {},
            "page": {"totalPages": 0}
        }))
        .unwrap();

        assert!(page.embedded.conversations.is_empty());
    }
}
