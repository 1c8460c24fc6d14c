//! The `{"data": ...}` envelope wrapping every Salt Edge payload.

use serde::{Deserialize, Serialize};

/// Wrapper used by Salt Edge for all request and response bodies.
///
/// # Example
///
/// ```rust
/// use saltedge_client::types::Envelope;
///
/// let envelope: Envelope<Vec<u32>> = serde_json::from_str(r#"{"data": [1, 2]}"#).unwrap();
/// assert_eq!(envelope.into_data(), vec![1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// The wrapped payload.
    pub data: T,
    /// Pagination metadata, present on list responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

impl<T> Envelope<T> {
    /// Wrap a payload.
    pub fn new(data: T) -> Self {
        Self { data, meta: None }
    }

    /// Unwrap the payload, discarding any metadata.
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Pagination metadata attached to list responses.
///
/// The client does not follow it; it is exposed for callers that want to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Id to pass as `from_id` to fetch the next page.
    #[serde(default)]
    pub next_id: Option<String>,
    /// Full path of the next page.
    #[serde(default)]
    pub next_page: Option<String>,
}

impl PageMeta {
    /// Whether the service reported more pages.
    pub fn has_next(&self) -> bool {
        self.next_id.is_some()
    }
}
