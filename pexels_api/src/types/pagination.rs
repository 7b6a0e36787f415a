use serde::{Deserialize, Serialize};

/// Paging details embedded in every list payload.
///
/// `per_page` defaults to 15 and is capped at 80 by the API.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Pagination {
    pub total_results: u32,
    pub page: u16,
    pub per_page: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
}

impl Pagination {
    /// Returns `true` when the API reported a following page.
    pub fn has_next(&self) -> bool {
        self.next_page.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Returns `true` when the API reported a preceding page.
    pub fn has_prev(&self) -> bool {
        self.prev_page.as_deref().is_some_and(|s| !s.is_empty())
    }
}
