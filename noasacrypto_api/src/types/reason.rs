//! Payload shapes returned by the reasons endpoints.

use serde::{Deserialize, Serialize};

use super::Category;

/// A single reason as served by the API.
///
/// All four fields are required; a payload missing any of them fails to
/// decode instead of yielding a partial value.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReasonResult {
    /// The humorous text.
    pub reason: String,

    /// Human-readable category label.
    pub category: String,

    /// Machine identifier of the category, e.g. `rug-check`.
    pub category_id: String,

    /// Decorative marker for the category.
    pub emoji: String,
}

impl ReasonResult {
    /// The built-in [`Category`] matching `category_id`, if there is one.
    pub fn known_category(&self) -> Option<Category> {
        self.category_id.parse().ok()
    }
}

/// Error body the API sends alongside non-success statuses.
#[derive(Deserialize, Debug)]
pub(crate) struct ErrorBody {
    pub(crate) error: Option<String>,
}
