use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query params for the category suggestion lookup
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct SuggestCategoryQuery {
    /// Item name to look up
    pub name: String,
}

/// Suggested category for an item name; empty when there is none
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategorySuggestionDto {
    pub category: String,
}
