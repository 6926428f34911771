use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::Result;
use crate::features::categories::dtos::{CategorySuggestionDto, SuggestCategoryQuery};
use crate::features::categories::services::CategoryAdvisor;
use crate::shared::types::ApiResponse;

/// List all categories in use
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "Distinct categories, sorted", body = ApiResponse<Vec<String>>),
    ),
    tag = "categories",
    security(
        ("basic_auth" = [])
    )
)]
pub async fn list_categories(
    State(advisor): State<Arc<CategoryAdvisor>>,
) -> Result<Json<ApiResponse<Vec<String>>>> {
    let categories = advisor.list_categories().await?;
    Ok(Json(ApiResponse::success(Some(categories), None)))
}

/// Suggest a category for an item name
///
/// Returns an empty category when the name is blank or was never seen
/// with a category before.
#[utoipa::path(
    get,
    path = "/api/categories/suggest",
    params(SuggestCategoryQuery),
    responses(
        (status = 200, description = "Suggestion (possibly empty)", body = ApiResponse<CategorySuggestionDto>),
    ),
    tag = "categories",
    security(
        ("basic_auth" = [])
    )
)]
pub async fn suggest_category(
    State(advisor): State<Arc<CategoryAdvisor>>,
    Query(query): Query<SuggestCategoryQuery>,
) -> Result<Json<ApiResponse<CategorySuggestionDto>>> {
    let suggestion = advisor.suggest_category(&query.name).await?;
    let dto = CategorySuggestionDto {
        category: suggestion.unwrap_or_default(),
    };
    Ok(Json(ApiResponse::success(Some(dto), None)))
}
