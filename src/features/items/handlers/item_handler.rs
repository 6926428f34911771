use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::items::dtos::{
    ConsumeItemDto, CreateItemDto, DashboardDto, DashboardQuery, ExpiringQuery, ExpiryCheckDto,
    ItemResponseDto, UpdateItemDto,
};
use crate::features::items::routes::ItemsState;
use crate::shared::types::ApiResponse;

/// Dashboard listing of active items
///
/// Optionally filtered to one location and one category; "all" (or an
/// absent/blank value) disables the respective filter.
#[utoipa::path(
    get,
    path = "/api/items",
    params(DashboardQuery),
    responses(
        (status = 200, description = "Active items with filter metadata", body = ApiResponse<DashboardDto>),
    ),
    tag = "items",
    security(
        ("basic_auth" = [])
    )
)]
pub async fn list_dashboard(
    State(state): State<ItemsState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<ApiResponse<DashboardDto>>> {
    let dashboard = state
        .inventory
        .list_dashboard(query.location, query.category)
        .await?;
    Ok(Json(ApiResponse::success(Some(dashboard), None)))
}

/// Add a new item
///
/// When no category is given, the category used the last time an item
/// with this name was purchased is applied automatically.
#[utoipa::path(
    post,
    path = "/api/items",
    request_body = CreateItemDto,
    responses(
        (status = 200, description = "Item created", body = ApiResponse<ItemResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "items",
    security(
        ("basic_auth" = [])
    )
)]
pub async fn create_item(
    State(state): State<ItemsState>,
    AppJson(mut dto): AppJson<CreateItemDto>,
) -> Result<Json<ApiResponse<ItemResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    // Auto-suggest category if not set (from previous items with same name)
    if dto.category.as_deref().map_or(true, |c| c.trim().is_empty()) {
        if let Some(suggested) = state.advisor.suggest_category(&dto.name).await? {
            dto.category = Some(suggested);
        }
    }

    let item = state.inventory.create(dto).await?;
    let message = format!("{} added successfully!", item.name);
    Ok(Json(ApiResponse::success(Some(item), Some(message))))
}

/// Fetch a single item by id
#[utoipa::path(
    get,
    path = "/api/items/{id}",
    params(("id" = Uuid, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item found", body = ApiResponse<ItemResponseDto>),
        (status = 404, description = "Item not found")
    ),
    tag = "items",
    security(
        ("basic_auth" = [])
    )
)]
pub async fn get_item(
    State(state): State<ItemsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ItemResponseDto>>> {
    let item = state.inventory.get(id).await?;
    Ok(Json(ApiResponse::success(Some(item), None)))
}

/// Edit an item
///
/// Replaces the mutable fields; id and purchase date are kept.
#[utoipa::path(
    put,
    path = "/api/items/{id}",
    params(("id" = Uuid, Path, description = "Item id")),
    request_body = UpdateItemDto,
    responses(
        (status = 200, description = "Item updated", body = ApiResponse<ItemResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Item not found")
    ),
    tag = "items",
    security(
        ("basic_auth" = [])
    )
)]
pub async fn update_item(
    State(state): State<ItemsState>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateItemDto>,
) -> Result<Json<ApiResponse<ItemResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let item = state.inventory.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(item),
        Some("Item updated successfully!".to_string()),
    )))
}

/// Consume part of an item's quantity
#[utoipa::path(
    post,
    path = "/api/items/{id}/consume",
    params(("id" = Uuid, Path, description = "Item id")),
    request_body = ConsumeItemDto,
    responses(
        (status = 200, description = "Quantity decreased (item finished when it reached zero)", body = ApiResponse<ItemResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Item not found")
    ),
    tag = "items",
    security(
        ("basic_auth" = [])
    )
)]
pub async fn consume_item(
    State(state): State<ItemsState>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<ConsumeItemDto>,
) -> Result<Json<ApiResponse<ItemResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let item = state.inventory.consume(id, dto.amount).await?;
    let message = if item.finished {
        format!("{} is now finished!", item.name)
    } else {
        format!("Removed {} {} of {}", dto.amount, item.unit, item.name)
    };
    Ok(Json(ApiResponse::success(Some(item), Some(message))))
}

/// Mark an item as finished
#[utoipa::path(
    post,
    path = "/api/items/{id}/finish",
    params(("id" = Uuid, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item finished", body = ApiResponse<ItemResponseDto>),
        (status = 404, description = "Item not found")
    ),
    tag = "items",
    security(
        ("basic_auth" = [])
    )
)]
pub async fn finish_item(
    State(state): State<ItemsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ItemResponseDto>>> {
    let item = state.inventory.finish(id).await?;
    let message = format!("{} marked as finished", item.name);
    Ok(Json(ApiResponse::success(Some(item), Some(message))))
}

/// Restore a finished item back to the active inventory
#[utoipa::path(
    post,
    path = "/api/items/{id}/restore",
    params(("id" = Uuid, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item restored", body = ApiResponse<ItemResponseDto>),
        (status = 404, description = "Item not found")
    ),
    tag = "items",
    security(
        ("basic_auth" = [])
    )
)]
pub async fn restore_item(
    State(state): State<ItemsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ItemResponseDto>>> {
    let item = state.inventory.restore(id).await?;
    let message = format!("{} restored to active items", item.name);
    Ok(Json(ApiResponse::success(Some(item), Some(message))))
}

/// Permanently delete an item
#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    params(("id" = Uuid, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item deleted"),
        (status = 404, description = "Item not found")
    ),
    tag = "items",
    security(
        ("basic_auth" = [])
    )
)]
pub async fn delete_item(
    State(state): State<ItemsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    state.inventory.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Item deleted permanently".to_string()),
    )))
}

/// History of finished items, newest purchase first
#[utoipa::path(
    get,
    path = "/api/items/history",
    responses(
        (status = 200, description = "Finished items", body = ApiResponse<Vec<ItemResponseDto>>),
    ),
    tag = "items",
    security(
        ("basic_auth" = [])
    )
)]
pub async fn list_history(
    State(state): State<ItemsState>,
) -> Result<Json<ApiResponse<Vec<ItemResponseDto>>>> {
    let items = state.inventory.list_history().await?;
    Ok(Json(ApiResponse::success(Some(items), None)))
}

/// Active items expiring on or before a date
#[utoipa::path(
    get,
    path = "/api/items/expiring",
    params(ExpiringQuery),
    responses(
        (status = 200, description = "Items expiring by the given date", body = ApiResponse<Vec<ItemResponseDto>>),
    ),
    tag = "items",
    security(
        ("basic_auth" = [])
    )
)]
pub async fn list_expiring(
    State(state): State<ItemsState>,
    Query(query): Query<ExpiringQuery>,
) -> Result<Json<ApiResponse<Vec<ItemResponseDto>>>> {
    let items = state.inventory.items_expiring_by(query.date).await?;
    Ok(Json(ApiResponse::success(Some(items), None)))
}

/// Expiry check for scheduled callers
///
/// Returns the currently expired and expiring-soon active items with
/// warning totals, ready to hand to a notifier.
#[utoipa::path(
    get,
    path = "/api/items/expiry-check",
    responses(
        (status = 200, description = "Expiry summary", body = ApiResponse<ExpiryCheckDto>),
    ),
    tag = "items",
    security(
        ("basic_auth" = [])
    )
)]
pub async fn expiry_check(
    State(state): State<ItemsState>,
) -> Result<Json<ApiResponse<ExpiryCheckDto>>> {
    let result = state.inventory.check_expiring_items().await?;
    Ok(Json(ApiResponse::success(Some(result), None)))
}
