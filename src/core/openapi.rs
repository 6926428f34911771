use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::items::{dtos as items_dtos, handlers as items_handlers};
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Items
        items_handlers::list_dashboard,
        items_handlers::create_item,
        items_handlers::get_item,
        items_handlers::update_item,
        items_handlers::consume_item,
        items_handlers::finish_item,
        items_handlers::restore_item,
        items_handlers::delete_item,
        items_handlers::list_history,
        items_handlers::list_expiring,
        items_handlers::expiry_check,
        // Categories
        categories_handlers::list_categories,
        categories_handlers::suggest_category,
    ),
    components(
        schemas(
            // Items
            items_dtos::CreateItemDto,
            items_dtos::UpdateItemDto,
            items_dtos::ConsumeItemDto,
            items_dtos::ItemResponseDto,
            items_dtos::DashboardDto,
            items_dtos::ExpiryCheckDto,
            ApiResponse<items_dtos::ItemResponseDto>,
            ApiResponse<Vec<items_dtos::ItemResponseDto>>,
            ApiResponse<items_dtos::DashboardDto>,
            ApiResponse<items_dtos::ExpiryCheckDto>,
            // Categories
            categories_dtos::CategorySuggestionDto,
            ApiResponse<Vec<String>>,
            ApiResponse<categories_dtos::CategorySuggestionDto>,
        )
    ),
    tags(
        (name = "items", description = "Fridge inventory items and their lifecycle"),
        (name = "categories", description = "Learned category vocabulary and suggestions"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Fridge Inventory API",
        version = "0.1.0",
        description = "Household fridge inventory tracker",
    )
)]
pub struct ApiDoc;

/// Adds the shared-credential Basic auth scheme to the OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
