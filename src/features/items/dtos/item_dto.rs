use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::core::config::InventoryConfig;
use crate::features::items::models::{Item, ItemChanges, NewItem};
use crate::shared::validation::{non_negative_decimal, not_blank, positive_decimal};

/// Request DTO for creating an item
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemDto {
    #[validate(custom(function = not_blank), length(max = 255, message = "Name must not exceed 255 characters"))]
    pub name: String,

    #[validate(custom(function = non_negative_decimal))]
    pub quantity: Decimal,

    #[validate(custom(function = not_blank), length(max = 50, message = "Unit must not exceed 50 characters"))]
    pub unit: String,

    #[validate(custom(function = not_blank), length(max = 255, message = "Location must not exceed 255 characters"))]
    pub location: String,

    pub category: Option<String>,

    /// Defaults to the creation time when omitted
    pub purchase_date: Option<DateTime<Utc>>,

    pub expiration_date: Option<NaiveDate>,

    #[validate(length(max = 500, message = "Notes must not exceed 500 characters"))]
    pub notes: Option<String>,
}

impl From<CreateItemDto> for NewItem {
    fn from(dto: CreateItemDto) -> Self {
        Self {
            name: dto.name,
            quantity: dto.quantity,
            unit: dto.unit,
            location: dto.location,
            category: dto.category,
            purchase_date: dto.purchase_date,
            expiration_date: dto.expiration_date,
            notes: dto.notes,
        }
    }
}

/// Request DTO for editing an item. Replaces all mutable fields; the id
/// and purchase date stay as created.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemDto {
    #[validate(custom(function = not_blank), length(max = 255, message = "Name must not exceed 255 characters"))]
    pub name: String,

    #[validate(custom(function = non_negative_decimal))]
    pub quantity: Decimal,

    #[validate(custom(function = not_blank), length(max = 50, message = "Unit must not exceed 50 characters"))]
    pub unit: String,

    #[validate(custom(function = not_blank), length(max = 255, message = "Location must not exceed 255 characters"))]
    pub location: String,

    pub category: Option<String>,

    pub expiration_date: Option<NaiveDate>,

    #[validate(length(max = 500, message = "Notes must not exceed 500 characters"))]
    pub notes: Option<String>,

    #[serde(default)]
    pub finished: bool,
}

impl From<UpdateItemDto> for ItemChanges {
    fn from(dto: UpdateItemDto) -> Self {
        Self {
            name: dto.name,
            quantity: dto.quantity,
            unit: dto.unit,
            location: dto.location,
            category: dto.category,
            expiration_date: dto.expiration_date,
            notes: dto.notes,
            finished: dto.finished,
        }
    }
}

/// Request DTO for consuming part of an item's quantity
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConsumeItemDto {
    /// May exceed the current quantity; the item is then finished at zero
    #[validate(custom(function = positive_decimal))]
    pub amount: Decimal,
}

/// Response DTO for an item, with its status against the configured
/// thresholds already computed
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponseDto {
    pub id: Uuid,
    pub name: String,
    pub quantity: Decimal,
    pub unit: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub purchase_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub finished: bool,
    pub expired: bool,
    pub expiring_soon: bool,
    pub low_quantity: bool,
}

impl ItemResponseDto {
    pub fn from_item(item: Item, config: &InventoryConfig) -> Self {
        let expired = item.is_expired();
        let expiring_soon = item.is_expiring_soon(config.warning_days);
        let low_quantity = item.is_low_quantity(config.low_quantity_threshold);

        Self {
            id: item.id,
            name: item.name,
            quantity: item.quantity,
            unit: item.unit,
            location: item.location,
            category: item.category,
            purchase_date: item.purchase_date,
            expiration_date: item.expiration_date,
            notes: item.notes,
            finished: item.finished,
            expired,
            expiring_soon,
            low_quantity,
        }
    }
}

/// Query params for the dashboard listing
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct DashboardQuery {
    /// Location filter; absent, blank or "all" means every location
    pub location: Option<String>,
    /// Category filter; absent, blank or "all" means every category
    pub category: Option<String>,
}

/// Dashboard response: the filtered active items plus everything the
/// filter dropdowns and warning badges need
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDto {
    pub items: Vec<ItemResponseDto>,
    pub locations: Vec<String>,
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_category: Option<String>,
    pub warning_days: u32,
    pub low_quantity_threshold: Decimal,
    pub expired_count: i64,
    pub expiring_soon_count: i64,
    pub low_quantity_count: i64,
}

/// Query params for the on/before-date expiry listing
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ExpiringQuery {
    /// Items expiring on or before this date are returned
    pub date: NaiveDate,
}

/// Result of an expiry check, for a scheduled caller or a notifier
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpiryCheckDto {
    pub expired_items: Vec<ItemResponseDto>,
    pub expiring_soon_items: Vec<ItemResponseDto>,
    pub has_warnings: bool,
    pub total_warnings: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> CreateItemDto {
        CreateItemDto {
            name: "Milk".to_string(),
            quantity: Decimal::from(2),
            unit: "l".to_string(),
            location: "Fridge".to_string(),
            category: None,
            purchase_date: None,
            expiration_date: None,
            notes: None,
        }
    }

    #[test]
    fn test_valid_create_dto() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut dto = valid_create();
        dto.name = "   ".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let mut dto = valid_create();
        dto.quantity = Decimal::from(-1);
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_zero_quantity_allowed() {
        let mut dto = valid_create();
        dto.quantity = Decimal::ZERO;
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_overlong_notes_rejected() {
        let mut dto = valid_create();
        dto.notes = Some("x".repeat(501));
        assert!(dto.validate().is_err());

        dto.notes = Some("x".repeat(500));
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_dto_accepts_camel_case_payload() {
        let dto: CreateItemDto = serde_json::from_value(serde_json::json!({
            "name": "Yoghurt",
            "quantity": "1.5",
            "unit": "kg",
            "location": "Fridge",
            "expirationDate": "2026-09-01"
        }))
        .unwrap();

        assert_eq!(dto.quantity, Decimal::new(15, 1));
        assert_eq!(
            dto.expiration_date,
            NaiveDate::from_ymd_opt(2026, 9, 1)
        );
        assert!(dto.category.is_none());
    }

    #[test]
    fn test_update_dto_finished_defaults_to_false() {
        let dto: UpdateItemDto = serde_json::from_value(serde_json::json!({
            "name": "Yoghurt",
            "quantity": 1,
            "unit": "kg",
            "location": "Fridge"
        }))
        .unwrap();

        assert!(!dto.finished);
    }

    #[test]
    fn test_consume_amount_must_be_positive() {
        let dto = ConsumeItemDto {
            amount: Decimal::ZERO,
        };
        assert!(dto.validate().is_err());

        let dto = ConsumeItemDto {
            amount: Decimal::new(5, 1),
        };
        assert!(dto.validate().is_ok());
    }
}
