use std::sync::Arc;

use chrono::{Days, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::core::config::InventoryConfig;
use crate::core::error::Result;
use crate::features::items::dtos::{
    CreateItemDto, DashboardDto, ExpiryCheckDto, ItemResponseDto, UpdateItemDto,
};
use crate::features::items::models::Item;
use crate::features::items::services::ItemStore;

/// Selector value meaning "no filter" for location and category.
const ALL: &str = "all";

/// True when a filter selector asks for everything: absent, blank, or
/// the literal "all" (case-insensitive).
fn selects_all(selector: Option<&str>) -> bool {
    match selector {
        None => true,
        Some(s) => s.trim().is_empty() || s.eq_ignore_ascii_case(ALL),
    }
}

/// Keep only items whose category equals the selected one exactly.
fn filter_by_category(items: Vec<Item>, category: &str) -> Vec<Item> {
    items
        .into_iter()
        .filter(|item| item.category.as_deref() == Some(category))
        .collect()
}

/// Domain operations over the item store. The only place where quantity
/// and the finished flag change outside of a plain field edit.
pub struct InventoryService {
    store: Arc<ItemStore>,
    config: InventoryConfig,
}

impl InventoryService {
    pub fn new(store: Arc<ItemStore>, config: InventoryConfig) -> Self {
        Self { store, config }
    }

    pub async fn create(&self, dto: CreateItemDto) -> Result<ItemResponseDto> {
        let item = self.store.create(&dto.into()).await?;

        tracing::info!("Item created: id={}, name={}", item.id, item.name);

        Ok(self.to_response(item))
    }

    pub async fn get(&self, id: Uuid) -> Result<ItemResponseDto> {
        let item = self.store.get(id).await?;
        Ok(self.to_response(item))
    }

    pub async fn update(&self, id: Uuid, dto: UpdateItemDto) -> Result<ItemResponseDto> {
        let item = self.store.update(id, &dto.into()).await?;

        tracing::info!("Item updated: id={}", item.id);

        Ok(self.to_response(item))
    }

    /// Active items filtered by location and category, together with the
    /// dropdown values, thresholds and warning counts the dashboard shows.
    pub async fn list_dashboard(
        &self,
        location: Option<String>,
        category: Option<String>,
    ) -> Result<DashboardDto> {
        let items = if selects_all(location.as_deref()) {
            self.store.list_active().await?
        } else {
            // selects_all returned false, so the selector is present
            let location = location.as_deref().unwrap_or_default();
            self.store.list_active_by_location(location.trim()).await?
        };

        let items = match category.as_deref() {
            Some(selected) if !selects_all(Some(selected)) => {
                filter_by_category(items, selected)
            }
            _ => items,
        };

        let locations = self.store.distinct_locations().await?;
        let categories = self.store.distinct_categories().await?;

        let items: Vec<ItemResponseDto> =
            items.into_iter().map(|item| self.to_response(item)).collect();

        let expired_count = items.iter().filter(|i| i.expired).count() as i64;
        let expiring_soon_count = items.iter().filter(|i| i.expiring_soon).count() as i64;
        let low_quantity_count = items.iter().filter(|i| i.low_quantity).count() as i64;

        Ok(DashboardDto {
            items,
            locations,
            categories,
            selected_location: location,
            selected_category: category,
            warning_days: self.config.warning_days,
            low_quantity_threshold: self.config.low_quantity_threshold,
            expired_count,
            expiring_soon_count,
            low_quantity_count,
        })
    }

    /// Decrease quantity by `amount` (validated positive upstream).
    /// Reaching or crossing zero clamps the quantity and finishes the
    /// item; over-consumption is not an error.
    pub async fn consume(&self, id: Uuid, amount: Decimal) -> Result<ItemResponseDto> {
        let item = self.store.get(id).await?;
        let (quantity, finished) = item.apply_consumption(amount);

        let item = self
            .store
            .set_quantity_and_finished(id, quantity, finished)
            .await?;

        tracing::info!(
            "Item consumed: id={}, amount={}, remaining={}, finished={}",
            item.id,
            amount,
            item.quantity,
            item.finished
        );

        Ok(self.to_response(item))
    }

    /// Mark as finished without touching the quantity.
    pub async fn finish(&self, id: Uuid) -> Result<ItemResponseDto> {
        let item = self.store.set_finished(id, true).await?;
        Ok(self.to_response(item))
    }

    /// Bring a finished item back into the active inventory.
    pub async fn restore(&self, id: Uuid) -> Result<ItemResponseDto> {
        let item = self.store.set_finished(id, false).await?;
        Ok(self.to_response(item))
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.store.delete(id).await?;
        tracing::info!("Item deleted: id={}", id);
        Ok(())
    }

    pub async fn list_history(&self) -> Result<Vec<ItemResponseDto>> {
        let items = self.store.list_finished().await?;
        Ok(items.into_iter().map(|item| self.to_response(item)).collect())
    }

    /// Items expiring on or before `date`, for external callers.
    pub async fn items_expiring_by(&self, date: NaiveDate) -> Result<Vec<ItemResponseDto>> {
        let items = self.store.list_expiring_by(date).await?;
        Ok(items.into_iter().map(|item| self.to_response(item)).collect())
    }

    /// Summary of currently expired and expiring-soon active items, for a
    /// scheduled caller to forward to whatever notifies the household.
    pub async fn check_expiring_items(&self) -> Result<ExpiryCheckDto> {
        let today = Utc::now().date_naive();
        let warning_date = today
            .checked_add_days(Days::new(u64::from(self.config.warning_days)))
            .unwrap_or(NaiveDate::MAX);

        let expired = self.store.list_expired(today).await?;
        let expiring_soon = self.store.list_expiring_between(today, warning_date).await?;

        let expired_items: Vec<ItemResponseDto> = expired
            .into_iter()
            .map(|item| self.to_response(item))
            .collect();
        let expiring_soon_items: Vec<ItemResponseDto> = expiring_soon
            .into_iter()
            .map(|item| self.to_response(item))
            .collect();

        let total_warnings = expired_items.len() + expiring_soon_items.len();

        Ok(ExpiryCheckDto {
            has_warnings: total_warnings > 0,
            total_warnings,
            expired_items,
            expiring_soon_items,
        })
    }

    fn to_response(&self, item: Item) -> ItemResponseDto {
        ItemResponseDto::from_item(item, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::test_item;

    #[test]
    fn test_selects_all() {
        assert!(selects_all(None));
        assert!(selects_all(Some("")));
        assert!(selects_all(Some("   ")));
        assert!(selects_all(Some("all")));
        assert!(selects_all(Some("ALL")));
        assert!(!selects_all(Some("Pantry")));
    }

    #[test]
    fn test_filter_by_category_exact_match() {
        let mut dairy = test_item();
        dairy.category = Some("Dairy".to_string());
        let mut produce = test_item();
        produce.category = Some("Produce".to_string());
        let mut uncategorized = test_item();
        uncategorized.category = None;

        let filtered = filter_by_category(vec![dairy, produce, uncategorized], "Dairy");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].category.as_deref(), Some("Dairy"));
    }

    #[test]
    fn test_filter_by_category_is_case_sensitive() {
        let mut dairy = test_item();
        dairy.category = Some("Dairy".to_string());

        let filtered = filter_by_category(vec![dairy], "dairy");
        assert!(filtered.is_empty());
    }
}
