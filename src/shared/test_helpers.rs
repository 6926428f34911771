#[cfg(test)]
use chrono::Utc;
#[cfg(test)]
use rust_decimal::Decimal;
#[cfg(test)]
use uuid::Uuid;

#[cfg(test)]
use crate::features::items::models::Item;

/// Baseline active item for unit tests; override fields as needed.
#[cfg(test)]
pub fn test_item() -> Item {
    let now = Utc::now();
    Item {
        id: Uuid::new_v4(),
        name: "Milk".to_string(),
        quantity: Decimal::from(5),
        unit: "l".to_string(),
        location: "Fridge".to_string(),
        category: Some("Dairy".to_string()),
        purchase_date: now,
        expiration_date: None,
        notes: None,
        finished: false,
        created_at: now,
        updated_at: now,
    }
}
