use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

/// Field set for inserting a new item. The store assigns the id;
/// a missing purchase date defaults to the insertion time.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub quantity: Decimal,
    pub unit: String,
    pub location: String,
    pub category: Option<String>,
    pub purchase_date: Option<DateTime<Utc>>,
    pub expiration_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Full replacement of the mutable fields of an existing item.
/// `id` and `purchase_date` are deliberately absent: they never change
/// after creation.
#[derive(Debug, Clone)]
pub struct ItemChanges {
    pub name: String,
    pub quantity: Decimal,
    pub unit: String,
    pub location: String,
    pub category: Option<String>,
    pub expiration_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub finished: bool,
}
