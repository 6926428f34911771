use chrono::{DateTime, Days, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for an inventory item
#[derive(Debug, Clone, FromRow)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub quantity: Decimal,
    pub unit: String,
    pub location: String,
    pub category: Option<String>,
    pub purchase_date: DateTime<Utc>,
    pub expiration_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub finished: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    pub fn is_expired(&self) -> bool {
        self.is_expired_on(Utc::now().date_naive())
    }

    pub fn is_expiring_soon(&self, warning_days: u32) -> bool {
        self.is_expiring_soon_on(Utc::now().date_naive(), warning_days)
    }

    /// Expired: expiration date set and strictly before `today`.
    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        match self.expiration_date {
            Some(date) => date < today,
            None => false,
        }
    }

    /// Expiring soon: not yet expired, but within the warning window.
    /// Mutually exclusive with `is_expired_on` for any set expiration date.
    pub fn is_expiring_soon_on(&self, today: NaiveDate, warning_days: u32) -> bool {
        let Some(date) = self.expiration_date else {
            return false;
        };
        let warning_date = today
            .checked_add_days(Days::new(u64::from(warning_days)))
            .unwrap_or(NaiveDate::MAX);
        !self.is_expired_on(today) && date <= warning_date
    }

    pub fn is_low_quantity(&self, threshold: Decimal) -> bool {
        self.quantity <= threshold
    }

    /// Outcome of consuming `amount`: the new quantity and the new
    /// `finished` flag. Consumption never drives the quantity negative;
    /// reaching (or crossing) zero clamps and finishes the item.
    pub fn apply_consumption(&self, amount: Decimal) -> (Decimal, bool) {
        let new_quantity = self.quantity - amount;
        if new_quantity <= Decimal::ZERO {
            (Decimal::ZERO, true)
        } else {
            (new_quantity, self.finished)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::test_item;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_no_expiration_date_never_expires() {
        let item = test_item();
        assert!(!item.is_expired_on(date(2025, 6, 1)));
        assert!(!item.is_expiring_soon_on(date(2025, 6, 1), 3));
    }

    #[test]
    fn test_expired_yesterday() {
        let mut item = test_item();
        item.expiration_date = Some(date(2025, 5, 31));
        let today = date(2025, 6, 1);
        assert!(item.is_expired_on(today));
        // Expired items are never "expiring soon", regardless of window
        assert!(!item.is_expiring_soon_on(today, 3));
        assert!(!item.is_expiring_soon_on(today, 365));
    }

    #[test]
    fn test_expiring_today_is_not_expired() {
        let mut item = test_item();
        let today = date(2025, 6, 1);
        item.expiration_date = Some(today);
        assert!(!item.is_expired_on(today));
        assert!(item.is_expiring_soon_on(today, 0));
    }

    #[test]
    fn test_expiring_soon_within_window() {
        let mut item = test_item();
        let today = date(2025, 6, 1);
        item.expiration_date = Some(date(2025, 6, 3));
        assert!(!item.is_expired_on(today));
        assert!(item.is_expiring_soon_on(today, 3));
    }

    #[test]
    fn test_not_expiring_soon_outside_window() {
        let mut item = test_item();
        let today = date(2025, 6, 1);
        item.expiration_date = Some(date(2025, 6, 10));
        assert!(!item.is_expiring_soon_on(today, 3));
    }

    #[test]
    fn test_expired_and_expiring_soon_mutually_exclusive() {
        let today = date(2025, 6, 1);
        for offset in -10i64..=10 {
            let mut item = test_item();
            let d = if offset < 0 {
                today.checked_sub_days(Days::new(offset.unsigned_abs())).unwrap()
            } else {
                today.checked_add_days(Days::new(offset as u64)).unwrap()
            };
            item.expiration_date = Some(d);
            let both = item.is_expired_on(today) && item.is_expiring_soon_on(today, 5);
            assert!(!both, "offset {} classified as both", offset);
        }
    }

    #[test]
    fn test_low_quantity_threshold_inclusive() {
        let mut item = test_item();
        item.quantity = Decimal::from(5);
        assert!(!item.is_low_quantity(Decimal::from(2)));

        item.quantity = Decimal::from(2);
        assert!(item.is_low_quantity(Decimal::from(2)));

        item.quantity = Decimal::from(1);
        assert!(item.is_low_quantity(Decimal::from(2)));
    }

    #[test]
    fn test_partial_consumption() {
        let mut item = test_item();
        item.quantity = Decimal::from(5);
        let (quantity, finished) = item.apply_consumption(Decimal::from(4));
        assert_eq!(quantity, Decimal::from(1));
        assert!(!finished);
    }

    #[test]
    fn test_exact_consumption_finishes() {
        let mut item = test_item();
        item.quantity = Decimal::from(5);
        let (quantity, finished) = item.apply_consumption(Decimal::from(5));
        assert_eq!(quantity, Decimal::ZERO);
        assert!(finished);
    }

    #[test]
    fn test_over_consumption_clamps_to_zero() {
        let mut item = test_item();
        item.quantity = Decimal::new(25, 1); // 2.5
        let (quantity, finished) = item.apply_consumption(Decimal::from(100));
        assert_eq!(quantity, Decimal::ZERO);
        assert!(finished);
    }

    #[test]
    fn test_repeated_fractional_consumption_is_exact() {
        let mut item = test_item();
        item.quantity = Decimal::from(1);
        // 10 x 0.1 lands exactly on zero, no binary-float drift
        for _ in 0..9 {
            let (quantity, finished) = item.apply_consumption(Decimal::new(1, 1));
            assert!(!finished);
            item.quantity = quantity;
        }
        let (quantity, finished) = item.apply_consumption(Decimal::new(1, 1));
        assert_eq!(quantity, Decimal::ZERO);
        assert!(finished);
    }
}
