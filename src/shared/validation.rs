use rust_decimal::Decimal;
use validator::ValidationError;

/// Reject strings that are empty or whitespace-only.
/// Plain `length(min = 1)` would accept "   ", which is how blank form
/// fields arrive from the browser.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Quantities may be zero (an item can run out) but never negative.
pub fn non_negative_decimal(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        return Err(
            ValidationError::new("non_negative").with_message("must not be negative".into())
        );
    }
    Ok(())
}

/// Consumption amounts must be strictly positive; a zero or negative
/// amount would be a no-op or silently grow the inventory.
pub fn positive_decimal(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        return Err(ValidationError::new("positive").with_message("must be greater than zero".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("Milk").is_ok());
        assert!(not_blank(" a ").is_ok());
        assert!(not_blank("").is_err());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("\t\n").is_err());
    }

    #[test]
    fn test_non_negative_decimal() {
        assert!(non_negative_decimal(&Decimal::ZERO).is_ok());
        assert!(non_negative_decimal(&Decimal::from(3)).is_ok());
        assert!(non_negative_decimal(&Decimal::new(-1, 2)).is_err()); // -0.01
    }

    #[test]
    fn test_positive_decimal() {
        assert!(positive_decimal(&Decimal::new(5, 1)).is_ok()); // 0.5
        assert!(positive_decimal(&Decimal::ZERO).is_err());
        assert!(positive_decimal(&Decimal::from(-2)).is_err());
    }
}
