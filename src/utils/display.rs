//! Helpers the invoice templates call to print amounts.
//!
//! Template data often arrives as raw floats. A non-finite value here means an
//! upstream parse failed, and it prints as zero rather than `NaN`.

use bigdecimal::{BigDecimal, RoundingMode};
use std::str::FromStr;

/// Convert a float to a decimal through its shortest display form.
/// Returns `None` for `NaN` and infinities.
pub fn decimal_from_f64(value: f64) -> Option<BigDecimal> {
    if !value.is_finite() {
        return None;
    }
    BigDecimal::from_str(&value.to_string()).ok()
}

/// Two-decimal amount, rounded half away from zero
pub fn display_decimal(amount: &BigDecimal) -> String {
    amount.with_scale_round(2, RoundingMode::HalfUp).to_string()
}

/// Two-decimal amount for a raw float; non-finite values print as `"0.00"`
pub fn display_amount(amount: f64) -> String {
    match decimal_from_f64(amount) {
        Some(decimal) => display_decimal(&decimal),
        None => "0.00".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_amount() {
        assert_eq!(display_amount(118.0), "118.00");
        assert_eq!(display_amount(40.505), "40.51");
        assert_eq!(display_amount(0.1), "0.10");
    }

    #[test]
    fn test_display_amount_non_finite() {
        assert_eq!(display_amount(f64::NAN), "0.00");
        assert_eq!(display_amount(f64::NEG_INFINITY), "0.00");
    }

    #[test]
    fn test_display_decimal() {
        assert_eq!(display_decimal(&BigDecimal::from(81)), "81.00");
        assert_eq!(
            display_decimal(&BigDecimal::from_str("12.3449").unwrap()),
            "12.34"
        );
    }
}
