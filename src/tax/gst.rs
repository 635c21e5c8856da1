//! GST (Goods and Services Tax) calculation engine for Indian tax compliance
//!
//! Prices on the marketplace are GST inclusive. The functions here extract the
//! taxable value from an inclusive price and split the tax into CGST + SGST for
//! intra-state supplies or IGST for inter-state supplies. Nothing is rounded:
//! rounding happens only where a figure is reported (see [`GstBreakdown::rounded`]).

use bigdecimal::{BigDecimal, RoundingMode};
use serde::{Deserialize, Serialize};

use crate::types::{GstError, GstType};

fn hundred() -> BigDecimal {
    BigDecimal::from(100)
}

fn zero() -> BigDecimal {
    BigDecimal::from(0)
}

/// Exact half. BigDecimal division rounds past 100 digits, multiplication does not.
fn half_of(value: &BigDecimal) -> BigDecimal {
    value * BigDecimal::new(5.into(), 1)
}

/// Round a monetary amount to whole rupees, half away from zero
pub fn round_to_rupee(amount: &BigDecimal) -> BigDecimal {
    amount.with_scale_round(0, RoundingMode::HalfUp)
}

/// GST on a GST-exclusive price: `base_price * rate / 100`
pub fn gst_amount_from_exclusive(base_price: &BigDecimal, rate: &BigDecimal) -> BigDecimal {
    (base_price * rate) / hundred()
}

/// Taxable value contained in a GST-inclusive price: `inclusive / (1 + rate/100)`
///
/// A zero rate returns the price unchanged. A rate of exactly -100 would divide
/// by zero and also returns the price unchanged.
pub fn base_price_from_inclusive(inclusive_price: &BigDecimal, rate: &BigDecimal) -> BigDecimal {
    if *rate == zero() {
        return inclusive_price.clone();
    }

    let divisor = BigDecimal::from(1) + rate / hundred();
    if divisor == zero() {
        return inclusive_price.clone();
    }

    inclusive_price / divisor
}

/// GST contained in a GST-inclusive price
pub fn gst_amount_from_inclusive(inclusive_price: &BigDecimal, rate: &BigDecimal) -> BigDecimal {
    inclusive_price - base_price_from_inclusive(inclusive_price, rate)
}

/// GST-inclusive price for a GST-exclusive base price
pub fn inclusive_from_exclusive(base_price: &BigDecimal, rate: &BigDecimal) -> BigDecimal {
    base_price + gst_amount_from_exclusive(base_price, rate)
}

/// GST rate structure for Indian taxation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GstRateSplit {
    /// Total GST rate percentage (e.g., 18.0 for 18%)
    pub total_rate: BigDecimal,
    /// CGST rate percentage (Central GST)
    pub cgst_rate: BigDecimal,
    /// SGST rate percentage (State GST)
    pub sgst_rate: BigDecimal,
    /// IGST rate percentage (Integrated GST)
    pub igst_rate: BigDecimal,
}

impl GstRateSplit {
    /// Intra-state rates (CGST + SGST)
    pub fn intra_state(total_rate: BigDecimal) -> Self {
        let half_rate = half_of(&total_rate);
        Self {
            total_rate,
            cgst_rate: half_rate.clone(),
            sgst_rate: half_rate,
            igst_rate: zero(),
        }
    }

    /// Inter-state rates (IGST)
    pub fn inter_state(total_rate: BigDecimal) -> Self {
        Self {
            total_rate: total_rate.clone(),
            cgst_rate: zero(),
            sgst_rate: zero(),
            igst_rate: total_rate,
        }
    }

    /// Rates for a supply, by whether buyer and seller share a state
    pub fn for_supply(total_rate: BigDecimal, is_same_state: bool) -> Self {
        if is_same_state {
            Self::intra_state(total_rate)
        } else {
            Self::inter_state(total_rate)
        }
    }

    /// Validate that the GST rate structure is consistent
    pub fn validate(&self) -> Result<(), GstError> {
        let calculated_total = &self.cgst_rate + &self.sgst_rate + &self.igst_rate;

        if calculated_total != self.total_rate {
            return Err(GstError::InvalidRate(format!(
                "GST components don't add up to total rate: {} != {}",
                calculated_total, self.total_rate
            )));
        }

        if self.igst_rate == zero() && self.cgst_rate != self.sgst_rate {
            return Err(GstError::InvalidRate(
                "CGST and SGST rates must be equal for intra-state supplies".to_string(),
            ));
        }

        if self.igst_rate != zero() && (self.cgst_rate != zero() || self.sgst_rate != zero()) {
            return Err(GstError::InvalidRate(
                "Only IGST should be applicable for inter-state supplies".to_string(),
            ));
        }

        Ok(())
    }
}

/// Standard GST slabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GstSlab {
    /// Exempt and nil-rated goods - 0%
    Nil,
    /// 5%
    Five,
    /// 12%
    Twelve,
    /// 18%
    Eighteen,
    /// 28%
    TwentyEight,
}

impl GstSlab {
    pub const ALL: [GstSlab; 5] = [
        GstSlab::Nil,
        GstSlab::Five,
        GstSlab::Twelve,
        GstSlab::Eighteen,
        GstSlab::TwentyEight,
    ];

    /// Rate percentage of this slab
    pub fn rate(&self) -> BigDecimal {
        match self {
            GstSlab::Nil => BigDecimal::from(0),
            GstSlab::Five => BigDecimal::from(5),
            GstSlab::Twelve => BigDecimal::from(12),
            GstSlab::Eighteen => BigDecimal::from(18),
            GstSlab::TwentyEight => BigDecimal::from(28),
        }
    }

    /// Slab matching a rate exactly, if any
    pub fn from_rate(rate: &BigDecimal) -> Option<Self> {
        Self::ALL.into_iter().find(|slab| slab.rate() == *rate)
    }
}

/// Full GST breakdown of one GST-inclusive amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GstBreakdown {
    /// GST-exclusive value the tax is levied on
    pub taxable_value: BigDecimal,
    /// Total GST rate percentage
    pub gst_rate: BigDecimal,
    /// Total GST (CGST + SGST + IGST)
    pub total_gst: BigDecimal,
    pub cgst: BigDecimal,
    pub cgst_rate: BigDecimal,
    pub sgst: BigDecimal,
    pub sgst_rate: BigDecimal,
    pub igst: BigDecimal,
    pub igst_rate: BigDecimal,
    /// GST-inclusive amount (`taxable_value + total_gst`)
    pub total: BigDecimal,
    pub is_same_state: bool,
}

impl GstBreakdown {
    /// Split a GST-inclusive price into taxable value and tax components
    pub fn from_inclusive(inclusive_price: &BigDecimal, gst_rate: &BigDecimal, is_same_state: bool) -> Self {
        let taxable_value = base_price_from_inclusive(inclusive_price, gst_rate);
        let total_gst = inclusive_price - &taxable_value;
        let rates = GstRateSplit::for_supply(gst_rate.clone(), is_same_state);

        let (cgst, sgst, igst) = if is_same_state {
            let half = half_of(&total_gst);
            (half.clone(), half, zero())
        } else {
            (zero(), zero(), total_gst.clone())
        };

        Self {
            taxable_value,
            gst_rate: rates.total_rate,
            total_gst,
            cgst,
            cgst_rate: rates.cgst_rate,
            sgst,
            sgst_rate: rates.sgst_rate,
            igst,
            igst_rate: rates.igst_rate,
            total: inclusive_price.clone(),
            is_same_state,
        }
    }

    /// Breakdown with every monetary field multiplied by `quantity`
    pub fn scaled(&self, quantity: &BigDecimal) -> Self {
        Self {
            taxable_value: &self.taxable_value * quantity,
            total_gst: &self.total_gst * quantity,
            cgst: &self.cgst * quantity,
            sgst: &self.sgst * quantity,
            igst: &self.igst * quantity,
            total: &self.total * quantity,
            ..self.clone()
        }
    }

    /// Breakdown with every monetary field rounded to whole rupees.
    ///
    /// Each field is rounded on its own, so the rounded components need not add
    /// up to the rounded total.
    pub fn rounded(&self) -> Self {
        Self {
            taxable_value: round_to_rupee(&self.taxable_value),
            total_gst: round_to_rupee(&self.total_gst),
            cgst: round_to_rupee(&self.cgst),
            sgst: round_to_rupee(&self.sgst),
            igst: round_to_rupee(&self.igst),
            total: round_to_rupee(&self.total),
            ..self.clone()
        }
    }

    /// Rate split used for this breakdown
    pub fn rate_split(&self) -> GstRateSplit {
        GstRateSplit {
            total_rate: self.gst_rate.clone(),
            cgst_rate: self.cgst_rate.clone(),
            sgst_rate: self.sgst_rate.clone(),
            igst_rate: self.igst_rate.clone(),
        }
    }

    pub fn gst_type(&self) -> GstType {
        GstType::from_same_state(self.is_same_state)
    }
}

/// Break down a GST-inclusive price for a same-state or inter-state supply
pub fn calculate_gst_breakdown(
    inclusive_price: &BigDecimal,
    gst_rate: &BigDecimal,
    is_same_state: bool,
) -> GstBreakdown {
    GstBreakdown::from_inclusive(inclusive_price, gst_rate, is_same_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).unwrap()
    }

    #[test]
    fn test_gst_amount_from_exclusive() {
        assert_eq!(
            gst_amount_from_exclusive(&BigDecimal::from(1000), &BigDecimal::from(18)),
            BigDecimal::from(180)
        );
    }

    #[test]
    fn test_base_price_from_inclusive() {
        assert_eq!(
            base_price_from_inclusive(&BigDecimal::from(1180), &BigDecimal::from(18)),
            BigDecimal::from(1000)
        );
        assert_eq!(
            base_price_from_inclusive(&BigDecimal::from(105), &BigDecimal::from(5)),
            BigDecimal::from(100)
        );
    }

    #[test]
    fn test_base_price_zero_rate_is_identity() {
        let price = dec("99.99");
        assert_eq!(base_price_from_inclusive(&price, &BigDecimal::from(0)), price);
    }

    #[test]
    fn test_base_price_degenerate_divisor() {
        let price = BigDecimal::from(50);
        assert_eq!(base_price_from_inclusive(&price, &BigDecimal::from(-100)), price);
    }

    #[test]
    fn test_gst_amount_from_inclusive() {
        assert_eq!(
            gst_amount_from_inclusive(&BigDecimal::from(1120), &BigDecimal::from(12)),
            BigDecimal::from(120)
        );
    }

    #[test]
    fn test_inclusive_from_exclusive() {
        assert_eq!(
            inclusive_from_exclusive(&BigDecimal::from(100), &BigDecimal::from(28)),
            BigDecimal::from(128)
        );
    }

    #[test]
    fn test_round_trip_repeating_decimal() {
        let price = BigDecimal::from(100);
        let rate = BigDecimal::from(12);
        let base = base_price_from_inclusive(&price, &rate);
        let back = inclusive_from_exclusive(&base, &rate);
        assert!((back - price).abs() < dec("0.0000000001"));
    }

    #[test]
    fn test_rate_split_intra_state() {
        let rate = GstRateSplit::intra_state(BigDecimal::from(18));
        assert_eq!(rate.total_rate, BigDecimal::from(18));
        assert_eq!(rate.cgst_rate, BigDecimal::from(9));
        assert_eq!(rate.sgst_rate, BigDecimal::from(9));
        assert_eq!(rate.igst_rate, BigDecimal::from(0));
        assert!(rate.validate().is_ok());
    }

    #[test]
    fn test_rate_split_inter_state() {
        let rate = GstRateSplit::inter_state(BigDecimal::from(18));
        assert_eq!(rate.cgst_rate, BigDecimal::from(0));
        assert_eq!(rate.sgst_rate, BigDecimal::from(0));
        assert_eq!(rate.igst_rate, BigDecimal::from(18));
        assert!(rate.validate().is_ok());
    }

    #[test]
    fn test_rate_split_rejects_mixed_components() {
        let rate = GstRateSplit {
            total_rate: BigDecimal::from(18),
            cgst_rate: BigDecimal::from(10),
            sgst_rate: BigDecimal::from(8),
            igst_rate: BigDecimal::from(0),
        };
        assert!(rate.validate().is_err());

        let rate = GstRateSplit {
            total_rate: BigDecimal::from(18),
            cgst_rate: BigDecimal::from(4),
            sgst_rate: BigDecimal::from(4),
            igst_rate: BigDecimal::from(10),
        };
        assert!(rate.validate().is_err());
    }

    #[test]
    fn test_breakdown_same_state() {
        let breakdown = calculate_gst_breakdown(&BigDecimal::from(118), &BigDecimal::from(18), true);

        assert_eq!(breakdown.taxable_value, BigDecimal::from(100));
        assert_eq!(breakdown.total_gst, BigDecimal::from(18));
        assert_eq!(breakdown.cgst, BigDecimal::from(9));
        assert_eq!(breakdown.sgst, BigDecimal::from(9));
        assert_eq!(breakdown.igst, BigDecimal::from(0));
        assert_eq!(breakdown.cgst_rate, BigDecimal::from(9));
        assert_eq!(breakdown.sgst_rate, BigDecimal::from(9));
        assert_eq!(breakdown.igst_rate, BigDecimal::from(0));
        assert_eq!(breakdown.total, BigDecimal::from(118));
        assert!(breakdown.is_same_state);
        assert_eq!(breakdown.gst_type(), GstType::CgstSgst);
    }

    #[test]
    fn test_breakdown_inter_state() {
        let breakdown = calculate_gst_breakdown(&BigDecimal::from(118), &BigDecimal::from(18), false);

        assert_eq!(breakdown.igst, BigDecimal::from(18));
        assert_eq!(breakdown.igst_rate, BigDecimal::from(18));
        assert_eq!(breakdown.cgst, BigDecimal::from(0));
        assert_eq!(breakdown.sgst, BigDecimal::from(0));
        assert_eq!(breakdown.cgst_rate, BigDecimal::from(0));
        assert_eq!(breakdown.sgst_rate, BigDecimal::from(0));
        assert!(!breakdown.is_same_state);
        assert!(breakdown.rate_split().validate().is_ok());
    }

    #[test]
    fn test_breakdown_zero_rate() {
        let price = dec("249.50");
        for is_same_state in [true, false] {
            let breakdown = calculate_gst_breakdown(&price, &BigDecimal::from(0), is_same_state);
            assert_eq!(breakdown.taxable_value, price);
            assert_eq!(breakdown.total_gst, BigDecimal::from(0));
            assert_eq!(breakdown.cgst, BigDecimal::from(0));
            assert_eq!(breakdown.sgst, BigDecimal::from(0));
            assert_eq!(breakdown.igst, BigDecimal::from(0));
        }
    }

    #[test]
    fn test_breakdown_scaled_and_rounded() {
        let unit = calculate_gst_breakdown(&BigDecimal::from(59), &BigDecimal::from(18), true);
        assert_eq!(unit.cgst, dec("4.5"));

        let line = unit.scaled(&BigDecimal::from(3));
        assert_eq!(line.taxable_value, BigDecimal::from(150));
        assert_eq!(line.cgst, dec("13.5"));
        assert_eq!(line.total, BigDecimal::from(177));
        assert_eq!(line.gst_rate, BigDecimal::from(18));

        let reported = line.rounded();
        assert_eq!(reported.cgst, BigDecimal::from(14));
        assert_eq!(reported.sgst, BigDecimal::from(14));
        assert_eq!(reported.total_gst, BigDecimal::from(27));
        assert_eq!(reported.cgst_rate, BigDecimal::from(9));
    }

    #[test]
    fn test_round_to_rupee_half_away_from_zero() {
        assert_eq!(round_to_rupee(&dec("40.5")), BigDecimal::from(41));
        assert_eq!(round_to_rupee(&dec("40.49")), BigDecimal::from(40));
        assert_eq!(round_to_rupee(&dec("-2.5")), BigDecimal::from(-3));
    }

    #[test]
    fn test_slabs() {
        assert_eq!(GstSlab::from_rate(&BigDecimal::from(18)), Some(GstSlab::Eighteen));
        assert_eq!(GstSlab::from_rate(&dec("28.0")), Some(GstSlab::TwentyEight));
        assert_eq!(GstSlab::from_rate(&BigDecimal::from(3)), None);
        assert_eq!(GstSlab::Nil.rate(), BigDecimal::from(0));
    }
}
