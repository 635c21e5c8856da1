//! Invoice snapshots and the builder that validates order data into them

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::InvoiceSettings;
use crate::invoice::aggregate::*;
use crate::tax::gst::GstBreakdown;
use crate::types::*;
use crate::utils::validation::*;

/// SAC code for courier services, used for delivery in the HSN summary
pub const DEFAULT_DELIVERY_SAC: &str = "996812";

/// Immutable tax invoice, the snapshot handed to the rendering layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique identifier of the snapshot
    pub id: Uuid,
    /// Invoice number printed on the document
    pub number: String,
    /// Invoice date
    pub date: NaiveDate,
    /// Order this invoice was generated for
    pub order_reference: Option<String>,
    pub seller: Option<Party>,
    pub buyer: Option<Party>,
    pub jurisdiction: Jurisdiction,
    pub lines: Vec<LineBreakdown>,
    pub delivery: GstBreakdown,
    /// Unrounded sums behind `totals`
    pub sums: TaxSums,
    pub totals: InvoiceTotals,
    pub hsn_summary: Vec<HsnSummaryRow>,
    pub created_at: NaiveDateTime,
}

impl Invoice {
    /// Total savings against MRP across all lines
    pub fn total_savings(&self) -> BigDecimal {
        self.lines.iter().filter_map(|line| line.savings.as_ref()).sum()
    }
}

/// Builder for tax invoices
#[derive(Debug)]
pub struct InvoiceBuilder {
    number: String,
    date: NaiveDate,
    order_reference: Option<String>,
    seller: Option<Party>,
    buyer: Option<Party>,
    items: Vec<LineItem>,
    delivery: DeliveryCharge,
    jurisdiction: Option<Jurisdiction>,
    delivery_sac: String,
}

impl InvoiceBuilder {
    /// Create a new invoice builder
    pub fn new(number: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            number: number.into(),
            date,
            order_reference: None,
            seller: None,
            buyer: None,
            items: Vec::new(),
            delivery: DeliveryCharge::none(),
            jurisdiction: None,
            delivery_sac: DEFAULT_DELIVERY_SAC.to_string(),
        }
    }

    /// Create a builder with the seller and delivery SAC taken from settings
    pub fn from_settings(settings: &InvoiceSettings, number: impl Into<String>, date: NaiveDate) -> Self {
        let mut builder = Self::new(number, date).delivery_sac(settings.delivery_sac.clone());
        builder.seller = Some(settings.seller());
        builder
    }

    /// Set the order reference
    pub fn order_reference(mut self, reference: impl Into<String>) -> Self {
        self.order_reference = Some(reference.into());
        self
    }

    pub fn seller(mut self, seller: Party) -> Self {
        self.seller = Some(seller);
        self
    }

    pub fn buyer(mut self, buyer: Party) -> Self {
        self.buyer = Some(buyer);
        self
    }

    /// Add a line item
    pub fn line(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }

    /// Add several line items
    pub fn lines(mut self, items: impl IntoIterator<Item = LineItem>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn delivery(mut self, delivery: DeliveryCharge) -> Self {
        self.delivery = delivery;
        self
    }

    /// Use a jurisdiction resolved by the caller
    pub fn jurisdiction(mut self, jurisdiction: Jurisdiction) -> Self {
        self.jurisdiction = Some(jurisdiction);
        self
    }

    /// Set the supply type directly when no resolver was involved
    pub fn same_state(mut self, is_same_state: bool) -> Self {
        self.jurisdiction = Some(Jurisdiction {
            is_same_state,
            seller_state: None,
            buyer_state: None,
            place_of_supply: "Unknown".to_string(),
            gst_type: GstType::from_same_state(is_same_state),
        });
        self
    }

    pub fn delivery_sac(mut self, sac: impl Into<String>) -> Self {
        self.delivery_sac = sac.into();
        self
    }

    /// Validate the order data and compute the invoice
    pub fn build(self) -> GstResult<Invoice> {
        self.validate()?;

        let jurisdiction = self.jurisdiction.unwrap_or_else(|| {
            tracing::warn!(
                number = %self.number,
                "no jurisdiction given, treating supply as inter-state"
            );
            Jurisdiction::inter_state_fallback()
        });

        let breakdown = aggregate_invoice(&self.items, &self.delivery, jurisdiction.is_same_state);
        let hsn_summary = hsn_summary(&breakdown, &self.delivery_sac);

        tracing::debug!(
            number = %self.number,
            grand_total = %breakdown.totals.grand_total,
            "built invoice"
        );

        Ok(Invoice {
            id: Uuid::new_v4(),
            number: self.number,
            date: self.date,
            order_reference: self.order_reference,
            seller: self.seller,
            buyer: self.buyer,
            jurisdiction,
            lines: breakdown.lines,
            delivery: breakdown.delivery,
            sums: breakdown.sums,
            totals: breakdown.totals,
            hsn_summary,
            created_at: chrono::Utc::now().naive_utc(),
        })
    }

    fn validate(&self) -> GstResult<()> {
        if self.number.trim().is_empty() {
            return Err(GstError::Validation(
                "Invoice number cannot be empty".to_string(),
            ));
        }

        if self.items.is_empty() {
            return Err(GstError::Validation(
                "Invoice must have at least one line item".to_string(),
            ));
        }

        for item in &self.items {
            validate_line_item(item)?;
        }
        validate_delivery_charge(&self.delivery)?;

        for party in [&self.seller, &self.buyer].into_iter().flatten() {
            validate_pincode(&party.address.pincode)?;
            if let Some(gstin) = &party.gstin {
                validate_gstin(gstin)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
    }

    fn item(price: i64, quantity: i64) -> LineItem {
        LineItem::new(
            "sku-1".to_string(),
            "Steel bottle".to_string(),
            BigDecimal::from(quantity),
            BigDecimal::from(price),
            BigDecimal::from(18),
        )
    }

    fn party(pincode: &str) -> Party {
        Party::new(
            "Acme Traders".to_string(),
            Address {
                line1: "12 MG Road".to_string(),
                city: "Pune".to_string(),
                state: Some("MH".to_string()),
                pincode: pincode.to_string(),
            },
        )
    }

    #[test]
    fn test_build_invoice() {
        let invoice = InvoiceBuilder::new("INV-001", date())
            .order_reference("ORD-9")
            .seller(party("411001").with_gstin("27AAPFU0939F1ZV"))
            .buyer(party("400001"))
            .line(item(118, 2))
            .delivery(DeliveryCharge::new(BigDecimal::from(59), BigDecimal::from(18)))
            .same_state(true)
            .build()
            .unwrap();

        assert_eq!(invoice.number, "INV-001");
        assert_eq!(invoice.order_reference.as_deref(), Some("ORD-9"));
        assert_eq!(invoice.totals.grand_total, BigDecimal::from(295));
        assert_eq!(invoice.sums.total_cgst, BigDecimal::from_str("22.5").unwrap());
        assert_eq!(invoice.hsn_summary.len(), 2);
        assert!(invoice.jurisdiction.is_same_state);
    }

    #[test]
    fn test_build_without_jurisdiction_falls_back_to_igst() {
        let invoice = InvoiceBuilder::new("INV-002", date())
            .line(item(118, 1))
            .build()
            .unwrap();

        assert_eq!(invoice.jurisdiction.gst_type, GstType::Igst);
        assert_eq!(invoice.totals.total_igst, BigDecimal::from(18));
        assert_eq!(invoice.totals.total_cgst, BigDecimal::from(0));
    }

    #[test]
    fn test_build_rejects_invalid_orders() {
        assert!(InvoiceBuilder::new("INV-003", date()).build().is_err());
        assert!(InvoiceBuilder::new(" ", date()).line(item(1, 1)).build().is_err());
        assert!(matches!(
            InvoiceBuilder::new("INV-004", date()).line(item(118, 0)).build(),
            Err(GstError::InvalidQuantity(_))
        ));
        assert!(matches!(
            InvoiceBuilder::new("INV-005", date())
                .line(item(118, 1))
                .buyer(party("12345"))
                .build(),
            Err(GstError::InvalidPincode(_))
        ));
    }
}
