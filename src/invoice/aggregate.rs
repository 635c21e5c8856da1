//! Invoice aggregation: line items and delivery into invoice totals

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::tax::gst::{calculate_gst_breakdown, round_to_rupee, GstBreakdown};
use crate::tax::words::amount_in_words;
use crate::types::*;

/// A line item together with its GST figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineBreakdown {
    /// The order line as received
    pub item: LineItem,
    /// Breakdown of one unit at its inclusive price
    pub unit: GstBreakdown,
    /// Unit breakdown scaled by quantity, unrounded
    pub line: GstBreakdown,
    /// `(mrp - inclusive_price) * quantity`, when the item carries an MRP
    pub savings: Option<BigDecimal>,
}

impl LineBreakdown {
    /// Compute the breakdown of one order line
    pub fn new(item: LineItem, is_same_state: bool) -> Self {
        let unit = calculate_gst_breakdown(&item.inclusive_price, &item.gst_rate, is_same_state);
        let line = unit.scaled(&item.quantity);
        let savings = item
            .mrp
            .as_ref()
            .map(|mrp| (mrp - &item.inclusive_price) * &item.quantity);

        Self {
            item,
            unit,
            line,
            savings,
        }
    }

    /// Line figures as printed, rounded to whole rupees
    pub fn reported(&self) -> GstBreakdown {
        self.line.rounded()
    }
}

/// Exact sums across all lines and delivery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxSums {
    pub total_taxable_value: BigDecimal,
    pub total_cgst: BigDecimal,
    pub total_sgst: BigDecimal,
    pub total_igst: BigDecimal,
    /// `total_cgst + total_sgst + total_igst`
    pub total_gst: BigDecimal,
    /// Sum of line totals plus the delivery charge
    pub grand_total: BigDecimal,
}

impl TaxSums {
    fn zero() -> Self {
        Self {
            total_taxable_value: BigDecimal::from(0),
            total_cgst: BigDecimal::from(0),
            total_sgst: BigDecimal::from(0),
            total_igst: BigDecimal::from(0),
            total_gst: BigDecimal::from(0),
            grand_total: BigDecimal::from(0),
        }
    }

    fn add(&mut self, breakdown: &GstBreakdown) {
        self.total_taxable_value += &breakdown.taxable_value;
        self.total_cgst += &breakdown.cgst;
        self.total_sgst += &breakdown.sgst;
        self.total_igst += &breakdown.igst;
        self.total_gst = &self.total_cgst + &self.total_sgst + &self.total_igst;
        self.grand_total += &breakdown.total;
    }
}

/// Invoice totals as reported, every amount rounded to whole rupees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    pub total_taxable_value: BigDecimal,
    pub total_cgst: BigDecimal,
    pub total_sgst: BigDecimal,
    pub total_igst: BigDecimal,
    pub total_gst: BigDecimal,
    pub grand_total: BigDecimal,
    /// Grand total in words for the legal invoice line
    pub amount_in_words: String,
    pub is_same_state: bool,
}

impl InvoiceTotals {
    /// Round each exact sum on its own, half away from zero.
    ///
    /// Rounding each field separately means `total_cgst + total_sgst` can differ
    /// from `total_gst` by a rupee; the exact sums in [`TaxSums`] always agree.
    pub fn from_sums(sums: &TaxSums, is_same_state: bool) -> Self {
        let grand_total = round_to_rupee(&sums.grand_total);
        let amount_in_words = amount_in_words(&grand_total);

        Self {
            total_taxable_value: round_to_rupee(&sums.total_taxable_value),
            total_cgst: round_to_rupee(&sums.total_cgst),
            total_sgst: round_to_rupee(&sums.total_sgst),
            total_igst: round_to_rupee(&sums.total_igst),
            total_gst: round_to_rupee(&sums.total_gst),
            grand_total,
            amount_in_words,
            is_same_state,
        }
    }
}

/// Everything computed for one invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceBreakdown {
    pub lines: Vec<LineBreakdown>,
    /// Breakdown of the delivery charge, quantity 1
    pub delivery: GstBreakdown,
    /// Unrounded sums
    pub sums: TaxSums,
    /// Rounded totals for printing
    pub totals: InvoiceTotals,
}

impl InvoiceBreakdown {
    /// Sum of all line totals, excluding delivery
    pub fn items_subtotal(&self) -> BigDecimal {
        self.lines.iter().map(|line| &line.line.total).sum()
    }

    /// Total savings against MRP across all lines
    pub fn total_savings(&self) -> BigDecimal {
        self.lines.iter().filter_map(|line| line.savings.as_ref()).sum()
    }
}

/// Aggregate line items and a delivery charge into invoice totals.
///
/// Each line is broken down at its unit price and scaled by quantity; delivery is
/// broken down once for the whole order. Sums are exact; only the reported
/// [`InvoiceTotals`] are rounded. No input is rejected here.
pub fn aggregate_invoice(
    items: &[LineItem],
    delivery: &DeliveryCharge,
    is_same_state: bool,
) -> InvoiceBreakdown {
    let lines: Vec<LineBreakdown> = items
        .iter()
        .cloned()
        .map(|item| LineBreakdown::new(item, is_same_state))
        .collect();

    let delivery = calculate_gst_breakdown(
        &delivery.inclusive_charges,
        &delivery.gst_rate,
        is_same_state,
    );

    let mut sums = TaxSums::zero();
    for line in &lines {
        sums.add(&line.line);
    }
    sums.add(&delivery);

    let totals = InvoiceTotals::from_sums(&sums, is_same_state);

    tracing::debug!(
        line_count = lines.len(),
        is_same_state,
        grand_total = %totals.grand_total,
        total_gst = %totals.total_gst,
        "aggregated invoice"
    );

    InvoiceBreakdown {
        lines,
        delivery,
        sums,
        totals,
    }
}

/// One row of the HSN-wise tax summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HsnSummaryRow {
    /// HSN code, SAC code for delivery, or `"NA"` when the item has none
    pub hsn_code: String,
    pub gst_rate: BigDecimal,
    pub quantity: BigDecimal,
    pub taxable_value: BigDecimal,
    pub cgst: BigDecimal,
    pub sgst: BigDecimal,
    pub igst: BigDecimal,
    pub total_gst: BigDecimal,
}

impl HsnSummaryRow {
    fn empty(hsn_code: String, gst_rate: BigDecimal) -> Self {
        Self {
            hsn_code,
            gst_rate,
            quantity: BigDecimal::from(0),
            taxable_value: BigDecimal::from(0),
            cgst: BigDecimal::from(0),
            sgst: BigDecimal::from(0),
            igst: BigDecimal::from(0),
            total_gst: BigDecimal::from(0),
        }
    }

    fn add(&mut self, quantity: &BigDecimal, breakdown: &GstBreakdown) {
        self.quantity += quantity;
        self.taxable_value += &breakdown.taxable_value;
        self.cgst += &breakdown.cgst;
        self.sgst += &breakdown.sgst;
        self.igst += &breakdown.igst;
        self.total_gst += &breakdown.total_gst;
    }

    fn rounded(self) -> Self {
        Self {
            taxable_value: round_to_rupee(&self.taxable_value),
            cgst: round_to_rupee(&self.cgst),
            sgst: round_to_rupee(&self.sgst),
            igst: round_to_rupee(&self.igst),
            total_gst: round_to_rupee(&self.total_gst),
            ..self
        }
    }
}

/// HSN-wise summary of an invoice, grouped by code and rate.
///
/// Rows are ordered by HSN code, then rate. The delivery charge is listed under
/// `delivery_sac` when it is non-zero. Amounts are summed exactly and rounded
/// per row.
pub fn hsn_summary(breakdown: &InvoiceBreakdown, delivery_sac: &str) -> Vec<HsnSummaryRow> {
    let mut rows: BTreeMap<(String, String), HsnSummaryRow> = BTreeMap::new();

    let mut add = |code: String, quantity: &BigDecimal, figures: &GstBreakdown| {
        let rate = figures.gst_rate.normalized();
        rows.entry((code.clone(), rate.to_string()))
            .or_insert_with(|| HsnSummaryRow::empty(code, rate))
            .add(quantity, figures);
    };

    for line in &breakdown.lines {
        let code = line
            .item
            .hsn_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .unwrap_or("NA")
            .to_string();
        add(code, &line.item.quantity, &line.line);
    }

    if breakdown.delivery.total != BigDecimal::from(0) {
        add(
            delivery_sac.to_string(),
            &BigDecimal::from(1),
            &breakdown.delivery,
        );
    }

    rows.into_values().map(HsnSummaryRow::rounded).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn item(id: &str, price: i64, rate: i64, quantity: i64) -> LineItem {
        LineItem::new(
            id.to_string(),
            format!("Product {}", id),
            BigDecimal::from(quantity),
            BigDecimal::from(price),
            BigDecimal::from(rate),
        )
    }

    #[test]
    fn test_aggregate_same_state() {
        let items = vec![item("a", 118, 18, 2), item("b", 236, 18, 1)];
        let delivery = DeliveryCharge::new(BigDecimal::from(59), BigDecimal::from(18));

        let invoice = aggregate_invoice(&items, &delivery, true);

        assert_eq!(invoice.sums.grand_total, BigDecimal::from(531));
        assert_eq!(invoice.sums.total_taxable_value, BigDecimal::from(450));
        assert_eq!(invoice.sums.total_gst, BigDecimal::from(81));
        assert_eq!(invoice.sums.total_cgst, BigDecimal::from_str("40.5").unwrap());
        assert_eq!(invoice.sums.total_cgst, invoice.sums.total_sgst);
        assert_eq!(invoice.sums.total_igst, BigDecimal::from(0));

        assert_eq!(invoice.totals.grand_total, BigDecimal::from(531));
        assert_eq!(invoice.totals.total_gst, BigDecimal::from(81));
        assert_eq!(invoice.totals.total_cgst, BigDecimal::from(41));
        assert_eq!(invoice.totals.total_sgst, BigDecimal::from(41));
        assert_eq!(
            invoice.totals.amount_in_words,
            "Five Hundred Thirty One Rupees Only"
        );
        assert_eq!(invoice.items_subtotal(), BigDecimal::from(472));
    }

    #[test]
    fn test_aggregate_inter_state() {
        let items = vec![item("a", 1120, 12, 1)];
        let invoice = aggregate_invoice(&items, &DeliveryCharge::none(), false);

        assert_eq!(invoice.totals.total_igst, BigDecimal::from(120));
        assert_eq!(invoice.totals.total_cgst, BigDecimal::from(0));
        assert_eq!(invoice.totals.total_sgst, BigDecimal::from(0));
        assert_eq!(invoice.totals.total_taxable_value, BigDecimal::from(1000));
        assert!(!invoice.totals.is_same_state);
    }

    #[test]
    fn test_aggregate_empty_order() {
        let invoice = aggregate_invoice(&[], &DeliveryCharge::none(), true);
        assert_eq!(invoice.totals.grand_total, BigDecimal::from(0));
        assert_eq!(invoice.totals.amount_in_words, "Zero Only");
    }

    #[test]
    fn test_aggregate_negative_delivery_does_not_fail() {
        let items = vec![item("a", 118, 18, 1)];
        let delivery = DeliveryCharge::new(BigDecimal::from(-18), BigDecimal::from(18));

        let invoice = aggregate_invoice(&items, &delivery, true);

        assert_eq!(invoice.sums.grand_total, BigDecimal::from(100));
        assert!(invoice.delivery.taxable_value < BigDecimal::from(0));
    }

    #[test]
    fn test_line_savings() {
        let line = LineBreakdown::new(
            item("a", 450, 5, 2).with_mrp(BigDecimal::from(500), Some(BigDecimal::from(10))),
            true,
        );
        assert_eq!(line.savings, Some(BigDecimal::from(100)));
        assert_eq!(line.line.total, BigDecimal::from(900));
    }

    #[test]
    fn test_hsn_summary_groups_by_code_and_rate() {
        let items = vec![
            item("a", 118, 18, 2).with_hsn_code("8471"),
            item("b", 236, 18, 1).with_hsn_code("8471"),
            item("c", 105, 5, 1).with_hsn_code("0902"),
            item("d", 50, 0, 1),
        ];
        let delivery = DeliveryCharge::new(BigDecimal::from(59), BigDecimal::from(18));
        let invoice = aggregate_invoice(&items, &delivery, false);

        let rows = hsn_summary(&invoice, "996812");
        let codes: Vec<&str> = rows.iter().map(|row| row.hsn_code.as_str()).collect();
        assert_eq!(codes, vec!["0902", "8471", "996812", "NA"]);

        let computers = &rows[1];
        assert_eq!(computers.quantity, BigDecimal::from(3));
        assert_eq!(computers.taxable_value, BigDecimal::from(400));
        assert_eq!(computers.igst, BigDecimal::from(72));

        let delivery_row = &rows[2];
        assert_eq!(delivery_row.taxable_value, BigDecimal::from(50));
        assert_eq!(delivery_row.igst, BigDecimal::from(9));
    }
}
