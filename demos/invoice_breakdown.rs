//! Invoice breakdown walkthrough
//!
//! Run with `RUST_LOG=debug cargo run --example invoice_breakdown` to see the
//! engine's tracing output.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use gst_invoice_core::{
    amount_in_words, calculate_gst_breakdown, utils::MemoryPincodeDirectory, Address,
    GstSlab, InvoiceBuilder, InvoiceSettings, JurisdictionResolver, LineItem, Party,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("GST slabs:");
    for slab in GstSlab::ALL {
        println!("  {:?}: {}%", slab, slab.rate());
    }
    println!();

    // 1. Single price, both supply types
    let price = BigDecimal::from(1180);
    let rate = GstSlab::Eighteen.rate();
    for is_same_state in [true, false] {
        let breakdown = calculate_gst_breakdown(&price, &rate, is_same_state);
        println!(
            "{} supply of ₹{}:",
            if is_same_state { "Intra-state" } else { "Inter-state" },
            price
        );
        println!("  Taxable value: ₹{}", breakdown.taxable_value);
        println!("  CGST ({}%):    ₹{}", breakdown.cgst_rate, breakdown.cgst);
        println!("  SGST ({}%):    ₹{}", breakdown.sgst_rate, breakdown.sgst);
        println!("  IGST ({}%):    ₹{}", breakdown.igst_rate, breakdown.igst);
        println!();
    }

    // 2. Full invoice with jurisdiction resolved from pincodes
    let settings = InvoiceSettings {
        seller_name: "Acme Traders".to_string(),
        seller_gstin: Some("27AAPFU0939F1ZV".to_string()),
        seller_address: "12 MG Road".to_string(),
        seller_city: "Pune".to_string(),
        seller_state: Some("MH".to_string()),
        seller_pincode: "411001".to_string(),
        ..InvoiceSettings::default()
    };

    let directory = MemoryPincodeDirectory::new()
        .with_entry("41", "Maharashtra")?
        .with_entry("40", "Maharashtra")?;
    let resolver = JurisdictionResolver::new(directory);
    let jurisdiction = resolver
        .resolve(&settings.address_pair("400001".to_string(), None))
        .await?;

    let buyer = Party::new(
        "Ravi Kumar".to_string(),
        Address {
            line1: "7 Marine Drive".to_string(),
            city: "Mumbai".to_string(),
            state: Some("Maharashtra".to_string()),
            pincode: "400001".to_string(),
        },
    );

    let invoice = InvoiceBuilder::from_settings(
        &settings,
        "INV-2024-0001",
        NaiveDate::from_ymd_opt(2024, 4, 1).ok_or("invalid date")?,
    )
    .buyer(buyer)
    .line(
        LineItem::new(
            "sku-1".to_string(),
            "Steel bottle".to_string(),
            BigDecimal::from(2),
            BigDecimal::from(118),
            GstSlab::Eighteen.rate(),
        )
        .with_hsn_code("7323")
        .with_mrp(BigDecimal::from(150), Some(BigDecimal::from(21))),
    )
    .line(
        LineItem::new(
            "sku-2".to_string(),
            "Assam tea 500g".to_string(),
            BigDecimal::from(1),
            BigDecimal::from(262),
            GstSlab::Five.rate(),
        )
        .with_hsn_code("0902"),
    )
    .delivery(settings.delivery_charge(BigDecimal::from(59)))
    .jurisdiction(jurisdiction)
    .build()?;

    println!("Invoice {} ({})", invoice.number, invoice.jurisdiction.place_of_supply);
    for line in &invoice.lines {
        let reported = line.reported();
        println!(
            "  {} x {} @ ₹{} | taxable ₹{} | GST ₹{}",
            line.item.name, line.item.quantity, line.item.inclusive_price,
            reported.taxable_value, reported.total_gst
        );
    }
    println!();
    println!("  HSN summary:");
    for row in &invoice.hsn_summary {
        println!(
            "    {} @ {}%: taxable ₹{}, CGST ₹{}, SGST ₹{}, IGST ₹{}",
            row.hsn_code, row.gst_rate, row.taxable_value, row.cgst, row.sgst, row.igst
        );
    }
    println!();
    println!("  Taxable value: ₹{}", invoice.totals.total_taxable_value);
    println!("  CGST:          ₹{}", invoice.totals.total_cgst);
    println!("  SGST:          ₹{}", invoice.totals.total_sgst);
    println!("  IGST:          ₹{}", invoice.totals.total_igst);
    println!("  Grand total:   ₹{}", invoice.totals.grand_total);
    println!("  You saved:     ₹{}", invoice.total_savings());
    println!("  In words:      {}", invoice.totals.amount_in_words);
    println!();

    println!("Amount in words:");
    for amount in ["1", "100.50", "123456", "10000000"] {
        let amount: BigDecimal = amount.parse()?;
        println!("  {} → {}", amount, amount_in_words(&amount));
    }

    Ok(())
}
