//! # GST Invoice Core
//!
//! GST calculations for invoices issued by an Indian marketplace: taxable value
//! and GST extracted from inclusive prices, the CGST/SGST or IGST split, invoice
//! aggregation across line items and delivery, and the amount in words.
//!
//! ## Features
//!
//! - **GST math**: inclusive/exclusive conversions with no intermediate rounding
//! - **Breakdowns**: CGST + SGST for intra-state supplies, IGST for inter-state
//! - **Aggregation**: per-line and delivery breakdowns summed into rounded totals
//! - **Amount in words**: Indian numbering (thousand, lakh, crore) with paise
//! - **Jurisdiction**: state-name normalization and place-of-supply resolution
//!
//! ## Quick Start
//!
//! ```rust
//! use bigdecimal::BigDecimal;
//! use gst_invoice_core::{aggregate_invoice, DeliveryCharge, LineItem};
//!
//! let items = vec![LineItem::new(
//!     "sku-1".to_string(),
//!     "Steel bottle".to_string(),
//!     BigDecimal::from(2),
//!     BigDecimal::from(118),
//!     BigDecimal::from(18),
//! )];
//! let delivery = DeliveryCharge::new(BigDecimal::from(59), BigDecimal::from(18));
//!
//! let invoice = aggregate_invoice(&items, &delivery, true);
//! assert_eq!(invoice.totals.grand_total, BigDecimal::from(295));
//! assert_eq!(invoice.totals.amount_in_words, "Two Hundred Ninety Five Rupees Only");
//! ```

pub mod config;
pub mod invoice;
pub mod jurisdiction;
pub mod tax;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use crate::config::*;
pub use invoice::*;
pub use jurisdiction::*;
pub use tax::*;
pub use traits::*;
pub use types::*;
