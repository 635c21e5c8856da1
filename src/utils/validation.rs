//! Validation utilities for the boundary where orders enter the engine.
//!
//! The tax math itself accepts any number. These checks belong to whoever builds
//! an invoice from order data (see [`crate::invoice::InvoiceBuilder`]).

use bigdecimal::BigDecimal;

use crate::jurisdiction::states::{state_by_gst_code, IndianState};
use crate::tax::gst::GstSlab;
use crate::types::*;

/// Validate that a quantity is a positive whole number
pub fn validate_quantity(quantity: &BigDecimal) -> GstResult<()> {
    if *quantity <= BigDecimal::from(0) {
        return Err(GstError::InvalidQuantity(format!(
            "Quantity must be positive, got {}",
            quantity
        )));
    }

    if !quantity.is_integer() {
        return Err(GstError::InvalidQuantity(format!(
            "Quantity must be a whole number, got {}",
            quantity
        )));
    }

    Ok(())
}

/// Validate that a price is not negative
pub fn validate_price(price: &BigDecimal) -> GstResult<()> {
    if *price < BigDecimal::from(0) {
        Err(GstError::InvalidPrice(format!(
            "Price cannot be negative, got {}",
            price
        )))
    } else {
        Ok(())
    }
}

/// Validate a GST rate percentage.
///
/// Any rate from 0 to 100 is accepted; rates off the standard slabs are only logged.
pub fn validate_gst_rate(rate: &BigDecimal) -> GstResult<()> {
    if *rate < BigDecimal::from(0) || *rate > BigDecimal::from(100) {
        return Err(GstError::InvalidRate(format!(
            "GST rate must be between 0 and 100, got {}",
            rate
        )));
    }

    if GstSlab::from_rate(rate).is_none() {
        tracing::debug!(%rate, "GST rate is not a standard slab");
    }

    Ok(())
}

/// Validate that a pincode has six digits and does not start with zero
pub fn validate_pincode(pincode: &str) -> GstResult<()> {
    let pincode = pincode.trim();

    if pincode.len() != 6 || !pincode.chars().all(|c| c.is_ascii_digit()) {
        return Err(GstError::InvalidPincode(format!(
            "Pincode must be six digits, got '{}'",
            pincode
        )));
    }

    if pincode.starts_with('0') {
        return Err(GstError::InvalidPincode(format!(
            "Pincode cannot start with zero, got '{}'",
            pincode
        )));
    }

    Ok(())
}

/// Validate a GSTIN and return the state it is registered in.
///
/// Checks the 15-character layout: two-digit state code, ten-character PAN,
/// entity number, the fixed `Z`, and a check character. The checksum itself is
/// not verified.
pub fn validate_gstin(gstin: &str) -> GstResult<&'static IndianState> {
    let gstin = gstin.trim();
    let chars: Vec<char> = gstin.chars().collect();

    if chars.len() != 15 {
        return Err(GstError::InvalidGstin(format!(
            "GSTIN must be 15 characters, got '{}'",
            gstin
        )));
    }

    if !chars.iter().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()) {
        return Err(GstError::InvalidGstin(format!(
            "GSTIN can only contain digits and uppercase letters, got '{}'",
            gstin
        )));
    }

    let pan_shape = chars[2..7].iter().all(|c| c.is_ascii_uppercase())
        && chars[7..11].iter().all(|c| c.is_ascii_digit())
        && chars[11].is_ascii_uppercase();
    if !pan_shape {
        return Err(GstError::InvalidGstin(format!(
            "GSTIN does not contain a valid PAN, got '{}'",
            gstin
        )));
    }

    if chars[13] != 'Z' {
        return Err(GstError::InvalidGstin(format!(
            "GSTIN must have 'Z' as its 14th character, got '{}'",
            gstin
        )));
    }

    state_from_gstin(gstin)
}

/// State encoded in the first two digits of a GSTIN
pub fn state_from_gstin(gstin: &str) -> GstResult<&'static IndianState> {
    let code = gstin.trim().get(..2).unwrap_or_default();
    state_by_gst_code(code).ok_or_else(|| {
        GstError::InvalidGstin(format!("Unknown GST state code '{}'", code))
    })
}

/// Validate a line item before it is put on an invoice
pub fn validate_line_item(item: &LineItem) -> GstResult<()> {
    if item.name.trim().is_empty() {
        return Err(GstError::Validation(format!(
            "Line item '{}' has no name",
            item.product_id
        )));
    }

    validate_quantity(&item.quantity)?;
    validate_price(&item.inclusive_price)?;
    validate_gst_rate(&item.gst_rate)?;

    if let Some(mrp) = &item.mrp {
        validate_price(mrp)?;
    }

    Ok(())
}

/// Validate a delivery charge before it is put on an invoice
pub fn validate_delivery_charge(delivery: &DeliveryCharge) -> GstResult<()> {
    validate_price(&delivery.inclusive_charges)?;
    validate_gst_rate(&delivery.gst_rate)
}
