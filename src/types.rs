//! Core types and data structures for invoice tax calculations

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// A single order line as handed over by the order/catalog store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Catalog identifier of the product
    pub product_id: String,
    /// Product name as printed on the invoice
    pub name: String,
    /// HSN classification code, if the catalog has one
    pub hsn_code: Option<String>,
    /// Number of units ordered
    pub quantity: BigDecimal,
    /// Price per unit, GST inclusive
    pub inclusive_price: BigDecimal,
    /// GST rate percentage (e.g., 18 for 18%)
    pub gst_rate: BigDecimal,
    /// Maximum retail price per unit
    pub mrp: Option<BigDecimal>,
    /// Discount percentage advertised against the MRP
    pub discount: Option<BigDecimal>,
}

impl LineItem {
    /// Create a line item without HSN code, MRP or discount
    pub fn new(
        product_id: String,
        name: String,
        quantity: BigDecimal,
        inclusive_price: BigDecimal,
        gst_rate: BigDecimal,
    ) -> Self {
        Self {
            product_id,
            name,
            hsn_code: None,
            quantity,
            inclusive_price,
            gst_rate,
            mrp: None,
            discount: None,
        }
    }

    /// Set the HSN code
    pub fn with_hsn_code(mut self, hsn_code: impl Into<String>) -> Self {
        self.hsn_code = Some(hsn_code.into());
        self
    }

    /// Set the MRP and advertised discount
    pub fn with_mrp(mut self, mrp: BigDecimal, discount: Option<BigDecimal>) -> Self {
        self.mrp = Some(mrp);
        self.discount = discount;
        self
    }

    /// Line total including GST (`inclusive_price * quantity`)
    pub fn line_total(&self) -> BigDecimal {
        &self.inclusive_price * &self.quantity
    }
}

/// Delivery charge for a whole order, GST inclusive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryCharge {
    /// Charge including GST
    pub inclusive_charges: BigDecimal,
    /// GST rate applied to the delivery service
    pub gst_rate: BigDecimal,
}

impl DeliveryCharge {
    /// Create a delivery charge
    pub fn new(inclusive_charges: BigDecimal, gst_rate: BigDecimal) -> Self {
        Self {
            inclusive_charges,
            gst_rate,
        }
    }

    /// No delivery charge
    pub fn none() -> Self {
        Self::new(BigDecimal::from(0), BigDecimal::from(0))
    }

    /// Derive the delivery charge from an order total and its items subtotal.
    ///
    /// A negative result means the upstream order data is inconsistent. It is
    /// logged and passed through unchanged.
    pub fn from_order_total(
        order_total: &BigDecimal,
        items_subtotal: &BigDecimal,
        gst_rate: BigDecimal,
    ) -> Self {
        let inclusive_charges = order_total - items_subtotal;
        if inclusive_charges < BigDecimal::from(0) {
            tracing::warn!(
                %order_total,
                %items_subtotal,
                "order total is below the items subtotal, delivery charge is negative"
            );
        }
        Self::new(inclusive_charges, gst_rate)
    }
}

impl Default for DeliveryCharge {
    fn default() -> Self {
        Self::none()
    }
}

/// Seller and buyer location, input to the jurisdiction resolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressPair {
    pub seller_pincode: String,
    pub seller_state: Option<String>,
    pub buyer_pincode: String,
    pub buyer_state: Option<String>,
}

impl AddressPair {
    /// Create an address pair from pincodes only
    pub fn from_pincodes(seller_pincode: String, buyer_pincode: String) -> Self {
        Self {
            seller_pincode,
            seller_state: None,
            buyer_pincode,
            buyer_state: None,
        }
    }

    /// Attach free-text state names
    pub fn with_states(mut self, seller_state: Option<String>, buyer_state: Option<String>) -> Self {
        self.seller_state = seller_state;
        self.buyer_state = buyer_state;
        self
    }
}

/// How GST is levied on a supply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GstType {
    /// Intra-state supply: CGST + SGST
    CgstSgst,
    /// Inter-state supply: IGST
    Igst,
}

impl GstType {
    pub fn from_same_state(is_same_state: bool) -> Self {
        if is_same_state {
            GstType::CgstSgst
        } else {
            GstType::Igst
        }
    }

    pub fn is_same_state(&self) -> bool {
        matches!(self, GstType::CgstSgst)
    }
}

/// Outcome of resolving where a supply takes place
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jurisdiction {
    /// Whether seller and buyer are in the same state
    pub is_same_state: bool,
    /// Normalized seller state, if it could be determined
    pub seller_state: Option<String>,
    /// Normalized buyer state, if it could be determined
    pub buyer_state: Option<String>,
    /// Place-of-supply label printed on the invoice
    pub place_of_supply: String,
    /// Tax treatment that follows from `is_same_state`
    pub gst_type: GstType,
}

impl Jurisdiction {
    /// Inter-state treatment used when the buyer state cannot be determined
    pub fn inter_state_fallback() -> Self {
        Self {
            is_same_state: false,
            seller_state: None,
            buyer_state: None,
            place_of_supply: "Unknown".to_string(),
            gst_type: GstType::Igst,
        }
    }
}

/// Postal address of an invoice party
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub line1: String,
    pub city: String,
    pub state: Option<String>,
    pub pincode: String,
}

/// Seller or buyer printed on an invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    /// Legal or trade name
    pub name: String,
    /// GST identification number, for registered parties
    pub gstin: Option<String>,
    pub address: Address,
}

impl Party {
    pub fn new(name: String, address: Address) -> Self {
        Self {
            name,
            gstin: None,
            address,
        }
    }

    pub fn with_gstin(mut self, gstin: impl Into<String>) -> Self {
        self.gstin = Some(gstin.into());
        self
    }
}

/// Errors raised at the boundary of the GST engine
#[derive(Debug, thiserror::Error)]
pub enum GstError {
    #[error("Invalid GST rate: {0}")]
    InvalidRate(String),
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
    #[error("Invalid price: {0}")]
    InvalidPrice(String),
    #[error("Invalid pincode: {0}")]
    InvalidPincode(String),
    #[error("Invalid GSTIN: {0}")]
    InvalidGstin(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Directory error: {0}")]
    Directory(String),
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Result type for GST operations
pub type GstResult<T> = Result<T, GstError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let item = LineItem::new(
            "p1".to_string(),
            "Tea".to_string(),
            BigDecimal::from(3),
            BigDecimal::from(118),
            BigDecimal::from(18),
        );
        assert_eq!(item.line_total(), BigDecimal::from(354));
    }

    #[test]
    fn test_delivery_from_order_total_may_be_negative() {
        let delivery = DeliveryCharge::from_order_total(
            &BigDecimal::from(500),
            &BigDecimal::from(531),
            BigDecimal::from(18),
        );
        assert_eq!(delivery.inclusive_charges, BigDecimal::from(-31));
    }

    #[test]
    fn test_gst_type_serializes_screaming_case() {
        assert_eq!(
            serde_json::to_string(&GstType::CgstSgst).unwrap(),
            "\"CGST_SGST\""
        );
        assert_eq!(serde_json::to_string(&GstType::Igst).unwrap(), "\"IGST\"");
    }
}
