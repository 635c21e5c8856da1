//! Seller-side settings for invoice generation

use bigdecimal::BigDecimal;
use serde::Deserialize;

use crate::invoice::builder::DEFAULT_DELIVERY_SAC;
use crate::types::*;

/// Settings shared by every invoice a seller issues
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InvoiceSettings {
    /// Seller legal name
    pub seller_name: String,
    /// Seller GSTIN
    pub seller_gstin: Option<String>,
    pub seller_address: String,
    pub seller_city: String,
    pub seller_state: Option<String>,
    pub seller_pincode: String,
    /// GST rate applied to delivery charges
    pub delivery_gst_rate: BigDecimal,
    /// SAC code delivery is reported under in the HSN summary
    pub delivery_sac: String,
}

impl Default for InvoiceSettings {
    fn default() -> Self {
        Self {
            seller_name: String::new(),
            seller_gstin: None,
            seller_address: String::new(),
            seller_city: String::new(),
            seller_state: None,
            seller_pincode: String::new(),
            delivery_gst_rate: BigDecimal::from(18),
            delivery_sac: DEFAULT_DELIVERY_SAC.to_string(),
        }
    }
}

impl InvoiceSettings {
    /// Loads settings from `GST_INVOICE_*` environment variables
    pub fn from_env() -> GstResult<Self> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("GST_INVOICE"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    /// The seller as an invoice party
    pub fn seller(&self) -> Party {
        let party = Party::new(
            self.seller_name.clone(),
            Address {
                line1: self.seller_address.clone(),
                city: self.seller_city.clone(),
                state: self.seller_state.clone(),
                pincode: self.seller_pincode.clone(),
            },
        );

        match &self.seller_gstin {
            Some(gstin) => party.with_gstin(gstin.clone()),
            None => party,
        }
    }

    /// Delivery charge at the configured rate
    pub fn delivery_charge(&self, inclusive_charges: BigDecimal) -> DeliveryCharge {
        DeliveryCharge::new(inclusive_charges, self.delivery_gst_rate.clone())
    }

    /// Seller side of an address pair, completed with the buyer's location
    pub fn address_pair(&self, buyer_pincode: String, buyer_state: Option<String>) -> AddressPair {
        AddressPair::from_pincodes(self.seller_pincode.clone(), buyer_pincode)
            .with_states(self.seller_state.clone(), buyer_state)
    }
}
