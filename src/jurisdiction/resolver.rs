//! Decides between CGST + SGST and IGST for a seller/buyer pair

use crate::jurisdiction::states::{lookup_state, normalize_state_name};
use crate::traits::PincodeDirectory;
use crate::types::*;

/// Resolves the place of supply from an [`AddressPair`].
///
/// Explicit state names on the address pair win; pincodes are only looked up
/// when a name is missing. If either side stays unknown the supply is treated
/// as inter-state, so an invoice can always be produced.
#[derive(Debug, Clone)]
pub struct JurisdictionResolver<D: PincodeDirectory> {
    directory: D,
}

impl<D: PincodeDirectory> JurisdictionResolver<D> {
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Resolve the jurisdiction for a seller/buyer pair
    pub async fn resolve(&self, addresses: &AddressPair) -> GstResult<Jurisdiction> {
        let seller_raw = self
            .state_name(addresses.seller_state.as_deref(), &addresses.seller_pincode)
            .await?;
        let buyer_raw = self
            .state_name(addresses.buyer_state.as_deref(), &addresses.buyer_pincode)
            .await?;

        let seller_state = seller_raw.as_deref().map(normalize_state_name);
        let buyer_state = buyer_raw.as_deref().map(normalize_state_name);

        let is_same_state = match (&seller_state, &buyer_state) {
            (Some(seller), Some(buyer)) => seller == buyer,
            _ => {
                tracing::warn!(
                    seller_pincode = %addresses.seller_pincode,
                    buyer_pincode = %addresses.buyer_pincode,
                    seller_known = seller_state.is_some(),
                    buyer_known = buyer_state.is_some(),
                    "state could not be determined, treating supply as inter-state"
                );
                false
            }
        };

        let place_of_supply = match buyer_raw.as_deref() {
            Some(raw) => lookup_state(raw)
                .map(|state| state.place_of_supply())
                .unwrap_or_else(|| raw.trim().to_string()),
            None => "Unknown".to_string(),
        };

        tracing::debug!(
            ?seller_state,
            ?buyer_state,
            is_same_state,
            %place_of_supply,
            "resolved jurisdiction"
        );

        Ok(Jurisdiction {
            is_same_state,
            seller_state,
            buyer_state,
            place_of_supply,
            gst_type: GstType::from_same_state(is_same_state),
        })
    }

    async fn state_name(&self, explicit: Option<&str>, pincode: &str) -> GstResult<Option<String>> {
        match explicit.map(str::trim).filter(|name| !name.is_empty()) {
            Some(name) => Ok(Some(name.to_string())),
            None if pincode.trim().is_empty() => Ok(None),
            None => self.directory.state_for_pincode(pincode).await,
        }
    }
}

/// Compare two free-text state names after normalization
pub fn is_same_state(seller_state: &str, buyer_state: &str) -> bool {
    normalize_state_name(seller_state) == normalize_state_name(buyer_state)
}
