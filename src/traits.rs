//! Traits for the external collaborators of the GST engine

use async_trait::async_trait;

use crate::types::*;

/// Source of pincode-to-state data
///
/// The engine does not maintain postal data itself. Implement this trait over
/// whatever lookup service or table the deployment has (a database, a postal API,
/// a bundled file).
#[async_trait]
pub trait PincodeDirectory: Send + Sync {
    /// State name for a six-digit pincode, or `None` if the pincode is unknown.
    /// The name may be free text or an abbreviation; callers normalize it.
    async fn state_for_pincode(&self, pincode: &str) -> GstResult<Option<String>>;
}

/// Directory that knows no pincodes. Resolution then relies on explicit state names.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDirectory;

#[async_trait]
impl PincodeDirectory for NoDirectory {
    async fn state_for_pincode(&self, _pincode: &str) -> GstResult<Option<String>> {
        Ok(None)
    }
}
