use std::fmt::{Debug, Formatter};

use crate::utils::Redact;

/// Credential issued by the review service to a merchant.
///
/// The secret never leaves the credential except inside a keyed digest; the
/// `Debug` implementation redacts it so it cannot end up in logs.
#[derive(Clone)]
pub struct Credential {
    /// Merchant id issued to the merchant.
    pub merchant_id: String,
    /// Secret shared between the merchant and the service for hashing
    /// requests.
    pub merchant_secret: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(merchant_id: impl Into<String>, merchant_secret: impl Into<String>) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            merchant_secret: merchant_secret.into(),
        }
    }

    /// Check that both parts of the credential are present.
    pub fn is_valid(&self) -> bool {
        !self.merchant_id.is_empty() && !self.merchant_secret.is_empty()
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("merchant_id", &self.merchant_id)
            .field("merchant_secret", &Redact::from(&self.merchant_secret))
            .finish()
    }
}
