//! Webhook notification payload.

use serde::{Deserialize, Serialize};

use super::currencies::{Blockchain, FiatCurrency, PaymentStatus};

/// Inbound notification of a payment status change.
///
/// Arrives signed with HMAC-SHA512; authenticate the raw request body with
/// [`crate::signature::validate_webhook`] before trusting the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    pub id: String,
    pub customer_email: String,
    pub is_test: bool,
    pub payment_link_id: String,
    pub selected_blockchain: Blockchain,
    pub selected_currency: FiatCurrency,
    pub status: PaymentStatus,
}
