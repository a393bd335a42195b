//! Payment lifecycle types.

use compact_str::CompactString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::currencies::{Blockchain, Cryptocurrency, FiatCurrency, PaymentStatus};

/// Request payload for creating a new payment.
///
/// Absent optional fields are omitted from the wire payload entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCreation {
    /// Client-supplied payment id. Generated by [`ensure_id`](Self::ensure_id)
    /// when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub currency: FiatCurrency,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_test: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Fiat price. The gateway expects a JSON number here.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub redirect_url: String,
}

impl PaymentCreation {
    /// Assign a freshly generated UUID v4 id if the caller did not supply
    /// one. A caller-supplied id is never modified.
    pub fn ensure_id(&mut self) {
        if self.id.is_none() {
            self.id = Some(Uuid::new_v4().to_string());
        }
    }
}

/// Response returned by the payment-creation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCreated {
    pub id: String,
    pub currency: FiatCurrency,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub description: String,
    pub is_test: bool,
    pub order_id: Option<String>,
    /// Hosted checkout page for this payment. The last path segment is the
    /// server-side payment id used by the lookup and session endpoints.
    pub payment_url: String,
    pub price: Decimal,
    pub redirect_url: String,
    pub status: PaymentStatus,
    #[serde(rename = "type")]
    pub kind: CompactString,
}

/// Full payment state returned by the lookup endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub currency: FiatCurrency,
    pub description: String,
    pub id: String,
    pub is_locked: bool,
    pub merchant_name: String,
    pub payment_info: Option<PaymentInfo>,
    pub payment_method: Option<PaymentMethod>,
    pub price: Decimal,
}

/// Crypto-side settlement details, present once a payment method has been
/// selected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    pub amount: Decimal,
    #[serde(deserialize_with = "super::de::string_or_number")]
    pub amount_formatted: String,
    pub expiration_duration_min: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,
    pub payment_link: String,
    pub recipient_address: String,
    pub status: PaymentStatus,
}

/// The crypto rail a payment settles on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub blockchain: Blockchain,
    pub blockchain_name: CompactString,
    pub display_name: String,
    pub is_test: bool,
    pub name: Cryptocurrency,
    pub network_id: CompactString,
    pub ticker: Cryptocurrency,
}

/// Customer contact info attached to a payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCustomer {
    pub email: String,
}

/// Fixed acknowledgement returned by the payment finalization endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentUpdated {
    pub message: String,
}
