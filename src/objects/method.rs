//! Supported payment method listing for a payment.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use super::currencies::{Blockchain, Cryptocurrency};

/// One crypto rail a payment can settle on.
///
/// Posted back verbatim to select it as the payment method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportedMethod {
    pub blockchain: Blockchain,
    pub blockchain_name: CompactString,
    pub display_name: String,
    pub name: Cryptocurrency,
    pub ticker: CompactString,
}

/// All rails currently available for a payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportedMethods {
    pub available_methods: Vec<SupportedMethod>,
}
