//! Fiat-to-crypto conversion types.

use compact_str::CompactString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currencies::{Cryptocurrency, FiatCurrency};

/// Request for converting a fiat amount into a cryptocurrency amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertCurrency {
    pub crypto_currency: Cryptocurrency,
    pub fiat_currency: FiatCurrency,
    pub fiat_amount: Decimal,
}

impl ConvertCurrency {
    /// Render the conversion query string. The gateway requires the
    /// parameters in exactly this order.
    pub(crate) fn to_query(&self) -> String {
        format!(
            "fiatCurrency={}&fiatAmount={}&cryptoCurrency={}",
            self.fiat_currency, self.fiat_amount, self.crypto_currency
        )
    }
}

/// Conversion result with the exchange rate applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyConverted {
    pub crypto_amount: Decimal,
    pub crypto_currency: Cryptocurrency,
    pub display_name: String,
    pub exchange_rate: Decimal,
    pub fiat_amount: Decimal,
    pub fiat_currency: FiatCurrency,
    pub network: CompactString,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_parameters_keep_gateway_order() {
        let convert = ConvertCurrency {
            crypto_currency: Cryptocurrency::Eth,
            fiat_currency: FiatCurrency::Eur,
            fiat_amount: Decimal::new(100, 0),
        };

        assert_eq!(
            convert.to_query(),
            "fiatCurrency=EUR&fiatAmount=100&cryptoCurrency=ETH"
        );
    }

    #[test]
    fn converted_accepts_string_amounts() {
        let converted: CurrencyConverted = serde_json::from_value(serde_json::json!({
            "cryptoAmount": "0.03815",
            "cryptoCurrency": "ETH",
            "displayName": "Ethereum",
            "exchangeRate": 2621.23,
            "fiatAmount": 100,
            "fiatCurrency": "EUR",
            "network": "mainnet"
        }))
        .unwrap();

        assert_eq!(converted.crypto_currency, Cryptocurrency::Eth);
        assert_eq!(converted.crypto_amount.to_string(), "0.03815");
    }
}
