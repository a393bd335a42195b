use serde::{Deserialize, Serialize};

/// All blockchains the gateway settles on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Blockchain {
    Bsc,
    Eth,
    Matic,
    Tron,
}

impl std::fmt::Display for Blockchain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Blockchain::Bsc => write!(f, "BSC"),
            Blockchain::Eth => write!(f, "ETH"),
            Blockchain::Matic => write!(f, "MATIC"),
            Blockchain::Tron => write!(f, "TRON"),
        }
    }
}

/// All cryptocurrencies the gateway accepts, keyed by blockchain rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Cryptocurrency {
    Eth,
    EthUsdc,
    EthUsdt,
    Matic,
    MaticUsdc,
    MaticUsdt,
    Bnb,
    BscUsdt,
    Tron,
    TronUsdt,
}

impl std::fmt::Display for Cryptocurrency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cryptocurrency::Eth => write!(f, "ETH"),
            Cryptocurrency::EthUsdc => write!(f, "ETH_USDC"),
            Cryptocurrency::EthUsdt => write!(f, "ETH_USDT"),
            Cryptocurrency::Matic => write!(f, "MATIC"),
            Cryptocurrency::MaticUsdc => write!(f, "MATIC_USDC"),
            Cryptocurrency::MaticUsdt => write!(f, "MATIC_USDT"),
            Cryptocurrency::Bnb => write!(f, "BNB"),
            Cryptocurrency::BscUsdt => write!(f, "BSC_USDT"),
            Cryptocurrency::Tron => write!(f, "TRON"),
            Cryptocurrency::TronUsdt => write!(f, "TRON_USDT"),
        }
    }
}

/// Fiat currencies accepted for pricing payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FiatCurrency {
    Eur,
    Usd,
}

impl std::fmt::Display for FiatCurrency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FiatCurrency::Eur => write!(f, "EUR"),
            FiatCurrency::Usd => write!(f, "USD"),
        }
    }
}

/// Payment lifecycle status reported by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentStatus {
    Failed,
    InProgress,
    Success,
    Pending,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Failed => write!(f, "failed"),
            PaymentStatus::InProgress => write!(f, "inProgress"),
            PaymentStatus::Success => write!(f, "success"),
            PaymentStatus::Pending => write!(f, "pending"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_gateway() {
        assert_eq!(
            serde_json::to_string(&Blockchain::Bsc).unwrap(),
            "\"BSC\""
        );
        assert_eq!(
            serde_json::to_string(&Cryptocurrency::EthUsdc).unwrap(),
            "\"ETH_USDC\""
        );
        assert_eq!(
            serde_json::to_string(&Cryptocurrency::Bnb).unwrap(),
            "\"BNB\""
        );
        assert_eq!(
            serde_json::to_string(&FiatCurrency::Eur).unwrap(),
            "\"EUR\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentStatus::InProgress).unwrap(),
            "\"inProgress\""
        );
    }

    #[test]
    fn display_matches_serde() {
        for (crypto, wire) in [
            (Cryptocurrency::TronUsdt, "TRON_USDT"),
            (Cryptocurrency::MaticUsdc, "MATIC_USDC"),
        ] {
            assert_eq!(crypto.to_string(), wire);
            assert_eq!(
                serde_json::to_string(&crypto).unwrap(),
                format!("\"{wire}\"")
            );
        }
    }

    #[test]
    fn status_round_trips() {
        let status: PaymentStatus = serde_json::from_str("\"inProgress\"").unwrap();
        assert_eq!(status, PaymentStatus::InProgress);
    }
}
