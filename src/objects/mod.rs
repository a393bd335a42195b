//! Request and response types for the O2Pay gateway API.
//!
//! All wire names are camelCase; amounts deserialize from both JSON
//! numbers and numeric strings, matching what the gateway actually sends.

pub mod convert;
pub mod currencies;
pub mod method;
pub mod payment;
pub mod webhook;

pub(crate) mod de {
    use serde::Deserialize;

    /// Accept a JSON string or number and normalize it to a `String`.
    ///
    /// Formatted-amount fields arrive in either form depending on the
    /// gateway version.
    pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => text,
            Raw::Number(number) => number.to_string(),
        })
    }
}
