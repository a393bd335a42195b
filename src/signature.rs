//! Webhook signature algorithm and validation.
//!
//! The gateway signs every webhook delivery with HMAC-SHA512 over the raw
//! request body, keyed by the merchant's webhook secret, and sends the
//! Base64-encoded digest out-of-band alongside the payload.
//!
//! Validate against the body text exactly as received: reserializing the
//! JSON changes the bytes and the signature no longer matches.

use ring::hmac;

fn mac(request_body: &str, secret: &str) -> hmac::Tag {
    let key = hmac::Key::new(hmac::HMAC_SHA512, secret.as_bytes());
    hmac::sign(&key, request_body.as_bytes())
}

/// Compute the Base64-encoded HMAC-SHA512 signature for a webhook body.
///
/// The gateway performs the same computation on its side; this is mainly
/// useful for staging endpoints and tests that emit their own deliveries.
pub fn sign_webhook(request_body: &str, secret: &str) -> String {
    fast32::base64::RFC4648.encode(mac(request_body, secret).as_ref())
}

/// Check a webhook delivery's signature.
///
/// Returns `true` iff `signature` is the Base64 encoding of
/// HMAC-SHA512(`request_body`, `secret`). Any mismatch yields `false`,
/// never an error; a signature that is not valid Base64 is a mismatch.
/// The digest comparison is constant-time.
pub fn validate_webhook(request_body: &str, secret: &str, signature: &str) -> bool {
    let Ok(provided) = fast32::base64::RFC4648.decode_str(signature) else {
        return false;
    };

    let key = hmac::Key::new(hmac::HMAC_SHA512, secret.as_bytes());
    hmac::verify(&key, request_body.as_bytes(), &provided).is_ok()
}
