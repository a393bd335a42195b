//! Merchant API client, authenticated with a static token.

use reqwest::Method;
use url::Url;

use super::{AuthHeaders, ClientError, decode_response, endpoint, send_request};
use crate::config::Config;
use crate::objects::payment::{Payment, PaymentCreated, PaymentCreation};
use crate::signature;

/// Typed HTTP client for the token-authenticated subset of the gateway.
///
/// Stateless: every request carries the configured merchant token in the
/// `X-O2PAY-TOKEN` header and nothing is remembered between calls. Use
/// [`create_session`](Self::create_session) to obtain a [`super::Session`]
/// for the cookie/CSRF-authenticated endpoints.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    config: Config,
}

impl Client {
    /// Create a new `Client` from a merchant configuration.
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure timeouts or a proxy).
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http = client;
        self
    }

    fn auth(&self) -> AuthHeaders<'_> {
        AuthHeaders::Token(&self.config.token)
    }

    fn create_payment_url(&self) -> Result<Url, ClientError> {
        endpoint(
            &self.config.base_url,
            &format!(
                "/merchant/{}/merchant/{}/payment",
                self.config.version,
                urlencoding::encode(&self.config.merchant_id)
            ),
        )
    }

    fn payment_url(&self, id: &str) -> Result<Url, ClientError> {
        endpoint(
            &self.config.base_url,
            &format!(
                "/payment/{}/payment/{}",
                self.config.version,
                urlencoding::encode(id)
            ),
        )
    }

    /// `POST /merchant/{version}/merchant/{merchantId}/payment` – create a
    /// new payment.
    ///
    /// A missing `id` is filled in with a freshly generated UUID v4 before
    /// the request goes out. Price and currency are not validated
    /// client-side; the gateway rejects bad values with an HTTP-level
    /// failure.
    pub async fn create_payment(
        &self,
        mut payment: PaymentCreation,
    ) -> Result<PaymentCreated, ClientError> {
        payment.ensure_id();

        let url = self.create_payment_url()?;
        let body = serde_json::to_string(&payment)?;

        let resp = send_request(&self.http, Method::POST, url, self.auth(), Some(body)).await?;

        decode_response(resp).await
    }

    /// `GET /payment/{version}/payment/{id}` – fetch a payment by id.
    pub async fn get_payment(&self, id: &str) -> Result<Payment, ClientError> {
        let url = self.payment_url(id)?;

        let resp = send_request(&self.http, Method::GET, url, self.auth(), None).await?;

        decode_response(resp).await
    }

    /// Mint a [`super::Session`] sharing this client's configuration and
    /// HTTP client, with its bootstrap handshake already completed.
    pub async fn create_session(&self) -> Result<super::Session, ClientError> {
        let session =
            super::Session::new(&self.config).with_http_client(self.http.clone());
        session.init().await?;
        Ok(session)
    }

    /// Check a webhook delivery's HMAC-SHA512 signature against the raw
    /// request body. See [`signature::validate_webhook`].
    pub fn validate_webhook(&self, request_body: &str, secret: &str, signature: &str) -> bool {
        signature::validate_webhook(request_body, secret, signature)
    }
}
