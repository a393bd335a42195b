//! Session API client, authenticated with cookie / CSRF / request-id
//! tokens.

use reqwest::Method;
use tokio::sync::OnceCell;
use url::Url;

use super::{
    AuthHeaders, CSRF_TOKEN_HEADER, ClientError, REQUEST_ID_HEADER, decode_response, endpoint,
    send_request,
};
use crate::config::{ApiVersion, BASE_URL, Config};
use crate::objects::convert::{ConvertCurrency, CurrencyConverted};
use crate::objects::method::{SupportedMethod, SupportedMethods};
use crate::objects::payment::{PaymentCustomer, PaymentUpdated};

/// The three tokens captured from the bootstrap response. Written once,
/// read-only afterwards.
#[derive(Debug, Clone)]
struct SessionTokens {
    cookie: String,
    csrf: String,
    request_id: String,
}

impl SessionTokens {
    fn auth(&self) -> AuthHeaders<'_> {
        AuthHeaders::Session {
            cookie: &self.cookie,
            csrf: &self.csrf,
            request_id: &self.request_id,
        }
    }
}

/// Typed HTTP client for the session-authenticated subset of the gateway.
///
/// A session starts uninitialized and becomes usable only after
/// [`init`](Self::init) captures the `Set-Cookie`, `X-Csrf-Token`, and
/// `X-Request-Id` headers from the bootstrap endpoint. Every other
/// operation fails with [`ClientError::NotInitialized`], before any
/// network activity, until that handshake succeeds. There is no logout or
/// token refresh; a session the gateway has expired simply sees failing
/// responses, and the fix is to construct a new one.
///
/// Concurrent `init` calls are safe: the in-flight handshake is memoized,
/// so the bootstrap endpoint is hit at most once per session.
#[derive(Debug, Clone)]
pub struct Session {
    http: reqwest::Client,
    base_url: String,
    version: ApiVersion,
    tokens: OnceCell<SessionTokens>,
}

impl Session {
    /// Create an uninitialized `Session` from a merchant configuration.
    ///
    /// Only the base URL and API version carry over; session endpoints do
    /// not use the merchant token.
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            version: config.version,
            tokens: OnceCell::new(),
        }
    }

    /// Create an uninitialized `Session` against the default gateway host,
    /// without any merchant configuration.
    pub fn standalone(version: ApiVersion) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: BASE_URL.to_owned(),
            version,
            tokens: OnceCell::new(),
        }
    }

    /// Replace the default `reqwest::Client` with a custom one.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http = client;
        self
    }

    fn tokens(&self) -> Result<&SessionTokens, ClientError> {
        self.tokens.get().ok_or(ClientError::NotInitialized)
    }

    fn session_endpoint(&self, path: &str) -> Result<Url, ClientError> {
        endpoint(&self.base_url, &format!("/payment/{}{path}", self.version))
    }

    fn payment_endpoint(&self, id: &str, suffix: &str) -> Result<Url, ClientError> {
        self.session_endpoint(&format!("/payment/{}{suffix}", urlencoding::encode(id)))
    }

    /// `GET /payment/{version}/csrf-cookie` – run the bootstrap handshake.
    ///
    /// Captures the `Set-Cookie`, `X-Csrf-Token`, and `X-Request-Id`
    /// response headers as session state. If any of the three is absent the
    /// session stays uninitialized and
    /// [`ClientError::MissingBootstrapHeader`] names the first missing one.
    /// Calling `init` again after success is a no-op.
    pub async fn init(&self) -> Result<(), ClientError> {
        self.tokens.get_or_try_init(|| self.bootstrap()).await?;
        Ok(())
    }

    async fn bootstrap(&self) -> Result<SessionTokens, ClientError> {
        let url = self.session_endpoint("/csrf-cookie")?;

        let resp = send_request(&self.http, Method::GET, url, AuthHeaders::None, None).await?;

        let tokens = SessionTokens {
            cookie: required_header(&resp, "Set-Cookie")?,
            csrf: required_header(&resp, CSRF_TOKEN_HEADER)?,
            request_id: required_header(&resp, REQUEST_ID_HEADER)?,
        };
        tracing::debug!(request_id = %tokens.request_id, "session initialized");
        Ok(tokens)
    }

    /// `GET /payment/{version}/currency-convert` – convert a fiat amount
    /// into a cryptocurrency amount at the current exchange rate.
    pub async fn convert_currency(
        &self,
        convert: &ConvertCurrency,
    ) -> Result<CurrencyConverted, ClientError> {
        let tokens = self.tokens()?;

        let url = self.session_endpoint(&format!("/currency-convert?{}", convert.to_query()))?;

        let resp = send_request(&self.http, Method::GET, url, tokens.auth(), None).await?;

        decode_response(resp).await
    }

    /// `GET /payment/{version}/payment/{id}/supported-method` – list the
    /// crypto rails available for a payment.
    pub async fn get_payment_methods(&self, id: &str) -> Result<SupportedMethods, ClientError> {
        let tokens = self.tokens()?;

        let url = self.payment_endpoint(id, "/supported-method")?;

        let resp = send_request(&self.http, Method::GET, url, tokens.auth(), None).await?;

        decode_response(resp).await
    }

    /// `POST /payment/{version}/payment/{id}/method` – select the payment
    /// method. Returns the gateway's JSON response as-is.
    pub async fn update_payment_method(
        &self,
        id: &str,
        method: &SupportedMethod,
    ) -> Result<serde_json::Value, ClientError> {
        let tokens = self.tokens()?;

        let url = self.payment_endpoint(id, "/method")?;
        let body = serde_json::to_string(method)?;

        let resp = send_request(&self.http, Method::POST, url, tokens.auth(), Some(body)).await?;

        decode_response(resp).await
    }

    /// `POST /payment/{version}/payment/{id}/customer` – attach customer
    /// contact info. Returns the gateway's JSON response as-is.
    pub async fn update_payment_customer(
        &self,
        id: &str,
        customer: &PaymentCustomer,
    ) -> Result<serde_json::Value, ClientError> {
        let tokens = self.tokens()?;

        let url = self.payment_endpoint(id, "/customer")?;
        let body = serde_json::to_string(customer)?;

        let resp = send_request(&self.http, Method::POST, url, tokens.auth(), Some(body)).await?;

        decode_response(resp).await
    }

    /// `PUT /payment/{version}/payment/{id}` – finalize the payment.
    ///
    /// Sends no body and does not read the response: any completed exchange
    /// yields the fixed `{ message: "Successfully" }` acknowledgement,
    /// matching the gateway's documented contract. Transport failures still
    /// propagate as errors.
    pub async fn update_payment(&self, id: &str) -> Result<PaymentUpdated, ClientError> {
        let tokens = self.tokens()?;

        let url = self.payment_endpoint(id, "")?;

        send_request(&self.http, Method::PUT, url, tokens.auth(), None).await?;

        Ok(PaymentUpdated {
            message: "Successfully".to_owned(),
        })
    }
}

fn required_header(
    response: &reqwest::Response,
    name: &'static str,
) -> Result<String, ClientError> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .ok_or(ClientError::MissingBootstrapHeader(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::currencies::{Cryptocurrency, FiatCurrency};
    use rust_decimal::Decimal;

    /// Points at a closed local port; reaching the network at all would
    /// surface as `ClientError::Http`.
    fn unreachable_session() -> Session {
        Session::new(&Config::new("M1", "T1").with_base_url("http://127.0.0.1:1/api"))
    }

    fn convert() -> ConvertCurrency {
        ConvertCurrency {
            crypto_currency: Cryptocurrency::Eth,
            fiat_currency: FiatCurrency::Eur,
            fiat_amount: Decimal::new(100, 0),
        }
    }

    #[test]
    fn endpoints_render_gateway_paths() {
        let session = Session::standalone(ApiVersion::V1);

        assert_eq!(
            session.session_endpoint("/csrf-cookie").unwrap().as_str(),
            "https://api.o2pay.co/api/payment/v1/csrf-cookie"
        );
        assert_eq!(
            session
                .payment_endpoint("abc123", "/supported-method")
                .unwrap()
                .as_str(),
            "https://api.o2pay.co/api/payment/v1/payment/abc123/supported-method"
        );
        assert_eq!(
            session.payment_endpoint("abc123", "").unwrap().as_str(),
            "https://api.o2pay.co/api/payment/v1/payment/abc123"
        );
    }

    #[test]
    fn convert_endpoint_keeps_query_order() {
        let session = Session::standalone(ApiVersion::V1);
        let url = session
            .session_endpoint(&format!("/currency-convert?{}", convert().to_query()))
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://api.o2pay.co/api/payment/v1/currency-convert?fiatCurrency=EUR&fiatAmount=100&cryptoCurrency=ETH"
        );
    }

    #[tokio::test]
    async fn operations_fail_fast_before_init() {
        let session = unreachable_session();

        let err = session.convert_currency(&convert()).await.unwrap_err();
        assert!(matches!(err, ClientError::NotInitialized));

        let err = session.get_payment_methods("abc").await.unwrap_err();
        assert!(matches!(err, ClientError::NotInitialized));

        let method = SupportedMethod {
            blockchain: crate::objects::currencies::Blockchain::Eth,
            blockchain_name: "Ethereum".into(),
            display_name: "Ether".into(),
            name: Cryptocurrency::Eth,
            ticker: "ETH".into(),
        };
        let err = session
            .update_payment_method("abc", &method)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::NotInitialized));

        let err = session
            .update_payment_customer(
                "abc",
                &PaymentCustomer {
                    email: "buyer@example.com".into(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::NotInitialized));

        let err = session.update_payment("abc").await.unwrap_err();
        assert!(matches!(err, ClientError::NotInitialized));
    }

    #[tokio::test]
    async fn ready_session_reaches_the_transport() {
        let session = unreachable_session();
        session
            .tokens
            .set(SessionTokens {
                cookie: "sid=1".into(),
                csrf: "csrf-1".into(),
                request_id: "req-1".into(),
            })
            .unwrap();

        let err = session.update_payment("abc").await.unwrap_err();
        assert!(matches!(err, ClientError::Http(_)));
    }

    #[tokio::test]
    async fn failed_init_leaves_the_session_unusable() {
        let session = unreachable_session();

        let err = session.init().await.unwrap_err();
        assert!(matches!(err, ClientError::Http(_)));

        let err = session.convert_currency(&convert()).await.unwrap_err();
        assert!(matches!(err, ClientError::NotInitialized));
    }
}
