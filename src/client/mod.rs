//! HTTP clients for the O2Pay gateway APIs.
//!
//! Gated behind the `client` cargo feature so downstream crates that only
//! need the shared types and webhook validation do not pull in `reqwest`.
//!
//! Two authentication profiles exist, one per client type, and exactly one
//! applies to any request:
//!
//! * **Token** ([`Client`]) – `X-O2PAY-TOKEN: <token>`.
//! * **Session** ([`Session`]) – `Cookie`, `X-Csrf-Token`, `X-Request-Id`,
//!   captured from the bootstrap handshake.
//!
//! Both profiles additionally carry `Content-Type: application/json` and
//! the gateway's `Application: application/json` marker header.

mod merchant;
mod session;

pub use merchant::Client;
pub use session::Session;

use reqwest::{Method, Response, StatusCode, header};
use url::Url;

/// Header carrying the static merchant API token.
pub const TOKEN_HEADER: &str = "X-O2PAY-TOKEN";

/// Header carrying the session CSRF token.
pub const CSRF_TOKEN_HEADER: &str = "X-Csrf-Token";

/// Header carrying the session request id.
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Marker header the gateway requires on every request.
pub const APPLICATION_HEADER: &str = "Application";

/// Errors produced by the SDK HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (DNS, TLS, connection reset, …).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request body could not be serialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The base URL and endpoint path did not form a valid URL.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// Response body did not decode as the expected type. Carries the raw
    /// status and body so the caller can interpret the failure.
    #[error("unexpected response (status {status}): {source}")]
    UnexpectedResponse {
        status: StatusCode,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// A session-scoped call was made before a successful `init()`.
    #[error("session not initialized")]
    NotInitialized,

    /// The session bootstrap response lacked a required header.
    #[error("bootstrap response missing {0} header")]
    MissingBootstrapHeader(&'static str),
}

/// Credential headers for one authentication profile.
#[derive(Debug, Clone, Copy)]
pub(crate) enum AuthHeaders<'a> {
    /// No credentials yet; the session bootstrap request.
    None,
    Token(&'a str),
    Session {
        cookie: &'a str,
        csrf: &'a str,
        request_id: &'a str,
    },
}

impl AuthHeaders<'_> {
    fn apply(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            AuthHeaders::None => builder,
            AuthHeaders::Token(token) => builder.header(TOKEN_HEADER, *token),
            AuthHeaders::Session {
                cookie,
                csrf,
                request_id,
            } => builder
                .header(header::COOKIE, *cookie)
                .header(CSRF_TOKEN_HEADER, *csrf)
                .header(REQUEST_ID_HEADER, *request_id),
        }
    }
}

/// Join the configured base URL with a versioned endpoint path.
///
/// Plain concatenation: gateway paths already embed the `/merchant` or
/// `/payment` prefix under the base URL's `/api` segment, which
/// [`Url::join`] would otherwise swallow.
pub(crate) fn endpoint(base_url: &str, path: &str) -> Result<Url, ClientError> {
    Ok(Url::parse(&format!("{base_url}{path}"))?)
}

/// Assemble a gateway request: shared headers, one credential profile, and
/// an optional pre-serialized JSON body.
pub(crate) fn build_request(
    http: &reqwest::Client,
    method: Method,
    url: Url,
    auth: AuthHeaders<'_>,
    body: Option<String>,
) -> Result<reqwest::Request, ClientError> {
    let mut builder = http
        .request(method, url)
        .header(header::CONTENT_TYPE, "application/json")
        .header(APPLICATION_HEADER, "application/json");
    builder = auth.apply(builder);
    if let Some(json) = body {
        builder = builder.body(json);
    }
    Ok(builder.build()?)
}

/// Issue a single request. No retry, backoff, or timeout logic lives here;
/// every failure surfaces to the caller.
pub(crate) async fn send_request(
    http: &reqwest::Client,
    method: Method,
    url: Url,
    auth: AuthHeaders<'_>,
    body: Option<String>,
) -> Result<Response, ClientError> {
    let request = build_request(http, method, url, auth, body)?;
    tracing::debug!(method = %request.method(), url = %request.url(), "sending gateway request");

    let response = http.execute(request).await?;
    tracing::debug!(status = %response.status(), "gateway response");
    Ok(response)
}

/// Decode a response body as `T`.
///
/// The body is decoded regardless of HTTP status: error payloads are
/// JSON too, and callers expecting `serde_json::Value` receive them as-is.
/// A body that does not match `T` becomes
/// [`ClientError::UnexpectedResponse`] with the raw status and body.
pub(crate) async fn decode_response<T: serde::de::DeserializeOwned>(
    response: Response,
) -> Result<T, ClientError> {
    let status = response.status();
    let bytes = response.bytes().await?;

    serde_json::from_slice(&bytes).map_err(|source| ClientError::UnexpectedResponse {
        status,
        body: String::from_utf8_lossy(&bytes).into_owned(),
        source,
    })
}
