//! Client SDK for the O2Pay cryptocurrency payment gateway.
//!
//! Two client flavors exist, each tied to one authentication profile:
//!
//! * [`Client`] – stateless, authenticated with a static merchant id and
//!   API token sent in the `X-O2PAY-TOKEN` header. Creates payments,
//!   fetches them by id, and mints sessions.
//! * [`Session`] – stateful, authenticated with cookie / CSRF / request-id
//!   tokens captured from a bootstrap handshake. Converts currencies and
//!   drives payment-method, customer, and finalization updates.
//!
//! Webhook signatures (HMAC-SHA512, Base64-encoded) are validated with
//! [`validate_webhook`], which is available even with the `client` cargo
//! feature disabled; a backend that only receives webhooks does not need
//! the HTTP stack.
//!
//! ```no_run
//! use o2pay_sdk::{Client, Config};
//! use o2pay_sdk::objects::payment::PaymentCreation;
//! use o2pay_sdk::objects::currencies::FiatCurrency;
//!
//! # async fn run() -> Result<(), o2pay_sdk::ClientError> {
//! let client = Client::new(Config::new("merchant-id", "api-token"));
//!
//! let created = client
//!     .create_payment(PaymentCreation {
//!         id: None,
//!         currency: FiatCurrency::Eur,
//!         description: "Some Product".into(),
//!         is_test: Some(true),
//!         order_id: None,
//!         price: rust_decimal::Decimal::new(10, 0),
//!         redirect_url: "https://example.com/thanks".into(),
//!     })
//!     .await?;
//!
//! let session = client.create_session().await?;
//! let methods = session.get_payment_methods(&created.id).await?;
//! # let _ = methods;
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod objects;
pub mod signature;

#[cfg(feature = "client")]
pub use client::{Client, ClientError, Session};
pub use config::{ApiVersion, Config};
pub use signature::{sign_webhook, validate_webhook};
