//! Transport abstraction.
//!
//! The SDK builds request bodies and interprets responses; moving bytes over the network
//! and authenticating is delegated to a [`Transport`] implementation supplied by the
//! application (an HTTP client with OAuth, a recorded-response fake in tests, ...).
//!
//! # Examples
//!
//! ```rust
//! use gateway_sdk::transport::{RequestContext, Transport, TransportResponse};
//!
//! /// Transport that answers every request with the same canned body.
//! struct Canned(&'static str);
//!
//! impl Transport for Canned {
//!     async fn post<'a>(
//!         &'a self,
//!         _ctx: RequestContext<'a>,
//!         _body: &'a serde_json::Value,
//!     ) -> gateway_sdk::Result<TransportResponse> {
//!         Ok(TransportResponse { status: 200, body: self.0.as_bytes().to_vec() })
//!     }
//!
//!     fn protocol_name(&self) -> &'static str {
//!         "canned"
//!     }
//! }
//! ```

#[allow(
    redundant_imports,
    reason = "Future needed for RPITIT despite being in Edition 2024 prelude"
)]
use std::future::Future;
use std::time::Duration;

use serde_json::Value;

use crate::error::{GatewayError, Result};

/// API version the SDK's request and response shapes correspond to.
pub const API_VERSION: &str = "6";

/// Headers the SDK attaches to every request.
pub const DEFAULT_HEADERS: [(&str, &str); 3] = [
    ("Accept", "application/json"),
    ("Content-Type", "application/json"),
    ("X-ApiVersion", API_VERSION),
];

/// Request context for transport operations.
#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    /// Gateway base URL (e.g., <https://api.sandbox.braintreegateway.com/>).
    pub base_url: &'a str,
    /// Request path (e.g., "/merchants/create_via_api").
    pub path: &'a str,
    /// HTTP headers to include.
    pub headers: Vec<(&'a str, &'a str)>,
    /// Upper bound for the whole exchange, taken from the gateway configuration.
    pub timeout: Duration,
}

impl<'a> RequestContext<'a> {
    /// Creates a context carrying [`DEFAULT_HEADERS`].
    #[must_use]
    pub fn new(base_url: &'a str, path: &'a str, timeout: Duration) -> Self {
        Self { base_url, path, headers: DEFAULT_HEADERS.to_vec(), timeout }
    }
}

/// Response from transport operations.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code (or protocol equivalent).
    pub status: u16,
    /// Raw response body bytes.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Returns true for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::UnexpectedResponse` for an empty body and
    /// `GatewayError::SerializationError` for invalid JSON.
    pub fn json(&self) -> Result<Value> {
        if self.body.is_empty() {
            return Err(GatewayError::UnexpectedResponse {
                status: self.status,
                message: "empty response body".to_owned(),
            });
        }
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Transport protocol abstraction.
///
/// Implementations own authentication and retries, and must give up once
/// [`RequestContext::timeout`] has elapsed. The SDK only requires that a
/// JSON body can be posted and the raw answer returned, including non-2xx answers: the
/// gateway reports validation failures with a 422 and a JSON body the SDK interprets.
pub trait Transport: Send + Sync {
    /// Posts `body` as JSON.
    ///
    /// # Errors
    ///
    /// Returns error if the request cannot be delivered or the response cannot be read.
    fn post<'a>(
        &'a self,
        ctx: RequestContext<'a>,
        body: &'a Value,
    ) -> impl Future<Output = Result<TransportResponse>> + Send + 'a;

    /// Returns the protocol name for logging.
    ///
    /// Examples: "http/1.1", "http/2"
    fn protocol_name(&self) -> &'static str;
}
