//! Error types for the gateway SDK.
//!
//! All errors implement the standard [`std::error::Error`] trait via [`thiserror::Error`].
//!
//! # Error Categories
//!
//! - **Argument Errors** ([`GatewayError::InvalidArgument`]): a search predicate was given
//!   values its field does not accept
//! - **Configuration Errors** ([`GatewayError::ConfigurationError`]): bad TOML, bad
//!   credentials, unusable base URL
//! - **Transport Errors** ([`GatewayError::TransportError`]): the pluggable transport failed
//! - **Protocol Errors** ([`GatewayError::UnexpectedResponse`],
//!   [`GatewayError::SerializationError`]): the gateway answered with something we cannot read
//!
//! Validation failures reported *by the gateway* (for example an unsupported payment
//! method) are not errors at this level: they come back as
//! [`MerchantResult::Failure`](crate::merchant::MerchantResult::Failure).
//!
//! # Examples
//!
//! ```
//! use gateway_sdk::{error::GatewayError, search::MultipleValueNodeBuilder};
//!
//! let payment_methods = MultipleValueNodeBuilder::with_whitelist(
//!     "payment_methods",
//!     ["credit_card", "paypal"],
//! );
//!
//! let err = payment_methods.in_list(["fake_money"]).unwrap_err();
//! assert!(matches!(err, GatewayError::InvalidArgument { .. }));
//! assert_eq!(err.to_string(), "Invalid argument(s) for payment_methods: fake_money");
//! ```

use thiserror::Error;

/// Result type alias for SDK operations.
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Errors that can occur in the gateway SDK.
///
/// This type implements `#[must_use]` to ensure errors are not silently ignored.
#[must_use = "errors should be handled, propagated, or explicitly panicked"]
#[derive(Debug, Error)]
pub enum GatewayError {
    /// A membership predicate contained values outside the field's whitelist.
    ///
    /// Raised before any node is built, so no partially valid criteria ever reaches
    /// a request. `values` lists each offending value once, in the order it first
    /// appeared in the input.
    ///
    /// # Recovery
    ///
    /// Drop the offending values or use one of the values the field accepts.
    #[error("Invalid argument(s) for {field}: {}", values.join(", "))]
    InvalidArgument {
        /// Field the predicate was built for.
        field: String,
        /// Values not present in the whitelist.
        values: Vec<String>,
    },

    /// Gateway configuration is invalid.
    ///
    /// Common causes include:
    /// - Malformed TOML
    /// - Credentials without the `client_id$<environment>$` prefix
    /// - Credentials issued for different environments
    /// - A non-HTTPS base URL outside the development environment
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The transport failed to deliver the request or read the response.
    ///
    /// # Recovery
    ///
    /// Transport implementations decide what is transient; retry only when the
    /// underlying cause is known to be.
    #[error("Transport error: {0}")]
    TransportError(String),

    /// The gateway answered with a body that matches none of the known shapes.
    #[error("Unexpected gateway response (status {status}): {message}")]
    UnexpectedResponse {
        /// Status code reported by the transport.
        status: u16,
        /// What was wrong with the body.
        message: String,
    },

    /// JSON encoding or decoding failed.
    #[error("Serialization failed: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let error = GatewayError::InvalidArgument {
            field: "payment_methods".into(),
            values: vec!["fake_money".into(), "beads".into()],
        };
        assert_eq!(error.to_string(), "Invalid argument(s) for payment_methods: fake_money, beads");
    }

    #[test]
    fn test_configuration_error_display() {
        let error = GatewayError::ConfigurationError("missing client_id".into());
        assert_eq!(error.to_string(), "Configuration error: missing client_id");
    }

    #[test]
    fn test_transport_error_display() {
        let error = GatewayError::TransportError("connection reset".into());
        assert!(error.to_string().contains("Transport error"));
    }

    #[test]
    fn test_unexpected_response_display() {
        let error =
            GatewayError::UnexpectedResponse { status: 500, message: "empty body".into() };
        assert_eq!(error.to_string(), "Unexpected gateway response (status 500): empty body");
    }

    #[test]
    fn test_serialization_error_from() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error: GatewayError = json_err.into();
        assert!(matches!(error, GatewayError::SerializationError(_)));
        assert!(error.to_string().starts_with("Serialization failed"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GatewayError>();
    }
}
