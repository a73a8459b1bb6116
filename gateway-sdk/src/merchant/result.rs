//! Outcome of a merchant creation call.

use crate::merchant::{Credentials, Merchant, ValidationErrors};

/// Result of [`MerchantGateway::create`](crate::merchant::MerchantGateway::create).
///
/// A gateway-side validation failure is a normal outcome, not a
/// [`GatewayError`](crate::error::GatewayError): inspect it with [`errors`](Self::errors).
#[derive(Debug, Clone)]
pub enum MerchantResult {
    /// The merchant was created.
    Success {
        /// The new merchant.
        merchant: Merchant,
        /// OAuth credentials for acting on the merchant's behalf.
        credentials: Credentials,
    },
    /// The gateway rejected the request.
    Failure {
        /// Summary message, one line per error.
        message: String,
        /// Structured errors.
        errors: ValidationErrors,
    },
}

impl MerchantResult {
    /// Returns true if the merchant was created.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the merchant on success.
    #[must_use]
    pub const fn merchant(&self) -> Option<&Merchant> {
        match self {
            Self::Success { merchant, .. } => Some(merchant),
            Self::Failure { .. } => None,
        }
    }

    /// Returns the credentials on success.
    #[must_use]
    pub const fn credentials(&self) -> Option<&Credentials> {
        match self {
            Self::Success { credentials, .. } => Some(credentials),
            Self::Failure { .. } => None,
        }
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { message, .. } => Some(message.as_str()),
        }
    }

    /// Returns the validation errors on failure.
    #[must_use]
    pub const fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { errors, .. } => Some(errors),
        }
    }
}
