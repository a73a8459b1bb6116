//! Merchant onboarding response models.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Merchant created through the onboarding API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Merchant {
    /// Merchant identifier.
    pub id: String,
    /// Contact email.
    pub email: String,
    /// Company name (defaults to the email when none was given).
    pub company_name: String,
    /// ISO 3166-1 alpha-2 country code.
    pub country_code_alpha2: String,
    /// ISO 3166-1 alpha-3 country code.
    pub country_code_alpha3: String,
    /// ISO 3166-1 numeric country code, as a string (e.g. "840").
    pub country_code_numeric: String,
    /// Country display name.
    pub country_name: String,
    /// One account per currency the merchant can settle in.
    #[serde(default)]
    pub merchant_accounts: Vec<MerchantAccount>,
}

impl Merchant {
    /// Finds a merchant account by id.
    #[must_use]
    pub fn merchant_account(&self, id: &str) -> Option<&MerchantAccount> {
        self.merchant_accounts.iter().find(|account| account.id == id)
    }

    /// Returns the account flagged as default.
    #[must_use]
    pub fn default_merchant_account(&self) -> Option<&MerchantAccount> {
        self.merchant_accounts.iter().find(|account| account.default)
    }
}

/// Per-currency merchant account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MerchantAccount {
    /// Account identifier; the onboarding API names accounts after their currency.
    pub id: String,
    /// ISO 4217 currency code.
    pub currency_iso_code: String,
    /// Whether transactions use this account when none is specified.
    #[serde(default)]
    pub default: bool,
    /// Account status (e.g. "active").
    #[serde(default)]
    pub status: Option<String>,
}

/// OAuth credentials issued for a newly created merchant.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    /// Bearer token for API calls on the merchant's behalf.
    pub access_token: String,
    /// Token to obtain a new access token.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Access token expiry.
    pub expires_at: DateTime<Utc>,
    /// Token type, `bearer`.
    pub token_type: String,
    /// Granted scopes, comma separated.
    #[serde(default)]
    pub scope: Option<String>,
}

impl Credentials {
    /// Returns true once `now` is at or past the expiry.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "[REDACTED]"))
            .field("expires_at", &self.expires_at)
            .field("token_type", &self.token_type)
            .field("scope", &self.scope)
            .finish()
    }
}
