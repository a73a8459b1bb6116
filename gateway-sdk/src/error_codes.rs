//! Validation error codes returned by the gateway.
//!
//! Codes arrive as strings in [`ValidationError::code`](crate::merchant::ValidationError::code).

/// Codes reported under the `merchant` object.
pub mod merchant {
    /// Email is required.
    pub const EMAIL_IS_REQUIRED: &str = "83601";
    /// Email format is invalid.
    pub const EMAIL_FORMAT_IS_INVALID: &str = "93602";
    /// Country cannot be blank.
    pub const COUNTRY_CANNOT_BE_BLANK: &str = "83603";
    /// Country code (alpha3) is not an accepted country.
    pub const COUNTRY_CODE_ALPHA3_IS_NOT_ACCEPTED: &str = "93604";
    /// Country code (alpha3) is not a valid country.
    pub const COUNTRY_CODE_ALPHA3_IS_INVALID: &str = "93605";
    /// Country code (alpha2) is not an accepted country.
    pub const COUNTRY_CODE_ALPHA2_IS_NOT_ACCEPTED: &str = "93606";
    /// Country code (alpha2) is not a valid country.
    pub const COUNTRY_CODE_ALPHA2_IS_INVALID: &str = "93607";
    /// Country code (numeric) is not an accepted country.
    pub const COUNTRY_CODE_NUMERIC_IS_NOT_ACCEPTED: &str = "93608";
    /// Country code (numeric) is not a valid country.
    pub const COUNTRY_CODE_NUMERIC_IS_INVALID: &str = "93609";
    /// Country name is not an accepted country.
    pub const COUNTRY_NAME_IS_NOT_ACCEPTED: &str = "93610";
    /// Country name is not a valid country.
    pub const COUNTRY_NAME_IS_INVALID: &str = "93611";
    /// Given country identifiers are inconsistent.
    pub const INCONSISTENT_COUNTRY: &str = "93612";
    /// One or more payment methods passed are not accepted.
    pub const PAYMENT_METHODS_ARE_INVALID: &str = "93613";
    /// One or more currencies passed are not accepted.
    pub const CURRENCIES_ARE_INVALID: &str = "93614";
    /// Payment methods are not allowed for this onboarding application.
    pub const PAYMENT_METHODS_ARE_NOT_ALLOWED: &str = "93615";
}
