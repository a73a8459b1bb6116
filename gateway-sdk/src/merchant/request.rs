//! Merchant creation request.

use std::fmt;

use serde::Serialize;

/// Parameters for creating a merchant through the onboarding API.
///
/// Serializes to the object the gateway expects under the `merchant` key. Empty optional
/// parts are omitted.
///
/// # Examples
///
/// ```
/// use gateway_sdk::merchant::MerchantRequest;
/// use serde_json::json;
///
/// let request = MerchantRequest::new("name@email.com", "USA")
///     .with_payment_methods(["credit_card", "paypal"]);
///
/// assert_eq!(
///     serde_json::to_value(&request).unwrap(),
///     json!({
///         "email": "name@email.com",
///         "country_code_alpha3": "USA",
///         "payment_methods": ["credit_card", "paypal"],
///     })
/// );
/// ```
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct MerchantRequest {
    /// Contact email; also used as the company name when none is given.
    pub email: String,
    /// ISO 3166-1 alpha-3 country code.
    pub country_code_alpha3: String,
    /// Payment methods to enable (e.g. `credit_card`, `paypal`).
    pub payment_methods: Vec<String>,
    /// ISO 4217 currencies to open merchant accounts in.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub currencies: Vec<String>,
    /// Company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// PayPal application credentials, required when `paypal` is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paypal_account: Option<PayPalAccount>,
}

impl MerchantRequest {
    /// Creates a request with the required fields.
    pub fn new(email: impl Into<String>, country_code_alpha3: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            country_code_alpha3: country_code_alpha3.into(),
            ..Self::default()
        }
    }

    /// Sets the payment methods.
    #[must_use]
    pub fn with_payment_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.payment_methods = methods.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the currencies.
    #[must_use]
    pub fn with_currencies<I, S>(mut self, currencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.currencies = currencies.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the company name.
    #[must_use]
    pub fn with_company_name(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = Some(company_name.into());
        self
    }

    /// Attaches PayPal application credentials.
    #[must_use]
    pub fn with_paypal_account(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.paypal_account =
            Some(PayPalAccount { client_id: client_id.into(), client_secret: client_secret.into() });
        self
    }
}

/// PayPal application credentials linked to a new merchant.
#[derive(Clone, Default, Serialize, PartialEq, Eq)]
pub struct PayPalAccount {
    /// PayPal client id.
    pub client_id: String,
    /// PayPal client secret.
    pub client_secret: String,
}

impl fmt::Debug for PayPalAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PayPalAccount")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}
