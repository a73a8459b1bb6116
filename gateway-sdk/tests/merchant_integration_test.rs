//! Integration tests for merchant onboarding.
//!
//! Runs the merchant gateway against an in-memory transport that mimics the onboarding
//! endpoint: it accepts `credit_card` and `paypal`, derives country details from the alpha-3
//! code and opens one merchant account per requested currency (or the country's currency,
//! falling back to USD).

use std::{sync::Mutex, time::Duration};

use gateway_sdk::{
    Gateway, GatewayError, MerchantRequest, MerchantResult,
    config::{ClientCredentials, GatewayConfig},
    error_codes,
    search::MultipleValueNodeBuilder,
    transport::{RequestContext, Transport, TransportResponse},
};
use serde_json::{Value, json};

#[derive(Debug)]
struct Recorded {
    base_url: String,
    path: String,
    headers: Vec<(String, String)>,
    timeout: Duration,
    body: Value,
}

#[derive(Debug, Default)]
struct FakeOnboarding {
    requests: Mutex<Vec<Recorded>>,
}

fn country(alpha3: &str) -> (&'static str, &'static str, &'static str, Option<&'static str>) {
    match alpha3 {
        "USA" => ("US", "840", "United States of America", Some("USD")),
        "JPN" => ("JP", "392", "Japan", Some("JPY")),
        "YEM" => ("YE", "887", "Yemen", None),
        _ => ("", "", "", None),
    }
}

impl FakeOnboarding {
    fn respond(body: &Value) -> TransportResponse {
        let merchant = &body["merchant"];
        let methods: Vec<String> = merchant["payment_methods"]
            .as_array()
            .map(|values| values.iter().filter_map(|v| v.as_str().map(str::to_owned)).collect())
            .unwrap_or_default();

        let accepted = MultipleValueNodeBuilder::with_whitelist(
            "payment_methods",
            ["credit_card", "paypal"],
        );
        if accepted.in_list(methods).is_err() {
            let message = "One or more payment methods passed are not accepted.";
            return TransportResponse {
                status: 422,
                body: serde_json::to_vec(&json!({"api_error_response": {
                    "message": message,
                    "errors": {"merchant": {"errors": [{
                        "attribute": "payment_methods",
                        "code": error_codes::merchant::PAYMENT_METHODS_ARE_INVALID,
                        "message": message,
                    }]}},
                }}))
                .unwrap(),
            };
        }

        let email = merchant["email"].as_str().unwrap_or_default();
        let alpha3 = merchant["country_code_alpha3"].as_str().unwrap_or_default();
        let (alpha2, numeric, name, local_currency) = country(alpha3);

        let requested: Vec<&str> = merchant["currencies"]
            .as_array()
            .map(|values| values.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();
        let currencies =
            if requested.is_empty() { vec![local_currency.unwrap_or("USD")] } else { requested };
        let default_currency =
            if currencies.contains(&"USD") { "USD" } else { currencies[0] };

        let accounts: Vec<Value> = currencies
            .iter()
            .map(|currency| {
                json!({
                    "id": currency,
                    "currency_iso_code": currency,
                    "default": *currency == default_currency,
                    "status": "active",
                })
            })
            .collect();

        TransportResponse {
            status: 201,
            body: serde_json::to_vec(&json!({"response": {
                "merchant": {
                    "id": "integration_merchant_public_id",
                    "email": email,
                    "company_name": merchant["company_name"].as_str().unwrap_or(email),
                    "country_code_alpha2": alpha2,
                    "country_code_alpha3": alpha3,
                    "country_code_numeric": numeric,
                    "country_name": name,
                    "merchant_accounts": accounts,
                },
                "credentials": {
                    "access_token": "access_token$development$integration_merchant_id$abc",
                    "refresh_token": "refresh_token$development$integration_merchant_id$def",
                    "expires_at": "2026-10-20T12:00:00Z",
                    "token_type": "bearer",
                    "scope": "read_write",
                },
            }}))
            .unwrap(),
        }
    }
}

impl Transport for FakeOnboarding {
    async fn post<'a>(
        &'a self,
        ctx: RequestContext<'a>,
        body: &'a Value,
    ) -> gateway_sdk::Result<TransportResponse> {
        self.requests.lock().unwrap().push(Recorded {
            base_url: ctx.base_url.to_owned(),
            path: ctx.path.to_owned(),
            headers: ctx
                .headers
                .iter()
                .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
                .collect(),
            timeout: ctx.timeout,
            body: body.clone(),
        });
        Ok(Self::respond(body))
    }

    fn protocol_name(&self) -> &'static str {
        "fake"
    }
}

#[derive(Debug)]
struct Unreachable;

impl Transport for Unreachable {
    async fn post<'a>(
        &'a self,
        _ctx: RequestContext<'a>,
        _body: &'a Value,
    ) -> gateway_sdk::Result<TransportResponse> {
        Err(GatewayError::TransportError("connection refused".to_owned()))
    }

    fn protocol_name(&self) -> &'static str {
        "unreachable"
    }
}

fn gateway<T: Transport>(transport: T) -> Gateway<T> {
    let credentials = ClientCredentials::new(
        "client_id$development$integration_client_id",
        "client_secret$development$integration_client_secret",
    )
    .expect("valid credentials");
    Gateway::new(GatewayConfig::from_credentials(&credentials), transport)
        .expect("valid configuration")
}

fn assert_credentials(result: &MerchantResult) {
    let credentials = result.credentials().expect("credentials on success");
    assert!(!credentials.access_token.is_empty());
    assert_eq!(credentials.token_type, "bearer");
}

#[tokio::test]
async fn test_create_merchant() {
    let gateway = gateway(FakeOnboarding::default());
    let request = MerchantRequest::new("name@email.com", "USA")
        .with_payment_methods(["credit_card", "paypal"]);

    let result = gateway.merchant().create(&request).await.expect("request succeeds");

    assert!(result.is_success());
    let merchant = result.merchant().expect("merchant on success");
    assert!(!merchant.id.is_empty());
    assert_eq!(merchant.email, "name@email.com");
    assert_eq!(merchant.country_code_alpha3, "USA");
    assert_eq!(merchant.country_code_alpha2, "US");
    assert_eq!(merchant.country_code_numeric, "840");
    assert_eq!(merchant.country_name, "United States of America");
    assert_eq!(merchant.company_name, "name@email.com");
    assert_credentials(&result);
}

#[tokio::test]
async fn test_create_merchant_request_shape() {
    let transport = FakeOnboarding::default();
    let gateway = gateway(transport);
    let request = MerchantRequest::new("name@email.com", "USA").with_payment_methods(["paypal"]);

    gateway.merchant().create(&request).await.expect("request succeeds");

    let requests = gateway.transport().requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let recorded = &requests[0];
    assert_eq!(recorded.base_url, "http://localhost:3000");
    assert_eq!(recorded.path, "/merchants/create_via_api");
    assert!(recorded.headers.contains(&("X-ApiVersion".to_owned(), "6".to_owned())));
    assert_eq!(recorded.timeout, Duration::from_secs(60));
    assert_eq!(
        recorded.body,
        json!({"merchant": {
            "email": "name@email.com",
            "country_code_alpha3": "USA",
            "payment_methods": ["paypal"],
        }})
    );
}

#[tokio::test]
async fn test_configured_timeout_reaches_transport() {
    let config = GatewayConfig::from_toml(
        r#"
        environment = "development"
        client_id = "client_id$development$integration_client_id"
        client_secret = "client_secret$development$integration_client_secret"
        timeout_secs = 1
        "#,
    )
    .expect("valid TOML");
    let gateway = Gateway::new(config, FakeOnboarding::default()).expect("valid configuration");
    let request = MerchantRequest::new("name@email.com", "USA").with_payment_methods(["paypal"]);

    gateway.merchant().create(&request).await.expect("request succeeds");

    let requests = gateway.transport().requests.lock().unwrap();
    assert_eq!(requests[0].timeout, Duration::from_secs(1));
}

#[tokio::test]
async fn test_returns_error_with_invalid_payment_methods() {
    let gateway = gateway(FakeOnboarding::default());
    let request =
        MerchantRequest::new("name@email.com", "USA").with_payment_methods(["fake_money"]);

    let result = gateway.merchant().create(&request).await.expect("request succeeds");

    assert!(!result.is_success());
    assert!(
        result
            .message()
            .unwrap()
            .contains("One or more payment methods passed are not accepted.")
    );

    let payment_method_errors =
        result.errors().unwrap().for_object("merchant").on("payment_methods");
    assert_eq!(payment_method_errors.len(), 1);
    assert_eq!(
        payment_method_errors[0].code,
        error_codes::merchant::PAYMENT_METHODS_ARE_INVALID
    );
}

#[tokio::test]
async fn test_create_paypal_only_merchant_that_accepts_multiple_currencies() {
    let gateway = gateway(FakeOnboarding::default());
    let request = MerchantRequest::new("name@email.com", "USA")
        .with_payment_methods(["paypal"])
        .with_currencies(["GBP", "USD"])
        .with_paypal_account("paypal_client_id", "paypal_client_secret");

    let result = gateway.merchant().create(&request).await.expect("request succeeds");

    assert!(result.is_success());
    assert_credentials(&result);
    let merchant = result.merchant().unwrap();
    assert_eq!(merchant.country_code_alpha2, "US");
    assert_eq!(merchant.merchant_accounts.len(), 2);

    let usd = merchant.merchant_account("USD").expect("USD account");
    assert!(usd.default);
    assert_eq!(usd.currency_iso_code, "USD");

    let gbp = merchant.merchant_account("GBP").expect("GBP account");
    assert!(!gbp.default);
    assert_eq!(gbp.currency_iso_code, "GBP");
}

#[tokio::test]
async fn test_allows_creation_of_non_us_merchant() {
    let gateway = gateway(FakeOnboarding::default());
    let request = MerchantRequest::new("name@email.com", "JPN")
        .with_payment_methods(["paypal"])
        .with_paypal_account("paypal_client_id", "paypal_client_secret");

    let result = gateway.merchant().create(&request).await.expect("request succeeds");

    assert!(result.is_success());
    let merchant = result.merchant().unwrap();
    assert_eq!(merchant.country_code_alpha3, "JPN");
    assert_eq!(merchant.country_code_alpha2, "JP");
    assert_eq!(merchant.country_code_numeric, "392");
    assert_eq!(merchant.country_name, "Japan");
    assert_eq!(merchant.merchant_accounts.len(), 1);

    let account = &merchant.merchant_accounts[0];
    assert!(account.default);
    assert_eq!(account.currency_iso_code, "JPY");
}

#[tokio::test]
async fn test_defaults_to_usd_when_country_currency_not_supported() {
    let gateway = gateway(FakeOnboarding::default());
    let request = MerchantRequest::new("name@email.com", "YEM")
        .with_payment_methods(["paypal"])
        .with_paypal_account("paypal_client_id", "paypal_client_secret");

    let result = gateway.merchant().create(&request).await.expect("request succeeds");

    let merchant = result.merchant().expect("merchant on success");
    assert_eq!(merchant.country_code_alpha2, "YE");
    assert_eq!(merchant.country_code_numeric, "887");
    assert_eq!(merchant.country_name, "Yemen");
    assert_eq!(merchant.merchant_accounts.len(), 1);
    assert!(merchant.merchant_accounts[0].default);
    assert_eq!(merchant.merchant_accounts[0].currency_iso_code, "USD");
}

#[tokio::test]
async fn test_transport_failure_propagates() {
    let gateway = gateway(Unreachable);
    let request = MerchantRequest::new("name@email.com", "USA").with_payment_methods(["paypal"]);

    let err = gateway.merchant().create(&request).await.unwrap_err();
    assert!(matches!(err, GatewayError::TransportError(_)));
}

#[test]
fn test_gateway_rejects_invalid_configuration() {
    let config = GatewayConfig::from_toml(
        r#"
        environment = "development"
        client_id = "client_id$development$integration_client_id"
        client_secret = "client_secret$development$integration_client_secret"
        "#,
    )
    .expect("valid TOML");

    let mut mismatched = config.clone();
    mismatched.environment = gateway_sdk::config::Environment::Production;
    assert!(matches!(
        Gateway::new(mismatched, Unreachable),
        Err(GatewayError::ConfigurationError(_))
    ));

    let gateway = Gateway::new(config, Unreachable).expect("valid configuration");
    assert_eq!(gateway.base_url(), "http://localhost:3000");
}
