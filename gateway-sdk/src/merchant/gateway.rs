//! Merchant onboarding operations.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{info, instrument, warn};

use crate::{
    error::{GatewayError, Result},
    gateway::Gateway,
    merchant::{Credentials, Merchant, MerchantRequest, MerchantResult, ValidationErrors},
    transport::{Transport, TransportResponse},
};

/// Path of the merchant creation endpoint.
pub const CREATE_PATH: &str = "/merchants/create_via_api";

/// Merchant operations bound to a [`Gateway`].
#[derive(Debug)]
pub struct MerchantGateway<'g, T> {
    gateway: &'g Gateway<T>,
}

#[derive(Deserialize)]
struct CreateEnvelope {
    response: Option<CreatedMerchant>,
    api_error_response: Option<ApiErrorResponse>,
}

#[derive(Deserialize)]
struct CreatedMerchant {
    merchant: Option<Merchant>,
    credentials: Option<Credentials>,
}

#[derive(Deserialize)]
struct ApiErrorResponse {
    message: String,
    #[serde(default)]
    errors: ValidationErrors,
}

impl<'g, T: Transport> MerchantGateway<'g, T> {
    pub(crate) const fn new(gateway: &'g Gateway<T>) -> Self {
        Self { gateway }
    }

    /// Creates a merchant and obtains OAuth credentials for it.
    ///
    /// Posts `{"merchant": request}` to [`CREATE_PATH`].
    ///
    /// # Errors
    ///
    /// Returns error if the transport fails or the response is neither a created merchant
    /// nor a validation failure. Validation failures are returned as
    /// [`MerchantResult::Failure`].
    #[instrument(
        skip(self, request),
        fields(country = %request.country_code_alpha3, protocol = self.gateway.transport().protocol_name())
    )]
    pub async fn create(&self, request: &MerchantRequest) -> Result<MerchantResult> {
        info!("creating merchant");

        let mut body = Map::with_capacity(1);
        body.insert("merchant".to_owned(), serde_json::to_value(request)?);
        let body = Value::Object(body);

        let response = self.gateway.post(CREATE_PATH, &body).await?;
        let result = parse_create_response(&response)?;

        if result.is_success() {
            info!(status = response.status, "merchant created");
        } else {
            warn!(status = response.status, reason = result.message(), "merchant creation rejected");
        }
        Ok(result)
    }
}

/// Interprets a merchant creation response.
fn parse_create_response(response: &TransportResponse) -> Result<MerchantResult> {
    let envelope: CreateEnvelope = serde_json::from_value(response.json()?)?;

    if let Some(created) = envelope.response {
        return match (created.merchant, created.credentials) {
            (Some(merchant), Some(credentials)) => {
                Ok(MerchantResult::Success { merchant, credentials })
            }
            _ => Err(GatewayError::UnexpectedResponse {
                status: response.status,
                message: "response is missing merchant or credentials".to_owned(),
            }),
        };
    }

    if let Some(failure) = envelope.api_error_response {
        return Ok(MerchantResult::Failure { message: failure.message, errors: failure.errors });
    }

    Err(GatewayError::UnexpectedResponse {
        status: response.status,
        message: "body has neither response nor api_error_response".to_owned(),
    })
}
