//! Gateway entry point.

use serde_json::Value;
use tracing::debug;

use crate::{
    config::GatewayConfig,
    error::Result,
    merchant::MerchantGateway,
    transport::{RequestContext, Transport, TransportResponse},
};

/// Client for the payment gateway API.
///
/// Owns a validated configuration and the [`Transport`] used to reach the gateway.
/// Resource-specific operations are reached through accessors such as
/// [`merchant`](Self::merchant).
#[derive(Debug)]
pub struct Gateway<T> {
    config: GatewayConfig,
    base_url: String,
    transport: T,
}

impl<T: Transport> Gateway<T> {
    /// Creates a gateway client.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::ConfigurationError` if `config` does not validate.
    pub fn new(config: GatewayConfig, transport: T) -> Result<Self> {
        config.validate()?;
        let base_url = config.base_url()?.as_str().trim_end_matches('/').to_owned();
        debug!(
            environment = %config.environment,
            base_url = %base_url,
            protocol = transport.protocol_name(),
            "gateway client configured"
        );
        Ok(Self { config, base_url, transport })
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Returns the gateway URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Merchant onboarding operations.
    #[must_use]
    pub const fn merchant(&self) -> MerchantGateway<'_, T> {
        MerchantGateway::new(self)
    }

    pub(crate) async fn post(&self, path: &str, body: &Value) -> Result<TransportResponse> {
        let ctx = RequestContext::new(&self.base_url, path, self.config.timeout());
        let response = self.transport.post(ctx, body).await?;
        debug!(path, status = response.status, "gateway responded");
        Ok(response)
    }
}
