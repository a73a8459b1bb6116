//! Gateway configuration.
//!
//! This module defines the TOML-deserializable configuration for a gateway client and the
//! OAuth client credentials it authenticates with.
//!
//! # Examples
//!
//! ```
//! use gateway_sdk::config::{Environment, GatewayConfig};
//!
//! let toml = r#"
//!     environment = "sandbox"
//!     client_id = "client_id$sandbox$integration_client_id"
//!     client_secret = "client_secret$sandbox$integration_client_secret"
//! "#;
//!
//! let config = GatewayConfig::from_toml(toml).unwrap();
//! assert_eq!(config.environment, Environment::Sandbox);
//! assert_eq!(config.base_url().unwrap().as_str(), "https://api.sandbox.braintreegateway.com/");
//! ```

use std::{fmt, path::Path, time::Duration};

use serde::Deserialize;
use url::Url;

use crate::error::{GatewayError, Result};

/// Gateway environment a set of credentials belongs to.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    /// Local gateway used while developing against the API.
    Development,
    /// Internal QA gateway.
    Qa,
    /// Public sandbox; no real money moves.
    #[default]
    Sandbox,
    /// Live gateway.
    Production,
}

impl Environment {
    /// Parses the lowercase name used in configuration and credential prefixes.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::ConfigurationError` for an unknown name.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "development" => Ok(Self::Development),
            "qa" => Ok(Self::Qa),
            "sandbox" => Ok(Self::Sandbox),
            "production" => Ok(Self::Production),
            other => {
                Err(GatewayError::ConfigurationError(format!("unknown environment: {other}")))
            }
        }
    }

    /// Returns the lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Qa => "qa",
            Self::Sandbox => "sandbox",
            Self::Production => "production",
        }
    }

    /// Returns the gateway URL used when no `base_url` override is configured.
    #[must_use]
    pub const fn default_base_url(self) -> &'static str {
        match self {
            Self::Development => "http://localhost:3000",
            Self::Qa => "https://gateway.qa.braintreepayments.com",
            Self::Sandbox => "https://api.sandbox.braintreegateway.com",
            Self::Production => "https://api.braintreegateway.com",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// OAuth client credentials.
///
/// Both values carry their environment in a prefix:
/// `client_id$<environment>$<id>` and `client_secret$<environment>$<secret>`.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    client_id: String,
    client_secret: String,
    environment: Environment,
}

impl ClientCredentials {
    /// Parses and cross-checks a client id and secret.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::ConfigurationError` if either value lacks its prefix, names an
    /// unknown environment, or the two name different environments.
    ///
    /// # Examples
    ///
    /// ```
    /// use gateway_sdk::config::{ClientCredentials, Environment};
    ///
    /// let credentials = ClientCredentials::new(
    ///     "client_id$development$integration_client_id",
    ///     "client_secret$development$integration_client_secret",
    /// )
    /// .unwrap();
    /// assert_eq!(credentials.environment(), Environment::Development);
    ///
    /// let mismatched = ClientCredentials::new(
    ///     "client_id$development$integration_client_id",
    ///     "client_secret$qa$integration_client_secret",
    /// );
    /// assert!(mismatched.is_err());
    /// ```
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self> {
        let client_id = client_id.into();
        let client_secret = client_secret.into();

        let id_environment = parse_prefixed_environment("client_id", &client_id)?;
        let secret_environment = parse_prefixed_environment("client_secret", &client_secret)?;

        if id_environment != secret_environment {
            return Err(GatewayError::ConfigurationError(format!(
                "Mismatched credential environments: client_id environment is \
                 {id_environment} and client_secret environment is {secret_environment}"
            )));
        }

        Ok(Self { client_id, client_secret, environment: id_environment })
    }

    /// Returns the client id.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the client secret.
    #[must_use]
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Returns the environment both credentials were issued for.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("environment", &self.environment)
            .finish()
    }
}

/// Extracts `<environment>` from `<prefix>$<environment>$<rest>`.
fn parse_prefixed_environment(prefix: &str, value: &str) -> Result<Environment> {
    let mut parts = value.splitn(3, '$');
    let (Some(found_prefix), Some(environment), Some(rest)) =
        (parts.next(), parts.next(), parts.next())
    else {
        return Err(GatewayError::ConfigurationError(format!(
            "{prefix} must have the form {prefix}$<environment>$<value>"
        )));
    };

    if found_prefix != prefix || rest.is_empty() {
        return Err(GatewayError::ConfigurationError(format!("value is not a {prefix}")));
    }

    Environment::parse(environment)
}

/// Root gateway configuration.
#[derive(Clone, Deserialize)]
pub struct GatewayConfig {
    /// Environment the client talks to.
    #[serde(default)]
    pub environment: Environment,

    /// OAuth client id (`client_id$<environment>$...`).
    pub client_id: String,

    /// OAuth client secret (`client_secret$<environment>$...`).
    pub client_secret: String,

    /// Overrides the environment's default gateway URL.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Request timeout in seconds, handed to the transport in every
    /// [`RequestContext`](crate::transport::RequestContext).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

const fn default_timeout_secs() -> u64 {
    60
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("environment", &self.environment)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GatewayConfig {
    /// Creates a configuration from credentials, inferring the environment from them.
    #[must_use]
    pub fn from_credentials(credentials: &ClientCredentials) -> Self {
        Self {
            environment: credentials.environment(),
            client_id: credentials.client_id().to_owned(),
            client_secret: credentials.client_secret().to_owned(),
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Parses and validates a TOML configuration.
    ///
    /// # Errors
    ///
    /// Returns error if TOML parsing fails or configuration validation fails.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| {
            GatewayError::ConfigurationError(format!("invalid TOML config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or its content is invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            GatewayError::ConfigurationError(format!("cannot read config file: {e}"))
        })?;
        Self::from_toml(&content)
    }

    /// Validates the configuration.
    ///
    /// This method checks that:
    /// - Client id and secret are well-formed and issued for the same environment
    /// - That environment matches `environment`
    /// - The gateway URL parses and uses HTTPS (plain HTTP only in development)
    /// - `timeout_secs` is between 1 and 300
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::ConfigurationError` if any check fails.
    pub fn validate(&self) -> Result<()> {
        let credentials = self.credentials()?;
        if credentials.environment() != self.environment {
            return Err(GatewayError::ConfigurationError(format!(
                "credentials are for {} but environment is {}",
                credentials.environment(),
                self.environment
            )));
        }

        self.base_url()?;

        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(GatewayError::ConfigurationError(
                "timeout_secs must be between 1 and 300".to_owned(),
            ));
        }

        Ok(())
    }

    /// Returns the parsed client credentials.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::ConfigurationError` if the credentials are malformed.
    pub fn credentials(&self) -> Result<ClientCredentials> {
        ClientCredentials::new(self.client_id.clone(), self.client_secret.clone())
    }

    /// Returns the gateway URL requests are sent to.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::ConfigurationError` if the URL does not parse, or is not
    /// HTTPS outside the development environment.
    pub fn base_url(&self) -> Result<Url> {
        let raw = self.base_url.as_deref().unwrap_or_else(|| self.environment.default_base_url());
        let url = Url::parse(raw).map_err(|e| {
            GatewayError::ConfigurationError(format!("invalid base_url '{raw}': {e}"))
        })?;

        if url.scheme() != "https" && self.environment != Environment::Development {
            return Err(GatewayError::ConfigurationError(format!(
                "base_url must use HTTPS outside development, got: {}",
                url.scheme()
            )));
        }

        Ok(url)
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
