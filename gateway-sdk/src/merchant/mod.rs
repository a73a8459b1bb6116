//! Merchant onboarding.
//!
//! Creating a merchant returns either the merchant with OAuth credentials for it, or the
//! gateway's validation errors:
//!
//! ```rust,no_run
//! use gateway_sdk::{
//!     Gateway,
//!     config::{ClientCredentials, GatewayConfig},
//!     error_codes,
//!     merchant::{MerchantRequest, MerchantResult},
//!     transport::Transport,
//! };
//!
//! # async fn example<T: Transport>(transport: T) -> gateway_sdk::Result<()> {
//! let credentials = ClientCredentials::new(
//!     "client_id$development$integration_client_id",
//!     "client_secret$development$integration_client_secret",
//! )?;
//! let gateway = Gateway::new(GatewayConfig::from_credentials(&credentials), transport)?;
//!
//! let request = MerchantRequest::new("name@email.com", "USA")
//!     .with_payment_methods(["credit_card", "paypal"]);
//!
//! match gateway.merchant().create(&request).await? {
//!     MerchantResult::Success { merchant, credentials } => {
//!         println!("created {} ({} token)", merchant.id, credentials.token_type);
//!     }
//!     MerchantResult::Failure { message, errors } => {
//!         for error in errors.for_object("merchant").on("payment_methods") {
//!             if error.code == error_codes::merchant::PAYMENT_METHODS_ARE_INVALID {
//!                 eprintln!("{message}");
//!             }
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod gateway;
pub mod models;
pub mod request;
pub mod result;

pub use errors::{ValidationError, ValidationErrors};
pub use gateway::MerchantGateway;
pub use models::{Credentials, Merchant, MerchantAccount};
pub use request::{MerchantRequest, PayPalAccount};
pub use result::MerchantResult;
