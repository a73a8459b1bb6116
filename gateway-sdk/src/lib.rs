//! Gateway SDK: Building Blocks for a Payment Gateway Client
//!
//! A Rust library with the request-side pieces of a payment gateway client: search
//! criteria builders for list/search endpoints, and merchant onboarding on top of a
//! pluggable transport.
//!
//! # What is in the Box?
//!
//! - **Search criteria**: typed builders that produce the exact nested parameter shapes the
//!   gateway's search endpoints expect (equality, text matching, ranges, membership)
//! - **Merchant onboarding**: create a merchant and receive OAuth credentials, or structured
//!   validation errors
//! - **Configuration**: TOML configuration with environment-aware credential checks
//! - **Transport seam**: bring your own HTTP client; the SDK never opens a socket
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │   Application    │
//! └────────┬─────────┘
//!          │
//! ┌────────▼───────────────────────────────────────┐
//! │                gateway-sdk                     │
//! │  ┌──────────────┐      ┌──────────────────┐    │
//! │  │   search     │      │    merchant      │    │
//! │  │  (builders,  │      │  (request, result│    │
//! │  │   nodes)     │      │   models)        │    │
//! │  └──────────────┘      └────────┬─────────┘    │
//! └─────────────────────────────────┼──────────────┘
//!                                   │ Transport trait
//! ┌─────────────────────────────────▼──────────────┐
//! │   Application transport (HTTP client + OAuth)  │
//! └────────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ## 1. Build Search Criteria
//!
//! ```rust
//! use gateway_sdk::search::{
//!     KeyValueNodeBuilder, MultipleValueNodeBuilder, RangeNodeBuilder, SearchQuery, TextNode,
//! };
//! use serde_json::json;
//!
//! # fn example() -> gateway_sdk::Result<()> {
//! let payment_methods =
//!     MultipleValueNodeBuilder::with_whitelist("payment_methods", ["credit_card", "paypal"]);
//!
//! let query = SearchQuery::new()
//!     .with(&TextNode::new("email").starts_with("name").ends_with("@email.com"))
//!     .with(&RangeNodeBuilder::new("amount").between(10, 100))
//!     .with(&payment_methods.in_list(["paypal"])?)
//!     .with(&KeyValueNodeBuilder::new("refund").equals(false));
//!
//! assert_eq!(
//!     query.to_request_body(),
//!     json!({"search": {
//!         "email": {"starts_with": "name", "ends_with": "@email.com"},
//!         "amount": {"min": 10, "max": 100},
//!         "payment_methods": ["paypal"],
//!         "refund": false,
//!     }})
//! );
//!
//! // Values outside the whitelist are rejected before any criteria is built
//! assert!(payment_methods.in_list(["fake_money"]).is_err());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## 2. Load Configuration
//!
//! ```rust
//! use gateway_sdk::config::GatewayConfig;
//!
//! let config = GatewayConfig::from_toml(
//!     r#"
//!     environment = "development"
//!     client_id = "client_id$development$integration_client_id"
//!     client_secret = "client_secret$development$integration_client_secret"
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(config.base_url().unwrap().as_str(), "http://localhost:3000/");
//! ```
//!
//! ## 3. Create a Merchant
//!
//! See the [`merchant`] module.
//!
//! # Module Organization
//!
//! - [`search`]: search criteria builders and query assembly
//! - [`merchant`]: merchant onboarding request, response models, validation errors
//! - [`config`]: gateway configuration and client credentials
//! - [`transport`]: transport abstraction
//! - [`error`]: error types
//! - [`error_codes`]: validation error codes
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, GatewayError>`](error::Result):
//!
//! ```rust
//! use gateway_sdk::{GatewayError, search::MultipleValueNodeBuilder};
//!
//! let status = MultipleValueNodeBuilder::with_whitelist("status", ["settled", "voided"]);
//!
//! match status.in_list(["settled", "pending"]) {
//!     Ok(node) => println!("criteria: {}", node.to_param()),
//!     Err(GatewayError::InvalidArgument { field, values }) => {
//!         eprintln!("{field} does not accept {values:?}");
//!     }
//!     Err(e) => eprintln!("Other error: {e}"),
//! }
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod error_codes;
pub mod gateway;
pub mod merchant;
pub mod search;
pub mod transport;

pub use error::{GatewayError, Result};
pub use gateway::Gateway;
pub use merchant::{MerchantRequest, MerchantResult};
pub use search::{Node, SearchField, SearchQuery};
