//! Search criteria builders.
//!
//! This module turns search predicates into the nested parameter structure the gateway's
//! search endpoints accept. It performs no I/O: every type here is a plain value that
//! serializes to JSON.
//!
//! # Predicate Families
//!
//! | Builder | Operators | Criteria shape |
//! |---------|-----------|----------------|
//! | [`KeyValueNodeBuilder`] | `is_equal`, `is_not_equal` | raw boolean |
//! | [`TextNodeBuilder`] | `is_equal`, `is_not_equal`, `starts_with`, `ends_with`, `contains` | `{"is": v}`, `{"is_not": v}`, `{"starts_with": v}`, ... |
//! | [`RangeNodeBuilder`] | `greater_than_or_equal_to`, `less_than_or_equal_to`, `between` | `{"min": v}`, `{"max": v}`, `{"min": v, "max": v}` |
//! | [`MultipleValueNodeBuilder`] | `in_list`, `is_equal` | raw list of values |
//!
//! Builders are stateless: each call returns a fresh immutable [`Node`]. To combine several
//! text predicates on one field, use the copy-on-write [`TextNode`] instead; its operators
//! return new nodes with the predicate merged in. [`MultipleValueNode`] is the equivalent
//! for membership lists.
//!
//! [`SearchQuery`] collects fields by name into the final request parameters.
//!
//! # Examples
//!
//! ```
//! use gateway_sdk::search::{MultipleValueNodeBuilder, RangeNodeBuilder, SearchQuery, TextNodeBuilder};
//! use serde_json::json;
//!
//! # fn example() -> gateway_sdk::Result<()> {
//! let status = MultipleValueNodeBuilder::with_whitelist("status", ["authorized", "settled", "voided"]);
//! let amount = RangeNodeBuilder::new("amount");
//! let email = TextNodeBuilder::new("customer_email");
//!
//! let query = SearchQuery::new()
//!     .with(&status.in_list(["settled"])?)
//!     .with(&amount.at_least(100))
//!     .with(&email.ends_with("@example.com"));
//!
//! assert_eq!(
//!     query.to_params(),
//!     json!({
//!         "status": ["settled"],
//!         "amount": {"min": 100},
//!         "customer_email": {"ends_with": "@example.com"},
//!     })
//! );
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod accumulator;
pub mod builder;
pub mod node;
pub mod query;
pub mod whitelist;


pub use accumulator::{MultipleValueNode, TextNode};
pub use builder::{KeyValueNodeBuilder, MultipleValueNodeBuilder, RangeNodeBuilder, TextNodeBuilder};
pub use node::{Node, SearchField};
pub use query::SearchQuery;
pub use whitelist::Whitelist;
