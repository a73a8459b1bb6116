//! Assembly of search fields into request parameters.

use serde_json::{Map, Value};
use tracing::debug;

use crate::search::SearchField;

/// Ordered set of search criteria keyed by field name.
///
/// Adding a field whose name is already present replaces its criteria in place.
///
/// # Examples
///
/// ```
/// use gateway_sdk::search::{KeyValueNodeBuilder, RangeNodeBuilder, SearchQuery, TextNode};
/// use serde_json::json;
///
/// let query = SearchQuery::new()
///     .with(&TextNode::new("email").starts_with("name").ends_with("email.com"))
///     .with(&RangeNodeBuilder::new("amount").between(10, 100))
///     .with(&KeyValueNodeBuilder::new("refund").equals(false));
///
/// assert_eq!(
///     query.to_request_body(),
///     json!({"search": {
///         "email": {"starts_with": "name", "ends_with": "email.com"},
///         "amount": {"min": 10, "max": 100},
///         "refund": false,
///     }})
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    params: Map<String, Value>,
}

impl SearchQuery {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the query with `field` added.
    #[must_use]
    pub fn with<F: SearchField + ?Sized>(mut self, field: &F) -> Self {
        self.add(field);
        self
    }

    /// Adds `field` to the query.
    pub fn add<F: SearchField + ?Sized>(&mut self, field: &F) -> &mut Self {
        let name = field.name().to_owned();
        if self.params.insert(name, field.to_param()).is_some() {
            debug!(field = field.name(), "search criteria replaced");
        }
        self
    }

    /// Returns the criteria recorded for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }

    /// Number of distinct fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns true if no field has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// `{name: criteria, ...}` in insertion order.
    #[must_use]
    pub fn to_params(&self) -> Value {
        Value::Object(self.params.clone())
    }

    /// The params wrapped as `{"search": {...}}`, the shape search endpoints expect.
    #[must_use]
    pub fn to_request_body(&self) -> Value {
        let mut body = Map::with_capacity(1);
        body.insert("search".to_owned(), self.to_params());
        Value::Object(body)
    }
}
