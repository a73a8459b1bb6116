//! Copy-on-write nodes that accumulate predicates across chained calls.
//!
//! Unlike the stateless builders, these nodes carry their own criteria. Every operator
//! returns a new node and leaves the receiver untouched, so a partially built node can be
//! branched freely:
//!
//! ```
//! use gateway_sdk::search::TextNode;
//! use serde_json::json;
//!
//! let company = TextNode::new("company_name");
//! let acme = company.starts_with("Acme");
//! let acme_inc = acme.ends_with("Inc");
//!
//! assert_eq!(acme_inc.to_param(), json!({"starts_with": "Acme", "ends_with": "Inc"}));
//! assert_eq!(acme.to_param(), json!({"starts_with": "Acme"}));
//! assert_eq!(company.to_param(), json!({}));
//! ```

use serde_json::{Map, Value};

use crate::{
    error::Result,
    search::{SearchField, Whitelist},
};

/// Text field whose predicates merge into one criteria mapping.
///
/// Applying the same operator twice keeps the latest value.
#[derive(Debug, Clone, PartialEq)]
pub struct TextNode {
    name: String,
    criteria: Map<String, Value>,
}

impl TextNode {
    /// Creates a node for `name` with no predicates.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), criteria: Map::new() }
    }

    fn with_criterion(&self, key: &str, value: Value) -> Self {
        let mut next = self.clone();
        next.criteria.insert(key.to_owned(), value);
        next
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if no predicate has been applied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Returns a node for the same field with no predicates.
    #[must_use]
    pub fn cleared(&self) -> Self {
        Self::new(self.name.clone())
    }

    /// Adds `"is": value`.
    #[must_use]
    pub fn is_equal<V: Into<Value>>(&self, value: V) -> Self {
        self.with_criterion("is", value.into())
    }

    /// Adds `"is_not": value`.
    #[must_use]
    pub fn is_not_equal<V: Into<Value>>(&self, value: V) -> Self {
        self.with_criterion("is_not", value.into())
    }

    /// Adds `"starts_with": value`.
    #[must_use]
    pub fn starts_with<V: Into<Value>>(&self, value: V) -> Self {
        self.with_criterion("starts_with", value.into())
    }

    /// Adds `"ends_with": value`.
    #[must_use]
    pub fn ends_with<V: Into<Value>>(&self, value: V) -> Self {
        self.with_criterion("ends_with", value.into())
    }

    /// Adds `"contains": value`.
    #[must_use]
    pub fn contains<V: Into<Value>>(&self, value: V) -> Self {
        self.with_criterion("contains", value.into())
    }

    /// Shorthand for [`is_equal`](Self::is_equal).
    #[must_use]
    pub fn equals<V: Into<Value>>(&self, value: V) -> Self {
        self.is_equal(value)
    }

    /// Shorthand for [`is_not_equal`](Self::is_not_equal).
    #[must_use]
    pub fn not_equals<V: Into<Value>>(&self, value: V) -> Self {
        self.is_not_equal(value)
    }

    /// Returns the accumulated criteria mapping.
    #[must_use]
    pub fn to_param(&self) -> Value {
        Value::Object(self.criteria.clone())
    }
}

impl SearchField for TextNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn to_param(&self) -> Value {
        Self::to_param(self)
    }
}

/// Membership field whose value list is replaced by each `in_list` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipleValueNode {
    name: String,
    whitelist: Whitelist,
    values: Vec<Value>,
}

impl MultipleValueNode {
    /// Creates an unrestricted node for `name` with an empty value list.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), whitelist: Whitelist::default(), values: Vec::new() }
    }

    /// Creates a node that only accepts the given values.
    pub fn with_whitelist<I, S>(name: impl Into<String>, whitelist: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { name: name.into(), whitelist: Whitelist::new(whitelist), values: Vec::new() }
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current value list.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Returns a node for the same field and whitelist with no values.
    #[must_use]
    pub fn cleared(&self) -> Self {
        Self { name: self.name.clone(), whitelist: self.whitelist.clone(), values: Vec::new() }
    }

    /// Returns a node matching any of `values`, discarding the previous list.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidArgument`](crate::error::GatewayError::InvalidArgument)
    /// if the whitelist is non-empty and any value is not in it. The receiver is unaffected
    /// either way.
    pub fn in_list<I, V>(&self, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.whitelist.check(&self.name, &values)?;

        let mut next = self.cleared();
        next.values = values;
        Ok(next)
    }

    /// Shorthand for `in_list([value])`.
    ///
    /// # Errors
    ///
    /// Same as [`in_list`](Self::in_list).
    pub fn is_equal(&self, value: impl Into<Value>) -> Result<Self> {
        self.in_list([value])
    }

    /// Returns the value list as a JSON array.
    #[must_use]
    pub fn to_param(&self) -> Value {
        Value::Array(self.values.clone())
    }
}

impl SearchField for MultipleValueNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn to_param(&self) -> Value {
        Self::to_param(self)
    }
}
