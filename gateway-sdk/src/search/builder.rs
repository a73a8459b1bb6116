//! Stateless node builders.
//!
//! Each builder is bound to one field and one predicate family. Terminal methods return a
//! fresh [`Node`]; the builder itself never changes, so one builder can be shared across
//! any number of queries.
//!
//! Rust has no value-returning comparison operators, so the comparison shorthands are
//! named methods: [`equals`](TextNodeBuilder::equals), [`not_equals`](TextNodeBuilder::not_equals),
//! [`at_least`](RangeNodeBuilder::at_least) and [`at_most`](RangeNodeBuilder::at_most).

use serde_json::{Map, Value};

use crate::{
    error::Result,
    search::{Node, Whitelist},
};

/// Wraps `value` as `{key: value}`.
fn wrap(key: &str, value: Value) -> Value {
    let mut criteria = Map::with_capacity(1);
    criteria.insert(key.to_owned(), value);
    Value::Object(criteria)
}

/// Builds boolean predicates, encoded as the raw (possibly negated) boolean.
///
/// # Examples
///
/// ```
/// use gateway_sdk::search::KeyValueNodeBuilder;
/// use serde_json::json;
///
/// let refund = KeyValueNodeBuilder::new("refund");
/// assert_eq!(refund.equals(true).to_param(), json!(true));
/// assert_eq!(refund.not_equals(true).to_param(), json!(false));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValueNodeBuilder {
    name: String,
}

impl KeyValueNodeBuilder {
    /// Creates a builder for the boolean field `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Matches records whose field equals `value`.
    #[must_use]
    pub fn is_equal(&self, value: bool) -> Node {
        Node::new(self.name.clone(), Value::Bool(value))
    }

    /// Matches records whose field differs from `value`.
    #[must_use]
    pub fn is_not_equal(&self, value: bool) -> Node {
        Node::new(self.name.clone(), Value::Bool(!value))
    }

    /// Shorthand for [`is_equal`](Self::is_equal).
    #[must_use]
    pub fn equals(&self, value: bool) -> Node {
        self.is_equal(value)
    }

    /// Shorthand for [`is_not_equal`](Self::is_not_equal).
    #[must_use]
    pub fn not_equals(&self, value: bool) -> Node {
        self.is_not_equal(value)
    }
}

/// Builds text-matching predicates.
///
/// # Examples
///
/// ```
/// use gateway_sdk::search::TextNodeBuilder;
/// use serde_json::json;
///
/// let email = TextNodeBuilder::new("email");
/// assert_eq!(email.starts_with("name").to_param(), json!({"starts_with": "name"}));
/// assert_eq!(email.not_equals("x@y.z").to_param(), json!({"is_not": "x@y.z"}));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNodeBuilder {
    name: String,
}

impl TextNodeBuilder {
    /// Creates a builder for the text field `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn node(&self, key: &str, value: Value) -> Node {
        Node::new(self.name.clone(), wrap(key, value))
    }

    /// `{"is": value}`
    #[must_use]
    pub fn is_equal<V: Into<Value>>(&self, value: V) -> Node {
        self.node("is", value.into())
    }

    /// `{"is_not": value}`
    #[must_use]
    pub fn is_not_equal<V: Into<Value>>(&self, value: V) -> Node {
        self.node("is_not", value.into())
    }

    /// `{"starts_with": value}`
    #[must_use]
    pub fn starts_with<V: Into<Value>>(&self, value: V) -> Node {
        self.node("starts_with", value.into())
    }

    /// `{"ends_with": value}`
    #[must_use]
    pub fn ends_with<V: Into<Value>>(&self, value: V) -> Node {
        self.node("ends_with", value.into())
    }

    /// `{"contains": value}`
    #[must_use]
    pub fn contains<V: Into<Value>>(&self, value: V) -> Node {
        self.node("contains", value.into())
    }

    /// Shorthand for [`is_equal`](Self::is_equal).
    #[must_use]
    pub fn equals<V: Into<Value>>(&self, value: V) -> Node {
        self.is_equal(value)
    }

    /// Shorthand for [`is_not_equal`](Self::is_not_equal).
    #[must_use]
    pub fn not_equals<V: Into<Value>>(&self, value: V) -> Node {
        self.is_not_equal(value)
    }
}

/// Builds membership predicates, optionally restricted to a whitelist.
///
/// The criteria is the raw list of values, which may be any JSON values. When the whitelist
/// is non-empty, any value that is not one of its strings fails the whole call with
/// [`GatewayError::InvalidArgument`](crate::error::GatewayError::InvalidArgument).
///
/// # Examples
///
/// ```
/// use gateway_sdk::search::MultipleValueNodeBuilder;
/// use serde_json::json;
///
/// let methods = MultipleValueNodeBuilder::with_whitelist("payment_methods", ["credit_card", "paypal"]);
///
/// let node = methods.in_list(["paypal"]).unwrap();
/// assert_eq!(node.to_param(), json!(["paypal"]));
///
/// assert!(methods.in_list(["fake_money"]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipleValueNodeBuilder {
    name: String,
    whitelist: Whitelist,
}

impl MultipleValueNodeBuilder {
    /// Creates an unrestricted builder for the field `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), whitelist: Whitelist::default() }
    }

    /// Creates a builder that only accepts the given values.
    pub fn with_whitelist<I, S>(name: impl Into<String>, whitelist: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { name: name.into(), whitelist: Whitelist::new(whitelist) }
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the accepted values.
    #[must_use]
    pub const fn whitelist(&self) -> &Whitelist {
        &self.whitelist
    }

    /// Matches records whose field is one of `values`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidArgument`](crate::error::GatewayError::InvalidArgument)
    /// if the whitelist is non-empty and any value is not in it.
    pub fn in_list<I, V>(&self, values: I) -> Result<Node>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.whitelist.check(&self.name, &values)?;
        Ok(Node::new(self.name.clone(), Value::Array(values)))
    }

    /// Shorthand for `in_list([value])`.
    ///
    /// # Errors
    ///
    /// Same as [`in_list`](Self::in_list).
    pub fn is_equal(&self, value: impl Into<Value>) -> Result<Node> {
        self.in_list([value])
    }

    /// Shorthand for [`is_equal`](Self::is_equal).
    ///
    /// # Errors
    ///
    /// Same as [`in_list`](Self::in_list).
    pub fn equals(&self, value: impl Into<Value>) -> Result<Node> {
        self.is_equal(value)
    }
}

/// Builds ordering predicates over numbers, amounts or timestamps.
///
/// No check is made that `min <= max`; the gateway rejects inverted ranges itself.
///
/// # Examples
///
/// ```
/// use gateway_sdk::search::RangeNodeBuilder;
/// use serde_json::json;
///
/// let amount = RangeNodeBuilder::new("amount");
/// assert_eq!(amount.at_least(5).to_param(), json!({"min": 5}));
/// assert_eq!(amount.between(1, 10).to_param(), json!({"min": 1, "max": 10}));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeNodeBuilder {
    name: String,
}

impl RangeNodeBuilder {
    /// Creates a builder for the ordered field `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `{"min": min}`
    #[must_use]
    pub fn greater_than_or_equal_to<V: Into<Value>>(&self, min: V) -> Node {
        Node::new(self.name.clone(), wrap("min", min.into()))
    }

    /// `{"max": max}`
    #[must_use]
    pub fn less_than_or_equal_to<V: Into<Value>>(&self, max: V) -> Node {
        Node::new(self.name.clone(), wrap("max", max.into()))
    }

    /// `{"min": min, "max": max}`, keys in that order.
    #[must_use]
    pub fn between<L: Into<Value>, U: Into<Value>>(&self, min: L, max: U) -> Node {
        let mut criteria = Map::with_capacity(2);
        criteria.insert("min".to_owned(), min.into());
        criteria.insert("max".to_owned(), max.into());
        Node::new(self.name.clone(), Value::Object(criteria))
    }

    /// Shorthand for [`greater_than_or_equal_to`](Self::greater_than_or_equal_to).
    #[must_use]
    pub fn at_least<V: Into<Value>>(&self, min: V) -> Node {
        self.greater_than_or_equal_to(min)
    }

    /// Shorthand for [`less_than_or_equal_to`](Self::less_than_or_equal_to).
    #[must_use]
    pub fn at_most<V: Into<Value>>(&self, max: V) -> Node {
        self.less_than_or_equal_to(max)
    }
}
