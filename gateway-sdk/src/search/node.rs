//! Finished search predicates.

use serde::{Serialize, Serializer};
use serde_json::Value;

/// A value that can be placed into a search request under its field name.
///
/// The request assembler ([`SearchQuery`](super::SearchQuery)) calls [`name`](Self::name)
/// for the mapping key and [`to_param`](Self::to_param) for the value. Implementations
/// must not embed the name inside the param.
pub trait SearchField {
    /// Field identifier used as the key in the request parameters.
    fn name(&self) -> &str;

    /// Criteria in the exact shape the gateway expects for this field.
    fn to_param(&self) -> Value;
}

/// Immutable `(name, criteria)` pair produced by a node builder.
///
/// # Examples
///
/// ```
/// use gateway_sdk::search::RangeNodeBuilder;
/// use serde_json::json;
///
/// let node = RangeNodeBuilder::new("amount").between(1, 10);
/// assert_eq!(node.name(), "amount");
/// assert_eq!(node.to_param(), json!({"min": 1, "max": 10}));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    name: String,
    criteria: Value,
}

impl Node {
    pub(crate) fn new(name: impl Into<String>, criteria: Value) -> Self {
        Self { name: name.into(), criteria }
    }

    /// Returns the field name this node was built for.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrows the criteria without copying.
    #[must_use]
    pub const fn criteria(&self) -> &Value {
        &self.criteria
    }

    /// Returns the criteria ready to embed into request parameters.
    #[must_use]
    pub fn to_param(&self) -> Value {
        self.criteria.clone()
    }
}

impl SearchField for Node {
    fn name(&self) -> &str {
        &self.name
    }

    fn to_param(&self) -> Value {
        self.criteria.clone()
    }
}

// Serializes as the bare criteria; the name is the caller's mapping key.
impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.criteria.serialize(serializer)
    }
}
