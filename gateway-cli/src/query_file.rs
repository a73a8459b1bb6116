//! TOML description of a search.
//!
//! Each array of tables maps onto one builder family:
//!
//! ```toml
//! [[text]]
//! field = "email"
//! starts_with = "name"
//!
//! [[range]]
//! field = "amount"
//! min = 10
//! max = 100
//!
//! [[multiple_value]]
//! field = "payment_methods"
//! whitelist = ["credit_card", "paypal"]
//! values = ["paypal"]
//!
//! [[key_value]]
//! field = "refund"
//! equals = true
//! ```

use std::path::Path;

use gateway_sdk::{
    GatewayError, Result, SearchQuery,
    search::{KeyValueNodeBuilder, MultipleValueNodeBuilder, RangeNodeBuilder, TextNode},
};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Parsed query file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryFile {
    #[serde(default)]
    text: Vec<TextCriteria>,
    #[serde(default)]
    range: Vec<RangeCriteria>,
    #[serde(default)]
    multiple_value: Vec<MultipleValueCriteria>,
    #[serde(default)]
    key_value: Vec<KeyValueCriteria>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TextCriteria {
    field: String,
    is: Option<String>,
    is_not: Option<String>,
    starts_with: Option<String>,
    ends_with: Option<String>,
    contains: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RangeCriteria {
    field: String,
    min: Option<Value>,
    max: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MultipleValueCriteria {
    field: String,
    #[serde(default)]
    whitelist: Vec<String>,
    values: Vec<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct KeyValueCriteria {
    field: String,
    equals: Option<bool>,
    not_equals: Option<bool>,
}

impl TextCriteria {
    fn node(&self) -> TextNode {
        let mut node = TextNode::new(self.field.as_str());
        if let Some(value) = &self.is {
            node = node.is_equal(value.as_str());
        }
        if let Some(value) = &self.is_not {
            node = node.is_not_equal(value.as_str());
        }
        if let Some(value) = &self.starts_with {
            node = node.starts_with(value.as_str());
        }
        if let Some(value) = &self.ends_with {
            node = node.ends_with(value.as_str());
        }
        if let Some(value) = &self.contains {
            node = node.contains(value.as_str());
        }
        node
    }
}

impl QueryFile {
    /// Parses a query file from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::ConfigurationError` if the TOML is malformed or has unknown keys.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str)
            .map_err(|e| GatewayError::ConfigurationError(format!("invalid query file: {e}")))
    }

    /// Reads and parses a query file.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::ConfigurationError` if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            GatewayError::ConfigurationError(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml(&contents)
    }

    /// Builds the search, in file section order: text, range, multiple value, key value.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::InvalidArgument` if values fall outside a whitelist and
    /// `GatewayError::ConfigurationError` for an entry without any predicate.
    pub fn build(&self) -> Result<SearchQuery> {
        let mut query = SearchQuery::new();

        for criteria in &self.text {
            let node = criteria.node();
            if node.is_empty() {
                return Err(missing_predicate("text", &criteria.field));
            }
            query.add(&node);
        }

        for criteria in &self.range {
            let builder = RangeNodeBuilder::new(criteria.field.as_str());
            let node = match (&criteria.min, &criteria.max) {
                (Some(min), Some(max)) => builder.between(min.clone(), max.clone()),
                (Some(min), None) => builder.at_least(min.clone()),
                (None, Some(max)) => builder.at_most(max.clone()),
                (None, None) => return Err(missing_predicate("range", &criteria.field)),
            };
            query.add(&node);
        }

        for criteria in &self.multiple_value {
            let builder = MultipleValueNodeBuilder::with_whitelist(
                criteria.field.as_str(),
                &criteria.whitelist,
            );
            query.add(&builder.in_list(criteria.values.iter().cloned())?);
        }

        for criteria in &self.key_value {
            let builder = KeyValueNodeBuilder::new(criteria.field.as_str());
            let node = match (criteria.equals, criteria.not_equals) {
                (Some(value), None) => builder.equals(value),
                (None, Some(value)) => builder.not_equals(value),
                (Some(_), Some(_)) => {
                    return Err(GatewayError::ConfigurationError(format!(
                        "key_value criteria for {} sets both equals and not_equals",
                        criteria.field
                    )));
                }
                (None, None) => return Err(missing_predicate("key_value", &criteria.field)),
            };
            query.add(&node);
        }

        debug!(fields = query.len(), "search assembled");
        Ok(query)
    }
}

fn missing_predicate(section: &str, field: &str) -> GatewayError {
    GatewayError::ConfigurationError(format!("{section} criteria for {field} has no predicate"))
}
