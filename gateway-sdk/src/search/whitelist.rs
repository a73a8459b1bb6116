//! Accepted-value sets for membership fields.

use serde_json::Value;
use tracing::debug;

use crate::error::{GatewayError, Result};

/// Closed set of values a multi-value field accepts.
///
/// An empty whitelist accepts everything. Otherwise only JSON strings listed in it pass;
/// numbers, booleans and other non-string values are always outsiders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Whitelist {
    values: Vec<String>,
}

impl Whitelist {
    /// Creates a whitelist from the accepted values.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { values: values.into_iter().map(Into::into).collect() }
    }

    /// Returns true when no restriction applies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the accepted values in declaration order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Returns true if `value` may appear in a membership query.
    #[must_use]
    pub fn accepts(&self, value: &str) -> bool {
        self.values.is_empty() || self.values.iter().any(|v| v == value)
    }

    /// Rejects `candidates` if any of them is outside the whitelist.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidArgument`] naming `field` and every rejected value,
    /// each listed once in order of first appearance. Strings are reported as-is, other
    /// values in their JSON form.
    pub fn check(&self, field: &str, candidates: &[Value]) -> Result<()> {
        if self.values.is_empty() {
            return Ok(());
        }

        let mut rejected: Vec<&Value> = Vec::new();
        for candidate in candidates {
            let accepted = candidate.as_str().is_some_and(|value| self.accepts(value));
            if !accepted && !rejected.contains(&candidate) {
                rejected.push(candidate);
            }
        }

        if rejected.is_empty() {
            return Ok(());
        }

        let values: Vec<String> = rejected
            .into_iter()
            .map(|value| value.as_str().map_or_else(|| value.to_string(), str::to_owned))
            .collect();
        debug!(field, rejected = ?values, "membership values rejected by whitelist");
        Err(GatewayError::InvalidArgument { field: field.to_owned(), values })
    }
}
