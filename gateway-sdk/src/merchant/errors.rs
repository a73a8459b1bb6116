//! Validation errors reported by the gateway.
//!
//! The gateway nests errors by the object they apply to:
//!
//! ```json
//! {"errors": {"merchant": {"errors": [
//!     {"attribute": "payment_methods", "code": "93613",
//!      "message": "One or more payment methods passed are not accepted."}
//! ]}}}
//! ```
//!
//! At every level the `errors` key holds that level's list; every other key is a nested
//! object. [`ValidationErrors`] mirrors that tree.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::Value;

/// One attribute-level validation failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationError {
    /// Attribute the error applies to.
    pub attribute: String,
    /// Machine-readable code, see [`crate::error_codes`].
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

static EMPTY: ValidationErrors = ValidationErrors { errors: Vec::new(), nested: BTreeMap::new() };

/// Tree of validation errors keyed by object name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
    nested: BTreeMap<String, ValidationErrors>,
}

impl ValidationErrors {
    /// Builds the tree from the gateway's `errors` object.
    ///
    /// # Errors
    ///
    /// Returns error if `value` is not an object or an `errors` list is malformed.
    pub fn from_value(value: &Value) -> serde_json::Result<Self> {
        let Value::Object(entries) = value else {
            return Err(serde_json::Error::custom("validation errors must be an object"));
        };

        let mut collection = Self::default();
        for (key, entry) in entries {
            if key == "errors" {
                collection.errors = Vec::<ValidationError>::deserialize(entry)?;
            } else if entry.is_object() {
                collection.nested.insert(key.clone(), Self::from_value(entry)?);
            }
        }
        Ok(collection)
    }

    /// Errors nested under `object`, or an empty collection if there are none.
    #[must_use]
    pub fn for_object(&self, object: &str) -> &Self {
        self.nested.get(object).unwrap_or(&EMPTY)
    }

    /// Errors at this level for `attribute`.
    #[must_use]
    pub fn on(&self, attribute: &str) -> Vec<&ValidationError> {
        self.errors.iter().filter(|error| error.attribute == attribute).collect()
    }

    /// Errors at this level.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Number of errors at this level.
    #[must_use]
    pub fn size(&self) -> usize {
        self.errors.len()
    }

    /// Number of errors at this level and below.
    #[must_use]
    pub fn deep_size(&self) -> usize {
        self.errors.len() + self.nested.values().map(Self::deep_size).sum::<usize>()
    }

    /// All errors at this level and below, depth first.
    #[must_use]
    pub fn deep_errors(&self) -> Vec<&ValidationError> {
        let mut all: Vec<&ValidationError> = self.errors.iter().collect();
        for child in self.nested.values() {
            all.extend(child.deep_errors());
        }
        all
    }

    /// Returns true if the tree holds no errors at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deep_size() == 0
    }
}

impl<'de> Deserialize<'de> for ValidationErrors {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(D::Error::custom)
    }
}
