use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A titled collection of named ingredient quantities, defined for a stated
/// serving count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    /// Ingredient name to quantity. A BTreeMap keeps the serialized key
    /// order stable across runs.
    pub ingredients: BTreeMap<String, f64>,
    pub servings: f64,
}

impl Recipe {
    /// Serialize to a compact JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
