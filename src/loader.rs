use crate::error::ScaleError;
use crate::model::Recipe;
use log::debug;
use serde_json::Value;

/// Parse a JSON recipe payload into a [`Recipe`].
///
/// The text must be a JSON object with a string `title`, a string-to-number
/// `ingredients` mapping and a numeric `servings` field. Malformed JSON
/// surfaces as [`ScaleError::Parse`]; well-formed JSON that is missing a
/// field or carries a wrong-typed one surfaces as [`ScaleError::Schema`].
pub fn load_recipe(text: &str) -> Result<Recipe, ScaleError> {
    // Parse in two stages so syntax problems and shape problems stay
    // distinguishable in the error.
    let value: Value = serde_json::from_str(text)?;
    debug!("Parsed recipe JSON: {:#?}", value);

    let recipe: Recipe =
        serde_json::from_value(value).map_err(|e| ScaleError::Schema(e.to_string()))?;
    debug!("Loaded recipe: {:#?}", recipe);

    Ok(recipe)
}
