pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod scaler;

pub use config::ScaleConfig;
pub use error::ScaleError;
pub use loader::load_recipe;
pub use model::Recipe;
pub use scaler::scale_recipe;

/// Parse a JSON recipe, rescale it for `target_servings` and serialize the
/// result back to compact JSON.
///
/// Convenience wrapper over [`load_recipe`] and [`scale_recipe`] for callers
/// that work purely in JSON text.
pub fn adjust_recipe(text: &str, target_servings: f64) -> Result<String, ScaleError> {
    let recipe = load_recipe(text)?;
    let adjusted = scale_recipe(&recipe, target_servings)?;

    Ok(adjusted.to_json()?)
}
