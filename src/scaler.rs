use crate::error::ScaleError;
use crate::model::Recipe;
use log::debug;

/// Produce a new recipe with every ingredient quantity rescaled for
/// `target_servings`.
///
/// The scale factor is `target_servings / recipe.servings`, applied uniformly
/// to every quantity. The input recipe is left untouched; the result carries
/// the same title, a freshly built ingredients mapping with the same keys,
/// and `servings` set to the target. Quantities scale linearly with no
/// rounding or unit conversion, so fractional results are expected.
///
/// Fails with [`ScaleError::InvalidServings`] when the recipe declares zero
/// servings. A zero *target* is fine and simply zeroes every quantity.
pub fn scale_recipe(recipe: &Recipe, target_servings: f64) -> Result<Recipe, ScaleError> {
    if recipe.servings == 0.0 {
        return Err(ScaleError::InvalidServings);
    }

    let factor = target_servings / recipe.servings;
    debug!(
        "Scaling \"{}\" from {} to {} servings (factor {})",
        recipe.title, recipe.servings, target_servings, factor
    );

    let ingredients = recipe
        .ingredients
        .iter()
        .map(|(name, quantity)| (name.clone(), quantity * factor))
        .collect();

    Ok(Recipe {
        title: recipe.title.clone(),
        ingredients,
        servings: target_servings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn spaghetti_bolognese() -> Recipe {
        let mut ingredients = BTreeMap::new();
        ingredients.insert("Spaghetti".to_string(), 400.0);
        ingredients.insert("Tomato Sauce".to_string(), 300.0);
        ingredients.insert("Minced Meat".to_string(), 500.0);

        Recipe {
            title: "Spaghetti Bolognese".to_string(),
            ingredients,
            servings: 4.0,
        }
    }

    #[test]
    fn test_scale_down_to_two_servings() {
        let recipe = spaghetti_bolognese();

        let scaled = scale_recipe(&recipe, 2.0).unwrap();

        assert_eq!(scaled.title, "Spaghetti Bolognese");
        assert_eq!(scaled.servings, 2.0);
        assert_eq!(scaled.ingredients["Spaghetti"], 200.0);
        assert_eq!(scaled.ingredients["Tomato Sauce"], 150.0);
        assert_eq!(scaled.ingredients["Minced Meat"], 250.0);
    }

    #[test]
    fn test_scale_up_with_fractional_results() {
        let recipe = spaghetti_bolognese();

        let scaled = scale_recipe(&recipe, 3.0).unwrap();

        assert!((scaled.ingredients["Spaghetti"] - 300.0).abs() < 1e-9);
        assert!((scaled.ingredients["Tomato Sauce"] - 225.0).abs() < 1e-9);
        assert!((scaled.ingredients["Minced Meat"] - 375.0).abs() < 1e-9);
    }

    #[test]
    fn test_identity_scaling_preserves_quantities() {
        let recipe = spaghetti_bolognese();

        let scaled = scale_recipe(&recipe, recipe.servings).unwrap();

        for (name, quantity) in &recipe.ingredients {
            assert!((scaled.ingredients[name] - quantity).abs() < 1e-9);
        }
    }

    #[test]
    fn test_scale_preserves_key_set() {
        let recipe = spaghetti_bolognese();

        let scaled = scale_recipe(&recipe, 7.0).unwrap();

        let original_keys: Vec<&String> = recipe.ingredients.keys().collect();
        let scaled_keys: Vec<&String> = scaled.ingredients.keys().collect();
        assert_eq!(original_keys, scaled_keys);
    }

    #[test]
    fn test_scale_to_zero_servings_zeroes_quantities() {
        let recipe = spaghetti_bolognese();

        let scaled = scale_recipe(&recipe, 0.0).unwrap();

        assert_eq!(scaled.servings, 0.0);
        assert!(scaled.ingredients.values().all(|&q| q == 0.0));
    }

    #[test]
    fn test_scale_recipe_with_zero_servings_fails() {
        let mut recipe = spaghetti_bolognese();
        recipe.servings = 0.0;

        let result = scale_recipe(&recipe, 2.0);

        assert!(matches!(result, Err(ScaleError::InvalidServings)));
    }

    #[test]
    fn test_scale_does_not_mutate_input() {
        let recipe = spaghetti_bolognese();
        let before = recipe.clone();

        scale_recipe(&recipe, 2.0).unwrap();

        assert_eq!(recipe, before);
    }

    #[test]
    fn test_fractional_target_servings() {
        let recipe = spaghetti_bolognese();

        let scaled = scale_recipe(&recipe, 1.5).unwrap();

        assert!((scaled.ingredients["Spaghetti"] - 150.0).abs() < 1e-9);
        assert_eq!(scaled.servings, 1.5);
    }
}
