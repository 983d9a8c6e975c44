use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Presentation settings for the command-line tool.
///
/// These only affect how the binary reads input and prints output; the
/// library functions take everything they need as arguments.
#[derive(Debug, Deserialize, Clone)]
pub struct ScaleConfig {
    /// Pretty-print the scaled recipe instead of emitting compact JSON
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    /// Target servings used when none is given on the command line
    #[serde(default = "default_target_servings")]
    pub default_target_servings: f64,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            default_target_servings: default_target_servings(),
        }
    }
}

fn default_pretty() -> bool {
    false
}

fn default_target_servings() -> f64 {
    2.0
}

impl ScaleConfig {
    /// Load settings from file and environment variables
    ///
    /// Settings are loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_SCALE__ prefix
    /// 2. recipe-scale.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_SCALE__PRETTY
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("recipe-scale").required(false))
            .add_source(
                Environment::with_prefix("RECIPE_SCALE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
