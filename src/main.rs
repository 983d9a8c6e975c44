use log::debug;
use std::env;
use std::fs;
use std::io::Read;

use recipe_scale::{load_recipe, scale_recipe, ScaleConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = ScaleConfig::load().unwrap_or_default();
    debug!("Settings: {:?}", config);

    // Usage: recipe-scale [target-servings] [file]
    // With no file argument the recipe JSON is read from stdin.
    let args: Vec<String> = env::args().collect();
    let target: f64 = match args.get(1) {
        Some(arg) => arg
            .parse()
            .map_err(|_| format!("Invalid target servings: {}", arg))?,
        None => config.default_target_servings,
    };

    let text = match args.get(2) {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let recipe = load_recipe(&text)?;
    debug!("{:#?}", recipe);

    let adjusted = scale_recipe(&recipe, target)?;

    let output = if config.pretty {
        adjusted.to_json_pretty()?
    } else {
        adjusted.to_json()?
    };
    println!("{}", output);

    Ok(())
}
