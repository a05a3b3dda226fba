use dotenv::dotenv;
use std::env;

use crate::heatmap::Palette;

/// Canonical source of the monthly global land-surface temperature data.
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

/// Initializes the application configuration
/// Returns the dataset URL and the starting palette
pub fn init_app_config() -> (String, Palette) {
    // Load environment variables from .env file
    dotenv().ok();

    (get_data_url(), get_palette())
}

/// Gets the dataset URL, falling back to the canonical source
pub fn get_data_url() -> String {
    env::var("DATA_URL").unwrap_or_else(|_| DEFAULT_DATA_URL.to_string())
}

/// Gets the configured palette; unknown names fall back to the default
pub fn get_palette() -> Palette {
    env::var("PALETTE")
        .ok()
        .and_then(|value| Palette::parse(&value))
        .unwrap_or(Palette::Cool)
}

#[allow(dead_code)]
pub fn debug_enabled() -> bool {
    env::var("DEBUG").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_palette_names_fall_back_to_cool() {
        assert_eq!(
            Palette::parse("definitely-not-a-palette").unwrap_or(Palette::Cool),
            Palette::Cool
        );
    }

    #[test]
    fn default_url_points_at_the_temperature_dataset() {
        assert!(DEFAULT_DATA_URL.ends_with("global-temperature.json"));
    }
}
