mod config;

pub use config::{debug_enabled, get_data_url, get_palette, init_app_config, DEFAULT_DATA_URL};
