use shared_types::{AppConfig, FeatureFlags, SessionSettings};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Parse the contents of a config file.
pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

fn read_config() -> AppConfig {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => parse_config(&contents).unwrap_or_else(|e| {
            tracing::warn!(path = CONFIG_PATH, error = %e, "Failed to parse config, using defaults");
            AppConfig::default()
        }),
        Err(e) => {
            tracing::warn!(path = CONFIG_PATH, error = %e, "Config file not found, using defaults");
            AppConfig::default()
        }
    }
}

/// Read `config.toml` into the global `OnceLock`. Only the first call reads
/// the file; later calls return the stored value.
pub fn load_config() -> &'static AppConfig {
    let mut loaded_now = false;
    let config = CONFIG.get_or_init(|| {
        loaded_now = true;
        read_config()
    });
    if loaded_now {
        tracing::info!(features = ?config.features, session = ?config.session, "Configuration loaded");
    }
    config
}

pub fn feature_flags() -> &'static FeatureFlags {
    &load_config().features
}

pub fn session_settings() -> &'static SessionSettings {
    &load_config().session
}
