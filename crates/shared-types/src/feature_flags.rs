use serde::{Deserialize, Serialize};

/// Feature flags controlling which optional behaviours are active.
///
/// Loaded from `config.toml` at server startup and exposed to clients
/// via a server function. Every field defaults to `false` so that a
/// missing or incomplete config file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    #[serde(default)]
    pub telemetry: bool,
    /// Insert the demo organizations and console accounts at startup.
    #[serde(default)]
    pub demo_seed: bool,
}

/// Token lifetimes and cookie policy for console sessions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSettings {
    #[serde(default = "default_access_minutes")]
    pub access_token_minutes: i64,
    #[serde(default = "default_refresh_days")]
    pub refresh_token_days: i64,
    #[serde(default)]
    pub cookie_secure: bool,
}

fn default_access_minutes() -> i64 {
    15
}

fn default_refresh_days() -> i64 {
    7
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            access_token_minutes: default_access_minutes(),
            refresh_token_days: default_refresh_days(),
            cookie_secure: false,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub session: SessionSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_all_false() {
        let flags = FeatureFlags::default();
        assert!(!flags.telemetry);
        assert!(!flags.demo_seed);
    }

    #[test]
    fn deserialize_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.session.access_token_minutes, 15);
        assert_eq!(config.session.refresh_token_days, 7);
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            demo_seed = true

            [session]
            access_token_minutes = 5
            "#,
        )
        .unwrap();
        assert!(config.features.demo_seed);
        assert!(!config.features.telemetry);
        assert_eq!(config.session.access_token_minutes, 5);
        assert_eq!(config.session.refresh_token_days, 7);
        assert!(!config.session.cookie_secure);
    }

    #[test]
    fn deserialize_full_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            telemetry = true
            demo_seed = true

            [session]
            access_token_minutes = 30
            refresh_token_days = 14
            cookie_secure = true
            "#,
        )
        .unwrap();
        assert!(config.features.telemetry);
        assert!(config.features.demo_seed);
        assert_eq!(
            config.session,
            SessionSettings {
                access_token_minutes: 30,
                refresh_token_days: 14,
                cookie_secure: true,
            }
        );
    }

    #[test]
    fn deserialize_json_with_missing_fields_defaults() {
        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert_eq!(flags, FeatureFlags::default());
    }
}
