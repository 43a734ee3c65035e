use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Value shipped in sample configs; treated the same as no key at all.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_SPOONACULAR_API_KEY";

/// Environment variable consulted when no key is set in the config
pub const API_KEY_ENV: &str = "SPOONACULAR_API_KEY";

/// Recipe finder configuration
#[derive(Debug, Deserialize, Clone)]
pub struct FinderConfig {
    /// API key for the recipe search API. Without one, the demo catalog is used.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL of the recipe endpoints
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Number of recipes to request from the API
    #[serde(default = "default_number")]
    pub number: u32,
    /// API ranking mode (1 = maximize used ingredients, 2 = minimize missing ones)
    #[serde(default = "default_ranking")]
    pub ranking: u8,
    /// Ignore pantry staples such as water, salt and flour
    #[serde(default = "default_ignore_pantry")]
    pub ignore_pantry: bool,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout: default_timeout(),
            number: default_number(),
            ranking: default_ranking(),
            ignore_pantry: default_ignore_pantry(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://api.spoonacular.com/recipes".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_number() -> u32 {
    12
}

fn default_ranking() -> u8 {
    1
}

fn default_ignore_pantry() -> bool {
    true
}

impl FinderConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_FINDER__ prefix
    /// 2. recipe_finder.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_FINDER__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// The configured API key, falling back to `SPOONACULAR_API_KEY`.
    ///
    /// Blank values and the sample placeholder count as not configured.
    pub fn api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty() && key != PLACEHOLDER_API_KEY)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key().is_some()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Load configuration from file and environment variables
///
/// See [`FinderConfig::load`] for the source priority.
pub fn load_config() -> Result<FinderConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe_finder").required(false))
        .add_source(
            Environment::with_prefix("RECIPE_FINDER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = FinderConfig::default();
        assert_eq!(config.base_url, "https://api.spoonacular.com/recipes");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.number, 12);
        assert_eq!(config.ranking, 1);
        assert!(config.ignore_pantry);
    }

    #[test]
    fn test_placeholder_key_is_not_a_key() {
        let config = FinderConfig {
            api_key: Some(PLACEHOLDER_API_KEY.to_string()),
            ..Default::default()
        };
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_blank_key_is_not_a_key() {
        let config = FinderConfig {
            api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_configured_key_is_trimmed() {
        let config = FinderConfig {
            api_key: Some(" abc123 ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.api_key().as_deref(), Some("abc123"));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let settings = Config::builder()
            .add_source(File::from_str(
                "api_key = \"k\"\nnumber = 5",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();
        let config: FinderConfig = settings.try_deserialize().unwrap();

        assert_eq!(config.api_key.as_deref(), Some("k"));
        assert_eq!(config.number, 5);
        assert_eq!(config.timeout, 30);
    }

    #[test]
    fn test_load_config_without_file() {
        // No recipe_finder.toml in the test working directory; defaults must load
        let result = load_config();
        assert!(result.is_ok());
    }
}
