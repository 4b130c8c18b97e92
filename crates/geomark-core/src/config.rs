use crate::error::{GeomarkError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for Geomark
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    /// Default search radius for boundary detection, in meters
    pub default_radius_m: ConfigValue<f64>,
    /// Bound on a single imagery fetch, in milliseconds
    pub imagery_timeout_ms: ConfigValue<u64>,
    /// Bound on a model load, in milliseconds
    pub model_load_timeout_ms: ConfigValue<u64>,
    /// Fixed RNG seed for reproducible inference; None draws from entropy
    pub rng_seed: ConfigValue<Option<u64>>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            default_radius_m: ConfigValue::new(500.0, ConfigSource::Default),
            imagery_timeout_ms: ConfigValue::new(10_000, ConfigSource::Default),
            model_load_timeout_ms: ConfigValue::new(30_000, ConfigSource::Default),
            rng_seed: ConfigValue::new(None, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| GeomarkError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| GeomarkError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        // Update values from file
        if let Some(radius) = file_config.default_radius_m {
            self.default_radius_m.update(radius, ConfigSource::File);
        }

        if let Some(timeout) = file_config.imagery_timeout_ms {
            self.imagery_timeout_ms.update(timeout, ConfigSource::File);
        }

        if let Some(timeout) = file_config.model_load_timeout_ms {
            self.model_load_timeout_ms.update(timeout, ConfigSource::File);
        }

        if let Some(seed) = file_config.rng_seed {
            self.rng_seed.update(Some(seed), ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // GEOMARK_DEFAULT_RADIUS_M
        if let Ok(radius_str) = env::var("GEOMARK_DEFAULT_RADIUS_M") {
            match radius_str.parse::<f64>() {
                Ok(radius) if radius > 0.0 => {
                    self.default_radius_m.update(radius, ConfigSource::Environment)
                }
                _ => tracing::warn!(
                    "Invalid GEOMARK_DEFAULT_RADIUS_M value '{}': expected positive number",
                    radius_str
                ),
            }
        }

        // GEOMARK_IMAGERY_TIMEOUT_MS
        if let Ok(timeout_str) = env::var("GEOMARK_IMAGERY_TIMEOUT_MS") {
            match timeout_str.parse::<u64>() {
                Ok(timeout) => self.imagery_timeout_ms.update(timeout, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid GEOMARK_IMAGERY_TIMEOUT_MS value '{}': expected integer milliseconds",
                    timeout_str
                ),
            }
        }

        // GEOMARK_MODEL_LOAD_TIMEOUT_MS
        if let Ok(timeout_str) = env::var("GEOMARK_MODEL_LOAD_TIMEOUT_MS") {
            match timeout_str.parse::<u64>() {
                Ok(timeout) => {
                    self.model_load_timeout_ms.update(timeout, ConfigSource::Environment)
                }
                Err(_) => tracing::warn!(
                    "Invalid GEOMARK_MODEL_LOAD_TIMEOUT_MS value '{}': expected integer milliseconds",
                    timeout_str
                ),
            }
        }

        // GEOMARK_RNG_SEED
        if let Ok(seed_str) = env::var("GEOMARK_RNG_SEED") {
            match seed_str.parse::<u64>() {
                Ok(seed) => self.rng_seed.update(Some(seed), ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid GEOMARK_RNG_SEED value '{}': expected integer seed",
                    seed_str
                ),
            }
        }

        self
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "default_radius_m".to_string(),
            (format!("{}", self.default_radius_m.value), self.default_radius_m.source),
        );

        map.insert(
            "imagery_timeout_ms".to_string(),
            (format!("{}", self.imagery_timeout_ms.value), self.imagery_timeout_ms.source),
        );

        map.insert(
            "model_load_timeout_ms".to_string(),
            (format!("{}", self.model_load_timeout_ms.value), self.model_load_timeout_ms.source),
        );

        map.insert(
            "rng_seed".to_string(),
            (
                self.rng_seed.value.map_or_else(|| "entropy".to_string(), |s| s.to_string()),
                self.rng_seed.source,
            ),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    default_radius_m: Option<f64>,
    imagery_timeout_ms: Option<u64>,
    model_load_timeout_ms: Option<u64>,
    rng_seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = LayeredConfig::with_defaults();
        assert_eq!(config.default_radius_m.value, 500.0);
        assert_eq!(config.default_radius_m.source, ConfigSource::Default);
        assert_eq!(config.imagery_timeout_ms.value, 10_000);
        assert_eq!(config.model_load_timeout_ms.value, 30_000);
        assert_eq!(config.rng_seed.value, None);
    }

    #[test]
    fn test_config_precedence() {
        let mut value = ConfigValue::new(100, ConfigSource::Default);

        // File should override default
        value.update(200, ConfigSource::File);
        assert_eq!(value.value, 200);
        assert_eq!(value.source, ConfigSource::File);

        // Environment should override file
        value.update(300, ConfigSource::Environment);
        assert_eq!(value.value, 300);
        assert_eq!(value.source, ConfigSource::Environment);

        // Lower precedence should not override
        value.update(400, ConfigSource::File);
        assert_eq!(value.value, 300); // Still environment value
        assert_eq!(value.source, ConfigSource::Environment);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
default_radius_m = 750.0
imagery_timeout_ms = 5000
rng_seed = 42
"#
        )
        .unwrap();

        let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

        assert_eq!(config.default_radius_m.value, 750.0);
        assert_eq!(config.default_radius_m.source, ConfigSource::File);
        assert_eq!(config.imagery_timeout_ms.value, 5000);
        assert_eq!(config.rng_seed.value, Some(42));
        // Not in the file, still default
        assert_eq!(config.model_load_timeout_ms.source, ConfigSource::Default);
    }

    #[test]
    fn test_load_from_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "default_radius_m = \"not a number\"").unwrap();

        let result = LayeredConfig::with_defaults().load_from_file(file.path());
        assert!(matches!(result, Err(GeomarkError::ConfigInvalid { .. })));
    }

    #[test]
    #[serial]
    fn test_load_from_env() {
        env::set_var("GEOMARK_DEFAULT_RADIUS_M", "1200.5");
        env::set_var("GEOMARK_RNG_SEED", "7");
        env::set_var("GEOMARK_IMAGERY_TIMEOUT_MS", "not-a-number");

        let config = LayeredConfig::with_defaults().load_from_env();

        env::remove_var("GEOMARK_DEFAULT_RADIUS_M");
        env::remove_var("GEOMARK_RNG_SEED");
        env::remove_var("GEOMARK_IMAGERY_TIMEOUT_MS");

        assert_eq!(config.default_radius_m.value, 1200.5);
        assert_eq!(config.default_radius_m.source, ConfigSource::Environment);
        assert_eq!(config.rng_seed.value, Some(7));
        // Unparseable value is ignored with a warning
        assert_eq!(config.imagery_timeout_ms.value, 10_000);
        assert_eq!(config.imagery_timeout_ms.source, ConfigSource::Default);
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "default_radius_m = 750.0").unwrap();

        env::set_var("GEOMARK_DEFAULT_RADIUS_M", "900");

        let config = LayeredConfig::with_defaults()
            .load_from_file(file.path())
            .unwrap()
            .load_from_env();

        env::remove_var("GEOMARK_DEFAULT_RADIUS_M");

        assert_eq!(config.default_radius_m.value, 900.0);
        assert_eq!(config.default_radius_m.source, ConfigSource::Environment);
    }

    #[test]
    fn test_inspection_map() {
        let config = LayeredConfig::with_defaults();
        let map = config.to_inspection_map();

        assert!(map.contains_key("default_radius_m"));
        assert!(map.contains_key("imagery_timeout_ms"));
        assert!(map.contains_key("model_load_timeout_ms"));
        assert!(map.contains_key("rng_seed"));

        let (seed_value, seed_source) = &map["rng_seed"];
        assert_eq!(seed_value, "entropy");
        assert_eq!(*seed_source, ConfigSource::Default);
    }
}
