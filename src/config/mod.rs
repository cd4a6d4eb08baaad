//! Configuration for the storefront binary and default collaborators
//!
//! Values are layered, lowest priority first:
//!
//! 1. Hardcoded defaults
//! 2. A TOML file (`--config <path>`, else `<config dir>/storefront/config.toml`)
//! 3. Environment variables (`STOREFRONT_*`)

use crate::core::StoreHours;
use crate::error::{common, ErrorCode, ErrorExt, Result, StorefrontError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Valid log levels for configuration validation.
pub const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

pub const ENV_LOG_LEVEL: &str = "STOREFRONT_LOG_LEVEL";
pub const ENV_OPENING_HOUR: &str = "STOREFRONT_OPENING_HOUR";
pub const ENV_CLOSING_HOUR: &str = "STOREFRONT_CLOSING_HOUR";
pub const ENV_BASE_CURRENCY: &str = "STOREFRONT_BASE_CURRENCY";

/// Get the per-user configuration directory
pub fn get_config_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "storefront", "storefront")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            StorefrontError::config_with_code(
                ErrorCode::CONFIG_PATH_ERROR,
                "Could not determine home directory",
            )
        })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub store_hours: StoreHours,

    #[serde(default)]
    pub currency: CurrencySettings,

    #[serde(default)]
    pub shipping: ShippingSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencySettings {
    /// Currency prices are quoted in
    #[serde(default = "default_base_currency")]
    pub base: String,

    /// Units of each currency per unit of the reference currency
    #[serde(default = "default_rates")]
    pub rates: HashMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingSettings {
    #[serde(default = "default_flat_cost")]
    pub flat_cost: f64,

    #[serde(default = "default_estimated_days")]
    pub estimated_days: u32,

    /// Destinations that never get a quote
    #[serde(default)]
    pub unavailable: Vec<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_currency() -> String {
    "USD".to_string()
}

fn default_rates() -> HashMap<String, f64> {
    HashMap::from([
        ("USD".to_string(), 1.0),
        ("EUR".to_string(), 0.92),
        ("GBP".to_string(), 0.79),
    ])
}

fn default_flat_cost() -> f64 {
    10.0
}

fn default_estimated_days() -> u32 {
    2
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            store_hours: StoreHours::default(),
            currency: CurrencySettings::default(),
            shipping: ShippingSettings::default(),
        }
    }
}

impl Default for CurrencySettings {
    fn default() -> Self {
        Self {
            base: default_base_currency(),
            rates: default_rates(),
        }
    }
}

impl Default for ShippingSettings {
    fn default() -> Self {
        Self {
            flat_cost: default_flat_cost(),
            estimated_days: default_estimated_days(),
            unavailable: Vec::new(),
        }
    }
}

impl StorefrontConfig {
    /// Load defaults, then the config file, then environment overrides
    ///
    /// An explicit `path` must exist. Without one, the per-user file is read
    /// when present and skipped otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(common::config_not_found(path));
                }
                Self::from_file(path)?
            }
            None => match get_config_dir() {
                Ok(dir) if dir.join("config.toml").exists() => {
                    Self::from_file(&dir.join("config.toml"))?
                }
                _ => Self::default(),
            },
        };

        config.merge_env_vars()?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "Loading configuration file");
        let content = std::fs::read_to_string(path)
            .to_config_error(format!("Failed to read {}", path.display()))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            StorefrontError::config_with_code(ErrorCode::CONFIG_PARSE_ERROR, e.to_string())
                .with_source(e)
        })
    }

    pub fn merge_env_vars(&mut self) -> Result<()> {
        self.merge_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn merge_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = log_level;
        }

        if let Some(base) = lookup(ENV_BASE_CURRENCY) {
            self.currency.base = base;
        }

        if let Some(hour) = lookup(ENV_OPENING_HOUR) {
            self.store_hours.opening_hour = parse_hour(ENV_OPENING_HOUR, &hour)?;
        }

        if let Some(hour) = lookup(ENV_CLOSING_HOUR) {
            self.store_hours.closing_hour = parse_hour(ENV_CLOSING_HOUR, &hour)?;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !VALID_LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(common::invalid_config_value(
                "log_level",
                format!(
                    "'{}' is not one of {}",
                    self.log_level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            ));
        }

        self.store_hours.validate()?;

        if !self.currency.rates.contains_key(&self.currency.base) {
            return Err(common::invalid_config_value(
                "currency.base",
                format!("no rate configured for '{}'", self.currency.base),
            ));
        }

        if let Some((currency, rate)) = self
            .currency
            .rates
            .iter()
            .find(|(_, rate)| !rate.is_finite() || **rate <= 0.0)
        {
            return Err(common::invalid_config_value(
                "currency.rates",
                format!("rate {} for '{}' must be positive", rate, currency),
            ));
        }

        if !self.shipping.flat_cost.is_finite() || self.shipping.flat_cost < 0.0 {
            return Err(common::invalid_config_value(
                "shipping.flat_cost",
                "must be a non-negative number",
            ));
        }

        Ok(())
    }
}

fn parse_hour(key: &str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|e| common::invalid_config_value(key, format!("'{}': {}", value, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_are_valid() {
        let config = StorefrontConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.store_hours, StoreHours::default());
        assert_eq!(config.currency.base, "USD");
        assert_eq!(config.shipping.estimated_days, 2);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = StorefrontConfig::from_toml(
            r#"
log_level = "debug"

[store_hours]
opening_hour = 9
closing_hour = 17
"#,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.store_hours, StoreHours::new(9, 17).unwrap());
        assert_eq!(config.shipping, ShippingSettings::default());
    }

    #[test]
    fn test_partial_store_hours_table_keeps_other_default() {
        let config = StorefrontConfig::from_toml("[store_hours]\nopening_hour = 9\n").unwrap();
        assert_eq!(config.store_hours, StoreHours::new(9, 20).unwrap());
        assert!(config.validate().is_ok());

        let config = StorefrontConfig::from_toml("[store_hours]\nclosing_hour = 18\n").unwrap();
        assert_eq!(config.store_hours, StoreHours::new(8, 18).unwrap());
    }

    #[test]
    fn test_malformed_toml() {
        let err = StorefrontConfig::from_toml("log_level = [").unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_PARSE_ERROR);
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = StorefrontConfig::from_toml("log_level = \"warn\"").unwrap();
        let env = HashMap::from([
            (ENV_LOG_LEVEL, "trace"),
            (ENV_OPENING_HOUR, "7"),
            (ENV_CLOSING_HOUR, " 22 "),
        ]);

        config
            .merge_env_from(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.log_level, "trace");
        assert_eq!(config.store_hours, StoreHours::new(7, 22).unwrap());
    }

    #[test]
    fn test_env_hour_must_be_numeric() {
        let mut config = StorefrontConfig::default();
        let err = config
            .merge_env_from(|key| (key == ENV_OPENING_HOUR).then(|| "eight".to_string()))
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_INVALID_VALUE);
    }

    #[test]
    fn test_validation_failures() {
        let mut config = StorefrontConfig::default();
        config.log_level = "loud".to_string();
        assert!(config.validate().is_err());

        let mut config = StorefrontConfig::default();
        config.currency.base = "JPY".to_string();
        assert!(config.validate().is_err());

        let mut config = StorefrontConfig::default();
        config.currency.rates.insert("EUR".to_string(), 0.0);
        assert!(config.validate().is_err());

        let mut config = StorefrontConfig::default();
        config.store_hours.opening_hour = 21;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[shipping]\nflat_cost = 4.5\nunavailable = [\"Mars\"]").unwrap();

        let config = StorefrontConfig::from_file(file.path()).unwrap();
        assert_eq!(config.shipping.flat_cost, 4.5);
        assert_eq!(config.shipping.unavailable, vec!["Mars".to_string()]);
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let err = StorefrontConfig::load(Some(Path::new("/nonexistent/storefront.toml")))
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_NOT_FOUND);
    }
}
