//! Configuration management for the person bridge.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Nothing here is read during a computation: hosts load a `Config` once
//! (directly or through `bridge_init`) and pass the relevant values in.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Weight used to derive a BMI category when the host does not supply one.
pub const DEFAULT_ASSUMED_WEIGHT_KG: f64 = 70.0;

/// Configuration for the person bridge.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "warn")
    pub log_level: String,

    /// Weight in kilograms used by summaries that are not given one (default: 70.0)
    pub assumed_weight_kg: f64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BRIDGE_LOG_LEVEL`: Logging level (default: "warn")
    /// - `BRIDGE_ASSUMED_WEIGHT_KG`: Weight for summaries, finite and > 0 (default: 70.0)
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let log_level = env::var("BRIDGE_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "BRIDGE_LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let assumed_weight_kg =
            Self::parse_env_f64("BRIDGE_ASSUMED_WEIGHT_KG", DEFAULT_ASSUMED_WEIGHT_KG)?;
        if !assumed_weight_kg.is_finite() || assumed_weight_kg <= 0.0 {
            return Err(ConfigError::InvalidValue {
                var: "BRIDGE_ASSUMED_WEIGHT_KG".to_string(),
                reason: format!("Must be a positive number, got: {}", assumed_weight_kg),
            });
        }

        Ok(Config {
            log_level,
            assumed_weight_kg,
        })
    }

    /// Parse an environment variable as f64 with a default value.
    fn parse_env_f64(var_name: &str, default: f64) -> ConfigResult<f64> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<f64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "warn".to_string(),
            assumed_weight_kg: DEFAULT_ASSUMED_WEIGHT_KG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.assumed_weight_kg, 70.0);
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("BRIDGE_LOG_LEVEL", "debug");
        guard.set("BRIDGE_ASSUMED_WEIGHT_KG", "82.5");

        let config = Config::from_env().unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.assumed_weight_kg, 82.5);
    }

    #[test]
    #[serial]
    fn test_config_rejects_non_numeric_weight() {
        let mut guard = EnvGuard::new();
        guard.set("BRIDGE_ASSUMED_WEIGHT_KG", "heavy");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "BRIDGE_ASSUMED_WEIGHT_KG");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_rejects_non_positive_weight() {
        let mut guard = EnvGuard::new();
        guard.set("BRIDGE_ASSUMED_WEIGHT_KG", "0");
        assert!(Config::from_env().is_err());

        guard.set("BRIDGE_ASSUMED_WEIGHT_KG", "-5");
        assert!(Config::from_env().is_err());

        guard.set("BRIDGE_ASSUMED_WEIGHT_KG", "NaN");
        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_config_rejects_blank_log_level() {
        let mut guard = EnvGuard::new();
        guard.set("BRIDGE_LOG_LEVEL", "   ");

        let result = Config::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref var, .. }) if var == "BRIDGE_LOG_LEVEL"
        ));
    }

    #[test]
    #[serial]
    fn test_parse_env_f64() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_F64", " 42.5 ");

        assert_eq!(Config::parse_env_f64("TEST_F64", 1.0).unwrap(), 42.5);
        assert_eq!(Config::parse_env_f64("NONEXISTENT_F64", 1.0).unwrap(), 1.0);
    }
}
