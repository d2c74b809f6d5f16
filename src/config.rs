//! Configuration management for the contact book.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Everything has a default, so an empty environment is a valid setup.

use crate::error::{ConfigError, ConfigResult};
use crate::models::DEFAULT_HORIZON_DAYS;
use std::env;
use std::path::PathBuf;

/// Largest accepted birthday horizon, one leap year.
pub const MAX_HORIZON_DAYS: u32 = 366;

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Snapshot file the address book is loaded from and saved to
    pub data_file: PathBuf,

    /// Days ahead the `birthdays` command looks (default: 7)
    pub birthday_horizon_days: u32,

    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_FILE`: snapshot path (default: `addressbook.json`)
    /// - `BIRTHDAY_HORIZON_DAYS`: look-ahead for `birthdays`, 0-366 (default: 7)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let data_file = match env::var("CONTACT_BOOK_FILE") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => defaults.data_file,
        };

        let birthday_horizon_days =
            Self::parse_env_u32("BIRTHDAY_HORIZON_DAYS", defaults.birthday_horizon_days)?;
        if birthday_horizon_days > MAX_HORIZON_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_HORIZON_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_HORIZON_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            data_file,
            birthday_horizon_days,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from("addressbook.json"),
            birthday_horizon_days: DEFAULT_HORIZON_DAYS,
            log_level: "error".to_string(),
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
        assert_eq!(config.data_file, PathBuf::from("addressbook.json"));
        assert_eq!(config.birthday_horizon_days, 7);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_BOOK_FILE", "/tmp/contacts.json");
        guard.set("BIRTHDAY_HORIZON_DAYS", "14");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.data_file, PathBuf::from("/tmp/contacts.json"));
        assert_eq!(config.birthday_horizon_days, 14);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_horizon_out_of_range() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_HORIZON_DAYS", "400");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "BIRTHDAY_HORIZON_DAYS");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_empty_data_file() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_BOOK_FILE", "  ");

        let result = Config::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref var, .. }) if var == "CONTACT_BOOK_FILE"
        ));
    }

    #[test]
    #[serial]
    fn test_parse_env_u32() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U32", "42");

        assert_eq!(Config::parse_env_u32("TEST_U32", 10).unwrap(), 42);
        assert_eq!(Config::parse_env_u32("NONEXISTENT_U32", 10).unwrap(), 10);
    }

    #[test]
    #[serial]
    fn test_parse_env_u32_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U32_INVALID", "-3");

        assert!(Config::parse_env_u32("TEST_U32_INVALID", 10).is_err());
    }
}
