//! Configuration management for the address book assistant.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honoured if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default location of the address book snapshot.
pub const DEFAULT_BOOK_FILE: &str = "address_book.json";

/// Default upper bound for the `birthdays` command window.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 365;

/// Largest window accepted for `MAX_BIRTHDAY_WINDOW_DAYS`.
const WINDOW_DAYS_LIMIT: u32 = 3660;

/// Configuration for the assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON snapshot loaded at startup and written on exit
    pub address_book_file: PathBuf,

    /// Log level (default: "error")
    pub log_level: String,

    /// Largest day window accepted by the `birthdays` command (default: 365)
    pub max_birthday_window_days: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_FILE`: snapshot path (default: `address_book.json`)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `MAX_BIRTHDAY_WINDOW_DAYS`: upper bound for `birthdays` (default: 365)
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let address_book_file = match env::var("ADDRESS_BOOK_FILE") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_BOOK_FILE),
        };

        let max_birthday_window_days =
            Self::parse_env_u32("MAX_BIRTHDAY_WINDOW_DAYS", DEFAULT_BIRTHDAY_WINDOW_DAYS)?;
        if max_birthday_window_days == 0 || max_birthday_window_days > WINDOW_DAYS_LIMIT {
            return Err(ConfigError::InvalidValue {
                var: "MAX_BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 1 and {}", WINDOW_DAYS_LIMIT),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            address_book_file,
            log_level,
            max_birthday_window_days,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
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
            address_book_file: PathBuf::from(DEFAULT_BOOK_FILE),
            log_level: "error".to_string(),
            max_birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 3] = ["ADDRESS_BOOK_FILE", "LOG_LEVEL", "MAX_BIRTHDAY_WINDOW_DAYS"];

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
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
        assert_eq!(config.address_book_file, PathBuf::from("address_book.json"));
        assert_eq!(config.log_level, "error");
        assert_eq!(config.max_birthday_window_days, DEFAULT_BIRTHDAY_WINDOW_DAYS);
        assert_eq!(DEFAULT_BIRTHDAY_WINDOW_DAYS, 365);
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_FILE", "/tmp/contacts.json");
        guard.set("LOG_LEVEL", "debug");
        guard.set("MAX_BIRTHDAY_WINDOW_DAYS", "30");

        let config = Config::from_env().unwrap();
        assert_eq!(config.address_book_file, PathBuf::from("/tmp/contacts.json"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.max_birthday_window_days, 30);
    }

    #[test]
    #[serial]
    fn test_config_from_env_blank_file() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_FILE", "   ");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "ADDRESS_BOOK_FILE"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_window() {
        let mut guard = EnvGuard::new();
        guard.set("MAX_BIRTHDAY_WINDOW_DAYS", "0");
        assert!(Config::from_env().is_err());

        guard.set("MAX_BIRTHDAY_WINDOW_DAYS", "5000");
        assert!(Config::from_env().is_err());

        guard.set("MAX_BIRTHDAY_WINDOW_DAYS", "soon");
        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "MAX_BIRTHDAY_WINDOW_DAYS")
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_u32() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U32", "42");

        assert_eq!(Config::parse_env_u32("TEST_U32", 10).unwrap(), 42);
        assert_eq!(Config::parse_env_u32("NONEXISTENT_U32", 10).unwrap(), 10);
    }
}
