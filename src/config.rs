//! Configuration management for the address book.
//!
//! This module handles loading configuration from environment variables.
//! Every knob is optional with a sensible default, so `from_env` only fails
//! on values that are present but unparseable.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the address book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the persisted address book file (default: "addressbook.bin")
    pub storage_path: PathBuf,

    /// Entries per page when listing the book (default: 5)
    pub page_size: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PATH`: persistence file path (default: "addressbook.bin")
    /// - `ADDRESS_BOOK_PAGE_SIZE`: listing page size (default: 5)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let storage_path = env::var("ADDRESS_BOOK_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("addressbook.bin"));

        let page_size = Self::parse_env_usize("ADDRESS_BOOK_PAGE_SIZE", 5)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            storage_path,
            page_size,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
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
            storage_path: PathBuf::from("addressbook.bin"),
            page_size: 5,
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
        assert_eq!(config.storage_path, PathBuf::from("addressbook.bin"));
        assert_eq!(config.page_size, 5);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        env::remove_var("ADDRESS_BOOK_PATH");
        env::remove_var("ADDRESS_BOOK_PAGE_SIZE");
        env::remove_var("LOG_LEVEL");

        let config = Config::from_env().unwrap();
        assert_eq!(config.storage_path, PathBuf::from("addressbook.bin"));
        assert_eq!(config.page_size, 5);
    }

    #[test]
    #[serial]
    fn test_config_from_env_overrides() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_PATH", "/tmp/contacts.bin");
        guard.set("ADDRESS_BOOK_PAGE_SIZE", "10");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.storage_path, PathBuf::from("/tmp/contacts.bin"));
        assert_eq!(config.page_size, 10);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_invalid_page_size() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_PAGE_SIZE", "lots");

        let result = Config::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref var, .. }) if var == "ADDRESS_BOOK_PAGE_SIZE"
        ));
    }
}
