//! Environment variable parsing with type safety.
//!
//! Provides a type-safe parser for `BIZCODE_*` environment variables with
//! validation, error collection, and source tracking.

use super::source::Sourced;
use std::env;
use thiserror::Error;

/// Errors that can occur during environment variable parsing.
#[derive(Debug, Error)]
pub enum EnvError {
    /// Invalid value for a variable.
    #[error("Invalid value for {var}: expected {expected}, got '{value}'")]
    InvalidValue {
        var: String,
        expected: String,
        value: String,
    },

    /// Invalid log level.
    #[error("Invalid log level for {var}: {value}")]
    InvalidLogLevel { var: String, value: String },
}

/// Type-safe environment variable parser.
///
/// Collects errors during parsing so all issues can be reported at once.
pub struct EnvParser {
    prefix: &'static str,
    errors: Vec<EnvError>,
}

impl EnvParser {
    /// Create a new parser with the BIZCODE_ prefix.
    pub fn new() -> Self {
        Self {
            prefix: "BIZCODE_",
            errors: Vec::new(),
        }
    }

    /// Get all accumulated errors.
    pub fn errors(&self) -> &[EnvError] {
        &self.errors
    }

    /// Check if any errors occurred.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Take ownership of errors.
    pub fn take_errors(&mut self) -> Vec<EnvError> {
        std::mem::take(&mut self.errors)
    }

    fn var_name(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    /// Get a boolean value with default.
    ///
    /// Accepts: 1, true, yes, on (for true)
    ///          0, false, no, off, "" (for false)
    pub fn get_bool(&mut self, name: &str, default: bool) -> Sourced<bool> {
        let var_name = self.var_name(name);
        match env::var(&var_name) {
            Ok(value) => match parse_bool(&value) {
                Some(parsed) => Sourced::from_env(parsed, var_name),
                None => {
                    self.errors.push(EnvError::InvalidValue {
                        var: var_name.clone(),
                        expected: "boolean (true/false/1/0/yes/no)".to_string(),
                        value,
                    });
                    Sourced::from_env(default, var_name)
                }
            },
            Err(_) => Sourced::default_value(default),
        }
    }

    /// Get a log level value with validation.
    pub fn get_log_level(&mut self, name: &str, default: &str) -> Sourced<String> {
        let var_name = self.var_name(name);
        match env::var(&var_name) {
            Ok(value) => match parse_log_level(&value) {
                Some(level) => Sourced::from_env(level.to_string(), var_name),
                None => {
                    self.errors.push(EnvError::InvalidLogLevel {
                        var: var_name.clone(),
                        value,
                    });
                    Sourced::from_env(default.to_string(), var_name)
                }
            },
            Err(_) => Sourced::default_value(default.to_string()),
        }
    }
}

impl Default for EnvParser {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

fn parse_log_level(value: &str) -> Option<&'static str> {
    match value.to_lowercase().as_str() {
        "trace" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" => Some("warn"),
        "error" => Some("error"),
        "off" => Some("off"),
        _ => None,
    }
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;
    use crate::config::ConfigSource;
    use crate::config::env_test_lock;
    use proptest::prelude::*;

    fn cleanup_env(vars: &[&str]) {
        for var in vars {
            // SAFETY: env mutation is serialized by env_test_lock
            unsafe { env::remove_var(var) };
        }
    }

    fn set_env(key: &str, value: &str) {
        // SAFETY: env mutation is serialized by env_test_lock
        unsafe { env::set_var(key, value) };
    }

    #[test]
    fn test_get_bool_true_values() {
        let _guard = env_test_lock();
        let vars = ["BIZCODE_TEST_BOOL_TRUE"];
        cleanup_env(&vars);

        for val in &["1", "true", "yes", "on", "TRUE", "Yes"] {
            set_env("BIZCODE_TEST_BOOL_TRUE", val);
            let mut parser = EnvParser::new();
            let result = parser.get_bool("TEST_BOOL_TRUE", false);
            assert!(result.value, "Expected true for '{}'", val);
            assert!(!parser.has_errors());
        }

        cleanup_env(&vars);
    }

    #[test]
    fn test_get_bool_false_values() {
        let _guard = env_test_lock();
        let vars = ["BIZCODE_TEST_BOOL_FALSE"];
        cleanup_env(&vars);

        for val in &["0", "false", "no", "off", "FALSE", ""] {
            set_env("BIZCODE_TEST_BOOL_FALSE", val);
            let mut parser = EnvParser::new();
            let result = parser.get_bool("TEST_BOOL_FALSE", true);
            assert!(!result.value, "Expected false for '{}'", val);
            assert!(!parser.has_errors());
        }

        cleanup_env(&vars);
    }

    #[test]
    fn test_get_bool_invalid_uses_default() {
        let _guard = env_test_lock();
        let vars = ["BIZCODE_BAD_BOOL"];
        cleanup_env(&vars);

        set_env("BIZCODE_BAD_BOOL", "maybe");
        let mut parser = EnvParser::new();
        let result = parser.get_bool("BAD_BOOL", false);
        assert!(!result.value);
        assert!(parser.has_errors());
        assert!(parser.errors()[0].to_string().contains("BIZCODE_BAD_BOOL"));

        cleanup_env(&vars);
    }

    #[test]
    fn test_get_bool_unset_is_default() {
        let _guard = env_test_lock();
        cleanup_env(&["BIZCODE_UNSET_BOOL"]);

        let mut parser = EnvParser::new();
        let result = parser.get_bool("UNSET_BOOL", true);
        assert!(result.value);
        assert_eq!(result.source, ConfigSource::Default);
    }

    #[test]
    fn test_get_log_level_normalizes_case() {
        let _guard = env_test_lock();
        let vars = ["BIZCODE_TEST_LEVEL"];
        cleanup_env(&vars);

        set_env("BIZCODE_TEST_LEVEL", "DEBUG");
        let mut parser = EnvParser::new();
        let result = parser.get_log_level("TEST_LEVEL", "info");
        assert_eq!(result.value, "debug");
        assert_eq!(result.var.as_deref(), Some("BIZCODE_TEST_LEVEL"));
        assert!(!parser.has_errors());

        cleanup_env(&vars);
    }

    #[test]
    fn test_get_log_level_invalid_collects_error() {
        let _guard = env_test_lock();
        let vars = ["BIZCODE_TEST_BAD_LEVEL"];
        cleanup_env(&vars);

        set_env("BIZCODE_TEST_BAD_LEVEL", "loud");
        let mut parser = EnvParser::new();
        let result = parser.get_log_level("TEST_BAD_LEVEL", "warn");
        assert_eq!(result.value, "warn");

        let errors = parser.take_errors();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], EnvError::InvalidLogLevel { .. }));
        assert!(!parser.has_errors());

        cleanup_env(&vars);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn test_parse_bool_valid_only(s in "[a-zA-Z0-9_-]{0,20}") {
            let result = parse_bool(&s);
            let valid = ["1", "true", "yes", "on", "0", "false", "no", "off", ""];
            let is_valid = valid.iter().any(|v| s.eq_ignore_ascii_case(v));
            prop_assert_eq!(result.is_some(), is_valid, "input: {}", s);
        }

        #[test]
        fn test_parse_log_level_valid_only(s in "[a-zA-Z]{0,10}") {
            let result = parse_log_level(&s);
            let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];
            let is_valid = valid_levels.iter().any(|v| s.eq_ignore_ascii_case(v));
            prop_assert_eq!(result.is_some(), is_valid, "input: {}", s);
        }
    }
}
