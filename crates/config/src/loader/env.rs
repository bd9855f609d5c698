//! Typed access to environment values.
//!
//! Responsibilities:
//! - Provide the `Var` accessor returned by `BaseConfig::get`.
//! - Convert raw strings into typed values with validation.
//! - Apply defaults and optionality.
//!
//! Does NOT handle:
//! - Prefix resolution (see `types::config`).
//! - Loading or expanding the environment (see `defaults.rs`, `interpolation`).
//!
//! Invariants:
//! - Empty or whitespace-only values are treated as unset.
//! - `as_string` and `as_secret` return the value exactly as set; typed
//!   conversions parse the trimmed value.
//! - A `required` variable ignores its default.
//! - Missing values return `ConfigError::MissingEnvVar`; malformed values return
//!   `ConfigError::InvalidValue` with a message that never contains the value.

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use secrecy::SecretString;
use serde::de::DeserializeOwned;

use super::error::ConfigError;
use crate::constants::DEFAULT_LIST_SEPARATOR;

/// Return the trimmed value, or `None` if it is empty or whitespace-only.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// A single environment variable lookup.
///
/// Chain `default` or `required` before a conversion method:
///
/// ```
/// use base_config::{BaseConfig, Environment};
///
/// let config = BaseConfig::from_environment(Environment::from([("PORT", "3000")])).unwrap();
/// let port = config.get("PORT").default("8080").as_port().unwrap();
/// let workers = config.get("WORKERS").optional(|v| v.as_int_positive()).unwrap();
///
/// assert_eq!(port, 3000);
/// assert_eq!(workers, None);
/// assert!(config.get("API_KEY").default("dev").required().as_secret().is_err());
/// ```
#[derive(Debug, Clone)]
#[must_use = "a Var does nothing until converted"]
pub struct Var<'a> {
    key: String,
    raw: Option<&'a str>,
    default: Option<String>,
    required: bool,
}

impl<'a> Var<'a> {
    pub(crate) fn new(key: String, raw: Option<&'a str>) -> Self {
        Self {
            key,
            raw: raw.filter(|s| !is_blank(s)),
            default: None,
            required: false,
        }
    }

    /// The full variable name, including any prefix.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Use `value` when the variable is unset or blank.
    pub fn default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Require the value to come from the environment.
    ///
    /// Any default is ignored, and `optional` reports `MissingEnvVar` instead
    /// of `None` when the variable is unset.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Returns true if a value or usable default is available.
    pub fn is_set(&self) -> bool {
        self.value().is_some()
    }

    /// The effective value: the variable as set, else the default unless required.
    pub fn value(&self) -> Option<&str> {
        if self.required {
            return self.raw;
        }
        self.raw.or_else(|| self.default.as_deref().filter(|s| !is_blank(s)))
    }

    /// Run `convert` only if a value is available.
    ///
    /// A `required` variable that is unset still fails with `MissingEnvVar`.
    pub fn optional<T, F>(self, convert: F) -> Result<Option<T>, ConfigError>
    where
        F: FnOnce(Self) -> Result<T, ConfigError>,
    {
        if self.is_set() {
            convert(self).map(Some)
        } else if self.required {
            Err(ConfigError::MissingEnvVar(self.key))
        } else {
            Ok(None)
        }
    }

    fn require(&self) -> Result<&str, ConfigError> {
        self.value()
            .ok_or_else(|| ConfigError::MissingEnvVar(self.key.clone()))
    }

    /// The value with surrounding whitespace removed, for typed parsing.
    fn require_trimmed(&self) -> Result<&str, ConfigError> {
        self.require().map(str::trim)
    }

    fn invalid(&self, message: impl Into<String>) -> ConfigError {
        ConfigError::invalid(&self.key, message)
    }

    pub fn as_string(self) -> Result<String, ConfigError> {
        self.require().map(str::to_string)
    }

    /// Read the value as a secret that is redacted from `Debug` output.
    pub fn as_secret(self) -> Result<SecretString, ConfigError> {
        self.require().map(|s| SecretString::new(s.into()))
    }

    /// Accepts `true`/`false`, `1`/`0` and `yes`/`no`, case-insensitively.
    pub fn as_bool(self) -> Result<bool, ConfigError> {
        match self.require_trimmed()?.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(self.invalid("must be true or false")),
        }
    }

    pub fn as_int(self) -> Result<i64, ConfigError> {
        self.require_trimmed()?
            .parse()
            .map_err(|_| self.invalid("must be an integer"))
    }

    /// Parse an integer that is zero or greater.
    pub fn as_int_positive(self) -> Result<u64, ConfigError> {
        self.require_trimmed()?
            .parse()
            .map_err(|_| self.invalid("must be a non-negative integer"))
    }

    pub fn as_port(self) -> Result<u16, ConfigError> {
        match self.require_trimmed()?.parse::<u16>() {
            Ok(0) | Err(_) => Err(self.invalid(format!(
                "must be a port number between 1 and {}",
                crate::constants::MAX_PORT
            ))),
            Ok(port) => Ok(port),
        }
    }

    pub fn as_float(self) -> Result<f64, ConfigError> {
        match self.require_trimmed()?.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(self.invalid("must be a number")),
        }
    }

    /// Restrict the value to one of `allowed` (exact, case-sensitive match).
    pub fn as_enum(self, allowed: &[&str]) -> Result<String, ConfigError> {
        let value = self.require_trimmed()?;
        if allowed.contains(&value) {
            Ok(value.to_string())
        } else {
            Err(self.invalid(format!("must be one of: {}", allowed.join(", "))))
        }
    }

    /// Parse with the target type's `FromStr` implementation.
    ///
    /// The parse error is included in the message, so `T`'s error type must
    /// not echo its input for values that may be secret.
    pub fn as_parsed<T>(self) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.require_trimmed()?
            .parse()
            .map_err(|e: T::Err| self.invalid(e.to_string()))
    }

    /// Parse an absolute URL.
    pub fn as_url(self) -> Result<url::Url, ConfigError> {
        url::Url::parse(self.require_trimmed()?)
            .map_err(|e| self.invalid(format!("must be an absolute URL: {e}")))
    }

    /// Deserialize the value as JSON.
    pub fn as_json<T: DeserializeOwned>(self) -> Result<T, ConfigError> {
        serde_json::from_str(self.require_trimmed()?).map_err(|e| {
            self.invalid(format!(
                "must be valid JSON (line {}, column {})",
                e.line(),
                e.column()
            ))
        })
    }

    /// Split on `separator` (default `,`), trimming items and dropping empty ones.
    pub fn as_list(self, separator: Option<&str>) -> Result<Vec<String>, ConfigError> {
        let separator = separator.unwrap_or(DEFAULT_LIST_SEPARATOR);
        if separator.is_empty() {
            return Err(self.invalid("list separator must not be empty"));
        }
        Ok(self
            .require()?
            .split(separator)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Parse a whole number of seconds.
    pub fn as_duration_secs(self) -> Result<Duration, ConfigError> {
        self.require_trimmed()?
            .parse()
            .map(Duration::from_secs)
            .map_err(|_| self.invalid("must be a number of seconds"))
    }
}
