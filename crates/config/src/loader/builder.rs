//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that selects the environment source.
//! - Layer individual overrides on top of that source.
//! - Build the immutable `BaseConfig` or `Config<S>`.
//!
//! Does NOT handle:
//! - Process environment capture and `.env` reading (delegated to defaults.rs).
//! - Template expansion (delegated to `interpolation`).
//! - Value conversions (see env.rs).
//!
//! Invariants / Assumptions:
//! - Without `with_environment`, the source is the process environment plus `.env`.
//! - `with_environment` replaces the default source entirely; no `.env` file is read.
//! - Values from `with_var`/`with_vars` take precedence over the source.
//! - `with_prefix` takes precedence over `Settings::PREFIX`.
//! - `build` either returns a complete value or an error; nothing partial escapes.

use std::path::PathBuf;

use super::defaults::DefaultsLoader;
use super::error::ConfigError;
use crate::environment::Environment;
use crate::types::{BaseConfig, Config, Settings};

/// Builder for `BaseConfig` and `Config<S>`.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    environment: Option<Environment>,
    dotenv_path: Option<PathBuf>,
    overrides: Environment,
    prefix: Option<String>,
}

impl ConfigLoader {
    /// Create a new configuration loader reading the default environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `env` instead of the process environment and `.env` file.
    pub fn with_environment(mut self, env: Environment) -> Self {
        self.environment = Some(env);
        self
    }

    /// Override the `.env` path (otherwise `DOTENV_CONFIG_PATH` or `.env`).
    ///
    /// Has no effect together with `with_environment`.
    pub fn with_dotenv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dotenv_path = Some(path.into());
        self
    }

    /// Set a single variable over the selected source.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.insert(name, value);
        self
    }

    /// Set several variables over the selected source.
    pub fn with_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.overrides.extend(vars);
        self
    }

    /// Set the lookup prefix, replacing `Settings::PREFIX`.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Resolve the raw (unexpanded) environment.
    fn load_environment(
        environment: Option<Environment>,
        dotenv_path: Option<PathBuf>,
        overrides: Environment,
    ) -> Result<Environment, ConfigError> {
        let mut env = match environment {
            Some(env) => {
                if dotenv_path.is_some() {
                    tracing::debug!("Ignoring dotenv path because an explicit environment was given");
                }
                env
            }
            None => {
                let mut defaults = DefaultsLoader::new();
                if let Some(path) = dotenv_path {
                    defaults = defaults.with_dotenv_path(path);
                }
                defaults.load()?
            }
        };
        env.extend(overrides);
        Ok(env)
    }

    fn build_with_prefix(self, default_prefix: &str) -> Result<BaseConfig, ConfigError> {
        let prefix = self.prefix.unwrap_or_else(|| default_prefix.to_string());
        let env = Self::load_environment(self.environment, self.dotenv_path, self.overrides)?;
        BaseConfig::with_prefix(env, prefix)
    }

    /// Build a bare `BaseConfig`.
    pub fn build_base(self) -> Result<BaseConfig, ConfigError> {
        self.build_with_prefix("")
    }

    /// Build the base, then read `S` from it.
    pub fn build<S: Settings>(self) -> Result<Config<S>, ConfigError> {
        let base = self.build_with_prefix(S::PREFIX)?;
        Config::from_base(base)
    }
}
