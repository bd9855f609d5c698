//! Config base types.
//!
//! Responsibilities:
//! - Hold the expanded environment and resolve prefixed lookups.
//! - Read and validate `NODE_ENV`.
//! - Combine the base with application `Settings` into an immutable `Config`.
//!
//! Does NOT handle:
//! - Choosing or loading the environment source (see `loader::builder`).
//! - Value conversions (see `loader::env`).
//!
//! Invariants:
//! - The stored environment is fully expanded.
//! - Lookup key = `prefix.to_uppercase() + name`; no separator is inserted.
//! - `NODE_ENV` is always read without the prefix.
//! - A `Config` exposes only shared references; it cannot be mutated once built.

use std::ops::Deref;

use crate::constants::{NODE_ENV_DEVELOPMENT, NODE_ENV_VAR};
use crate::environment::Environment;
use crate::interpolation::expand;
use crate::loader::{ConfigError, ConfigLoader, Var};
use crate::types::node_env::NodeEnv;

/// Expanded environment plus the built-in `NODE_ENV` field.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    environment: Environment,
    prefix: String,
    node_env: NodeEnv,
}

impl BaseConfig {
    /// Build from the default environment (process plus `.env`).
    pub fn new() -> Result<Self, ConfigError> {
        ConfigLoader::new().build_base()
    }

    /// Build from `env` instead of the default environment.
    pub fn from_environment(env: Environment) -> Result<Self, ConfigError> {
        Self::with_prefix(env, String::new())
    }

    /// Expand `env` and read `NODE_ENV`.
    pub(crate) fn with_prefix(env: Environment, prefix: String) -> Result<Self, ConfigError> {
        let environment = expand(&env)?;

        let node_env = Var::new(NODE_ENV_VAR.to_string(), environment.get(NODE_ENV_VAR))
            .default(NODE_ENV_DEVELOPMENT)
            .as_enum(&NodeEnv::VALUES)?
            .parse::<NodeEnv>()
            .map_err(|message| ConfigError::invalid(NODE_ENV_VAR, message))?;

        tracing::debug!(
            vars = environment.len(),
            prefix = %prefix,
            node_env = %node_env,
            "Built base config"
        );

        Ok(Self {
            environment,
            prefix,
            node_env,
        })
    }

    /// Look up `name` with the prefix applied.
    ///
    /// With prefix `FOO_`, `get("BAR")` reads `FOO_BAR`. `name` itself is
    /// used as given.
    pub fn get(&self, name: &str) -> Var<'_> {
        let key = format!("{}{}", self.prefix.to_uppercase(), name);
        let raw = self.environment.get(&key);
        Var::new(key, raw)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The expanded environment this config reads from.
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn node_env(&self) -> NodeEnv {
        self.node_env
    }

    pub fn is_development(&self) -> bool {
        self.node_env == NodeEnv::Development
    }

    pub fn is_test(&self) -> bool {
        self.node_env == NodeEnv::Test
    }

    pub fn is_production(&self) -> bool {
        self.node_env == NodeEnv::Production
    }
}

/// Application settings read from a `BaseConfig`.
///
/// ```
/// use base_config::{BaseConfig, ConfigError, ConfigLoader, Settings};
///
/// struct Database {
///     url: String,
///     pool_size: u64,
/// }
///
/// impl Settings for Database {
///     const PREFIX: &'static str = "db_";
///
///     fn from_config(config: &BaseConfig) -> Result<Self, ConfigError> {
///         Ok(Self {
///             url: config.get("URL").as_string()?,
///             pool_size: config.get("POOL_SIZE").default("4").as_int_positive()?,
///         })
///     }
/// }
///
/// let config = ConfigLoader::new()
///     .with_environment([("DB_URL", "postgres://localhost/app")].into())
///     .build::<Database>()
///     .unwrap();
///
/// assert_eq!(config.url, "postgres://localhost/app");
/// assert_eq!(config.pool_size, 4);
/// ```
pub trait Settings: Sized {
    /// Prepended (uppercased) to every name passed to `BaseConfig::get`.
    const PREFIX: &'static str = "";

    fn from_config(config: &BaseConfig) -> Result<Self, ConfigError>;
}

impl Settings for () {
    fn from_config(_config: &BaseConfig) -> Result<Self, ConfigError> {
        Ok(())
    }
}

/// A built configuration: the base plus application settings.
///
/// Dereferences to the settings. There is no mutable access.
#[derive(Debug, Clone)]
pub struct Config<S> {
    base: BaseConfig,
    settings: S,
}

impl<S: Settings> Config<S> {
    /// Build from the default environment (process plus `.env`).
    pub fn new() -> Result<Self, ConfigError> {
        ConfigLoader::new().build()
    }

    /// Build from `env` instead of the default environment.
    pub fn from_environment(env: Environment) -> Result<Self, ConfigError> {
        ConfigLoader::new().with_environment(env).build()
    }

    pub(crate) fn from_base(base: BaseConfig) -> Result<Self, ConfigError> {
        let settings = S::from_config(&base)?;
        Ok(Self { base, settings })
    }
}

impl<S> Config<S> {
    pub fn base(&self) -> &BaseConfig {
        &self.base
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    /// Take the settings out, dropping the base.
    pub fn into_settings(self) -> S {
        self.settings
    }

    pub fn get(&self, name: &str) -> Var<'_> {
        self.base.get(name)
    }

    pub fn node_env(&self) -> NodeEnv {
        self.base.node_env()
    }

    pub fn is_development(&self) -> bool {
        self.base.is_development()
    }

    pub fn is_test(&self) -> bool {
        self.base.is_test()
    }

    pub fn is_production(&self) -> bool {
        self.base.is_production()
    }
}

impl<S> Deref for Config<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_env_defaults_to_development() {
        let config = BaseConfig::from_environment(Environment::new()).unwrap();

        assert_eq!(config.node_env(), NodeEnv::Development);
        assert!(config.is_development());
        assert!(!config.is_test());
        assert!(!config.is_production());
    }

    #[test]
    fn test_node_env_flags_are_exclusive() {
        for value in NodeEnv::VALUES {
            let config = BaseConfig::from_environment([(NODE_ENV_VAR, value)].into()).unwrap();
            let flags = [
                config.is_development(),
                config.is_test(),
                config.is_production(),
            ];
            assert_eq!(flags.iter().filter(|f| **f).count(), 1, "{value}");
            assert_eq!(config.node_env().as_str(), value);
        }
    }

    #[test]
    fn test_invalid_node_env_fails() {
        match BaseConfig::from_environment([(NODE_ENV_VAR, "staging")].into()) {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, NODE_ENV_VAR),
            other => panic!("Expected InvalidValue for NODE_ENV, got {:?}", other),
        }
    }

    #[test]
    fn test_node_env_is_expanded() {
        let config =
            BaseConfig::from_environment([("NODE_ENV", "${MODE}"), ("MODE", "production")].into())
                .unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_get_applies_uppercased_prefix() {
        let config =
            BaseConfig::with_prefix([("FOO_BAR", "baz")].into(), "foo_".to_string()).unwrap();

        let var = config.get("BAR");
        assert_eq!(var.key(), "FOO_BAR");
        assert_eq!(var.as_string().unwrap(), "baz");
    }

    #[test]
    fn test_get_does_not_uppercase_name() {
        let config = BaseConfig::from_environment([("bar", "lower")].into()).unwrap();

        assert_eq!(config.get("bar").as_string().unwrap(), "lower");
        assert!(config.get("BAR").as_string().is_err());
    }

    #[test]
    fn test_prefix_does_not_apply_to_node_env() {
        let config = BaseConfig::with_prefix(
            [("NODE_ENV", "test"), ("FOO_NODE_ENV", "production")].into(),
            "FOO_".to_string(),
        )
        .unwrap();

        assert!(config.is_test());
    }

    #[test]
    fn test_unit_settings_builds_bare_config() {
        let config = Config::<()>::from_environment(Environment::new()).unwrap();
        assert!(config.is_development());
        assert_eq!(config.base().prefix(), "");
    }
}
