//! Process environment tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test that process variables reach the config unchanged.
//! - Test precedence of explicit environments and overrides over the process.
//! - Test that overrides feed `${NAME}` references in `.env` values.
//! - Test `DOTENV_CONFIG_PATH` read from the process environment.
//! - Test that `NODE_ENV` stays unprefixed for prefixed settings.

use serial_test::serial;
use std::fs;
use tempfile::TempDir;

use super::env_lock;
use crate::environment::Environment;
use crate::loader::builder::ConfigLoader;
use crate::loader::defaults::environment_defaults;
use crate::loader::error::ConfigError;
use crate::types::{BaseConfig, Settings};

struct PortConfig {
    port: u64,
}

impl Settings for PortConfig {
    fn from_config(config: &BaseConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            port: config.get("PORT").as_int_positive()?,
        })
    }
}

struct PrefixedConfig {
    bar: Option<String>,
}

impl Settings for PrefixedConfig {
    const PREFIX: &'static str = "FOO_";

    fn from_config(config: &BaseConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            bar: config.get("BAR").optional(|v| v.as_string())?,
        })
    }
}

#[test]
#[serial]
fn test_environment_defaults_retains_process_values() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.env");

    temp_env::with_vars(
        [
            ("FOO", Some("bar")),
            ("DOTENV_CONFIG_PATH", Some(missing.to_str().unwrap())),
        ],
        || {
            let env = environment_defaults().unwrap();
            assert_eq!(env.get("FOO"), Some("bar"));
        },
    );
}

#[test]
#[serial]
fn test_process_values_reach_settings() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("PORT", Some("3000")),
            ("NODE_ENV", None),
            ("DOTENV_DISABLED", Some("1")),
        ],
        || {
            let config = ConfigLoader::new().build::<PortConfig>().unwrap();
            assert_eq!(config.port, 3000);
        },
    );
}

#[test]
#[serial]
fn test_with_var_overrides_process_value() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("PORT", Some("3000")),
            ("NODE_ENV", None),
            ("DOTENV_DISABLED", Some("1")),
        ],
        || {
            let config = ConfigLoader::new()
                .with_var("PORT", "1000")
                .build::<PortConfig>()
                .unwrap();
            assert_eq!(config.port, 1000);
        },
    );
}

#[test]
#[serial]
fn test_explicit_environment_ignores_process() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("PORT", Some("3000"))], || {
        let config = ConfigLoader::new()
            .with_environment(Environment::from([("PORT", "1000")]))
            .build::<PortConfig>()
            .unwrap();
        assert_eq!(config.port, 1000);
        assert_eq!(config.base().environment().len(), 1);
    });
}

#[test]
#[serial]
fn test_dotenv_config_path_from_process() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("test.env");
    fs::write(&path, "PORT=2000\n").unwrap();

    temp_env::with_vars(
        [
            ("PORT", None),
            ("NODE_ENV", None),
            ("DOTENV_DISABLED", None),
            ("DOTENV_CONFIG_PATH", Some(path.to_str().unwrap())),
        ],
        || {
            let config = ConfigLoader::new().build::<PortConfig>().unwrap();
            assert_eq!(config.port, 2000);
        },
    );
}

#[test]
#[serial]
fn test_process_value_wins_over_dotenv() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("test.env");
    fs::write(&path, "PORT=2000\n").unwrap();

    temp_env::with_vars(
        [
            ("PORT", Some("3000")),
            ("NODE_ENV", None),
            ("DOTENV_DISABLED", None),
        ],
        || {
            let config = ConfigLoader::new()
                .with_dotenv_path(&path)
                .build::<PortConfig>()
                .unwrap();
            assert_eq!(config.port, 3000);
        },
    );
}

#[test]
#[serial]
fn test_override_feeds_unquoted_dotenv_reference() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("test.env");
    fs::write(&path, "URL=http://${HOST}/\nHOST=dotenv.example\n").unwrap();

    temp_env::with_vars(
        [
            ("HOST", Some("process.example")),
            ("URL", None),
            ("NODE_ENV", None),
            ("DOTENV_DISABLED", None),
        ],
        || {
            let config = ConfigLoader::new()
                .with_dotenv_path(&path)
                .with_var("HOST", "override.example")
                .build_base()
                .unwrap();
            assert_eq!(
                config.get("URL").as_string().unwrap(),
                "http://override.example/"
            );
        },
    );
}

#[test]
#[serial]
fn test_node_env_without_prefix_for_prefixed_settings() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("NODE_ENV", Some("test")),
            ("FOO_NODE_ENV", None),
            ("DOTENV_DISABLED", Some("1")),
        ],
        || {
            let config = ConfigLoader::new().build::<PrefixedConfig>().unwrap();
            assert!(config.is_test());
            assert!(!config.is_development());
            assert!(!config.is_production());
        },
    );
}

#[test]
#[serial]
fn test_process_values_are_interpolated() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("FOO", Some("456")),
            ("FOO_BAR", Some("${FOO} suffix")),
            ("NODE_ENV", None),
            ("DOTENV_DISABLED", Some("1")),
        ],
        || {
            let config = ConfigLoader::new().build::<PrefixedConfig>().unwrap();
            assert_eq!(config.bar.as_deref(), Some("456 suffix"));
        },
    );
}
