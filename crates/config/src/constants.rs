//! Centralized constants for environment configuration.
//!
//! This module contains variable names and default values shared by the
//! loader, the interpolation pass, and the typed accessors.

// =============================================================================
// Dotenv Loading
// =============================================================================

/// Environment variable naming the `.env` file to load.
pub const DOTENV_CONFIG_PATH_VAR: &str = "DOTENV_CONFIG_PATH";

/// Environment variable that, when set to `1` or `true`, skips `.env` loading.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

/// Path of the `.env` file used when `DOTENV_CONFIG_PATH` is unset.
/// Relative paths resolve against the current working directory.
pub const DEFAULT_DOTENV_PATH: &str = ".env";

// =============================================================================
// Runtime Environment Kind
// =============================================================================

/// Variable that selects the runtime environment kind.
/// Always looked up without the config prefix.
pub const NODE_ENV_VAR: &str = "NODE_ENV";

pub const NODE_ENV_DEVELOPMENT: &str = "development";
pub const NODE_ENV_TEST: &str = "test";
pub const NODE_ENV_PRODUCTION: &str = "production";

/// The closed set of accepted `NODE_ENV` values.
pub const NODE_ENVS: [&str; 3] = [NODE_ENV_DEVELOPMENT, NODE_ENV_TEST, NODE_ENV_PRODUCTION];

// =============================================================================
// Typed Accessor Defaults
// =============================================================================

/// Separator used by `Var::as_list` when none is given.
pub const DEFAULT_LIST_SEPARATOR: &str = ",";

/// Largest valid TCP/UDP port number accepted by `Var::as_port`.
pub const MAX_PORT: u16 = 65535;
