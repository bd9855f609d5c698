//! Default environment loading.
//!
//! Responsibilities:
//! - Capture the process environment as the starting `Environment`.
//! - Merge an optional `.env` file into that snapshot.
//! - Resolve the `.env` path from `DOTENV_CONFIG_PATH`.
//!
//! Does NOT handle:
//! - `.env` line syntax (see `dotenv.rs`).
//! - Template expansion (see `interpolation`).
//!
//! Invariants / Assumptions:
//! - Process values take precedence over `.env` values.
//! - `.env` values are merged raw; `${NAME}` references are left for `expand`.
//! - A missing `.env` file is silently ignored; every other failure is returned.
//! - The process environment itself is never modified.
//! - `DOTENV_DISABLED=1|true` in the captured environment skips `.env` loading.
//! - On wasm targets the result is always empty and no file I/O happens.

use std::io::ErrorKind;
use std::path::PathBuf;

use super::dotenv;
use super::error::ConfigError;
use crate::constants::{DEFAULT_DOTENV_PATH, DOTENV_CONFIG_PATH_VAR, DOTENV_DISABLED_VAR};
use crate::environment::Environment;

/// Load the default environment: the process environment plus `.env` values.
///
/// Equivalent to `DefaultsLoader::new().load()`.
pub fn environment_defaults() -> Result<Environment, ConfigError> {
    DefaultsLoader::new().load()
}

/// Builder for the default environment.
#[derive(Debug, Default)]
pub struct DefaultsLoader {
    process: Option<Environment>,
    dotenv_path: Option<PathBuf>,
}

impl DefaultsLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `env` in place of the captured process environment.
    pub fn with_process_environment(mut self, env: Environment) -> Self {
        self.process = Some(env);
        self
    }

    /// Load `.env` values from `path` instead of `DOTENV_CONFIG_PATH`.
    pub fn with_dotenv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dotenv_path = Some(path.into());
        self
    }

    /// Check if dotenv loading is disabled in the captured environment.
    fn dotenv_disabled(env: &Environment) -> bool {
        matches!(env.get(DOTENV_DISABLED_VAR), Some("true") | Some("1"))
    }

    /// The `.env` path: explicit, then `DOTENV_CONFIG_PATH`, then `.env`.
    fn resolve_dotenv_path(&self, env: &Environment) -> PathBuf {
        if let Some(path) = &self.dotenv_path {
            return path.clone();
        }
        env.get(DOTENV_CONFIG_PATH_VAR)
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOTENV_PATH))
    }

    /// Produce the starting environment.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored.
    #[cfg(not(target_family = "wasm"))]
    pub fn load(self) -> Result<Environment, ConfigError> {
        let mut env = match &self.process {
            Some(env) => env.clone(),
            None => Environment::from_process(),
        };

        if Self::dotenv_disabled(&env) {
            tracing::debug!("Dotenv loading disabled");
            return Ok(env);
        }

        let path = self.resolve_dotenv_path(&env);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No .env file found");
                return Ok(env);
            }
            Err(e) => return Err(ConfigError::DotenvIo { kind: e.kind() }),
        };

        let mut loaded = 0usize;
        for (name, value) in dotenv::parse(&content)? {
            if env.insert_if_absent(name, value) {
                loaded += 1;
            }
        }

        tracing::debug!(path = %path.display(), loaded, "Loaded .env file");
        Ok(env)
    }

    /// No process environment or filesystem on wasm targets.
    #[cfg(target_family = "wasm")]
    pub fn load(self) -> Result<Environment, ConfigError> {
        Ok(Environment::new())
    }
}
