//! Configuration loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Load the default environment from the process and an optional `.env` file.
//! - Provide a builder-pattern `ConfigLoader` for choosing and overriding sources.
//! - Provide the typed `Var` accessor used by settings.
//!
//! Does NOT handle:
//! - Template expansion (see `interpolation`).
//! - The config types themselves (see `types`).
//!
//! Invariants / Assumptions:
//! - Process values take precedence over `.env` values.
//! - `.env` values are read raw; references are expanded later, never while parsing.
//! - The `DOTENV_DISABLED` variable is checked before any `.env` file is read.

mod builder;
mod defaults;
mod dotenv;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use defaults::{DefaultsLoader, environment_defaults};
pub use env::{Var, non_blank};
pub use error::ConfigError;

#[cfg(test)]
mod tests;
