//! Configuration type definitions.
//!
//! Responsibilities:
//! - Define the runtime environment kind (`NodeEnv`).
//! - Define the config base, the `Settings` extension trait, and the built `Config`.
//!
//! Does NOT handle:
//! - Loading the environment from the process or files (see `loader` module).
//! - Template expansion (see `interpolation` module).

pub(crate) mod config;
mod node_env;

pub use config::{BaseConfig, Config, Settings};
pub use node_env::NodeEnv;
