//! Typed, validated access to environment configuration.
//!
//! This crate loads the process environment and an optional `.env` file,
//! expands `${NAME}` references between variables, and hands typed values to
//! application settings. A built [`Config`] is immutable.
//!
//! ```
//! use base_config::{BaseConfig, ConfigError, ConfigLoader, Settings};
//!
//! struct Server {
//!     port: u16,
//!     public_url: String,
//! }
//!
//! impl Settings for Server {
//!     fn from_config(config: &BaseConfig) -> Result<Self, ConfigError> {
//!         Ok(Self {
//!             port: config.get("PORT").as_port()?,
//!             public_url: config.get("PUBLIC_URL").as_string()?,
//!         })
//!     }
//! }
//!
//! let config = ConfigLoader::new()
//!     .with_environment([("PORT", "3000"), ("PUBLIC_URL", "http://localhost:${PORT}")].into())
//!     .build::<Server>()?;
//!
//! assert_eq!(config.port, 3000);
//! assert_eq!(config.public_url, "http://localhost:3000");
//! assert!(config.is_development());
//! # Ok::<(), ConfigError>(())
//! ```
//!
//! Fields cannot be reassigned after `build`:
//!
//! ```compile_fail
//! use base_config::{BaseConfig, ConfigError, ConfigLoader, Settings};
//!
//! struct Server {
//!     port: u16,
//! }
//!
//! impl Settings for Server {
//!     fn from_config(config: &BaseConfig) -> Result<Self, ConfigError> {
//!         Ok(Self { port: config.get("PORT").as_port()? })
//!     }
//! }
//!
//! let mut config = ConfigLoader::new()
//!     .with_environment([("PORT", "3000")].into())
//!     .build::<Server>()
//!     .unwrap();
//!
//! config.port = 1;
//! ```

pub mod constants;
mod environment;
pub mod interpolation;
mod loader;
pub mod types;

pub use environment::Environment;
pub use interpolation::expand;
pub use loader::{ConfigError, ConfigLoader, DefaultsLoader, Var, environment_defaults, non_blank};
pub use types::{BaseConfig, Config, NodeEnv, Settings};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
