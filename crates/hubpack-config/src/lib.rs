//! Build configuration for hubpack
//!
//! Loads the `hubpack.toml` describing the plugin being packaged and resolves
//! the directories every goal reads from or writes to.

pub mod build_config;
pub mod errors;

pub use build_config::{ActionArgument, BuildConfig, CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE};
pub use errors::ConfigError;
