//! Configuration module for relo
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (RELO_*)
//! 3. Project config (./relo.toml)
//! 4. User config (~/.config/relo/config.toml)
//! 5. Built-in defaults (lowest priority)
//!
//! Only the first config file found is read.

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, suggest, EnvVarValidator};
pub use loader::{
    load_from, load_or_default, load_with_warnings, with_env_overrides_from,
    PROJECT_CONFIG_FILE,
};
pub use types::{Config, ConfigWarning, LoadedConfig, OutputConfig, OutputFormat, Verbosity};
