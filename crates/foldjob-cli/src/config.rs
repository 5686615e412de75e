//! Layered configuration for problem construction.
//!
//! Values are resolved in order of precedence: command-line flags, `-S KEY=VALUE`
//! overrides, the TOML config file, then built-in defaults.

pub mod builder;
pub mod defaults;
pub mod file;

pub use builder::build_config;
