//! TOML configuration: file location, parsing, validation.
//!
//! The app runs fine with no config file at all; every field has a
//! default matching the stock behavior.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, ShareConfig, TimingConfig};
