//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use std::path::PathBuf;

use quotd::config::{ApiConfig, Config};
use quotd::quotes::{FallbackPool, Quote};
use quotd::selector::FallbackSelector;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

/// Write `content` to a temp config file.
///
/// The TempDir must stay alive as long as the path is used.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Stock config pointed at `url`, with animation timings shrunk so a full
/// quote cycle completes in a few milliseconds.
pub fn config_for_endpoint(url: &str) -> Config {
    let mut config = Config::default();
    config.api = ApiConfig {
        url: url.to_string(),
        ..ApiConfig::default()
    };
    config.timing.fade_ms = 20;
    config.timing.entrance_delay_ms = 5;
    config.timing.entrance_slide_ms = 10;
    config.timing.initial_fetch_delay_ms = 10;
    config
}

/// Deterministic selector over the embedded pool.
pub fn seeded_selector(seed: u64) -> FallbackSelector {
    let pool = FallbackPool::builtin().expect("embedded pool parses");
    FallbackSelector::with_rng(pool, StdRng::seed_from_u64(seed))
}

pub fn quote(content: &str, author: &str) -> Quote {
    Quote {
        content: content.to_string(),
        author: author.to_string(),
    }
}
