//! Local persistence: key-value blob store and TOML planner config.

mod config;
pub mod kv;

pub use config::PlannerConfig;
pub use kv::KvStore;

use std::path::PathBuf;

/// Returns `~/.config/focos[-dev]/` based on FOCOS_ENV.
///
/// Set FOCOS_ENV=dev to use a separate development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("FOCOS_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("focos-dev")
    } else {
        base_dir.join("focos")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
