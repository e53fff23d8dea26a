//! TOML-based planner configuration.
//!
//! Stores the day window the gap analyzer and slot grid work against,
//! plus the minimum gap worth surfacing. Stored at
//! `~/.config/focos/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::StorageError;
use crate::time;

/// Planner configuration.
///
/// Serialized to/from TOML at `data_dir()/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Leading cutoff for free-gap detection, `H:MM AM|PM`.
    #[serde(default = "default_day_start")]
    pub day_start: String,
    /// Trailing cutoff for free-gap detection, `H:MM AM|PM`.
    #[serde(default = "default_day_end")]
    pub day_end: String,
    /// Smallest free interval worth reporting, in minutes.
    #[serde(default = "default_min_gap_minutes")]
    pub min_gap_minutes: u16,
}

fn default_day_start() -> String {
    "8:00 AM".to_string()
}
fn default_day_end() -> String {
    "10:00 PM".to_string()
}
fn default_min_gap_minutes() -> u16 {
    30
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            day_start: default_day_start(),
            day_end: default_day_end(),
            min_gap_minutes: default_min_gap_minutes(),
        }
    }
}

impl PlannerConfig {
    fn path() -> std::io::Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, StorageError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: PlannerConfig = toml::from_str(&content)?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), StorageError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(Self::path()?, content)?;
        Ok(())
    }

    /// Load from disk, returning default on error. Never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn day_start_minutes(&self) -> u16 {
        time::parse_label(&self.day_start)
    }

    pub fn day_end_minutes(&self) -> u16 {
        time::parse_label(&self.day_end)
    }
}
