// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! banner preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_whisper::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Leave scroll views untouched while a banner is visible
//! config.modify_inset = Some(false);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.modify_inset, Some(false));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::diagnostics::BufferCapacity;
use crate::domain::timing::PopUpDelay;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedWhisper";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub modify_inset: Option<bool>,
    #[serde(default)]
    pub pop_up_delay_ms: Option<u64>,
    #[serde(default)]
    pub movement_ms: Option<u64>,
    #[serde(default)]
    pub settle_ms: Option<u64>,
    #[serde(default)]
    pub diagnostics_capacity: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            modify_inset: Some(DEFAULT_MODIFY_INSET),
            pop_up_delay_ms: Some(DEFAULT_POP_UP_DELAY_MS),
            movement_ms: Some(DEFAULT_MOVEMENT_MS),
            settle_ms: Some(DEFAULT_SETTLE_MS),
            diagnostics_capacity: Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
        }
    }
}

impl Config {
    #[must_use]
    pub fn modify_inset(&self) -> bool {
        self.modify_inset.unwrap_or(DEFAULT_MODIFY_INSET)
    }

    #[must_use]
    pub fn pop_up_delay(&self) -> PopUpDelay {
        self.pop_up_delay_ms
            .map(PopUpDelay::new)
            .unwrap_or_default()
    }

    /// Duration of the expand transition, capped at [`MAX_TRANSITION_MS`].
    #[must_use]
    pub fn movement(&self) -> Duration {
        transition_duration(self.movement_ms, DEFAULT_MOVEMENT_MS)
    }

    /// Delay between a collapse and the replacement banner, capped at
    /// [`MAX_TRANSITION_MS`].
    #[must_use]
    pub fn settle(&self) -> Duration {
        transition_duration(self.settle_ms, DEFAULT_SETTLE_MS)
    }

    #[must_use]
    pub fn diagnostics_capacity(&self) -> BufferCapacity {
        self.diagnostics_capacity
            .map(BufferCapacity::new)
            .unwrap_or_default()
    }
}

fn transition_duration(value: Option<u64>, default: u64) -> Duration {
    Duration::from_millis(value.unwrap_or(default).min(MAX_TRANSITION_MS))
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads settings from `path`, falling back to defaults when the file is not
/// valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
