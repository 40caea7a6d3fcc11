//! # Configuration Module
//!
//! Data directory management and the optional settings file.
//!
//! ## Data Storage
//!
//! Favorites live in the platform-standard data directory:
//! - Linux: `~/.local/share/moodify/favorites.json`
//! - macOS: `~/Library/Application Support/moodify/favorites.json`
//! - Windows: `%APPDATA%\moodify\favorites.json`
//!
//! ## Settings
//!
//! Detection settings are read from `<config dir>/moodify/config.json`:
//!
//! ```json
//! { "preset": "lenient", "minimum_score": 3, "rules_file": "/path/to/rules.json" }
//! ```
//!
//! Every field is optional. A missing file means defaults.

use crate::classifier::{DetectionPreset, MoodClassifier};
use crate::rules::RuleTable;
use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Returns the moodify data directory, creating it if needed.
///
/// # Errors
///
/// Fails if the system data directory cannot be determined or the
/// `moodify` subdirectory cannot be created.
pub fn get_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| anyhow::anyhow!(
            "Could not determine system data directory. Please ensure your platform supports standard data directories."
        ))?;

    let moodify_dir = data_dir.join("moodify");
    fs::create_dir_all(&moodify_dir)
        .with_context(|| format!(
            "Failed to create Moodify data directory at {}. Please check file permissions.",
            moodify_dir.display()
        ))?;

    Ok(moodify_dir)
}

/// Path of the favorites file inside the data directory.
pub fn get_favorites_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join("favorites.json"))
}

/// Path of the settings file. The file itself may not exist.
pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine system config directory."))?;
    Ok(config_dir.join("moodify").join("config.json"))
}

/// User-tunable detection settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub preset: DetectionPreset,
    /// Overrides the preset's minimum score.
    pub minimum_score: Option<u32>,
    /// Custom keyword table replacing the preset's table.
    pub rules_file: Option<PathBuf>,
}

impl Settings {
    /// Reads settings from `path`; a missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Malformed settings file {}", path.display()))
    }

    /// Reads settings from the standard config location.
    pub fn load_default() -> Result<Self> {
        Self::load(&get_config_path()?)
    }

    /// Builds the classifier these settings describe.
    pub fn classifier(&self) -> Result<MoodClassifier> {
        let rules = match &self.rules_file {
            Some(path) => Arc::new(RuleTable::from_json_file(path)?),
            None => self.preset.rules(),
        };
        let minimum = self.minimum_score.unwrap_or_else(|| self.preset.minimum_score());
        Ok(MoodClassifier::new(rules, minimum))
    }
}
