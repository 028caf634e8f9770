//! Scoring rules
//!
//! Loaded from a JSON file by the shell; any missing field keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{ENTRY_EXIT_PENALTY, MISS_PENALTY, STARTING_SCORE};

/// Game settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Score at the start of a game
    pub starting_score: i32,
    /// Deducted for each distinct wrong guess
    pub miss_penalty: i32,
    /// Deducted the first time a border point is used by a ray
    pub entry_exit_penalty: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            starting_score: STARTING_SCORE,
            miss_penalty: MISS_PENALTY,
            entry_exit_penalty: ENTRY_EXIT_PENALTY,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Ignoring malformed settings in {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read settings {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.starting_score, 25);
        assert_eq!(settings.miss_penalty, 5);
        assert_eq!(settings.entry_exit_penalty, 1);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "miss_penalty": 10 }"#).unwrap();
        assert_eq!(settings.miss_penalty, 10);
        assert_eq!(settings.starting_score, 25);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            starting_score: 40,
            miss_penalty: 4,
            entry_exit_penalty: 2,
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let settings = Settings::load(Path::new("/definitely/not/here/black-box.json"));
        assert_eq!(settings, Settings::default());
    }
}
