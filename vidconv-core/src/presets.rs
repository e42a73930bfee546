//! Named preset bundles loaded from a JSON file.
//!
//! A preset is a partial set of conversion options; anything it leaves out
//! falls through to the CLI value or the built-in defaults during option
//! resolution. Loading never aborts the run: a missing or malformed preset
//! file degrades to an empty store.

use log::{error, warn};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

/// Default preset file name, looked up in the working directory.
pub const DEFAULT_PRESET_FILE: &str = "presets.json";

/// A partial bundle of conversion options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Preset {
    #[serde(default)]
    pub resolution: Option<String>,
    #[serde(default)]
    pub video_codec: Option<String>,
    #[serde(default)]
    pub audio_codec: Option<String>,
    #[serde(default)]
    pub bitrate: Option<String>,
}

/// Read-only mapping of preset name to bundle, loaded once per run.
#[derive(Debug, Default)]
pub struct PresetStore {
    presets: HashMap<String, Preset>,
}

impl PresetStore {
    /// Loads presets from a JSON file.
    ///
    /// A missing file is only a warning and any other failure is reported;
    /// in every such case an empty store is returned and the run continues.
    pub fn load(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Preset file '{}' not found", path.display());
                return Self::default();
            }
            Err(e) => {
                error!("Failed to read preset file '{}': {}", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str::<HashMap<String, Preset>>(&contents) {
            Ok(presets) => Self { presets },
            Err(e) => {
                error!(
                    "Could not decode preset file '{}' (expected a JSON object of presets): {}",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Looks up a preset by name.
    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets.get(name)
    }

    /// Returns the defined preset names, sorted for stable error listings.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.presets.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl From<HashMap<String, Preset>> for PresetStore {
    fn from(presets: HashMap<String, Preset>) -> Self {
        Self { presets }
    }
}
