//! YAML-file shortcut store.
//!
//! Covers:
//! - XDG-style path resolution (`~/.config/agent-deck/shortcuts.yaml`)
//! - `open` (missing file means "all defaults"; unknown action ids are skipped)
//! - Atomic save on every write (temp file + rename)

use crate::error::ConfigError;
use crate::store::{ShortcutStore, apply_override, apply_reset};
use crate::types::ShortcutAction;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk layout of the shortcuts file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ShortcutsFile {
    /// Overrides keyed by action id. Kept as plain strings so that ids from a
    /// newer or older build do not fail the whole file.
    #[serde(default)]
    shortcuts: BTreeMap<String, String>,
}

/// Shortcut store persisted as a YAML file.
#[derive(Debug)]
pub struct YamlShortcutStore {
    path: PathBuf,
    overrides: BTreeMap<ShortcutAction, String>,
}

impl YamlShortcutStore {
    /// Directory holding agent-deck configuration files.
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("agent-deck")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("agent-deck")
            } else {
                PathBuf::from(".")
            }
        }
    }

    /// Default location of the shortcuts file.
    pub fn default_path() -> PathBuf {
        Self::config_dir().join("shortcuts.yaml")
    }

    /// Open the store at the default location.
    pub fn open_default() -> Result<Self, ConfigError> {
        Self::open(Self::default_path())
    }

    /// Open the store at `path`, loading any existing overrides.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let overrides = if path.exists() {
            log::info!("Loading shortcuts from {:?}", path);
            let contents = fs::read_to_string(&path)?;
            let file: ShortcutsFile = if contents.trim().is_empty() {
                ShortcutsFile::default()
            } else {
                serde_yaml_ng::from_str(&contents)?
            };
            Self::decode(file)
        } else {
            log::info!("Shortcuts file not found at {:?}, using defaults", path);
            BTreeMap::new()
        };

        Ok(Self { path, overrides })
    }

    /// Path this store reads from and writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn decode(file: ShortcutsFile) -> BTreeMap<ShortcutAction, String> {
        let mut overrides = BTreeMap::new();
        for (id, value) in file.shortcuts {
            let Some(action) = ShortcutAction::from_id(&id) else {
                log::warn!("Skipping shortcut for unknown action '{}'", id);
                continue;
            };
            if value.trim().is_empty() {
                log::warn!("Skipping empty shortcut for action '{}'", id);
                continue;
            }
            apply_override(&mut overrides, action, &value);
        }
        overrides
    }

    /// Write `overrides` to disk. `self.overrides` is left untouched; callers
    /// commit the new table only once this succeeds.
    fn save(&self, overrides: &BTreeMap<ShortcutAction, String>) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let file = ShortcutsFile {
            shortcuts: overrides
                .iter()
                .map(|(action, value)| (action.id().to_string(), value.clone()))
                .collect(),
        };
        let yaml = serde_yaml_ng::to_string(&file)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = self.path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml)?;
        if let Err(err) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(err.into());
        }

        log::info!(
            "Saved {} shortcut override(s) to {:?}",
            overrides.len(),
            self.path
        );
        Ok(())
    }
}

impl ShortcutStore for YamlShortcutStore {
    fn overrides(&self) -> BTreeMap<ShortcutAction, String> {
        self.overrides.clone()
    }

    fn set_shortcut(&mut self, action: ShortcutAction, value: &str) -> Result<(), ConfigError> {
        let mut staged = self.overrides.clone();
        apply_override(&mut staged, action, value);
        self.save(&staged)?;
        self.overrides = staged;
        Ok(())
    }

    fn reset_shortcuts(&mut self, action: Option<ShortcutAction>) -> Result<(), ConfigError> {
        let mut staged = self.overrides.clone();
        apply_reset(&mut staged, action);
        self.save(&staged)?;
        self.overrides = staged;
        Ok(())
    }
}
