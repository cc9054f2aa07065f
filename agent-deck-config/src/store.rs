//! Persistence interface for the shortcut table.
//!
//! Stores only hold *overrides*; an action without an override uses its
//! default from [`crate::defaults`]. Writing a value equal to the default
//! drops the override so the table never records "modified" defaults.

use crate::defaults;
use crate::error::ConfigError;
use crate::types::ShortcutAction;
use std::collections::BTreeMap;

/// Backing store for user shortcut overrides.
pub trait ShortcutStore: Send + Sync {
    /// User overrides currently held by the store.
    fn overrides(&self) -> BTreeMap<ShortcutAction, String>;

    /// Persist a new binding string for `action`.
    fn set_shortcut(&mut self, action: ShortcutAction, value: &str) -> Result<(), ConfigError>;

    /// Drop the override for `action`, or for every action when `None`.
    fn reset_shortcuts(&mut self, action: Option<ShortcutAction>) -> Result<(), ConfigError>;

    /// Effective table: defaults merged with overrides.
    fn shortcuts(&self) -> BTreeMap<ShortcutAction, String> {
        let mut table = defaults::shortcuts();
        table.extend(self.overrides());
        table
    }

    /// Effective binding for a single action.
    fn shortcut(&self, action: ShortcutAction) -> String {
        self.overrides()
            .remove(&action)
            .unwrap_or_else(|| defaults::shortcut(action).to_string())
    }
}

/// Apply a write to an override map, dropping values equal to the default.
pub(crate) fn apply_override(
    overrides: &mut BTreeMap<ShortcutAction, String>,
    action: ShortcutAction,
    value: &str,
) {
    if value == defaults::shortcut(action) {
        overrides.remove(&action);
    } else {
        overrides.insert(action, value.to_string());
    }
}

/// Apply a reset to an override map.
pub(crate) fn apply_reset(
    overrides: &mut BTreeMap<ShortcutAction, String>,
    action: Option<ShortcutAction>,
) {
    match action {
        Some(action) => {
            overrides.remove(&action);
        }
        None => overrides.clear(),
    }
}

/// In-memory store, used by tests and as the fallback when no config
/// directory is available.
#[derive(Debug, Default, Clone)]
pub struct MemoryShortcutStore {
    overrides: BTreeMap<ShortcutAction, String>,
}

impl MemoryShortcutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing overrides.
    pub fn with_overrides(overrides: BTreeMap<ShortcutAction, String>) -> Self {
        let mut store = Self::new();
        for (action, value) in overrides {
            apply_override(&mut store.overrides, action, &value);
        }
        store
    }
}

impl ShortcutStore for MemoryShortcutStore {
    fn overrides(&self) -> BTreeMap<ShortcutAction, String> {
        self.overrides.clone()
    }

    fn set_shortcut(&mut self, action: ShortcutAction, value: &str) -> Result<(), ConfigError> {
        apply_override(&mut self.overrides, action, value);
        Ok(())
    }

    fn reset_shortcuts(&mut self, action: Option<ShortcutAction>) -> Result<(), ConfigError> {
        apply_reset(&mut self.overrides, action);
        Ok(())
    }
}
