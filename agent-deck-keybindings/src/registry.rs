//! Shortcut registry: the authoritative action → binding string table.

use crate::error::ShortcutError;
use crate::parser::{ParsedShortcut, parse_shortcut};
use agent_deck_config::{MemoryShortcutStore, ShortcutAction, ShortcutStore, defaults};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Registry of named shortcut bindings backed by a [`ShortcutStore`].
///
/// Writes take effect immediately for anyone who re-reads the registry. There
/// is no push to already-mounted listeners: views compare [`revision`] and
/// recompute their active bindings when it moves.
///
/// [`revision`]: ShortcutRegistry::revision
pub struct ShortcutRegistry {
    store: RwLock<Box<dyn ShortcutStore>>,
    revision: AtomicU64,
}

impl std::fmt::Debug for ShortcutRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShortcutRegistry")
            .field("overrides", &self.store.read().overrides())
            .field("revision", &self.revision())
            .finish()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl ShortcutRegistry {
    /// Create a registry over the given store.
    pub fn new(store: impl ShortcutStore + 'static) -> Self {
        let store: Box<dyn ShortcutStore> = Box::new(store);
        log::info!(
            "Shortcut registry initialized with {} override(s)",
            store.overrides().len()
        );
        Self {
            store: RwLock::new(store),
            revision: AtomicU64::new(0),
        }
    }

    /// Registry backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(MemoryShortcutStore::new())
    }

    /// Current binding string for `action` (the default if never overridden).
    pub fn get(&self, action: ShortcutAction) -> String {
        self.store.read().shortcut(action)
    }

    /// Current binding for `action`, parsed.
    pub fn parsed(&self, action: ShortcutAction) -> ParsedShortcut {
        parse_shortcut(&self.get(action))
    }

    /// Every action with its current binding string.
    pub fn snapshot(&self) -> BTreeMap<ShortcutAction, String> {
        self.store.read().shortcuts()
    }

    /// Default binding string for `action`.
    pub fn default_for(action: ShortcutAction) -> &'static str {
        defaults::shortcut(action)
    }

    /// Whether `action` currently differs from its default.
    pub fn is_modified(&self, action: ShortcutAction) -> bool {
        self.get(action) != defaults::shortcut(action)
    }

    /// Assign a new binding string to `action`.
    ///
    /// Only emptiness is checked here; conflict detection belongs to the
    /// editing flow (see [`crate::conflict`]).
    pub fn set(&self, action: ShortcutAction, binding: &str) -> Result<(), ShortcutError> {
        if binding.trim().is_empty() {
            return Err(ShortcutError::EmptyBinding);
        }

        self.store.write().set_shortcut(action, binding)?;
        self.bump();
        log::info!("Shortcut for '{}' set to '{}'", action, binding);
        Ok(())
    }

    /// Restore the default binding for one action.
    pub fn reset_one(&self, action: ShortcutAction) -> Result<(), ShortcutError> {
        self.reset(Some(action))
    }

    /// Restore every default binding.
    pub fn reset_all(&self) -> Result<(), ShortcutError> {
        self.reset(None)
    }

    /// Restore defaults for `action`, or for all actions when `None`.
    pub fn reset(&self, action: Option<ShortcutAction>) -> Result<(), ShortcutError> {
        self.store.write().reset_shortcuts(action)?;
        self.bump();
        match action {
            Some(action) => log::info!("Shortcut for '{}' reset to default", action),
            None => log::info!("All shortcuts reset to defaults"),
        }
        Ok(())
    }

    /// Monotonic change counter, bumped on every successful write.
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::Acquire)
    }

    fn bump(&self) {
        self.revision.fetch_add(1, Ordering::AcqRel);
    }
}
