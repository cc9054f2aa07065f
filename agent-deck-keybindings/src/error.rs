//! Shortcut errors.

use agent_deck_config::{ConfigError, ShortcutAction};
use thiserror::Error;

/// Errors surfaced by the registry and the shortcut editor.
#[derive(Debug, Error)]
pub enum ShortcutError {
    #[error("Shortcut cannot be empty")]
    EmptyBinding,

    /// The proposed binding is already used by another action.
    #[error("Shortcut already used by \"{label}\"")]
    Conflict {
        action: ShortcutAction,
        label: &'static str,
    },

    #[error("No shortcut is being edited")]
    NotEditing,

    #[error(transparent)]
    Store(#[from] ConfigError),
}
