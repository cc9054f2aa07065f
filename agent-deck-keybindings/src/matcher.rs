//! Key event matching.
//!
//! Matches host [`KeyEvent`]s against [`ParsedShortcut`]s. Modifiers must
//! match exactly: a modifier the shortcut does not ask for must not be held.

use crate::host::KeyEvent;
use crate::parser::{ParsedShortcut, normalize_key};

/// Matcher for comparing a key event against shortcuts.
#[derive(Debug)]
pub struct ShortcutMatcher {
    /// `meta || ctrl` from the event
    cmd_ctrl: bool,
    shift: bool,
    alt: bool,
    /// Normalized key, empty for modifier-only presses
    key: String,
}

impl ShortcutMatcher {
    /// Create a matcher from a host key event.
    pub fn from_event(event: &KeyEvent) -> Self {
        let key = if is_modifier_key(&event.key) {
            String::new()
        } else {
            normalize_key(&event.key)
        };

        Self {
            cmd_ctrl: event.meta || event.ctrl,
            shift: event.shift,
            alt: event.alt,
            key,
        }
    }

    /// Whether the event carries a classifiable key.
    pub fn has_key(&self) -> bool {
        !self.key.is_empty()
    }

    /// Check if this event matches the given shortcut.
    pub fn matches(&self, shortcut: &ParsedShortcut) -> bool {
        // Check key first (quick rejection); an empty key never matches
        if !self.has_key() || self.key != shortcut.key {
            return false;
        }

        self.cmd_ctrl == shortcut.cmd_ctrl
            && self.shift == shortcut.shift
            && self.alt == shortcut.alt
    }
}

/// Keys that only ever act as modifiers.
pub fn is_modifier_key(key: &str) -> bool {
    matches!(
        key.to_ascii_lowercase().as_str(),
        "shift" | "control" | "ctrl" | "alt" | "altgraph" | "meta" | "os" | "super" | "hyper"
    )
}

/// Input-suppression rule shared by the dispatcher and hotkey buttons.
///
/// Inside a text-entry surface only Cmd/Ctrl combos fire, unless the binding
/// explicitly opted out of the check.
pub fn suppressed_by_focus(shortcut: &ParsedShortcut, bypass_input_check: bool, in_input: bool) -> bool {
    in_input && !shortcut.cmd_ctrl && !bypass_input_check
}
