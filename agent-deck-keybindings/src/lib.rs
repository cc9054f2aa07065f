//! Keyboard shortcut system for agent-deck.
//!
//! Features:
//! - Binding string parsing and platform-aware formatting (`Cmd+Shift+N`, `⌘⇧N`)
//! - A registry of named action bindings with defaults, overrides and reset
//! - Edit-time conflict detection and the shortcut editor state
//! - A global dispatcher matching key events against bindings contributed by
//!   many mounted views, with exact-modifier matching and input suppression
//! - A self-contained single-button hotkey binder

pub mod conflict;
mod dispatcher;
mod editor;
mod error;
pub mod host;
mod hotkey;
mod matcher;
pub mod parser;
pub mod platform;
mod registry;

pub use conflict::{check_conflict, find_conflicts};
pub use dispatcher::{ActiveBinding, ListenerHook, Registration, ShortcutCallback, ShortcutDispatcher};
pub use editor::ShortcutEditor;
pub use error::ShortcutError;
pub use host::{ElementId, ElementInfo, HostSurface, KeyEvent};
pub use hotkey::{HotkeyButton, HotkeyConfig};
pub use matcher::{ShortcutMatcher, is_modifier_key};
pub use parser::{
    ParsedShortcut, build_shortcut_string, canonicalize, format_shortcut, parse_shortcut,
};
pub use platform::Platform;
pub use registry::ShortcutRegistry;

// Action table and store types, re-exported for consumers of this crate
pub use agent_deck_config::{ShortcutAction, ShortcutCategory, ShortcutStore};
