//! Keybinding system re-exports from the `agent-deck-keybindings` crate.

pub use agent_deck_keybindings::{
    ActiveBinding, ElementId, ElementInfo, HostSurface, HotkeyButton, HotkeyConfig, KeyEvent,
    ListenerHook, Platform, Registration, ShortcutAction, ShortcutCategory, ShortcutDispatcher,
    ShortcutEditor, ShortcutError, ShortcutRegistry, format_shortcut, parse_shortcut,
};

pub use agent_deck_keybindings::parser;
