//! agent-deck keyboard shortcut layer.
//!
//! Wires the shortcut registry, the global dispatcher and per-view
//! registrations together for the desktop client. The parsing, matching and
//! dispatch machinery lives in `agent-deck-keybindings`; the action table and
//! persisted overrides live in `agent-deck-config`.

pub mod context;
pub mod debug;
pub mod keybindings;
pub mod settings;
pub mod view_shortcuts;

pub use context::AppContext;
pub use view_shortcuts::{NAVIGATION_ACTIONS, ViewShortcuts, navigation_bindings};
