//! Configuration types.

mod shortcut;

pub use shortcut::{ShortcutAction, ShortcutCategory};
