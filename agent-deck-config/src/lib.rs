//! Shortcut configuration for agent-deck.
//!
//! This crate owns the data side of the keyboard shortcut system:
//!
//! - The closed [`ShortcutAction`] enumeration with display labels
//! - The hard-coded default binding table
//! - The [`ShortcutStore`] persistence interface plus in-memory and YAML-file stores
//! - Typed [`ConfigError`] variants for store I/O

pub mod defaults;
pub mod error;
pub mod persistence;
pub mod store;
mod types;

pub use error::ConfigError;
pub use persistence::YamlShortcutStore;
pub use store::{MemoryShortcutStore, ShortcutStore};
pub use types::{ShortcutAction, ShortcutCategory};
