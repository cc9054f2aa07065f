//! Typed error variants for the agent-deck-config crate.
//!
//! Produced by the [`crate::ShortcutStore`] implementations when reading or
//! writing the persisted shortcut table.

use thiserror::Error;

/// Errors that can occur when loading or saving the shortcut table.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the shortcuts file.
    #[error("I/O error reading shortcuts: {0}")]
    Io(#[from] std::io::Error),

    /// The shortcuts file contained invalid YAML.
    #[error("YAML parse error in shortcuts: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A value failed semantic validation.
    #[error("Shortcut validation error: {0}")]
    Validation(String),
}
