//! State behind the "edit shortcut" control in the settings panel.
//!
//! One action is edited at a time. The draft can be typed or recorded from a
//! key press; it is re-validated after every change and saving stays
//! disabled while it is empty or conflicts with another action.

use crate::conflict::check_conflict;
use crate::error::ShortcutError;
use crate::host::KeyEvent;
use crate::matcher::is_modifier_key;
use crate::parser::build_shortcut_string;
use crate::registry::ShortcutRegistry;
use agent_deck_config::ShortcutAction;

#[derive(Debug, Default)]
pub struct ShortcutEditor {
    editing: Option<ShortcutAction>,
    draft: String,
    /// Validation message for the current draft
    error: Option<String>,
    /// Action the draft collides with, if any
    conflict: Option<ShortcutAction>,
}

impl ShortcutEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start editing `action`, seeding the draft with its current binding.
    pub fn begin(&mut self, registry: &ShortcutRegistry, action: ShortcutAction) {
        self.editing = Some(action);
        self.draft = registry.get(action);
        self.validate(registry);
    }

    pub fn editing(&self) -> Option<ShortcutAction> {
        self.editing
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replace the draft with typed text.
    pub fn set_draft(&mut self, registry: &ShortcutRegistry, text: impl Into<String>) {
        if self.editing.is_none() {
            return;
        }
        self.draft = text.into();
        self.validate(registry);
    }

    /// Record the draft from a key press.
    ///
    /// Modifier-only presses are ignored so the user can build up a combo.
    /// Returns true if the draft changed.
    pub fn record(&mut self, registry: &ShortcutRegistry, event: &KeyEvent) -> bool {
        if self.editing.is_none() || event.key.is_empty() || is_modifier_key(&event.key) {
            return false;
        }

        self.draft =
            build_shortcut_string(&event.key, event.meta || event.ctrl, event.shift, event.alt);
        log::debug!("Recorded shortcut draft '{}'", self.draft);
        self.validate(registry);
        true
    }

    /// Validation message for the current draft.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Action the current draft conflicts with.
    pub fn conflict(&self) -> Option<ShortcutAction> {
        self.conflict
    }

    /// Whether the save button is enabled.
    pub fn can_save(&self) -> bool {
        self.editing.is_some() && self.error.is_none()
    }

    /// Persist the draft. On success the editor closes and returns the action
    /// that was updated; on failure the editor stays open with the error set.
    pub fn save(&mut self, registry: &ShortcutRegistry) -> Result<ShortcutAction, ShortcutError> {
        let action = self.editing.ok_or(ShortcutError::NotEditing)?;

        // Bindings may have moved since the draft was last validated
        self.validate(registry);
        if self.draft.trim().is_empty() {
            return Err(ShortcutError::EmptyBinding);
        }
        check_conflict(registry, action, &self.draft)?;

        registry.set(action, &self.draft)?;
        self.cancel();
        Ok(action)
    }

    /// Discard the draft and close the editor.
    pub fn cancel(&mut self) {
        self.editing = None;
        self.draft.clear();
        self.error = None;
        self.conflict = None;
    }

    fn validate(&mut self, registry: &ShortcutRegistry) {
        self.conflict = None;
        self.error = None;

        let Some(action) = self.editing else {
            return;
        };

        if self.draft.trim().is_empty() {
            self.error = Some(ShortcutError::EmptyBinding.to_string());
            return;
        }

        if let Err(err) = check_conflict(registry, action, &self.draft) {
            if let ShortcutError::Conflict { action: other, .. } = &err {
                self.conflict = Some(*other);
            }
            self.error = Some(err.to_string());
        }
    }
}
