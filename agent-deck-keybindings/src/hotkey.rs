//! Single-button hotkey binder.
//!
//! A self-contained keyboard binding owned by one control (typically a dialog
//! button). It does not go through the shared dispatcher or registry and is
//! only live while the button is active and has a hotkey configured.

use crate::dispatcher::ShortcutCallback;
use crate::host::{ElementId, HostSurface, KeyEvent, focus_is_input_surface};
use crate::matcher::{ShortcutMatcher, suppressed_by_focus};
use crate::parser::ParsedShortcut;
use crate::platform::{Platform, key_glyph};
use std::fmt;
use std::sync::Arc;

/// Hotkey for a single control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotkeyConfig {
    pub key: String,
    pub cmd_ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    /// Badge text overriding the generated one.
    pub label: Option<String>,
}

impl HotkeyConfig {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn cmd_ctrl(mut self) -> Self {
        self.cmd_ctrl = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn shortcut(&self) -> ParsedShortcut {
        ParsedShortcut::new(&self.key, self.cmd_ctrl, self.shift, self.alt)
    }

    /// Badge text: platform modifier glyphs followed by the key glyph.
    pub fn badge(&self, platform: Platform) -> String {
        if let Some(label) = &self.label {
            return label.clone();
        }

        let mut parts = Vec::with_capacity(4);
        if self.cmd_ctrl {
            parts.push(platform.cmd_ctrl_label(true).to_string());
        }
        if self.shift {
            parts.push(platform.shift_label(true).to_string());
        }
        if self.alt {
            parts.push(platform.alt_label(true).to_string());
        }
        parts.push(key_glyph(&self.key));
        parts.join(platform.separator(true))
    }
}

impl From<&str> for HotkeyConfig {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for HotkeyConfig {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

/// A control with an optional hotkey.
///
/// On a fireable key press exactly one of these runs, in priority order:
/// the trigger callback, the click handler, a synthesized click on the
/// control itself.
pub struct HotkeyButton {
    control: ElementId,
    hotkey: Option<HotkeyConfig>,
    active: bool,
    scope: Option<ElementId>,
    on_trigger: Option<ShortcutCallback>,
    on_click: Option<ShortcutCallback>,
}

impl fmt::Debug for HotkeyButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HotkeyButton")
            .field("control", &self.control)
            .field("hotkey", &self.hotkey)
            .field("active", &self.active)
            .field("scope", &self.scope)
            .finish()
    }
}

impl HotkeyButton {
    pub fn new(control: ElementId) -> Self {
        Self {
            control,
            hotkey: None,
            active: true,
            scope: None,
            on_trigger: None,
            on_click: None,
        }
    }

    /// Attach a hotkey, either a bare key (`"Enter"`) or a full config.
    pub fn hotkey(mut self, hotkey: impl Into<HotkeyConfig>) -> Self {
        self.hotkey = Some(hotkey.into());
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Only fire while `container` is visible.
    pub fn scope(mut self, container: ElementId) -> Self {
        self.scope = Some(container);
        self
    }

    pub fn on_trigger(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_trigger = Some(Arc::new(callback));
        self
    }

    pub fn on_click(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_click = Some(Arc::new(callback));
        self
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn set_hotkey(&mut self, hotkey: Option<HotkeyConfig>) {
        self.hotkey = hotkey;
    }

    pub fn config(&self) -> Option<&HotkeyConfig> {
        self.hotkey.as_ref()
    }

    /// Whether this button's key listener is attached.
    pub fn is_listening(&self) -> bool {
        self.active && self.hotkey.is_some()
    }

    /// Badge text for the button, if it has a hotkey.
    pub fn badge(&self, platform: Platform) -> Option<String> {
        self.hotkey.as_ref().map(|hotkey| hotkey.badge(platform))
    }

    /// Handle a key-down event. Returns true if the button fired.
    pub fn handle_key_down(&self, event: &mut KeyEvent, host: &dyn HostSurface) -> bool {
        if !self.active {
            return false;
        }
        let Some(hotkey) = &self.hotkey else {
            return false;
        };

        let shortcut = hotkey.shortcut();
        if !ShortcutMatcher::from_event(event).matches(&shortcut) {
            return false;
        }
        if suppressed_by_focus(&shortcut, false, focus_is_input_surface(host)) {
            return false;
        }
        if let Some(scope) = self.scope
            && !host.is_visible(scope)
        {
            log::trace!("Hotkey '{}' ignored, scope {:?} hidden", hotkey.key, scope);
            return false;
        }

        event.prevent_default();
        event.stop_propagation();

        if let Some(trigger) = &self.on_trigger {
            trigger();
        } else if let Some(click) = &self.on_click {
            click();
        } else {
            host.click(self.control);
        }
        true
    }
}
