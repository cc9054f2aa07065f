//! Host UI surface abstraction.
//!
//! The dispatcher and hotkey binder never touch the UI toolkit directly. They
//! receive [`KeyEvent`] values and query focus, visibility and clicks through
//! a [`HostSurface`] implementation supplied by the embedding application.

/// A keyboard-down event as delivered by the host.
///
/// `key` follows the DOM `KeyboardEvent.key` convention: `"a"`, `"N"`,
/// `"Enter"`, `"ArrowUp"`, `" "`, `"Shift"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: String,
    pub meta: bool,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// Suppress the host's default handling of this event.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Stop the event from reaching further listeners.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Opaque handle to a host element (a button, a dialog container).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

/// Description of the currently focused element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementInfo {
    /// Tag name, e.g. `"input"` or `"div"`.
    pub tag: String,
    /// Value of the `contenteditable` attribute, if present.
    pub content_editable: Option<String>,
    /// Accessibility role, if present.
    pub role: Option<String>,
}

impl ElementInfo {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_content_editable(mut self, value: impl Into<String>) -> Self {
        self.content_editable = Some(value.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Whether this element primarily exists to receive typed text.
    pub fn is_input_surface(&self) -> bool {
        let tag = self.tag.to_ascii_lowercase();
        if matches!(tag.as_str(), "input" | "textarea" | "select") {
            return true;
        }
        if self
            .content_editable
            .as_deref()
            .is_some_and(|value| value.eq_ignore_ascii_case("true"))
        {
            return true;
        }
        self.role.as_deref().is_some_and(|role| {
            let role = role.to_ascii_lowercase();
            matches!(role.as_str(), "textbox" | "searchbox" | "combobox")
        })
    }
}

/// Primitives the host UI framework provides.
pub trait HostSurface {
    /// The element that currently has keyboard focus, if any.
    fn focused_element(&self) -> Option<ElementInfo>;

    /// Whether `element` currently has a laid-out box (not `display: none`).
    fn is_visible(&self, element: ElementId) -> bool;

    /// Synthesize a click on `element`.
    fn click(&self, element: ElementId);
}

/// Whether focus currently sits in a text-entry surface.
pub fn focus_is_input_surface(host: &dyn HostSurface) -> bool {
    host.focused_element()
        .is_some_and(|element| element.is_input_surface())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_surfaces() {
        assert!(ElementInfo::new("input").is_input_surface());
        assert!(ElementInfo::new("TEXTAREA").is_input_surface());
        assert!(ElementInfo::new("select").is_input_surface());
        assert!(
            ElementInfo::new("div")
                .with_content_editable("true")
                .is_input_surface()
        );
        assert!(ElementInfo::new("div").with_role("searchbox").is_input_surface());
        assert!(ElementInfo::new("div").with_role("combobox").is_input_surface());
    }

    #[test]
    fn non_input_surfaces() {
        assert!(!ElementInfo::new("button").is_input_surface());
        assert!(
            !ElementInfo::new("div")
                .with_content_editable("false")
                .is_input_surface()
        );
        assert!(!ElementInfo::new("div").with_role("dialog").is_input_surface());
    }

    #[test]
    fn event_flags() {
        let mut event = KeyEvent::new("s").with_ctrl();
        assert!(!event.default_prevented());
        event.prevent_default();
        event.stop_propagation();
        assert!(event.default_prevented());
        assert!(event.propagation_stopped());
    }
}
