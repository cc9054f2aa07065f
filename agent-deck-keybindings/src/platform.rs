//! Platform-specific shortcut presentation.
//!
//! Contains:
//! - Host platform detection (Mac vs everything else)
//! - Named key alias table (string → `NamedKey`)
//! - Modifier and key glyph tables used for display and hotkey badges

/// Host platform, used only to pick display glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    Mac,
    /// Windows, Linux and anything that could not be detected.
    #[default]
    Other,
}

impl Platform {
    /// Platform of the running binary.
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            Platform::Mac
        } else {
            Platform::Other
        }
    }

    /// Detect the platform from a webview user-agent or `navigator.platform`
    /// string. Anything unrecognised is treated as non-Mac.
    pub fn from_user_agent(user_agent: &str) -> Self {
        if user_agent.to_ascii_lowercase().contains("mac") {
            Platform::Mac
        } else {
            Platform::Other
        }
    }

    pub fn is_mac(self) -> bool {
        self == Platform::Mac
    }

    /// Label for the Cmd/Ctrl modifier.
    pub fn cmd_ctrl_label(self, for_display: bool) -> &'static str {
        if for_display && self.is_mac() {
            "⌘"
        } else {
            "Ctrl"
        }
    }

    pub fn shift_label(self, for_display: bool) -> &'static str {
        if for_display && self.is_mac() {
            "⇧"
        } else {
            "Shift"
        }
    }

    pub fn alt_label(self, for_display: bool) -> &'static str {
        if for_display && self.is_mac() {
            "⌥"
        } else {
            "Alt"
        }
    }

    /// Separator between modifier labels and the key.
    pub fn separator(self, for_display: bool) -> &'static str {
        if for_display && self.is_mac() { "" } else { "+" }
    }
}

/// Keys with a name instead of a single printable character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    Enter,
    Escape,
    Space,
    Tab,
    Backspace,
    Delete,
    Insert,
    Home,
    End,
    PageUp,
    PageDown,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

impl NamedKey {
    /// Canonical token used in persisted binding strings.
    pub fn token(self) -> &'static str {
        match self {
            NamedKey::Enter => "Enter",
            NamedKey::Escape => "Escape",
            NamedKey::Space => "Space",
            NamedKey::Tab => "Tab",
            NamedKey::Backspace => "Backspace",
            NamedKey::Delete => "Delete",
            NamedKey::Insert => "Insert",
            NamedKey::Home => "Home",
            NamedKey::End => "End",
            NamedKey::PageUp => "PageUp",
            NamedKey::PageDown => "PageDown",
            NamedKey::ArrowUp => "ArrowUp",
            NamedKey::ArrowDown => "ArrowDown",
            NamedKey::ArrowLeft => "ArrowLeft",
            NamedKey::ArrowRight => "ArrowRight",
        }
    }

    /// Normalized key as reported by host key events (lower-cased `key`).
    pub fn event_key(self) -> &'static str {
        match self {
            NamedKey::Space => " ",
            NamedKey::Enter => "enter",
            NamedKey::Escape => "escape",
            NamedKey::Tab => "tab",
            NamedKey::Backspace => "backspace",
            NamedKey::Delete => "delete",
            NamedKey::Insert => "insert",
            NamedKey::Home => "home",
            NamedKey::End => "end",
            NamedKey::PageUp => "pageup",
            NamedKey::PageDown => "pagedown",
            NamedKey::ArrowUp => "arrowup",
            NamedKey::ArrowDown => "arrowdown",
            NamedKey::ArrowLeft => "arrowleft",
            NamedKey::ArrowRight => "arrowright",
        }
    }

    /// Glyph shown on hotkey badges.
    pub fn glyph(self) -> &'static str {
        match self {
            NamedKey::Enter => "↵",
            NamedKey::Escape => "Esc",
            NamedKey::ArrowUp => "↑",
            NamedKey::ArrowDown => "↓",
            NamedKey::ArrowLeft => "←",
            NamedKey::ArrowRight => "→",
            NamedKey::Backspace => "⌫",
            NamedKey::Delete => "⌦",
            NamedKey::Tab => "⇥",
            NamedKey::Space => "Space",
            other => other.token(),
        }
    }
}

/// Parse a named key string into a [`NamedKey`].
///
/// Accepts human-readable aliases such as `"Return"`, `"Esc"`, `"PgUp"` and
/// the short arrow names. A literal `" "` is the space bar. Matching is
/// case-insensitive. Returns `None` for unrecognised strings.
pub fn parse_named_key(s: &str) -> Option<NamedKey> {
    if s == " " {
        return Some(NamedKey::Space);
    }
    match s.trim().to_lowercase().as_str() {
        "enter" | "return" => Some(NamedKey::Enter),
        "escape" | "esc" => Some(NamedKey::Escape),
        "space" | "spacebar" => Some(NamedKey::Space),
        "tab" => Some(NamedKey::Tab),
        "backspace" => Some(NamedKey::Backspace),
        "delete" | "del" => Some(NamedKey::Delete),
        "insert" | "ins" => Some(NamedKey::Insert),
        "home" => Some(NamedKey::Home),
        "end" => Some(NamedKey::End),
        "pageup" | "pgup" => Some(NamedKey::PageUp),
        "pagedown" | "pgdn" => Some(NamedKey::PageDown),

        // Arrow keys
        "up" | "arrowup" => Some(NamedKey::ArrowUp),
        "down" | "arrowdown" => Some(NamedKey::ArrowDown),
        "left" | "arrowleft" => Some(NamedKey::ArrowLeft),
        "right" | "arrowright" => Some(NamedKey::ArrowRight),

        _ => None,
    }
}

/// Badge glyph for a raw key string.
///
/// Named keys use the glyph table, single characters are upper-cased and
/// anything else is shown verbatim.
pub fn key_glyph(key: &str) -> String {
    if let Some(named) = parse_named_key(key) {
        return named.glyph().to_string();
    }
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => upper_char(c).unwrap_or(c).to_string(),
        _ => key.to_string(),
    }
}

/// Upper-case form of `c`, only when it is a single character that
/// lower-cases back to `c` (`ß` would otherwise become `SS`).
pub(crate) fn upper_char(c: char) -> Option<char> {
    let mut upper = c.to_uppercase();
    let (Some(u), None) = (upper.next(), upper.next()) else {
        return None;
    };
    let mut lower = u.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) if l == c => Some(u),
        _ => None,
    }
}
