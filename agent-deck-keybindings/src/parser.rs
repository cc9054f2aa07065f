//! Binding string parser and formatter.
//!
//! Parses strings like "Cmd+Shift+N" into [`ParsedShortcut`] values and
//! renders them back, either in the canonical persisted form
//! (`Cmd+Shift+Alt+Key`) or for display with platform glyphs.
//!
//! Parsing never fails: unrecognised tokens are treated as the key (the last
//! non-modifier token wins) and an empty key simply never matches.

use crate::platform::{Platform, parse_named_key, upper_char};
use std::fmt;

/// Decoded form of a binding string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ParsedShortcut {
    /// Normalized key: lower-cased, named-key aliases collapsed, `" "` for space.
    pub key: String,
    /// Cmd on macOS, Ctrl elsewhere.
    pub cmd_ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl ParsedShortcut {
    /// Build from a key and explicit modifier flags.
    pub fn new(key: &str, cmd_ctrl: bool, shift: bool, alt: bool) -> Self {
        Self {
            key: normalize_key(key),
            cmd_ctrl,
            shift,
            alt,
        }
    }

    /// Whether a key was specified at all.
    pub fn has_key(&self) -> bool {
        !self.key.is_empty()
    }

    pub fn has_modifiers(&self) -> bool {
        self.cmd_ctrl || self.shift || self.alt
    }
}

impl fmt::Display for ParsedShortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&canonicalize(self))
    }
}

/// Normalize a key token or a host event key for comparison.
pub fn normalize_key(key: &str) -> String {
    if let Some(named) = parse_named_key(key) {
        return named.event_key().to_string();
    }
    let trimmed = key.trim();
    if trimmed.eq_ignore_ascii_case("plus") {
        return "+".to_string();
    }
    trimmed.to_lowercase()
}

/// Token for a normalized key in the canonical persisted form.
fn key_token(key: &str) -> String {
    if let Some(named) = parse_named_key(key) {
        return named.token().to_string();
    }
    if key == "+" {
        return "Plus".to_string();
    }
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => {
            let mut token = String::with_capacity(key.len());
            token.push(upper_char(first).unwrap_or(first));
            token.extend(chars);
            token
        }
        None => String::new(),
    }
}

/// Parse a binding string into a [`ParsedShortcut`].
///
/// Modifiers (case-insensitive):
/// - `Cmd`, `Ctrl`, `Command`, `Control`, `Meta`, `CmdOrCtrl` → cmd_ctrl
/// - `Shift` → shift
/// - `Alt`, `Opt`, `Option` → alt
///
/// Any other token is the key; if several appear, the last one wins. A
/// trailing `++` (or a bare `+`) binds the plus key.
pub fn parse_shortcut(s: &str) -> ParsedShortcut {
    let (body, plus_key) = if s.trim() == "+" {
        ("", true)
    } else if let Some(rest) = s.trim_end().strip_suffix("++") {
        (rest, true)
    } else {
        (s, false)
    };

    let mut parsed = ParsedShortcut::default();
    for token in body.split('+') {
        match token.trim().to_lowercase().as_str() {
            "cmd" | "ctrl" | "command" | "control" | "meta" | "cmdorctrl" => {
                parsed.cmd_ctrl = true
            }
            "shift" => parsed.shift = true,
            "alt" | "opt" | "option" => parsed.alt = true,
            _ => {
                let key = normalize_key(token);
                if !key.is_empty() {
                    parsed.key = key;
                }
            }
        }
    }

    if plus_key {
        parsed.key = "+".to_string();
    }
    parsed
}

/// Build the canonical binding string for a key plus modifier flags.
///
/// This is what the shortcut editor stores, e.g. `"Cmd+Shift+N"` or
/// `"Alt+ArrowUp"`.
pub fn build_shortcut_string(key: &str, cmd_ctrl: bool, shift: bool, alt: bool) -> String {
    canonicalize(&ParsedShortcut::new(key, cmd_ctrl, shift, alt))
}

/// Canonical persisted form of a parsed shortcut.
pub fn canonicalize(shortcut: &ParsedShortcut) -> String {
    let mut parts = Vec::with_capacity(4);
    if shortcut.cmd_ctrl {
        parts.push("Cmd".to_string());
    }
    if shortcut.shift {
        parts.push("Shift".to_string());
    }
    if shortcut.alt {
        parts.push("Alt".to_string());
    }
    if shortcut.has_key() {
        parts.push(key_token(&shortcut.key));
    }
    parts.join("+")
}

/// Render a binding string for humans.
///
/// With `for_display` on a Mac host the modifiers become `⌘`, `⇧` and `⌥`
/// glyphs joined directly to the key (`⌘⇧N`); otherwise ASCII labels joined
/// by `+` (`Ctrl+Shift+N`).
pub fn format_shortcut(binding: &str, for_display: bool, platform: Platform) -> String {
    let parsed = parse_shortcut(binding);

    let mut parts = Vec::with_capacity(4);
    if parsed.cmd_ctrl {
        parts.push(platform.cmd_ctrl_label(for_display).to_string());
    }
    if parsed.shift {
        parts.push(platform.shift_label(for_display).to_string());
    }
    if parsed.alt {
        parts.push(platform.alt_label(for_display).to_string());
    }
    if parsed.has_key() {
        parts.push(display_key(&parsed.key));
    }
    parts.join(platform.separator(for_display))
}

/// Display text for a normalized key.
fn display_key(key: &str) -> String {
    if key == "+" {
        "+".to_string()
    } else {
        key_token(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_key() {
        let parsed = parse_shortcut("A");
        assert_eq!(parsed.key, "a");
        assert!(!parsed.has_modifiers());
    }

    #[test]
    fn test_cmd_key() {
        let parsed = parse_shortcut("Cmd+Enter");
        assert!(parsed.cmd_ctrl);
        assert!(!parsed.shift);
        assert!(!parsed.alt);
        assert_eq!(parsed.key, "enter");
    }

    #[test]
    fn test_ctrl_and_cmd_are_the_same_modifier() {
        assert_eq!(parse_shortcut("Ctrl+K"), parse_shortcut("Cmd+K"));
        assert_eq!(parse_shortcut("Control+K"), parse_shortcut("Meta+K"));
    }

    #[test]
    fn test_case_insensitive() {
        let parsed = parse_shortcut("cmd+SHIFT+opt+n");
        assert!(parsed.cmd_ctrl);
        assert!(parsed.shift);
        assert!(parsed.alt);
        assert_eq!(parsed.key, "n");
    }

    #[test]
    fn test_last_non_modifier_wins() {
        let parsed = parse_shortcut("Shift+X+Y");
        assert!(parsed.shift);
        assert_eq!(parsed.key, "y");
    }

    #[test]
    fn test_modifier_only_has_no_key() {
        let parsed = parse_shortcut("Ctrl+Shift");
        assert!(parsed.cmd_ctrl);
        assert!(parsed.shift);
        assert!(!parsed.has_key());
        assert!(!parse_shortcut("").has_key());
    }

    #[test]
    fn test_plus_key() {
        assert_eq!(parse_shortcut("Cmd++"), ParsedShortcut::new("+", true, false, false));
        assert_eq!(parse_shortcut("+").key, "+");
        assert_eq!(parse_shortcut("Cmd+Plus").key, "+");
        assert_eq!(build_shortcut_string("+", true, false, false), "Cmd+Plus");
    }

    #[test]
    fn test_space_key() {
        assert_eq!(parse_shortcut("Space").key, " ");
        assert_eq!(parse_shortcut("Cmd+ ").key, " ");
        assert_eq!(build_shortcut_string(" ", false, true, false), "Shift+Space");
    }

    #[test]
    fn test_named_key_aliases() {
        assert_eq!(parse_shortcut("Esc").key, "escape");
        assert_eq!(parse_shortcut("Alt+Up").key, "arrowup");
        assert_eq!(parse_shortcut("Return").key, "enter");
    }

    #[test]
    fn test_build_canonical_order() {
        assert_eq!(build_shortcut_string("n", true, true, true), "Cmd+Shift+Alt+N");
        assert_eq!(build_shortcut_string("Enter", true, false, false), "Cmd+Enter");
        assert_eq!(build_shortcut_string("arrowup", false, false, true), "Alt+ArrowUp");
        assert_eq!(build_shortcut_string("F5", false, false, false), "F5");
    }

    #[test]
    fn test_expanding_uppercase_kept_as_written() {
        assert_eq!(build_shortcut_string("ß", true, false, false), "Cmd+ß");
        assert_eq!(parse_shortcut("Cmd+ß"), ParsedShortcut::new("ß", true, false, false));
        assert_eq!(build_shortcut_string("ﬀ", false, false, true), "Alt+ﬀ");
        assert_eq!(build_shortcut_string("é", false, false, false), "É");
    }

    #[test]
    fn test_format_ascii() {
        assert_eq!(format_shortcut("Cmd+Shift+n", false, Platform::Mac), "Ctrl+Shift+N");
        assert_eq!(format_shortcut("Cmd+Shift+n", true, Platform::Other), "Ctrl+Shift+N");
        assert_eq!(format_shortcut("Opt+Esc", false, Platform::Other), "Alt+Escape");
    }

    #[test]
    fn test_format_mac_glyphs() {
        assert_eq!(format_shortcut("Cmd+Shift+N", true, Platform::Mac), "⌘⇧N");
        assert_eq!(format_shortcut("Alt+D", true, Platform::Mac), "⌥D");
        assert_eq!(format_shortcut("Cmd+Enter", true, Platform::Mac), "⌘Enter");
        assert_eq!(format_shortcut("B", true, Platform::Mac), "B");
    }

    #[test]
    fn test_display_uses_canonical_form() {
        let parsed = parse_shortcut("shift+ctrl+k");
        assert_eq!(parsed.to_string(), "Cmd+Shift+K");
    }
}
