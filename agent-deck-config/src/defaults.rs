//! Default shortcut table.
//!
//! This table is the single source of truth for "is this binding modified".

use crate::types::ShortcutAction;
use std::collections::BTreeMap;

/// Default binding string for an action.
pub fn shortcut(action: ShortcutAction) -> &'static str {
    match action {
        // Navigation
        ShortcutAction::Board => "B",
        ShortcutAction::Agent => "I",
        ShortcutAction::Spec => "D",
        ShortcutAction::Context => "C",
        ShortcutAction::Settings => "S",
        ShortcutAction::Profiles => "M",
        ShortcutAction::Terminal => "T",

        // UI
        ShortcutAction::ToggleSidebar => "`",

        // Actions
        ShortcutAction::AddFeature => "A",
        ShortcutAction::AddContextFile => "F",
        ShortcutAction::StartNext => "G",
        ShortcutAction::NewSession => "Cmd+N",
        ShortcutAction::OpenProject => "O",
        ShortcutAction::ProjectPicker => "P",
        ShortcutAction::CyclePrevProject => "Q",
        ShortcutAction::CycleNextProject => "E",
        ShortcutAction::AddProfile => "Shift+M",
        ShortcutAction::SplitTerminalRight => "Alt+D",
        ShortcutAction::SplitTerminalDown => "Alt+S",
        ShortcutAction::CloseTerminal => "Alt+W",
    }
}

/// The full default table.
pub fn shortcuts() -> BTreeMap<ShortcutAction, String> {
    ShortcutAction::ALL
        .into_iter()
        .map(|action| (action, shortcut(action).to_string()))
        .collect()
}
