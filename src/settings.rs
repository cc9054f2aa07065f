//! Rows for the keyboard shortcuts settings panel.

use agent_deck_keybindings::{
    Platform, ShortcutAction, ShortcutCategory, ShortcutRegistry, format_shortcut,
};

/// One action as shown in the shortcuts table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutRow {
    pub action: ShortcutAction,
    pub label: &'static str,
    pub category: ShortcutCategory,
    /// Stored binding string
    pub binding: String,
    /// Binding formatted for the current platform
    pub display: String,
    /// Drives the "reset to default" indicator
    pub is_modified: bool,
}

/// Section heading for a category.
pub fn category_title(category: ShortcutCategory) -> &'static str {
    match category {
        ShortcutCategory::Navigation => "Navigation",
        ShortcutCategory::Ui => "Interface",
        ShortcutCategory::Action => "Actions",
    }
}

/// Every action with its current binding, in enumeration order.
pub fn shortcut_rows(registry: &ShortcutRegistry, platform: Platform) -> Vec<ShortcutRow> {
    registry
        .snapshot()
        .into_iter()
        .map(|(action, binding)| ShortcutRow {
            action,
            label: action.label(),
            category: action.category(),
            display: format_shortcut(&binding, true, platform),
            is_modified: binding != ShortcutRegistry::default_for(action),
            binding,
        })
        .collect()
}

/// Rows filtered to one category.
pub fn rows_in_category(
    registry: &ShortcutRegistry,
    platform: Platform,
    category: ShortcutCategory,
) -> Vec<ShortcutRow> {
    shortcut_rows(registry, platform)
        .into_iter()
        .filter(|row| row.category == category)
        .collect()
}

/// Whether the "reset all" button should be enabled.
pub fn any_modified(registry: &ShortcutRegistry) -> bool {
    ShortcutAction::ALL
        .iter()
        .any(|&action| registry.is_modified(action))
}
