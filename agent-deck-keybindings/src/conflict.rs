//! Edit-time conflict detection.
//!
//! Two actions sharing a binding is allowed at the storage level; it is only
//! the editing flow that refuses to save a new conflicting binding.

use crate::error::ShortcutError;
use crate::registry::ShortcutRegistry;
use agent_deck_config::ShortcutAction;
use std::collections::BTreeMap;

/// Actions other than `action` whose binding in `table` equals `proposed`
/// (case-insensitive, modifiers included), in enumeration order.
pub fn find_conflicts_in(
    table: &BTreeMap<ShortcutAction, String>,
    action: ShortcutAction,
    proposed: &str,
) -> Vec<ShortcutAction> {
    let proposed = proposed.trim();
    table
        .iter()
        .filter(|(other, binding)| {
            **other != action && binding.trim().eq_ignore_ascii_case(proposed)
        })
        .map(|(other, _)| *other)
        .collect()
}

/// Actions other than `action` currently bound to `proposed`.
pub fn find_conflicts(
    registry: &ShortcutRegistry,
    action: ShortcutAction,
    proposed: &str,
) -> Vec<ShortcutAction> {
    find_conflicts_in(&registry.snapshot(), action, proposed)
}

/// Reject `proposed` if another action already uses it, naming the first
/// conflicting action's label.
pub fn check_conflict(
    registry: &ShortcutRegistry,
    action: ShortcutAction,
    proposed: &str,
) -> Result<(), ShortcutError> {
    match find_conflicts(registry, action, proposed).first() {
        Some(&other) => Err(ShortcutError::Conflict {
            action: other,
            label: other.label(),
        }),
        None => Ok(()),
    }
}
