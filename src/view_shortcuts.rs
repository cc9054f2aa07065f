//! Per-view shortcut registration.
//!
//! A mounted view holds a [`ViewShortcuts`] for as long as it is on screen.
//! The view's bindings are computed from the registry at mount time and again
//! whenever the registry's revision moves, so edits made in the settings panel
//! reach views that are already mounted.

use agent_deck_keybindings::{
    ActiveBinding, Registration, ShortcutAction, ShortcutDispatcher, ShortcutRegistry,
};
use std::sync::Arc;

/// Actions the sidebar binds for switching views.
pub const NAVIGATION_ACTIONS: [ShortcutAction; 8] = [
    ShortcutAction::Board,
    ShortcutAction::Agent,
    ShortcutAction::Spec,
    ShortcutAction::Context,
    ShortcutAction::Settings,
    ShortcutAction::Profiles,
    ShortcutAction::Terminal,
    ShortcutAction::ToggleSidebar,
];

/// A mounted view's live shortcut bindings.
#[derive(Debug)]
pub struct ViewShortcuts {
    registration: Registration,
    /// Registry revision the current bindings were built from
    revision: u64,
}

impl ViewShortcuts {
    /// Register the bindings `build` produces for the current registry.
    pub fn mount<F>(dispatcher: &ShortcutDispatcher, registry: &ShortcutRegistry, build: F) -> Self
    where
        F: Fn(&ShortcutRegistry) -> Vec<ActiveBinding>,
    {
        let revision = registry.revision();
        Self {
            registration: dispatcher.register(build(registry)),
            revision,
        }
    }

    /// Rebuild the bindings if the registry changed since they were built.
    ///
    /// Returns true if the registration was replaced.
    pub fn sync<F>(&mut self, registry: &ShortcutRegistry, build: F) -> bool
    where
        F: Fn(&ShortcutRegistry) -> Vec<ActiveBinding>,
    {
        if registry.revision() == self.revision {
            return false;
        }
        self.refresh(registry, build);
        true
    }

    /// Rebuild the bindings unconditionally, e.g. after the view's own
    /// enabled state changed.
    pub fn refresh<F>(&mut self, registry: &ShortcutRegistry, build: F)
    where
        F: Fn(&ShortcutRegistry) -> Vec<ActiveBinding>,
    {
        // Read the revision first so a concurrent write is picked up next sync
        let revision = registry.revision();
        self.registration.replace(build(registry));
        self.revision = revision;
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Unregister the view's bindings.
    pub fn unmount(self) {
        log::debug!("Unmounting view shortcuts {:?}", self.registration);
    }
}

/// The sidebar's view-switching bindings built from current registry values.
///
/// `navigate` receives the action whose shortcut fired.
pub fn navigation_bindings<F>(registry: &ShortcutRegistry, navigate: F) -> Vec<ActiveBinding>
where
    F: Fn(ShortcutAction) + Send + Sync + 'static,
{
    let navigate = Arc::new(navigate);
    NAVIGATION_ACTIONS
        .iter()
        .map(|&action| {
            let navigate = Arc::clone(&navigate);
            ActiveBinding::new(registry.get(action), action.label(), move || navigate(action))
        })
        .collect()
}
