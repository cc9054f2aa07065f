//! Application context for the shortcut layer.
//!
//! One [`AppContext`] is created at startup and passed by reference to every
//! view that needs shortcuts. It owns the registry, the global dispatcher and
//! the detected platform; nothing here is a process global.

use crate::view_shortcuts::ViewShortcuts;
use agent_deck_config::{ShortcutStore, YamlShortcutStore};
use agent_deck_keybindings::{
    ActiveBinding, HostSurface, KeyEvent, ListenerHook, Platform, ShortcutAction,
    ShortcutDispatcher, ShortcutRegistry, format_shortcut,
};
use anyhow::Context;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct AppContext {
    registry: Arc<ShortcutRegistry>,
    dispatcher: ShortcutDispatcher,
    platform: Platform,
}

impl AppContext {
    pub fn new(store: impl ShortcutStore + 'static, platform: Platform) -> Self {
        Self::with_dispatcher(store, platform, ShortcutDispatcher::new())
    }

    /// Context whose dispatcher reports listener attach/detach to `hook`.
    pub fn with_hook(
        store: impl ShortcutStore + 'static,
        platform: Platform,
        hook: impl ListenerHook + 'static,
    ) -> Self {
        Self::with_dispatcher(store, platform, ShortcutDispatcher::with_hook(hook))
    }

    fn with_dispatcher(
        store: impl ShortcutStore + 'static,
        platform: Platform,
        dispatcher: ShortcutDispatcher,
    ) -> Self {
        Self {
            registry: Arc::new(ShortcutRegistry::new(store)),
            dispatcher,
            platform,
        }
    }

    /// Context with no persistence, for tests and previews.
    pub fn in_memory(platform: Platform) -> Self {
        Self::new(agent_deck_config::MemoryShortcutStore::new(), platform)
    }

    /// Load shortcut overrides from the user's config directory.
    pub fn load() -> anyhow::Result<Self> {
        let path = YamlShortcutStore::default_path();
        Self::load_from(&path)
    }

    /// Load shortcut overrides from `path`.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let store = YamlShortcutStore::open(path)
            .with_context(|| format!("Failed to load shortcuts from {}", path.display()))?;
        let platform = Platform::detect();
        log::info!("Shortcut context ready (platform={:?})", platform);
        Ok(Self::new(store, platform))
    }

    pub fn registry(&self) -> &Arc<ShortcutRegistry> {
        &self.registry
    }

    pub fn dispatcher(&self) -> &ShortcutDispatcher {
        &self.dispatcher
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Register a view's bindings, rebuilt from the registry on
    /// [`ViewShortcuts::sync`].
    pub fn mount<F>(&self, build: F) -> ViewShortcuts
    where
        F: Fn(&ShortcutRegistry) -> Vec<ActiveBinding>,
    {
        ViewShortcuts::mount(&self.dispatcher, &self.registry, build)
    }

    /// Entry point for the host's window-level key-down listener.
    pub fn handle_key_down(&self, event: &mut KeyEvent, host: &dyn HostSurface) -> bool {
        self.dispatcher.handle_key_down(event, host)
    }

    /// Current binding for `action` formatted for this platform.
    pub fn display_shortcut(&self, action: ShortcutAction) -> String {
        format_shortcut(&self.registry.get(action), true, self.platform)
    }
}
