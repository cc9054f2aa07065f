//! Global shortcut dispatcher.
//!
//! Views contribute lists of [`ActiveBinding`]s for as long as they hold the
//! returned [`Registration`]. Every key-down event is matched against the
//! union of all live bindings and at most one callback fires.
//!
//! Precedence: the most recently mounted registration wins; within one
//! registration, earlier bindings win. [`Registration::replace`] keeps the
//! registration's original slot.

use crate::host::{HostSurface, KeyEvent, focus_is_input_surface};
use crate::matcher::{ShortcutMatcher, suppressed_by_focus};
use crate::parser::{ParsedShortcut, parse_shortcut};
use parking_lot::Mutex;
use std::fmt;
use std::sync::{Arc, Weak};

/// Callback invoked when a shortcut fires.
pub type ShortcutCallback = Arc<dyn Fn() + Send + Sync>;

/// A live binding contributed by a mounted view.
#[derive(Clone)]
pub struct ActiveBinding {
    key: String,
    shortcut: ParsedShortcut,
    description: String,
    action: ShortcutCallback,
    enabled: bool,
    bypass_input_check: bool,
}

impl fmt::Debug for ActiveBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActiveBinding")
            .field("key", &self.key)
            .field("description", &self.description)
            .field("enabled", &self.enabled)
            .field("bypass_input_check", &self.bypass_input_check)
            .finish()
    }
}

impl ActiveBinding {
    /// Bind `key` (a binding string such as `"Cmd+Enter"`) to `action`.
    pub fn new(
        key: impl Into<String>,
        description: impl Into<String>,
        action: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self::with_callback(key, description, Arc::new(action))
    }

    /// Same as [`new`](Self::new) with an already shared callback.
    pub fn with_callback(
        key: impl Into<String>,
        description: impl Into<String>,
        action: ShortcutCallback,
    ) -> Self {
        let key = key.into();
        Self {
            shortcut: parse_shortcut(&key),
            key,
            description: description.into(),
            action,
            enabled: true,
            bypass_input_check: false,
        }
    }

    /// Declare the binding without making it live.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Let this binding fire even while a text input has focus.
    pub fn bypass_input_check(mut self) -> Self {
        self.bypass_input_check = true;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn shortcut(&self) -> &ParsedShortcut {
        &self.shortcut
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Host hook notified when the global key listener must be attached or
/// detached.
///
/// Called with the dispatcher's lock held; implementations must not call
/// back into the dispatcher.
pub trait ListenerHook: Send + Sync {
    fn attach(&self);
    fn detach(&self);
}

struct NoopHook;

impl ListenerHook for NoopHook {
    fn attach(&self) {}
    fn detach(&self) {}
}

struct Slot {
    id: u64,
    bindings: Vec<ActiveBinding>,
}

#[derive(Default)]
struct DispatcherState {
    /// Registrations in mount order
    slots: Vec<Slot>,
    next_id: u64,
    listening: bool,
}

struct Inner {
    state: Mutex<DispatcherState>,
    hook: Box<dyn ListenerHook>,
}

impl Inner {
    fn replace(&self, id: u64, bindings: Vec<ActiveBinding>) {
        let mut state = self.state.lock();
        if let Some(slot) = state.slots.iter_mut().find(|slot| slot.id == id) {
            log::debug!(
                "Registration {} replaced: {} -> {} binding(s)",
                id,
                slot.bindings.len(),
                bindings.len()
            );
            slot.bindings = bindings;
        }
    }

    fn unregister(&self, id: u64) {
        let mut state = self.state.lock();
        let before = state.slots.len();
        state.slots.retain(|slot| slot.id != id);
        if state.slots.len() == before {
            return;
        }
        log::debug!("Registration {} removed", id);

        if state.slots.is_empty() && state.listening {
            state.listening = false;
            log::debug!("No shortcut registrations left, detaching key listener");
            self.hook.detach();
        }
    }
}

/// Process-wide shortcut dispatcher. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct ShortcutDispatcher {
    inner: Arc<Inner>,
}

impl fmt::Debug for ShortcutDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.lock();
        f.debug_struct("ShortcutDispatcher")
            .field("registrations", &state.slots.len())
            .field("listening", &state.listening)
            .finish()
    }
}

impl Default for ShortcutDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortcutDispatcher {
    pub fn new() -> Self {
        Self::with_hook(NoopHook)
    }

    /// Dispatcher that reports listener attach/detach to the host.
    pub fn with_hook(hook: impl ListenerHook + 'static) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(DispatcherState::default()),
                hook: Box::new(hook),
            }),
        }
    }

    /// Add `bindings` to the live set until the returned guard is dropped.
    pub fn register(&self, bindings: Vec<ActiveBinding>) -> Registration {
        let mut state = self.inner.state.lock();
        let id = state.next_id;
        state.next_id += 1;

        log::debug!("Registration {} added with {} binding(s)", id, bindings.len());
        state.slots.push(Slot { id, bindings });

        if !state.listening {
            state.listening = true;
            log::debug!("Attaching key listener");
            self.inner.hook.attach();
        }

        Registration {
            dispatcher: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Whether the global key listener is currently attached.
    pub fn is_listening(&self) -> bool {
        self.inner.state.lock().listening
    }

    /// Number of live registrations.
    pub fn registration_count(&self) -> usize {
        self.inner.state.lock().slots.len()
    }

    /// Number of live bindings across all registrations.
    pub fn binding_count(&self) -> usize {
        self.inner
            .state
            .lock()
            .slots
            .iter()
            .map(|slot| slot.bindings.len())
            .sum()
    }

    /// Enabled bindings as `(key, description)` pairs in precedence order,
    /// for help overlays.
    pub fn active_bindings(&self) -> Vec<(String, String)> {
        let state = self.inner.state.lock();
        state
            .slots
            .iter()
            .rev()
            .flat_map(|slot| slot.bindings.iter())
            .filter(|binding| binding.enabled)
            .map(|binding| (binding.key.clone(), binding.description.clone()))
            .collect()
    }

    /// Handle a key-down event.
    ///
    /// Returns true if a binding fired, in which case the event's default
    /// handling was prevented and its propagation stopped. Unmatched events
    /// are left untouched.
    pub fn handle_key_down(&self, event: &mut KeyEvent, host: &dyn HostSurface) -> bool {
        let matcher = ShortcutMatcher::from_event(event);
        if !matcher.has_key() {
            return false;
        }

        // Matching bindings in precedence order, collected under the lock
        let candidates: Vec<(ShortcutCallback, String, bool)> = {
            let state = self.inner.state.lock();
            state
                .slots
                .iter()
                .rev()
                .flat_map(|slot| slot.bindings.iter())
                .filter(|binding| binding.enabled && matcher.matches(&binding.shortcut))
                .map(|binding| {
                    let suppressible = suppressed_by_focus(
                        &binding.shortcut,
                        binding.bypass_input_check,
                        true,
                    );
                    (binding.action.clone(), binding.description.clone(), suppressible)
                })
                .collect()
        };
        if candidates.is_empty() {
            return false;
        }

        // Focus is queried without the lock, and only if it can matter
        let in_input = candidates.iter().any(|(_, _, suppressible)| *suppressible)
            && focus_is_input_surface(host);

        let fired = candidates
            .into_iter()
            .find(|(_, description, suppressible)| {
                let suppressed = *suppressible && in_input;
                if suppressed {
                    log::trace!("Shortcut '{}' suppressed inside text input", description);
                }
                !suppressed
            })
            .map(|(action, description, _)| (action, description));

        let Some((action, description)) = fired else {
            return false;
        };

        event.prevent_default();
        event.stop_propagation();
        log::debug!("Shortcut fired: {} ({})", event.key, description);

        // Invoked without the lock so callbacks may mount or unmount views
        action();
        true
    }
}

/// Scoped registration of a view's bindings.
///
/// Dropping the guard removes exactly the bindings it contributed, on every
/// exit path including unwinding.
#[must_use = "dropping a Registration unregisters its bindings"]
pub struct Registration {
    dispatcher: Weak<Inner>,
    id: u64,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration").field("id", &self.id).finish()
    }
}

impl Registration {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Supersede this registration's bindings without changing its precedence.
    pub fn replace(&self, bindings: Vec<ActiveBinding>) {
        if let Some(inner) = self.dispatcher.upgrade() {
            inner.replace(self.id, bindings);
        }
    }

    /// Unregister now. Equivalent to dropping the guard.
    pub fn release(self) {}
}

impl Drop for Registration {
    fn drop(&mut self) {
        if let Some(inner) = self.dispatcher.upgrade() {
            inner.unregister(self.id);
        }
    }
}
