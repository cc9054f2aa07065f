//! Shared integration test helpers for agent-deck.
//!
//! Include with `mod common;` at the top of a test file.

#![allow(dead_code)]

use agent_deck::keybindings::{ElementId, ElementInfo, HostSurface, ListenerHook};
use std::cell::RefCell;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Host surface with settable focus; everything is visible.
#[derive(Default)]
pub struct TestHost {
    focused: RefCell<Option<ElementInfo>>,
}

impl TestHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self, element: Option<ElementInfo>) {
        *self.focused.borrow_mut() = element;
    }
}

impl HostSurface for TestHost {
    fn focused_element(&self) -> Option<ElementInfo> {
        self.focused.borrow().clone()
    }

    fn is_visible(&self, _element: ElementId) -> bool {
        true
    }

    fn click(&self, _element: ElementId) {}
}

/// Listener hook counting attach/detach calls.
#[derive(Clone, Default)]
pub struct CountingHook {
    attached: Arc<AtomicUsize>,
    detached: Arc<AtomicUsize>,
}

impl CountingHook {
    pub fn attached(&self) -> usize {
        self.attached.load(Ordering::SeqCst)
    }

    pub fn detached(&self) -> usize {
        self.detached.load(Ordering::SeqCst)
    }
}

impl ListenerHook for CountingHook {
    fn attach(&self) {
        self.attached.fetch_add(1, Ordering::SeqCst);
    }

    fn detach(&self) {
        self.detached.fetch_add(1, Ordering::SeqCst);
    }
}
