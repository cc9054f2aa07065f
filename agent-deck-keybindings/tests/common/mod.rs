//! Shared integration test helpers for agent-deck-keybindings.
//!
//! Include with `mod common;` at the top of a test file.

#![allow(dead_code)]

use agent_deck_keybindings::{ElementId, ElementInfo, HostSurface};
use std::cell::RefCell;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory host surface with controllable focus and visibility.
#[derive(Default)]
pub struct FakeHost {
    focused: RefCell<Option<ElementInfo>>,
    hidden: RefCell<HashSet<ElementId>>,
    clicks: RefCell<Vec<ElementId>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Focus a text input.
    pub fn focus_input(&self) {
        self.focus(ElementInfo::new("input"));
    }

    pub fn focus(&self, element: ElementInfo) {
        *self.focused.borrow_mut() = Some(element);
    }

    pub fn blur(&self) {
        *self.focused.borrow_mut() = None;
    }

    pub fn hide(&self, element: ElementId) {
        self.hidden.borrow_mut().insert(element);
    }

    pub fn show(&self, element: ElementId) {
        self.hidden.borrow_mut().remove(&element);
    }

    pub fn clicks(&self) -> Vec<ElementId> {
        self.clicks.borrow().clone()
    }
}

impl HostSurface for FakeHost {
    fn focused_element(&self) -> Option<ElementInfo> {
        self.focused.borrow().clone()
    }

    fn is_visible(&self, element: ElementId) -> bool {
        !self.hidden.borrow().contains(&element)
    }

    fn click(&self, element: ElementId) {
        self.clicks.borrow_mut().push(element);
    }
}

/// Shared invocation counter for shortcut callbacks.
#[derive(Clone, Default)]
pub struct Counter(Arc<AtomicUsize>);

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    /// Callback that increments this counter.
    pub fn callback(&self) -> impl Fn() + Send + Sync + 'static {
        let count = Arc::clone(&self.0);
        move || {
            count.fetch_add(1, Ordering::SeqCst);
        }
    }
}
