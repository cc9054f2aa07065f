//! End-to-end tests for the application shortcut context: persisted
//! overrides, mounted views and dispatch through the context.

mod common;

use agent_deck::keybindings::{ActiveBinding, ElementInfo, KeyEvent, Platform, ShortcutAction};
use agent_deck::{AppContext, NAVIGATION_ACTIONS, navigation_bindings};
use agent_deck_config::MemoryShortcutStore;
use common::{CountingHook, TestHost};
use parking_lot::Mutex;
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn overrides_persist_across_contexts() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shortcuts.yaml");

    let context = AppContext::load_from(&path).unwrap();
    context
        .registry()
        .set(ShortcutAction::Terminal, "Alt+T")
        .unwrap();

    let reloaded = AppContext::load_from(&path).unwrap();
    assert_eq!(reloaded.registry().get(ShortcutAction::Terminal), "Alt+T");
    assert!(reloaded.registry().is_modified(ShortcutAction::Terminal));

    reloaded.registry().reset_all().unwrap();
    let reset = AppContext::load_from(&path).unwrap();
    assert_eq!(reset.registry().get(ShortcutAction::Terminal), "T");
}

#[test]
fn corrupt_store_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shortcuts.yaml");
    std::fs::write(&path, "shortcuts: [not, a, map").unwrap();

    let err = AppContext::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to load shortcuts"));
}

#[test]
fn navigation_view_dispatches_through_context() {
    let context = AppContext::in_memory(Platform::Other);
    let host = TestHost::new();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&seen);
    let view = context.mount(move |registry| {
        let sink = Arc::clone(&sink);
        navigation_bindings(registry, move |action| sink.lock().push(action))
    });
    assert_eq!(context.dispatcher().binding_count(), NAVIGATION_ACTIONS.len());

    assert!(context.handle_key_down(&mut KeyEvent::new("t"), &host));
    assert!(context.handle_key_down(&mut KeyEvent::new("`"), &host));

    // Typing in the search box must not switch views
    host.focus(Some(ElementInfo::new("input")));
    assert!(!context.handle_key_down(&mut KeyEvent::new("b"), &host));

    assert_eq!(
        *seen.lock(),
        vec![ShortcutAction::Terminal, ShortcutAction::ToggleSidebar]
    );
    drop(view);
    assert_eq!(context.dispatcher().registration_count(), 0);
}

#[test]
fn modal_view_shadows_page_view() {
    let context = AppContext::in_memory(Platform::Mac);
    let host = TestHost::new();
    let fired = Arc::new(Mutex::new(Vec::new()));

    let page_sink = Arc::clone(&fired);
    let _page = context.mount(move |_| {
        let sink = Arc::clone(&page_sink);
        vec![ActiveBinding::new("Escape", "Clear selection", move || {
            sink.lock().push("page")
        })]
    });

    let modal_sink = Arc::clone(&fired);
    let modal = context.mount(move |_| {
        let sink = Arc::clone(&modal_sink);
        vec![ActiveBinding::new("Escape", "Close dialog", move || {
            sink.lock().push("modal")
        })]
    });

    assert!(context.handle_key_down(&mut KeyEvent::new("Escape"), &host));
    modal.unmount();
    assert!(context.handle_key_down(&mut KeyEvent::new("Escape"), &host));
    assert_eq!(*fired.lock(), vec!["modal", "page"]);
}

#[test]
fn listener_attaches_once_for_many_views() {
    let hook = CountingHook::default();
    let context = AppContext::with_hook(MemoryShortcutStore::new(), Platform::Other, hook.clone());

    let first = context.mount(|registry| navigation_bindings(registry, |_| {}));
    let second = context.mount(|_| Vec::new());
    assert_eq!(hook.attached(), 1);

    drop(first);
    assert_eq!(hook.detached(), 0);
    drop(second);
    assert_eq!((hook.attached(), hook.detached()), (1, 1));

    let _third = context.mount(|_| Vec::new());
    assert_eq!(hook.attached(), 2);
}

#[test]
fn failed_store_write_leaves_registry_unchanged() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shortcuts.yaml");
    let context = AppContext::load_from(&path).unwrap();

    std::fs::create_dir(&path).unwrap();
    std::fs::write(path.join("keep"), "x").unwrap();

    let registry = context.registry();
    assert!(registry.set(ShortcutAction::Board, "Alt+B").is_err());
    assert_eq!(registry.get(ShortcutAction::Board), "B");
    assert!(!registry.is_modified(ShortcutAction::Board));
    assert_eq!(registry.revision(), 0);
}
