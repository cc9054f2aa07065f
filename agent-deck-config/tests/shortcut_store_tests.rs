//! Integration tests for the YAML shortcut store.

use agent_deck_config::{ConfigError, ShortcutAction, ShortcutStore, YamlShortcutStore};
use tempfile::TempDir;

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let store = YamlShortcutStore::open(dir.path().join("shortcuts.yaml")).unwrap();
    assert!(store.overrides().is_empty());
    assert_eq!(store.shortcut(ShortcutAction::NewSession), "Cmd+N");
}

#[test]
fn overrides_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("shortcuts.yaml");

    let mut store = YamlShortcutStore::open(&path).unwrap();
    store.set_shortcut(ShortcutAction::AddFeature, "Shift+A").unwrap();
    assert!(path.exists());

    let reopened = YamlShortcutStore::open(&path).unwrap();
    assert_eq!(reopened.shortcut(ShortcutAction::AddFeature), "Shift+A");
    assert_eq!(reopened.shortcut(ShortcutAction::Board), "B");
}

#[test]
fn reset_all_is_persisted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shortcuts.yaml");

    let mut store = YamlShortcutStore::open(&path).unwrap();
    store.set_shortcut(ShortcutAction::Board, "Alt+B").unwrap();
    store.set_shortcut(ShortcutAction::Terminal, "Alt+T").unwrap();
    store.reset_shortcuts(None).unwrap();

    let reopened = YamlShortcutStore::open(&path).unwrap();
    assert!(reopened.overrides().is_empty());
}

#[test]
fn file_uses_action_ids() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shortcuts.yaml");

    let mut store = YamlShortcutStore::open(&path).unwrap();
    store.set_shortcut(ShortcutAction::ToggleSidebar, "Cmd+B").unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("toggleSidebar"));
    assert!(!path.with_extension("yaml.tmp").exists());
}

#[test]
fn invalid_yaml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shortcuts.yaml");
    std::fs::write(&path, "shortcuts: [unterminated").unwrap();

    match YamlShortcutStore::open(&path) {
        Err(ConfigError::Parse(_)) => {}
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn empty_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shortcuts.yaml");
    std::fs::write(&path, "").unwrap();

    let store = YamlShortcutStore::open(&path).unwrap();
    assert!(store.overrides().is_empty());
}

#[test]
fn failed_write_keeps_previous_overrides() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shortcuts.yaml");

    let mut store = YamlShortcutStore::open(&path).unwrap();
    store.set_shortcut(ShortcutAction::Agent, "Alt+I").unwrap();

    // A non-empty directory at the target path makes the rename fail
    std::fs::remove_file(&path).unwrap();
    std::fs::create_dir(&path).unwrap();
    std::fs::write(path.join("keep"), "x").unwrap();

    assert!(matches!(
        store.set_shortcut(ShortcutAction::Board, "Alt+B"),
        Err(ConfigError::Io(_))
    ));
    assert_eq!(store.shortcut(ShortcutAction::Board), "B");

    assert!(store.reset_shortcuts(None).is_err());
    assert_eq!(store.shortcut(ShortcutAction::Agent), "Alt+I");
    assert!(!path.with_extension("yaml.tmp").exists());
}
