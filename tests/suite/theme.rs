//! Theme persistence round-trips

use std::fs;

use folio_engine::{Theme, ThemeController, ThemeStore};

fn store_in(dir: &tempfile::TempDir) -> ThemeStore {
    ThemeStore::new(dir.path().join("folio").join("theme"))
}

#[test]
fn selection_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    let mut first = ThemeController::init(Some(store_in(&dir)), Theme::Default);
    assert_eq!(first.current(), &Theme::Default);
    first.select("dark");

    let second = ThemeController::init(Some(store_in(&dir)), Theme::Default);
    assert_eq!(second.current(), &Theme::Dark);
    assert!(second.is_option_highlighted("dark"));
    assert!(!second.is_option_highlighted("default"));
}

#[test]
fn config_fallback_applies_without_stored_theme() {
    let dir = tempfile::tempdir().unwrap();
    let controller = ThemeController::init(Some(store_in(&dir)), Theme::Named("ocean".into()));
    assert_eq!(controller.current().as_str(), "ocean");
}

#[test]
fn blank_file_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    fs::write(store.path(), "  \n").unwrap();

    assert_eq!(store.load(), None);
    let controller = ThemeController::init(Some(store), Theme::Dark);
    assert_eq!(controller.current(), &Theme::Dark);
}

#[test]
fn leftover_backup_is_recovered() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    let parent = store.path().parent().unwrap();
    fs::create_dir_all(parent).unwrap();
    fs::write(parent.join("theme.bak"), "dark").unwrap();

    assert_eq!(store.load(), Some(Theme::Dark));
}
