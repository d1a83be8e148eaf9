#![cfg(not(feature = "csr"))]

use std::sync::Arc;

use super::*;
use tourbook::storage::MemoryStore;

#[test]
fn stored_theme_wins() {
    let store = MemoryStore::new();
    store.set(THEME_STORAGE_KEY, "dark").unwrap();
    assert_eq!(read_preference(&store), Theme::Dark);
}

#[test]
fn missing_or_unknown_theme_uses_system_preference() {
    let store = MemoryStore::new();
    assert_eq!(read_preference(&store), Theme::Light);
    store.set(THEME_STORAGE_KEY, "sepia").unwrap();
    assert_eq!(read_preference(&store), Theme::Light);
}

#[test]
fn toggle_persists_next_theme() {
    let store = Arc::new(MemoryStore::new());
    let preference = ThemePreference::new(store.clone());
    assert_eq!(toggle(&preference, Theme::Light), Theme::Dark);
    assert_eq!(read_preference(store.as_ref()), Theme::Dark);
    assert_eq!(toggle(&preference, Theme::Dark), Theme::Light);
    assert_eq!(preference.load(), Theme::Light);
}
