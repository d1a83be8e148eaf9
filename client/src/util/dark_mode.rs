//! Theme initialization and toggle.
//!
//! Reads the stored `theme` key and applies a `data-theme` attribute to the
//! `<html>` element. Toggle writes back through `ThemePreference` and
//! updates that attribute.
//!
//! TRADE-OFFS
//! ==========
//! With nothing stored, the system `prefers-color-scheme` decides. Outside
//! the browser build the system preference reads as light and `apply` is a
//! no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use tourbook::storage::KeyValueStore;
use tourbook::theme::{THEME_STORAGE_KEY, Theme, ThemePreference};

/// Stored theme, or the system preference when none is stored.
pub fn read_preference(store: &dyn KeyValueStore) -> Theme {
    if let Ok(Some(raw)) = store.get(THEME_STORAGE_KEY) {
        if let Some(theme) = Theme::parse(&raw) {
            return theme;
        }
    }
    system_preference()
}

pub fn system_preference() -> Theme {
    #[cfg(feature = "csr")]
    {
        let dark = web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches());
        if dark { Theme::Dark } else { Theme::Light }
    }
    #[cfg(not(feature = "csr"))]
    {
        Theme::Light
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Flip `current`, persist it and apply it.
pub fn toggle(preference: &ThemePreference, current: Theme) -> Theme {
    let next = current.toggled();
    preference.save(next);
    apply(next);
    next
}
