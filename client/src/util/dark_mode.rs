//! Theme persistence and `<html>` attribute glue.
//!
//! Reads the stored preference from `localStorage` and the OS color-scheme
//! preference, applies the `data-theme` attribute to the `<html>` element,
//! and writes the preference back. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
use crate::state::theme::STORAGE_KEY;
use crate::state::theme::Theme;

/// Read the raw stored theme value, if any.
pub fn read_stored() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Whether the OS asks for a dark color scheme.
pub fn prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        else {
            return;
        };
        let result = match theme.data_attribute() {
            Some(value) => el.set_attribute("data-theme", value),
            None => el.remove_attribute("data-theme"),
        };
        match result {
            Ok(()) => log::info!("theme applied: {}", theme.as_str()),
            Err(e) => log::warn!("theme attribute update failed: {e:?}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Persist the theme to `localStorage`.
pub fn persist(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        if let Err(e) = storage.set_item(STORAGE_KEY, theme.as_str()) {
            log::warn!("theme persist failed: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
