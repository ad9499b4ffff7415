//! Light/dark theme value and startup resolution.
//!
//! DESIGN
//! ======
//! The theme is the only persisted piece of page state. Resolution and
//! toggling are pure here; `util::dark_mode` owns the `localStorage` and
//! `<html>` attribute glue.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// `localStorage` key holding the persisted theme.
pub const STORAGE_KEY: &str = "theme";

/// Visual mode of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Resolve the startup theme from the stored value and OS preference.
    ///
    /// A stored `"dark"` wins. Any other non-empty stored value means light.
    /// Without a stored value the OS color-scheme preference decides.
    #[must_use]
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        match stored.filter(|v| !v.is_empty()) {
            Some("dark") => Self::Dark,
            Some(_) => Self::Light,
            None if prefers_dark => Self::Dark,
            None => Self::Light,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value written to `localStorage`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Value of the `data-theme` attribute on `<html>`; light removes it.
    #[must_use]
    pub fn data_attribute(self) -> Option<&'static str> {
        match self {
            Self::Light => None,
            Self::Dark => Some("dark"),
        }
    }

    /// Icon class for the toggle control. Shows the mode a click switches to.
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }
}
