//! Mobile navigation menu state.
//!
//! The hamburger `active` class, the nav panel `active` class and the body
//! scroll lock are all read from `open`, so they cannot drift apart.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Viewport width above which an open mobile menu is force-closed.
pub const DESKTOP_BREAKPOINT_PX: f64 = 768.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip the menu. Returns the new open flag.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Force the menu closed. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// `active` class on the hamburger control.
    #[must_use]
    pub fn hamburger_active(self) -> bool {
        self.open
    }

    /// `active` class on the navigation panel.
    #[must_use]
    pub fn nav_active(self) -> bool {
        self.open
    }

    /// Whether `<body>` scrolling is locked.
    #[must_use]
    pub fn scroll_locked(self) -> bool {
        self.open
    }
}

/// Whether a click should close the open menu.
#[must_use]
pub fn closes_on_click(menu: MenuState, inside_menu: bool, inside_hamburger: bool) -> bool {
    menu.is_open() && !inside_menu && !inside_hamburger
}

/// Whether a resize to `width` should close the open menu.
#[must_use]
pub fn closes_on_resize(menu: MenuState, width: f64) -> bool {
    menu.is_open() && width > DESKTOP_BREAKPOINT_PX
}
