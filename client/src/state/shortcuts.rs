//! Global keyboard shortcuts.

#[cfg(test)]
#[path = "shortcuts_test.rs"]
mod shortcuts_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    CloseMenu,
    ToggleTheme,
    ScrollToTop,
}

#[derive(Clone, Copy)]
pub struct ShortcutRow {
    pub action: &'static str,
    pub keys: &'static str,
}

/// Help table rendered in the page footer.
pub const SHORTCUTS: &[ShortcutRow] = &[
    ShortcutRow { action: "Toggle theme", keys: "T" },
    ShortcutRow { action: "Back to top", keys: "B" },
    ShortcutRow { action: "Close menu", keys: "Esc" },
];

/// Map a `KeyboardEvent.key` to a shortcut.
///
/// Keys typed into a text field never trigger shortcuts.
#[must_use]
pub fn shortcut_for(key: &str, in_text_field: bool) -> Option<Shortcut> {
    if in_text_field {
        return None;
    }
    match key {
        "Escape" => Some(Shortcut::CloseMenu),
        "t" | "T" => Some(Shortcut::ToggleTheme),
        "b" | "B" => Some(Shortcut::ScrollToTop),
        _ => None,
    }
}

/// Whether a focused element's tag name is a text entry field.
#[must_use]
pub fn is_text_field(tag_name: &str) -> bool {
    tag_name.eq_ignore_ascii_case("input") || tag_name.eq_ignore_ascii_case("textarea")
}
