//! Scroll-driven UI state: back-to-top, navbar style, active section.
//!
//! Every scroll sample recomputes all three from scratch; nothing here
//! depends on the previous sample.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Offset past which the back-to-top control becomes visible.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;
/// Offset past which the navbar gets its `scrolled` class.
pub const NAVBAR_SCROLLED_THRESHOLD_PX: f64 = 50.0;
/// How far ahead of a section's top it counts as the current section.
pub const SECTION_LEAD_PX: f64 = 200.0;
/// Height of the fixed header; anchor scrolls stop this far above the target.
pub const HEADER_HEIGHT_PX: f64 = 80.0;

/// A page section's id and its measured vertical offset.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

impl SectionOffset {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub offset: f64,
    pub back_to_top_visible: bool,
    pub navbar_scrolled: bool,
    pub active_section: Option<String>,
}

impl ScrollState {
    /// Recompute everything for a new vertical offset.
    pub fn sample(&mut self, offset: f64, sections: &[SectionOffset]) {
        self.offset = offset;
        self.back_to_top_visible = offset > BACK_TO_TOP_THRESHOLD_PX;
        self.navbar_scrolled = offset > NAVBAR_SCROLLED_THRESHOLD_PX;
        self.active_section = active_section(sections, offset).map(str::to_owned);
    }

    /// Whether the nav link pointing at `href` (`#id`) is active.
    #[must_use]
    pub fn is_link_active(&self, href: &str) -> bool {
        match (self.active_section.as_deref(), href.strip_prefix('#')) {
            (Some(active), Some(id)) => active == id,
            _ => false,
        }
    }
}

/// The last section (in document order) whose top minus the lead has been
/// scrolled past.
#[must_use]
pub fn active_section(sections: &[SectionOffset], offset: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| offset >= s.top - SECTION_LEAD_PX)
        .map(|s| s.id.as_str())
}

/// Scroll target for an in-page anchor whose element sits at `target_top`.
#[must_use]
pub fn anchor_scroll_top(target_top: f64) -> f64 {
    target_top - HEADER_HEIGHT_PX
}
