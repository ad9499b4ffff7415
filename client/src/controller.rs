//! Page controller: browser events in, side-effect requests out.
//!
//! `PageCore` holds every piece of page state and reacts to [`PageEvent`]s by
//! mutating itself and returning [`Action`]s for the host to perform. It has
//! no browser dependency; `util::dispatch` is the only place that feeds it
//! real events and executes its actions. View components read CSS flags
//! straight from the core, so a flag can never disagree with its state.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::content::PROFILE;
use crate::net::types::ContactPayload;
use crate::state::contact::{ContactField, ContactForm};
use crate::state::menu::{self, MenuState};
use crate::state::notification::{AUTO_DISMISS_MS, FADE_OUT_MS, NotificationKind, NotificationSlot};
use crate::state::scroll::{ScrollState, SectionOffset, anchor_scroll_top};
use crate::state::shortcuts::{Shortcut, shortcut_for};
use crate::state::skills::{REVEAL_DELAY_MS, SkillsState};
use crate::state::theme::Theme;
use crate::state::typing::{CHAR_INTERVAL_MS, INIT_DELAY_MS, START_DELAY_MS, TypingEffect};

/// Duration of the decorative spin on the theme toggle.
pub const THEME_SPIN_MS: u32 = 300;

pub const CONTACT_SENT_MESSAGE: &str = "Message sent successfully!";
pub const CONTACT_FAILED_MESSAGE: &str = "Failed to send message";

/// Something the browser (or a timer) reported.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// Document ready. Carries the one-time environment reads.
    Ready {
        stored_theme: Option<String>,
        prefers_dark: bool,
        scroll_y: f64,
        sections: Vec<SectionOffset>,
    },
    ThemeToggleClicked,
    ThemeSpinEnded,
    HamburgerClicked,
    NavLinkClicked,
    /// Any click anywhere in the document.
    DocumentClicked { inside_menu: bool, inside_hamburger: bool },
    Resized { width: f64 },
    Scrolled { y: f64, sections: Vec<SectionOffset> },
    BackToTopClicked,
    /// In-page anchor click. `target_top` is `None` when no element matches.
    AnchorClicked { href: String, target_top: Option<f64> },
    SkillIntersected { index: usize, intersecting: bool },
    SkillRevealDue { index: usize },
    NotificationClosed { id: u64 },
    NotificationExpired { id: u64 },
    NotificationFaded { id: u64 },
    ContactFieldChanged { field: ContactField, value: String },
    ContactSubmitted,
    ContactSent,
    ContactFailed { error: String },
    TypingStart,
    TypingTick,
    KeyPressed { key: String, in_text_field: bool },
    PrintResumeRequested,
}

/// Side effects requested by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Set or remove `data-theme` on `<html>`.
    ApplyTheme(Theme),
    /// Write the theme to `localStorage`.
    PersistTheme(Theme),
    /// Lock or unlock `<body>` scrolling.
    SetScrollLock(bool),
    /// Smooth-scroll the window.
    ScrollTo { top: f64 },
    /// Feed `event` back after `delay_ms`.
    After { delay_ms: u32, event: PageEvent },
    SubmitContact(ContactPayload),
    /// Blocking `window.alert`.
    Alert(String),
    LogError(String),
    PrintResume,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageCore {
    pub theme: Theme,
    /// Theme toggle is mid-rotation.
    pub theme_spinning: bool,
    pub menu: MenuState,
    pub scroll: ScrollState,
    pub skills: SkillsState,
    pub notification: NotificationSlot,
    pub typing: TypingEffect,
    pub contact: ContactForm,
}

impl Default for PageCore {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            theme_spinning: false,
            menu: MenuState::default(),
            scroll: ScrollState::default(),
            skills: SkillsState::new(PROFILE.skills.iter().map(|s| (s.name, s.percent))),
            notification: NotificationSlot::default(),
            typing: TypingEffect::new(PROFILE.name),
            contact: ContactForm::default(),
        }
    }
}

impl PageCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event.
    pub fn handle(&mut self, event: PageEvent) -> Vec<Action> {
        match event {
            PageEvent::Ready { stored_theme, prefers_dark, scroll_y, sections } => {
                self.init(stored_theme.as_deref(), prefers_dark, scroll_y, &sections)
            }
            PageEvent::ThemeToggleClicked => self.toggle_theme(),
            PageEvent::ThemeSpinEnded => {
                self.theme_spinning = false;
                Vec::new()
            }
            PageEvent::HamburgerClicked => self.toggle_menu(),
            PageEvent::NavLinkClicked => self.close_menu(),
            PageEvent::DocumentClicked { inside_menu, inside_hamburger } => {
                if menu::closes_on_click(self.menu, inside_menu, inside_hamburger) {
                    self.close_menu()
                } else {
                    Vec::new()
                }
            }
            PageEvent::Resized { width } => {
                if menu::closes_on_resize(self.menu, width) {
                    self.close_menu()
                } else {
                    Vec::new()
                }
            }
            PageEvent::Scrolled { y, sections } => {
                self.scroll.sample(y, &sections);
                Vec::new()
            }
            PageEvent::BackToTopClicked => vec![Action::ScrollTo { top: 0.0 }],
            PageEvent::AnchorClicked { href, target_top } => self.follow_anchor(&href, target_top),
            PageEvent::SkillIntersected { index, intersecting } => {
                if self.skills.observe(index, intersecting) {
                    vec![Action::After { delay_ms: REVEAL_DELAY_MS, event: PageEvent::SkillRevealDue { index } }]
                } else {
                    Vec::new()
                }
            }
            PageEvent::SkillRevealDue { index } => {
                self.skills.reveal(index);
                Vec::new()
            }
            PageEvent::NotificationClosed { id } | PageEvent::NotificationFaded { id } => {
                self.notification.remove(id);
                Vec::new()
            }
            PageEvent::NotificationExpired { id } => {
                if self.notification.begin_dismiss(id) {
                    vec![Action::After { delay_ms: FADE_OUT_MS, event: PageEvent::NotificationFaded { id } }]
                } else {
                    Vec::new()
                }
            }
            PageEvent::ContactFieldChanged { field, value } => {
                self.contact.set(field, value);
                Vec::new()
            }
            PageEvent::ContactSubmitted => self.submit_contact(),
            PageEvent::ContactSent => {
                self.contact.reset();
                self.notify(CONTACT_SENT_MESSAGE, NotificationKind::Success)
            }
            PageEvent::ContactFailed { error } => {
                self.contact.in_flight = false;
                vec![Action::Alert(CONTACT_FAILED_MESSAGE.to_owned()), Action::LogError(error)]
            }
            PageEvent::TypingStart => {
                if self.typing.start() {
                    vec![Action::After { delay_ms: START_DELAY_MS, event: PageEvent::TypingTick }]
                } else {
                    Vec::new()
                }
            }
            PageEvent::TypingTick => {
                if self.typing.tick() {
                    vec![Action::After { delay_ms: CHAR_INTERVAL_MS, event: PageEvent::TypingTick }]
                } else {
                    Vec::new()
                }
            }
            PageEvent::KeyPressed { key, in_text_field } => match shortcut_for(&key, in_text_field) {
                Some(Shortcut::CloseMenu) => self.close_menu(),
                Some(Shortcut::ToggleTheme) => self.toggle_theme(),
                Some(Shortcut::ScrollToTop) => vec![Action::ScrollTo { top: 0.0 }],
                None => Vec::new(),
            },
            PageEvent::PrintResumeRequested => vec![Action::PrintResume],
        }
    }

    /// Show a toast, evicting any current one, and schedule its expiry.
    pub fn notify(&mut self, message: &str, kind: NotificationKind) -> Vec<Action> {
        let id = self.notification.show(message, kind);
        vec![Action::After { delay_ms: AUTO_DISMISS_MS, event: PageEvent::NotificationExpired { id } }]
    }

    fn init(&mut self, stored_theme: Option<&str>, prefers_dark: bool, scroll_y: f64, sections: &[SectionOffset]) -> Vec<Action> {
        self.theme = Theme::resolve(stored_theme, prefers_dark);
        self.scroll.sample(scroll_y, sections);
        vec![
            Action::ApplyTheme(self.theme),
            Action::After { delay_ms: INIT_DELAY_MS, event: PageEvent::TypingStart },
        ]
    }

    fn toggle_theme(&mut self) -> Vec<Action> {
        self.theme = self.theme.toggled();
        self.theme_spinning = true;
        vec![
            Action::ApplyTheme(self.theme),
            Action::PersistTheme(self.theme),
            Action::After { delay_ms: THEME_SPIN_MS, event: PageEvent::ThemeSpinEnded },
        ]
    }

    fn toggle_menu(&mut self) -> Vec<Action> {
        let open = self.menu.toggle();
        vec![Action::SetScrollLock(open)]
    }

    fn close_menu(&mut self) -> Vec<Action> {
        if self.menu.close() {
            vec![Action::SetScrollLock(false)]
        } else {
            Vec::new()
        }
    }

    fn follow_anchor(&mut self, href: &str, target_top: Option<f64>) -> Vec<Action> {
        if href == "#" {
            return Vec::new();
        }
        let Some(top) = target_top else {
            return Vec::new();
        };
        let mut actions = self.close_menu();
        actions.push(Action::ScrollTo { top: anchor_scroll_top(top) });
        actions
    }

    fn submit_contact(&mut self) -> Vec<Action> {
        if self.contact.in_flight {
            return Vec::new();
        }
        self.contact.in_flight = true;
        vec![Action::SubmitContact(self.contact.payload())]
    }
}
