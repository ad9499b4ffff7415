//! Controller adapter: feeds events to `PageCore` and performs its actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components and window listeners call [`dispatch`] with a `PageEvent`.
//! The core runs inside the shared `RwSignal<PageCore>`, and the actions it
//! returns are executed here against the browser (storage, scrolling,
//! timers, the mail relay, the print window).

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use leptos::prelude::*;

use crate::content::PROFILE;
use crate::controller::{Action, PageCore, PageEvent};
use crate::net::types::ContactPayload;
use crate::util::{dark_mode, dom, resume};

/// Run one event through the controller and perform the resulting actions.
pub fn dispatch(page: RwSignal<PageCore>, event: PageEvent) {
    let actions = page.try_update(|core| core.handle(event)).unwrap_or_default();
    for action in actions {
        perform(page, action);
    }
}

fn perform(page: RwSignal<PageCore>, action: Action) {
    match action {
        Action::ApplyTheme(theme) => dark_mode::apply(theme),
        Action::PersistTheme(theme) => dark_mode::persist(theme),
        Action::SetScrollLock(locked) => dom::set_scroll_lock(locked),
        Action::ScrollTo { top } => dom::scroll_to(top),
        Action::After { delay_ms, event } => schedule(page, delay_ms, event),
        Action::SubmitContact(payload) => submit(page, payload),
        Action::Alert(message) => dom::alert(&message),
        Action::LogError(error) => leptos::logging::error!("contact form submission failed: {error}"),
        Action::PrintResume => resume::print(&PROFILE),
    }
}

fn schedule(page: RwSignal<PageCore>, delay_ms: u32, event: PageEvent) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(delay_ms, move || dispatch(page, event)).forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, delay_ms, event);
    }
}

fn submit(page: RwSignal<PageCore>, payload: ContactPayload) {
    #[cfg(feature = "hydrate")]
    {
        use crate::net::relay::{EmailJsRelay, RelayConfig, submit_contact};

        leptos::task::spawn_local(async move {
            let relay = EmailJsRelay::new(RelayConfig::from_build_env());
            let outcome = submit_contact(&relay, payload).await;
            dispatch(page, outcome);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, payload);
    }
}

/// The `Ready` event, sampled from the live document.
pub fn ready_event() -> PageEvent {
    PageEvent::Ready {
        stored_theme: dark_mode::read_stored(),
        prefers_dark: dark_mode::prefers_dark(),
        scroll_y: dom::scroll_y(),
        sections: dom::measure_sections(),
    }
}

/// Intercept an in-page anchor click and hand it to the controller.
pub fn follow_anchor(page: RwSignal<PageCore>, ev: &leptos::ev::MouseEvent, href: &str) {
    ev.prevent_default();
    let target_top = if href == "#" { None } else { dom::anchor_target_top(href) };
    dispatch(page, PageEvent::AnchorClicked { href: href.to_owned(), target_top });
}

/// Register the scroll, resize, click and keydown listeners on `window`.
///
/// Listeners are removed when the calling owner is cleaned up.
pub fn install_window_listeners(page: RwSignal<PageCore>) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        use crate::state::shortcuts::is_text_field;

        let scroll = window_event_listener(leptos::ev::scroll, move |_| {
            dispatch(page, PageEvent::Scrolled { y: dom::scroll_y(), sections: dom::measure_sections() });
        });
        let resize = window_event_listener(leptos::ev::resize, move |_| {
            dispatch(page, PageEvent::Resized { width: dom::viewport_width() });
        });
        let click = window_event_listener(leptos::ev::click, move |ev| {
            let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok());
            let inside = |selector: &str| {
                target
                    .as_ref()
                    .is_some_and(|el| matches!(el.closest(selector), Ok(Some(_))))
            };
            dispatch(
                page,
                PageEvent::DocumentClicked { inside_menu: inside(".nav-menu"), inside_hamburger: inside(".hamburger") },
            );
        });
        let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
            let in_text_field = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .is_some_and(|el| is_text_field(&el.tag_name()));
            dispatch(page, PageEvent::KeyPressed { key: ev.key(), in_text_field });
        });
        on_cleanup(move || {
            scroll.remove();
            resize.remove();
            click.remove();
            keydown.remove();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = page;
    }
}
