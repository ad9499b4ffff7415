//! Toast notification. At most one is ever rendered.

use leptos::prelude::*;

use crate::controller::{PageCore, PageEvent};
use crate::util::dispatch::dispatch;

#[component]
pub fn Toast() -> impl IntoView {
    let page = expect_context::<RwSignal<PageCore>>();
    let current = move || page.with(|p| p.notification.current().cloned());

    move || {
        current().map(|note| {
            let id = note.id;
            view! {
                <div
                    class=format!("notification {}", note.kind.css_class())
                    class:leaving=note.leaving
                    role="status"
                >
                    <div class="notification-content">
                        <i class=note.kind.icon()></i>
                        <span>{note.message}</span>
                    </div>
                    <button
                        class="notification-close"
                        title="Dismiss"
                        on:click=move |_| dispatch(page, PageEvent::NotificationClosed { id })
                    >
                        <i class="fas fa-times"></i>
                    </button>
                </div>
            }
        })
    }
}

/// Floating control that returns to the top of the page.
#[component]
pub fn BackToTop() -> impl IntoView {
    let page = expect_context::<RwSignal<PageCore>>();
    let visible = move || page.with(|p| p.scroll.back_to_top_visible);

    view! {
        <button
            id="backToTop"
            class="back-to-top"
            class:visible=visible
            title="Back to top (B)"
            on:click=move |_| dispatch(page, PageEvent::BackToTopClicked)
        >
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}
