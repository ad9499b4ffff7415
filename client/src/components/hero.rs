//! Landing section with the typed name and the resume action.

use leptos::prelude::*;

use crate::content::PROFILE;
use crate::controller::{PageCore, PageEvent};
use crate::util::dispatch::{dispatch, follow_anchor};

#[component]
pub fn Hero() -> impl IntoView {
    let page = expect_context::<RwSignal<PageCore>>();
    let typed_name = move || page.with(|p| p.typing.visible());

    view! {
        <section id="home" class="hero">
            <div class="hero-content">
                <h1 class="hero-title">
                    "Hi, I'm "
                    <span class="name">{typed_name}</span>
                </h1>
                <h2 class="hero-subtitle">{PROFILE.headline}</h2>
                <p class="hero-description">{PROFILE.tagline}</p>
                <div class="hero-buttons">
                    <a
                        href="#contact"
                        class="btn btn-primary"
                        on:click=move |ev| follow_anchor(page, &ev, "#contact")
                    >
                        "Get In Touch"
                    </a>
                    <button
                        class="btn btn-secondary"
                        on:click=move |_| dispatch(page, PageEvent::PrintResumeRequested)
                    >
                        <i class="fas fa-print"></i>
                        " Print Resume"
                    </button>
                </div>
            </div>
        </section>
    }
}
