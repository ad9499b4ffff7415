//! Fixed top navigation: brand, section links, theme toggle, hamburger.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every class flag here is read from `PageCore`, so the hamburger, the
//! nav panel and the body scroll lock always agree on whether the menu is
//! open.

use leptos::prelude::*;

use crate::content::{PROFILE, SECTIONS};
use crate::controller::{PageCore, PageEvent};
use crate::util::dispatch::{dispatch, follow_anchor};

/// Top navigation bar.
#[component]
pub fn Navbar() -> impl IntoView {
    let page = expect_context::<RwSignal<PageCore>>();

    let scrolled = move || page.with(|p| p.scroll.navbar_scrolled);
    let menu_open = move || page.with(|p| p.menu.nav_active());
    let hamburger_active = move || page.with(|p| p.menu.hamburger_active());
    let theme_icon = move || page.with(|p| p.theme.toggle_icon());
    let toggle_transform = move || {
        if page.with(|p| p.theme_spinning) { "rotate(180deg)" } else { "rotate(0deg)" }
    };

    view! {
        <nav class="navbar" class:scrolled=scrolled>
            <div class="nav-container">
                <a
                    href="#home"
                    class="nav-logo"
                    on:click=move |ev| follow_anchor(page, &ev, "#home")
                >
                    {PROFILE.name}
                </a>
                <ul class="nav-menu" class:active=menu_open>
                    {SECTIONS
                        .iter()
                        .map(|section| {
                            let href = section.href();
                            let active_href = href.clone();
                            let click_href = href.clone();
                            view! {
                                <li>
                                    <a
                                        href=href
                                        class="nav-link"
                                        class:active=move || page.with(|p| p.scroll.is_link_active(&active_href))
                                        on:click=move |ev| {
                                            dispatch(page, PageEvent::NavLinkClicked);
                                            follow_anchor(page, &ev, &click_href);
                                        }
                                    >
                                        {section.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="nav-actions">
                    <button
                        id="themeToggle"
                        class="theme-toggle"
                        title="Toggle theme (T)"
                        style:transform=toggle_transform
                        on:click=move |_| dispatch(page, PageEvent::ThemeToggleClicked)
                    >
                        <i class=theme_icon></i>
                    </button>
                    <button
                        id="hamburger"
                        class="hamburger"
                        class:active=hamburger_active
                        aria-label="Toggle navigation"
                        on:click=move |_| dispatch(page, PageEvent::HamburgerClicked)
                    >
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </button>
                </div>
            </div>
        </nav>
    }
}
