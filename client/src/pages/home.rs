//! The single-page portfolio.

use leptos::prelude::*;

use crate::components::about::{About, Projects};
use crate::components::contact_form::ContactSection;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::notification::{BackToTop, Toast};
use crate::components::skills::Skills;
use crate::controller::PageCore;
use crate::util::dispatch::{dispatch, install_window_listeners, ready_event};

#[component]
pub fn HomePage() -> impl IntoView {
    let page = expect_context::<RwSignal<PageCore>>();

    install_window_listeners(page);

    // Effects only run in the browser, after hydration.
    Effect::new(move |_| dispatch(page, ready_event()));

    view! {
        <Navbar/>
        <main>
            <Hero/>
            <About/>
            <Skills/>
            <Projects/>
            <ContactSection/>
        </main>
        <Footer/>
        <BackToTop/>
        <Toast/>
    }
}
