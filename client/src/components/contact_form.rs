//! Contact section; submissions go through the mail relay.

use leptos::prelude::*;

use crate::content::PROFILE;
use crate::controller::{PageCore, PageEvent};
use crate::state::contact::ContactField;
use crate::util::dispatch::dispatch;

#[component]
pub fn ContactSection() -> impl IntoView {
    let page = expect_context::<RwSignal<PageCore>>();
    let busy = move || page.with(|p| p.contact.in_flight);

    let value = move |field: ContactField| page.with(|p| p.contact.get(field).to_owned());
    let on_input = move |field: ContactField| {
        move |ev: leptos::ev::Event| {
            dispatch(page, PageEvent::ContactFieldChanged { field, value: event_target_value(&ev) });
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        dispatch(page, PageEvent::ContactSubmitted);
    };

    view! {
        <section id="contact" class="contact">
            <h2 class="section-title">"Get In Touch"</h2>
            <div class="contact-content">
                <div class="contact-info">
                    <p><i class="fas fa-envelope"></i>" " {PROFILE.email}</p>
                    <p><i class="fas fa-phone"></i>" " {PROFILE.phone}</p>
                    <p><i class="fas fa-map-marker-alt"></i>" " {PROFILE.location}</p>
                </div>
                <form id="contactForm" class="contact-form" on:submit=on_submit>
                    <input
                        type="text"
                        name="name"
                        placeholder="Your Name"
                        required
                        prop:value=move || value(ContactField::Name)
                        on:input=on_input(ContactField::Name)
                    />
                    <input
                        type="email"
                        name="email"
                        placeholder="Your Email"
                        required
                        prop:value=move || value(ContactField::Email)
                        on:input=on_input(ContactField::Email)
                    />
                    <input
                        type="text"
                        name="subject"
                        placeholder="Subject"
                        prop:value=move || value(ContactField::Subject)
                        on:input=on_input(ContactField::Subject)
                    />
                    <textarea
                        name="message"
                        placeholder="Your Message"
                        rows="5"
                        required
                        prop:value=move || value(ContactField::Message)
                        on:input=on_input(ContactField::Message)
                    ></textarea>
                    <button class="btn btn-primary" type="submit" disabled=busy>
                        {move || if busy() { "Sending..." } else { "Send Message" }}
                    </button>
                </form>
            </div>
        </section>
    }
}
