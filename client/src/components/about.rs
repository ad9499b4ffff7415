//! About and projects sections. Static content only.

use leptos::prelude::*;

use crate::content::PROFILE;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <h2 class="section-title">"About Me"</h2>
            <div class="about-content">
                {PROFILE.about.iter().map(|para| view! { <p>{*para}</p> }).collect_view()}
                <div class="about-details">
                    <p><i class="fas fa-map-marker-alt"></i>" " {PROFILE.location}</p>
                    <p><i class="fas fa-envelope"></i>" " {PROFILE.email}</p>
                </div>
                {PROFILE
                    .education
                    .iter()
                    .map(|entry| {
                        view! {
                            <div class="education-card">
                                <h3>{entry.degree}</h3>
                                <p>{entry.institution}</p>
                                <span class="education-period">{entry.period}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="projects">
            <h2 class="section-title">"Projects"</h2>
            <div class="projects-grid">
                {PROFILE
                    .projects
                    .iter()
                    .map(|project| {
                        view! {
                            <article class="project-card">
                                <h3>{project.title}</h3>
                                <p>{project.summary}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
