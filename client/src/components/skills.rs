//! Skill bars that fill in the first time they scroll into view.

use leptos::prelude::*;

use crate::controller::PageCore;

#[cfg(feature = "hydrate")]
fn observe_skill_bars(page: RwSignal<PageCore>) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use crate::controller::PageEvent;
    use crate::state::skills::REVEAL_THRESHOLD;
    use crate::util::dispatch::dispatch;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = target
                    .get_attribute("data-skill-index")
                    .and_then(|raw| raw.parse::<usize>().ok())
                else {
                    continue;
                };
                dispatch(page, PageEvent::SkillIntersected { index, intersecting: entry.is_intersecting() });
                if page.with_untracked(|p| p.skills.is_latched(index)) {
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));
    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(e) => {
            log::warn!("skill observer unavailable: {e:?}");
            return;
        }
    };
    // The observer lives for the whole page.
    callback.forget();

    let Ok(bars) = document.query_selector_all(".skill-progress") else {
        return;
    };
    for i in 0..bars.length() {
        if let Some(el) = bars.item(i).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) {
            observer.observe(&el);
        }
    }
}

/// Skills section.
#[component]
pub fn Skills() -> impl IntoView {
    let page = expect_context::<RwSignal<PageCore>>();
    let count = page.with_untracked(|p| p.skills.bars.len());

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| observe_skill_bars(page));

    view! {
        <section id="skills" class="skills">
            <h2 class="section-title">"Skills"</h2>
            <div class="skills-list">
                {(0..count)
                    .map(|index| {
                        let name = move || page.with(|p| p.skills.bars.get(index).map(|b| b.name.clone()).unwrap_or_default());
                        let percent = move || page.with(|p| p.skills.bars.get(index).map_or(0, |b| b.percent));
                        let width = move || page.with(|p| p.skills.bars.get(index).map_or_else(|| "0".to_owned(), |b| b.width()));
                        view! {
                            <div class="skill-item">
                                <div class="skill-info">
                                    <span>{name}</span>
                                    <span>{move || format!("{}%", percent())}</span>
                                </div>
                                <div class="skill-bar">
                                    <div class="skill-progress" data-skill-index=index.to_string() style:width=width></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
