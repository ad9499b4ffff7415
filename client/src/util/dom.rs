//! Window and document glue used by the controller adapter.
//!
//! Every function degrades to a no-op (or a neutral value) when the browser
//! object it needs is missing, and on the server.

use crate::state::scroll::SectionOffset;

/// Current vertical scroll offset.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Current viewport width in CSS pixels.
pub fn viewport_width() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Ids and offsets of every `<section>` in document order.
pub fn measure_sections() -> Vec<SectionOffset> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(list) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.query_selector_all("section").ok())
        else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
            .map(|el| SectionOffset::new(el.id(), f64::from(el.offset_top())))
            .collect()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Offset of the element an in-page `href` (`#id`) points at.
pub fn anchor_target_top(href: &str) -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        if href.len() < 2 {
            return None;
        }
        let el = web_sys::window()?
            .document()?
            .query_selector(href)
            .ok()
            .flatten()?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()?;
        Some(f64::from(el.offset_top()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
        None
    }
}

/// Smooth-scroll the window to `top`.
pub fn scroll_to(top: f64) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = top;
    }
}

/// Lock or release `<body>` scrolling while the mobile menu is open.
pub fn set_scroll_lock(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.body())
        else {
            return;
        };
        let style = body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if let Err(e) = result {
            log::warn!("body scroll lock update failed: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}

/// Blocking `window.alert`.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window()
            && let Err(e) = window.alert_with_message(message)
        {
            log::warn!("alert failed: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Open `html` in a new browsing context and invoke the print dialog.
pub fn print_html(html: &str) {
    #[cfg(feature = "hydrate")]
    {
        let opened = web_sys::window().and_then(|w| w.open_with_url_and_target("", "_blank").ok().flatten());
        let Some(print_window) = opened else {
            log::warn!("print window blocked");
            return;
        };
        let Some(body) = print_window.document().and_then(|doc| doc.body()) else {
            log::warn!("print window has no body");
            return;
        };
        body.set_inner_html(html);
        if let Err(e) = print_window.print() {
            log::warn!("print failed: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = html;
    }
}
