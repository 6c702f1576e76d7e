//! Browser environment capability.
//!
//! The navigation controller and splicer never touch `web_sys` directly;
//! they act through [`PageHost`], so the whole navigation path runs under
//! native tests against an in-memory host. [`DomHost`] is the real
//! implementation and requires a browser environment.

use crate::nav::page::PageKey;

/// Document, history, and location access needed by in-place navigation.
pub trait PageHost {
    /// Replace the inner markup of the live primary-content region.
    fn replace_main(&self, html: &str);

    /// Smoothly scroll the viewport back to the top.
    fn scroll_to_top(&self);

    /// Push a history entry carrying `{ page: key }` with `href` as its URL,
    /// without triggering a browser-level navigation.
    fn push_history(&self, key: PageKey, href: &str);

    /// Full browser navigation to `href` (the cache-miss fallback).
    fn navigate(&self, href: &str);
}

impl<H: PageHost + ?Sized> PageHost for &H {
    fn replace_main(&self, html: &str) {
        (**self).replace_main(html);
    }

    fn scroll_to_top(&self) {
        (**self).scroll_to_top();
    }

    fn push_history(&self, key: PageKey, href: &str) {
        (**self).push_history(key, href);
    }

    fn navigate(&self, href: &str) {
        (**self).navigate(href);
    }
}

/// [`PageHost`] backed by the real DOM. All calls degrade to no-ops when the
/// expected elements or browser objects are missing.
#[cfg(feature = "hydrate")]
pub struct DomHost;

#[cfg(feature = "hydrate")]
const MAIN_ID: &str = "main";

#[cfg(feature = "hydrate")]
impl PageHost for DomHost {
    fn replace_main(&self, html: &str) {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(MAIN_ID))
        {
            el.set_inner_html(html);
        }
    }

    fn scroll_to_top(&self) {
        if let Some(window) = web_sys::window() {
            let opts = web_sys::ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
    }

    fn push_history(&self, key: PageKey, href: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(history) = window.history() else {
            return;
        };
        let state = js_sys::Object::new();
        let _ = js_sys::Reflect::set(
            &state,
            &wasm_bindgen::JsValue::from_str("page"),
            &wasm_bindgen::JsValue::from_str(key.as_str()),
        );
        let _ = history.push_state_with_url(&state, "", Some(href));
    }

    fn navigate(&self, href: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(href);
        }
    }
}
