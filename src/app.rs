//! Boot wiring: the document-ready gate plus event registration for theme,
//! navigation, contact form, carousels, and the footer year.
//!
//! Everything here needs a browser environment and sits behind `hydrate`.

#[cfg(feature = "hydrate")]
use std::cell::{Cell, RefCell};
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;
#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(feature = "hydrate")]
use crate::components::{carousel, contact_form};
#[cfg(feature = "hydrate")]
use crate::env::DomHost;
#[cfg(feature = "hydrate")]
use crate::nav::cache::PageCache;
#[cfg(feature = "hydrate")]
use crate::nav::controller::{ClickAction, NavController};
#[cfg(feature = "hydrate")]
use crate::nav::page::{self, PageKey};
#[cfg(feature = "hydrate")]
use crate::util::theme::Theme;
#[cfg(feature = "hydrate")]
use crate::util::{footer, theme};

/// Module entry point. Defers to [`boot`] until the document structure is
/// parsed; runs it directly when the script loads after that point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        let closure = Closure::<dyn FnMut()>::new(boot);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        boot();
    }
}

#[cfg(feature = "hydrate")]
fn boot() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let initial = theme::read_preference();
    theme::apply(initial);
    wire_theme_toggle(&document, initial);

    // Computed exactly once per page load; never recomputed mid-session.
    let pathname = window.location().pathname().unwrap_or_default();
    let base_path = page::base_path(&pathname);

    let cache = Rc::new(RefCell::new(PageCache::new()));
    preload(base_path, &cache);

    let controller = Rc::new(NavController::new(DomHost, cache));
    wire_nav_links(&document, &controller);
    wire_popstate(&window, &controller);

    contact_form::wire(&document);
    carousel::wire_all(&document);
    footer::stamp_year(&document);
}

/// Kick off one background fetch per sub-page. Fetches run concurrently and
/// each fills a disjoint cache slot; a failure leaves its slot empty for the
/// session and is only logged.
#[cfg(feature = "hydrate")]
fn preload(base_path: &'static str, cache: &Rc<RefCell<PageCache>>) {
    for key in PageKey::ALL {
        let cache = Rc::clone(cache);
        wasm_bindgen_futures::spawn_local(async move {
            match crate::net::api::fetch_subpage(base_path, key).await {
                Some(markup) => {
                    cache.borrow_mut().fill(key, markup);
                }
                None => log::warn!("could not preload {}.html", key.as_str()),
            }
        });
    }
}

#[cfg(feature = "hydrate")]
fn wire_nav_links(document: &web_sys::Document, controller: &Rc<NavController<DomHost>>) {
    let Ok(links) = document.query_selector_all(".header-nav a") else {
        return;
    };
    for i in 0..links.length() {
        let Some(link) = links.get(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
            continue;
        };
        let controller = Rc::clone(controller);
        let target = link.clone();
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            let Some(href) = target.get_attribute("href") else {
                return;
            };
            // Default navigation stays untouched for pass-through clicks.
            if controller.handle_click(&href) != ClickAction::PassThrough {
                ev.prevent_default();
            }
        });
        let _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(feature = "hydrate")]
fn wire_popstate(window: &web_sys::Window, controller: &Rc<NavController<DomHost>>) {
    let controller = Rc::clone(controller);
    let closure = Closure::<dyn FnMut(web_sys::PopStateEvent)>::new(
        move |ev: web_sys::PopStateEvent| {
            let _ = controller.handle_popstate(state_page_key(&ev.state()));
        },
    );
    let _ = window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Page key carried by a restored history entry, if any.
#[cfg(feature = "hydrate")]
fn state_page_key(state: &wasm_bindgen::JsValue) -> Option<PageKey> {
    if state.is_null() || state.is_undefined() {
        return None;
    }
    let page = js_sys::Reflect::get(state, &wasm_bindgen::JsValue::from_str("page")).ok()?;
    PageKey::parse(&page.as_string()?)
}

#[cfg(feature = "hydrate")]
fn wire_theme_toggle(document: &web_sys::Document, initial: Theme) {
    let Some(toggle) = document.get_element_by_id("themeToggle") else {
        return;
    };
    let current = Cell::new(initial);
    let closure = Closure::<dyn FnMut()>::new(move || {
        current.set(theme::toggle(current.get()));
    });
    let _ = toggle.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
