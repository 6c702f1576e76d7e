#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Horizontal displacement (px) a touch gesture needs to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Current slide of one image carousel. The index wraps in `[0, len)` in
/// both directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len: len.max(1) }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Interpret a completed touch gesture. Swipes left advance, swipes
    /// right go back; anything under the threshold is ignored. Returns
    /// whether the index changed.
    pub fn apply_swipe(&mut self, start_x: f64, end_x: f64) -> bool {
        if end_x < start_x - SWIPE_THRESHOLD_PX {
            self.next();
            true
        } else if end_x > start_x + SWIPE_THRESHOLD_PX {
            self.prev();
            true
        } else {
            false
        }
    }

    /// Rendering offset for the image strip: `index × 100` percent.
    pub fn offset_percent(&self) -> usize {
        self.index * 100
    }
}

/// Wire every `.carousel` element on the page: prev/next buttons plus touch
/// swipe on the image strip.
#[cfg(feature = "hydrate")]
pub fn wire_all(document: &web_sys::Document) {
    use wasm_bindgen::JsCast;

    let Ok(carousels) = document.query_selector_all(".carousel") else {
        return;
    };
    for i in 0..carousels.length() {
        if let Some(root) = carousels.get(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
            wire_one(&root);
        }
    }
}

#[cfg(feature = "hydrate")]
fn wire_one(root: &web_sys::Element) {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Ok(Some(strip)) = root.query_selector(".carousel-images") else {
        return;
    };
    let Ok(strip) = strip.dyn_into::<web_sys::HtmlElement>() else {
        return;
    };
    let len = root
        .query_selector_all("img")
        .map(|imgs| imgs.length())
        .map(|n| usize::try_from(n).unwrap_or(0))
        .unwrap_or(0);
    if len == 0 {
        return;
    }

    let state = Rc::new(RefCell::new(Carousel::new(len)));

    let render = {
        let state = Rc::clone(&state);
        let strip = strip.clone();
        move || {
            let offset = state.borrow().offset_percent();
            let _ = strip
                .style()
                .set_property("transform", &format!("translateX(-{offset}%)"));
        }
    };

    for (selector, forward) in [(".carousel-btn.next", true), (".carousel-btn.prev", false)] {
        let Ok(Some(button)) = root.query_selector(selector) else {
            continue;
        };
        let state = Rc::clone(&state);
        let render = render.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            if forward {
                state.borrow_mut().next();
            } else {
                state.borrow_mut().prev();
            }
            render();
        });
        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Touch swipe: remember where the gesture started, act where it ended.
    let start_x = Rc::new(Cell::new(0.0_f64));
    {
        let start_x = Rc::clone(&start_x);
        let closure = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |ev: web_sys::TouchEvent| {
            if let Some(touch) = ev.touches().get(0) {
                start_x.set(f64::from(touch.client_x()));
            }
        });
        let _ = strip.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let closure = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |ev: web_sys::TouchEvent| {
            let Some(touch) = ev.changed_touches().get(0) else {
                return;
            };
            if state.borrow_mut().apply_swipe(start_x.get(), f64::from(touch.client_x())) {
                render();
            }
        });
        let _ = strip.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
