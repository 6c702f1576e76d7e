#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::env::PageHost;
use crate::nav::cache::PageCache;
use crate::nav::page::{self, PageKey, SUBPAGE_PREFIX};
use crate::nav::splice;

/// What a link click turned into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickAction {
    /// Not an internal sub-page reference; default navigation proceeds.
    PassThrough,
    /// Served from the cache: content swapped in place, history entry pushed.
    Spliced(PageKey),
    /// Cache miss; a full browser navigation was issued instead.
    Fallback,
}

/// Routes link clicks and history transitions through the page cache.
///
/// The cache handle is injected at construction and shared with the preload
/// tasks; the controller only ever takes snapshot reads of it. Nothing here
/// is fatal: misses degrade to a real page load, stale history state to a
/// no-op.
pub struct NavController<H: PageHost> {
    host: H,
    cache: Rc<RefCell<PageCache>>,
}

impl<H: PageHost> NavController<H> {
    pub fn new(host: H, cache: Rc<RefCell<PageCache>>) -> Self {
        Self { host, cache }
    }

    /// Handle a click on a link with reference `href`.
    ///
    /// Callers suppress the browser's default navigation exactly when the
    /// returned action is not [`ClickAction::PassThrough`].
    pub fn handle_click(&self, href: &str) -> ClickAction {
        if !href.starts_with(SUBPAGE_PREFIX) {
            return ClickAction::PassThrough;
        }

        let cached = page::parse_href(href)
            .and_then(|key| self.cache.borrow().get(key).map(|m| (key, m.to_owned())));

        match cached {
            Some((key, markup)) => {
                // The entry was cached at push time even if the markup turns
                // out to have no main region; history still moves forward.
                let _ = splice::splice(&self.host, &markup);
                self.host.push_history(key, href);
                ClickAction::Spliced(key)
            }
            None => {
                self.host.navigate(href);
                ClickAction::Fallback
            }
        }
    }

    /// Handle a back/forward transition whose restored state carried `key`.
    ///
    /// Keys absent from the cache (never preloaded, or an entry from an
    /// earlier session) are left alone: the browser's restored document
    /// stands. Returns whether content was swapped.
    pub fn handle_popstate(&self, key: Option<PageKey>) -> bool {
        let Some(key) = key else {
            return false;
        };
        let markup = self.cache.borrow().get(key).map(ToOwned::to_owned);
        match markup {
            Some(markup) => splice::splice(&self.host, &markup),
            None => false,
        }
    }
}
