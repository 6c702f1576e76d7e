//! Prefetching in-place navigation.
//!
//! DESIGN
//! ======
//! Sub-page markup is fetched eagerly at startup into a [`cache::PageCache`].
//! Clicks on internal links consult the cache: a hit swaps the main content
//! region in place and pushes a history entry, a miss falls back to a real
//! page load. Back/forward transitions re-splice from the cache.

pub mod cache;
pub mod controller;
pub mod page;
pub mod splice;
