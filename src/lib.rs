//! # portfolio-client
//!
//! WASM behavior layer for the portfolio site: theme persistence,
//! prefetching in-place navigation between sub-pages, the contact form,
//! and project image carousels.
//!
//! All browser access is gated behind the `hydrate` feature; the state and
//! decision logic (page cache, navigation controller, content splicing,
//! form validation, carousel state) is pure Rust and tests natively.

pub mod app;
pub mod components;
pub mod env;
pub mod nav;
pub mod net;
pub mod util;
