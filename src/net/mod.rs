//! HTTP access to sub-page markup and the contact form endpoint.

pub mod api;
