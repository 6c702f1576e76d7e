//! Small page-level utilities: theme persistence and the footer year stamp.

pub mod footer;
pub mod theme;
