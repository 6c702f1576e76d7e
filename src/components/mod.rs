//! Peripheral page widgets, each wired independently at boot.

pub mod carousel;
pub mod contact_form;
