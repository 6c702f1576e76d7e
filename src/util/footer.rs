//! Footer year stamp.

/// Write the current calendar year into `#copyrightYear`, if present.
#[cfg(feature = "hydrate")]
pub fn stamp_year(document: &web_sys::Document) {
    if let Some(el) = document.get_element_by_id("copyrightYear") {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}
