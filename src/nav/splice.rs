#[cfg(test)]
#[path = "splice_test.rs"]
mod splice_test;

use crate::env::PageHost;

/// Inner markup of the first `<main>` element in `markup`, or `None` when
/// the document carries no primary-content region. Our own sub-pages use
/// lowercase tags, so the scan is case-sensitive.
pub fn extract_main(markup: &str) -> Option<&str> {
    let open = find_main_open(markup)?;
    let body_start = open + markup[open..].find('>')? + 1;
    let body_end = body_start + markup[body_start..].find("</main")?;
    Some(&markup[body_start..body_end])
}

fn find_main_open(markup: &str) -> Option<usize> {
    let mut from = 0;
    while let Some(at) = markup[from..].find("<main") {
        let at = from + at;
        // "<maintenance>" must not match; the tag name ends here.
        match markup[at + 5..].chars().next() {
            Some('>' | ' ' | '\t' | '\n' | '\r' | '/') => return Some(at),
            _ => from = at + 5,
        }
    }
    None
}

/// Swap the live primary-content region for the one in `markup` and scroll
/// to the top. Markup without a primary-content region is a silent no-op;
/// the previous content stays visible. Returns whether a swap happened.
pub fn splice<H: PageHost>(host: &H, markup: &str) -> bool {
    match extract_main(markup) {
        Some(inner) => {
            host.replace_main(inner);
            host.scroll_to_top();
            true
        }
        None => false,
    }
}
