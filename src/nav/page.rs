#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Reference prefix that marks a link as an internal sub-page.
pub const SUBPAGE_PREFIX: &str = "subpages/";

/// Identifier for a navigable sub-page. The set is fixed at build time;
/// each key maps to exactly one markup resource under `subpages/`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PageKey {
    About,
    Projects,
    Contact,
}

impl PageKey {
    /// Every navigable sub-page, in preload order.
    pub const ALL: [PageKey; 3] = [PageKey::About, PageKey::Projects, PageKey::Contact];

    pub fn as_str(self) -> &'static str {
        match self {
            PageKey::About => "about",
            PageKey::Projects => "projects",
            PageKey::Contact => "contact",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "about" => Some(PageKey::About),
            "projects" => Some(PageKey::Projects),
            "contact" => Some(PageKey::Contact),
            _ => None,
        }
    }

    /// The href an internal link uses for this page.
    pub fn href(self) -> String {
        format!("{SUBPAGE_PREFIX}{}.html", self.as_str())
    }
}

/// Derive the page key from a link reference, or `None` when the reference
/// is not a recognized internal sub-page (default navigation applies then).
pub fn parse_href(href: &str) -> Option<PageKey> {
    let name = href.strip_prefix(SUBPAGE_PREFIX)?.strip_suffix(".html")?;
    PageKey::parse(name)
}

/// Prefix for resolving sub-page resources from the current location.
/// Computed exactly once per page load, at boot.
pub fn base_path(pathname: &str) -> &'static str {
    if pathname.contains("/subpages/") { "../" } else { "./" }
}

/// Resource location for a sub-page, relative to the current document.
pub fn resource_url(base_path: &str, key: PageKey) -> String {
    format!("{base_path}{SUBPAGE_PREFIX}{}.html", key.as_str())
}
