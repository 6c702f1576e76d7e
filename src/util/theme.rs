//! Theme persistence and toggle.
//!
//! Reads the saved preference from `localStorage` and applies the `light`
//! class to `<body>`. Toggle writes the new value back. Dark is the default
//! when nothing is stored.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "theme";

#[cfg(feature = "hydrate")]
const LIGHT_CLASS: &str = "light";

/// Display theme. Anything other than a stored `"light"` means dark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn from_saved(saved: Option<&str>) -> Self {
        match saved {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Read the persisted theme preference, defaulting to dark.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let saved = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        Theme::from_saved(saved.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Dark
    }
}

/// Apply or remove the `light` class on `<body>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let class_list = body.class_list();
            match theme {
                Theme::Light => {
                    let _ = class_list.add_1(LIGHT_CLASS);
                }
                Theme::Dark => {
                    let _ = class_list.remove_1(LIGHT_CLASS);
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist the new preference.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, next.as_str());
        }
    }
    next
}
