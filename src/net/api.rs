//! HTTP helpers for sub-page preloading and contact form submission.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds get stubs, since both calls are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/status outputs instead of panics: a failed preload
//! leaves its cache slot empty for the session, a failed submission turns
//! into inline status text. Nothing retries.

#![allow(clippy::unused_async)]

#[cfg(feature = "hydrate")]
use crate::components::contact_form::FormStatus;
use crate::nav::page::PageKey;

/// Fetch the markup for one sub-page. Returns `None` on any fetch-level
/// fault (network error, non-2xx status, unreadable body).
pub async fn fetch_subpage(base_path: &str, key: PageKey) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let url = crate::nav::page::resource_url(base_path, key);
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.text().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base_path, key);
        None
    }
}

/// Submit the contact form fields to `action` as multipart form data and
/// fold the response into a displayable status.
#[cfg(feature = "hydrate")]
pub async fn post_contact_form(action: &str, data: web_sys::FormData) -> FormStatus {
    let Ok(request) = gloo_net::http::Request::post(action)
        .header("Accept", "application/json")
        .body(data)
    else {
        return FormStatus::ConnectionFailed;
    };

    match request.send().await {
        Ok(resp) if resp.ok() => FormStatus::Sent,
        Ok(resp) => {
            let body = resp.text().await.unwrap_or_default();
            crate::components::contact_form::rejection_status(&body)
        }
        Err(_) => FormStatus::ConnectionFailed,
    }
}
