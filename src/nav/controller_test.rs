use super::*;
use crate::env::fake::FakeHost;

fn page(title: &str) -> String {
    format!("<html><body><main id=\"main\"><h1>{title}</h1></main></body></html>")
}

fn cache_with(entries: &[(PageKey, &str)]) -> Rc<RefCell<PageCache>> {
    let cache = Rc::new(RefCell::new(PageCache::new()));
    for (key, markup) in entries {
        cache.borrow_mut().fill(*key, (*markup).to_owned());
    }
    cache
}

#[test]
fn cached_click_splices_without_full_navigation() {
    let host = FakeHost::default();
    let markup = page("About");
    let controller = NavController::new(&host, cache_with(&[(PageKey::About, &markup)]));

    let action = controller.handle_click("subpages/about.html");

    assert_eq!(action, ClickAction::Spliced(PageKey::About));
    assert_eq!(host.main_html.borrow().as_deref(), Some("<h1>About</h1>"));
    assert!(host.navigations.borrow().is_empty());
    assert_eq!(
        *host.pushed.borrow(),
        vec![(PageKey::About, "subpages/about.html".to_owned())]
    );
}

#[test]
fn uncached_click_falls_back_to_full_navigation() {
    let host = FakeHost::default();
    let controller = NavController::new(&host, cache_with(&[]));

    let action = controller.handle_click("subpages/projects.html");

    assert_eq!(action, ClickAction::Fallback);
    assert_eq!(*host.navigations.borrow(), vec!["subpages/projects.html".to_owned()]);
    assert!(host.pushed.borrow().is_empty());
    assert!(host.main_html.borrow().is_none());
}

#[test]
fn external_reference_passes_through_untouched() {
    let host = FakeHost::default();
    let markup = page("About");
    let controller = NavController::new(&host, cache_with(&[(PageKey::About, &markup)]));

    assert_eq!(controller.handle_click("https://example.com"), ClickAction::PassThrough);
    assert_eq!(controller.handle_click("index.html"), ClickAction::PassThrough);

    assert!(host.navigations.borrow().is_empty());
    assert!(host.pushed.borrow().is_empty());
    assert!(host.main_html.borrow().is_none());
}

#[test]
fn unknown_subpage_reference_falls_back() {
    let host = FakeHost::default();
    let controller = NavController::new(&host, cache_with(&[]));

    assert_eq!(controller.handle_click("subpages/blog.html"), ClickAction::Fallback);
    assert_eq!(*host.navigations.borrow(), vec!["subpages/blog.html".to_owned()]);
}

#[test]
fn malformed_cached_markup_still_pushes_history() {
    let host = FakeHost::default();
    let controller =
        NavController::new(&host, cache_with(&[(PageKey::Contact, "<div>no main</div>")]));

    let action = controller.handle_click("subpages/contact.html");

    assert_eq!(action, ClickAction::Spliced(PageKey::Contact));
    assert!(host.main_html.borrow().is_none());
    assert_eq!(host.pushed.borrow().len(), 1);
}

#[test]
fn popstate_with_cached_key_resplices() {
    let host = FakeHost::default();
    let markup = page("Projects");
    let controller = NavController::new(&host, cache_with(&[(PageKey::Projects, &markup)]));

    assert!(controller.handle_popstate(Some(PageKey::Projects)));
    assert_eq!(host.main_html.borrow().as_deref(), Some("<h1>Projects</h1>"));
}

#[test]
fn popstate_with_uncached_key_is_a_no_op() {
    let host = FakeHost::default();
    let controller = NavController::new(&host, cache_with(&[]));

    assert!(!controller.handle_popstate(Some(PageKey::About)));
    assert!(host.main_html.borrow().is_none());
    assert_eq!(*host.scrolls.borrow(), 0);
}

#[test]
fn popstate_without_state_is_a_no_op() {
    let host = FakeHost::default();
    let markup = page("About");
    let controller = NavController::new(&host, cache_with(&[(PageKey::About, &markup)]));

    assert!(!controller.handle_popstate(None));
    assert!(host.main_html.borrow().is_none());
}

#[test]
fn history_round_trip_renders_the_same_content() {
    let host = FakeHost::default();
    let markup = page("About");
    let controller = NavController::new(&host, cache_with(&[(PageKey::About, &markup)]));

    controller.handle_click("subpages/about.html");
    let after_click = host.main_html.borrow().clone();

    host.replace_main("<h1>Somewhere else</h1>");
    let key = host.pushed.borrow()[0].0;
    assert!(controller.handle_popstate(Some(key)));

    assert_eq!(*host.main_html.borrow(), after_click);
}
