use super::*;

#[test]
fn empty_cache_misses_every_key() {
    let cache = PageCache::new();
    for key in PageKey::ALL {
        assert_eq!(cache.get(key), None);
        assert!(!cache.contains(key));
    }
}

#[test]
fn fill_then_get() {
    let mut cache = PageCache::new();
    assert!(cache.fill(PageKey::About, "<main>about</main>".to_owned()));
    assert_eq!(cache.get(PageKey::About), Some("<main>about</main>"));
    assert!(cache.contains(PageKey::About));
}

#[test]
fn first_fill_wins() {
    let mut cache = PageCache::new();
    assert!(cache.fill(PageKey::Projects, "first".to_owned()));
    assert!(!cache.fill(PageKey::Projects, "second".to_owned()));
    assert_eq!(cache.get(PageKey::Projects), Some("first"));
}

#[test]
fn keys_are_disjoint_slots() {
    let mut cache = PageCache::new();
    cache.fill(PageKey::About, "a".to_owned());
    assert_eq!(cache.get(PageKey::Projects), None);
    assert_eq!(cache.get(PageKey::Contact), None);
}
