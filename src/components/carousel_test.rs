use super::*;

#[test]
fn next_wraps_forward() {
    let mut c = Carousel::new(3);
    c.next();
    c.next();
    assert_eq!(c.index(), 2);
    c.next();
    assert_eq!(c.index(), 0);
}

#[test]
fn prev_wraps_backward() {
    let mut c = Carousel::new(3);
    c.prev();
    assert_eq!(c.index(), 2);
}

#[test]
fn single_image_carousel_never_moves() {
    let mut c = Carousel::new(1);
    c.next();
    c.prev();
    c.apply_swipe(200.0, 0.0);
    assert_eq!(c.index(), 0);
}

#[test]
fn offset_tracks_index() {
    let mut c = Carousel::new(4);
    assert_eq!(c.offset_percent(), 0);
    c.next();
    assert_eq!(c.offset_percent(), 100);
    c.next();
    assert_eq!(c.offset_percent(), 200);
}

#[test]
fn swipe_left_advances_swipe_right_goes_back() {
    let mut c = Carousel::new(3);
    assert!(c.apply_swipe(300.0, 200.0));
    assert_eq!(c.index(), 1);
    assert!(c.apply_swipe(100.0, 250.0));
    assert_eq!(c.index(), 0);
}

#[test]
fn swipe_under_threshold_is_ignored() {
    let mut c = Carousel::new(3);
    assert!(!c.apply_swipe(100.0, 51.0));
    // Exactly the threshold does not count; the displacement must exceed it.
    assert!(!c.apply_swipe(100.0, 50.0));
    assert_eq!(c.index(), 0);
    assert!(c.apply_swipe(100.0, 49.0));
    assert_eq!(c.index(), 1);
}

#[test]
fn index_stays_in_range_over_any_sequence() {
    for len in 1..=5 {
        let mut c = Carousel::new(len);
        for step in 0..100 {
            match step % 4 {
                0 => c.next(),
                1 => c.prev(),
                2 => {
                    c.apply_swipe(200.0, 0.0);
                }
                _ => {
                    c.apply_swipe(0.0, 200.0);
                }
            }
            assert!(c.index() < len);
        }
    }
}
