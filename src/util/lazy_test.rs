use super::*;

use std::cell::RefCell;

#[derive(Default)]
struct Img {
    data_src: RefCell<Option<String>>,
    src: RefCell<Option<String>>,
}

impl Img {
    fn deferred(url: &str) -> Self {
        Self { data_src: RefCell::new(Some(url.to_owned())), src: RefCell::new(None) }
    }
}

impl LazyImage for &Img {
    fn deferred_src(&self) -> Option<String> {
        self.data_src.borrow().clone()
    }

    fn set_src(&self, src: &str) {
        *self.src.borrow_mut() = Some(src.to_owned());
    }

    fn clear_deferred_src(&self) {
        self.data_src.borrow_mut().take();
    }
}

#[test]
fn load_moves_url_into_src() {
    let img = Img::deferred("/img/hero.webp");
    assert!(load(&&img));
    assert_eq!(img.src.borrow().as_deref(), Some("/img/hero.webp"));
    assert!(img.data_src.borrow().is_none());
}

#[test]
fn load_without_deferred_url_is_noop() {
    let img = Img::default();
    assert!(!load(&&img));
    assert!(img.src.borrow().is_none());
}

#[test]
fn second_load_does_not_touch_src() {
    let img = Img::deferred("/a.png");
    assert!(load(&&img));
    *img.src.borrow_mut() = Some("/changed.png".to_owned());
    assert!(!load(&&img));
    assert_eq!(img.src.borrow().as_deref(), Some("/changed.png"));
}

#[test]
fn entries_load_and_release_only_visible_images() {
    let seen = Img::deferred("/seen.png");
    let unseen = Img::deferred("/unseen.png");

    let released = on_entries([VisibilityEntry::new(&seen, true), VisibilityEntry::new(&unseen, false)]);

    assert_eq!(released.len(), 1);
    assert!(std::ptr::eq(released[0], &seen));
    assert_eq!(seen.src.borrow().as_deref(), Some("/seen.png"));
    assert!(unseen.src.borrow().is_none());
    assert!(unseen.data_src.borrow().is_some());
}

#[test]
fn load_all_counts_deferred_images() {
    let a = Img::deferred("/a.png");
    let b = Img::default();
    let c = Img::deferred("/c.png");

    assert_eq!(load_all([&a, &b, &c]), 2);
    assert_eq!(c.src.borrow().as_deref(), Some("/c.png"));
}
