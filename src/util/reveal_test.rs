#![allow(clippy::float_cmp)]

use super::*;

use std::cell::RefCell;
use std::rc::Rc;

/// Records class edits; clones share the record.
#[derive(Clone, Default)]
struct Element {
    name: &'static str,
    classes: Rc<RefCell<Vec<String>>>,
}

impl Element {
    fn named(name: &'static str) -> Self {
        Self { name, classes: Rc::default() }
    }
}

impl ClassTarget for Element {
    fn add_class(&self, class: &str) {
        self.classes.borrow_mut().push(class.to_owned());
    }

    fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().retain(|c| c != class);
    }
}

#[test]
fn animate_in_defaults() {
    let policy = RevealPolicy::animate_in(None);
    assert_eq!(policy.class_name, "animate-in");
    assert_eq!(policy.threshold, 0.1);
    assert!(policy.root_margin.is_none());
    assert!(!policy.unobserve_on_reveal);
}

#[test]
fn animate_in_custom_class() {
    assert_eq!(RevealPolicy::animate_in(Some("fade-up")).class_name, "fade-up");
}

#[test]
fn card_reveal_follows_config() {
    let policy = RevealPolicy::card_reveal(&SiteConfig::default());
    assert_eq!(policy.class_name, "visible");
    assert_eq!(policy.root_margin.as_deref(), Some("0px 0px -50px 0px"));
    assert!(policy.unobserve_on_reveal);
}

#[test]
fn only_intersecting_entries_get_class() {
    let a = Element::named("a");
    let b = Element::named("b");
    let policy = RevealPolicy::animate_in(None);

    let released = policy.apply([VisibilityEntry::new(a.clone(), true), VisibilityEntry::new(b.clone(), false)]);

    assert!(released.is_empty());
    assert_eq!(*a.classes.borrow(), vec!["animate-in"]);
    assert!(b.classes.borrow().is_empty());
}

#[test]
fn animate_in_may_fire_again_on_reentry() {
    let a = Element::named("a");
    let policy = RevealPolicy::animate_in(None);

    policy.apply([VisibilityEntry::new(a.clone(), true)]);
    policy.apply([VisibilityEntry::new(a.clone(), false)]);
    policy.apply([VisibilityEntry::new(a.clone(), true)]);

    assert_eq!(a.classes.borrow().len(), 2);
}

#[test]
fn card_reveal_releases_revealed_targets() {
    let a = Element::named("a");
    let b = Element::named("b");
    let policy = RevealPolicy::card_reveal(&SiteConfig::default());

    let released = policy.apply([VisibilityEntry::new(a, true), VisibilityEntry::new(b, false)]);

    let names = released.iter().map(|e| e.name).collect::<Vec<_>>();
    assert_eq!(names, vec!["a"]);
    assert_eq!(*released[0].classes.borrow(), vec!["visible"]);
}
