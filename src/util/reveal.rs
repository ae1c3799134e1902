//! Scroll-triggered reveal: add a class once an element becomes visible.
//!
//! A [`RevealPolicy`] describes one watcher: which class to add, the visible
//! fraction that counts as "seen", and whether an element is released after
//! its first reveal. `animate_on_scroll` keeps watching; `.card-reveal`
//! elements are released.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::config::SiteConfig;
use crate::util::target::{ClassTarget, VisibilityEntry};

pub const ANIMATE_IN_CLASS: &str = "animate-in";
pub const CARD_REVEAL_SELECTOR: &str = ".card-reveal";
pub const CARD_VISIBLE_CLASS: &str = "visible";
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Grids whose cards get staggered transition delays.
pub const STAGGER_GROUP_SELECTOR: &str = ".services-grid, .goals-grid, .tiers-grid";

#[derive(Debug, Clone, PartialEq)]
pub struct RevealPolicy {
    pub class_name: String,
    pub threshold: f64,
    pub root_margin: Option<String>,
    pub unobserve_on_reveal: bool,
}

impl RevealPolicy {
    /// Policy behind `animate_on_scroll`. `None` means `animate-in`.
    #[must_use]
    pub fn animate_in(class_name: Option<&str>) -> Self {
        Self {
            class_name: class_name.unwrap_or(ANIMATE_IN_CLASS).to_owned(),
            threshold: DEFAULT_THRESHOLD,
            root_margin: None,
            unobserve_on_reveal: false,
        }
    }

    /// Policy for `.card-reveal` elements: reveal once, slightly before the
    /// card's bottom reaches the fold.
    #[must_use]
    pub fn card_reveal(config: &SiteConfig) -> Self {
        Self {
            class_name: CARD_VISIBLE_CLASS.to_owned(),
            threshold: config.reveal_threshold,
            root_margin: Some(config.reveal_root_margin.clone()),
            unobserve_on_reveal: true,
        }
    }

    /// Apply one batch of watcher entries.
    ///
    /// Returns the targets the watcher should stop observing.
    pub fn apply<T: ClassTarget>(&self, entries: impl IntoIterator<Item = VisibilityEntry<T>>) -> Vec<T> {
        let mut released = Vec::new();
        for entry in entries {
            if !entry.is_intersecting {
                continue;
            }
            entry.target.add_class(&self.class_name);
            if self.unobserve_on_reveal {
                released.push(entry.target);
            }
        }
        released
    }
}
