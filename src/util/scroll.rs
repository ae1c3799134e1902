//! Scroll-position effects: journey scroll spy and hero parallax.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::util::target::NavLink;

pub const CHAPTER_SELECTOR: &str = ".journey-chapter";
pub const CHAPTER_LINK_SELECTOR: &str = ".journey-nav-link";
pub const HERO_BG_SELECTOR: &str = ".hero-bg";
pub const ACTIVE_CLASS: &str = "active";

/// A page section as measured at scroll time.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: Option<String>,
    pub top: f64,
    pub height: f64,
}

impl Section {
    #[must_use]
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Id of the section under `scroll_y + offset`.
///
/// Sections are scanned in document order and the last match wins, so an
/// overlapping later section takes precedence.
#[must_use]
pub fn active_section(sections: &[Section], scroll_y: f64, offset: f64) -> Option<&str> {
    let position = scroll_y + offset;
    sections
        .iter()
        .filter(|section| section.contains(position))
        .filter_map(|section| section.id.as_deref())
        .next_back()
}

/// Fragment target of an in-page link: `#story` -> `story`.
#[must_use]
pub fn fragment_target(href: &str) -> &str {
    href.strip_prefix('#').unwrap_or(href)
}

/// Give `active` to the link pointing at `active_id` and take it from the rest.
pub fn mark_active_chapter<L: NavLink>(links: &[L], active_id: Option<&str>) {
    for link in links {
        link.remove_class(ACTIVE_CLASS);
        let Some(id) = active_id else {
            continue;
        };
        if link.href().as_deref().map(fragment_target) == Some(id) {
            link.add_class(ACTIVE_CLASS);
        }
    }
}

/// Background translation for a scroll position.
#[must_use]
pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    scroll_y * speed
}

/// CSS `transform` value for a vertical translation.
#[must_use]
pub fn translate_y(px: f64) -> String {
    format!("translateY({px}px)")
}
