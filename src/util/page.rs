//! Static page decoration: current-page nav highlight and card stagger.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::util::scroll::ACTIVE_CLASS;
use crate::util::target::NavLink;

pub const DEFAULT_PAGE: &str = "index.html";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const CURRENT_YEAR_SELECTOR: &str = ".current-year";
/// Floating chat button; clicks are logged for analytics.
pub const WHATSAPP_FLOAT_SELECTOR: &str = ".whatsapp-float";
pub const WHATSAPP_CLICK_LOG: &str = "WhatsApp button clicked";

/// Last path segment of a location, `index.html` for a directory path.
#[must_use]
pub fn current_page(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => DEFAULT_PAGE,
    }
}

/// Page part of a link `href`, without any fragment.
#[must_use]
pub fn link_page(href: &str) -> &str {
    href.split('#').next().unwrap_or(href)
}

/// Mark every link to `page` active. Other links are left as they are.
///
/// Returns how many links were marked.
pub fn mark_current_page<L: NavLink>(links: &[L], page: &str) -> usize {
    let mut marked = 0;
    for link in links {
        let Some(href) = link.href() else {
            continue;
        };
        if link_page(&href) == page {
            link.add_class(ACTIVE_CLASS);
            marked += 1;
        }
    }
    marked
}

/// CSS `transition-delay` for the card at `index` within its grid.
#[must_use]
pub fn stagger_delay(index: usize, step_secs: f64) -> String {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    format!("{}s", f64::from(index) * step_secs)
}
