//! Scroll listeners and one-shot page decoration.

use std::rc::Rc;

use pacing::{TimeoutScheduler, debounce, throttle};
use web_sys::Document;

use crate::config::SiteConfig;
use crate::dom::element::{DomElement, listen, query_all, scroll_y, window};
use crate::error::SiteError;
use crate::util::page::{
    CURRENT_YEAR_SELECTOR, NAV_LINK_SELECTOR, WHATSAPP_CLICK_LOG, WHATSAPP_FLOAT_SELECTOR, current_page,
    mark_current_page,
};
use crate::util::scroll::{
    CHAPTER_LINK_SELECTOR, CHAPTER_SELECTOR, HERO_BG_SELECTOR, active_section, mark_active_chapter, parallax_offset,
    translate_y,
};

/// Highlight the journey link of the chapter under the reading line.
///
/// Scroll ticks are throttled for responsiveness while scrolling, and a
/// debounced pass catches the final position the throttle may have dropped.
pub fn wire_scroll_spy(document: &Document, config: &SiteConfig) -> Result<(), SiteError> {
    let links = query_all(document, CHAPTER_LINK_SELECTOR)?;
    if links.is_empty() {
        return Ok(());
    }
    let chapters = query_all(document, CHAPTER_SELECTOR)?;
    let window = window()?;
    let offset = config.scroll_spy_offset;

    let win = window.clone();
    let update = Rc::new(move || {
        let sections = chapters.iter().map(DomElement::section).collect::<Vec<_>>();
        mark_active_chapter(&links, active_section(&sections, scroll_y(&win), offset));
    });

    let scheduler = TimeoutScheduler::new();
    let leading = {
        let update = Rc::clone(&update);
        throttle(move |()| update(), config.scroll_spy_throttle(), scheduler.clone())
    };
    let trailing = debounce(move |()| update(), config.scroll_spy_throttle(), scheduler);

    leading.call(());
    listen(&window, "scroll", move |_| {
        leading.call(());
        trailing.call(());
    })
}

/// Move `.hero-bg` at a fraction of the scroll speed.
pub fn wire_parallax(document: &Document, config: &SiteConfig) -> Result<(), SiteError> {
    let Some(hero) = document.query_selector(HERO_BG_SELECTOR)? else {
        return Ok(());
    };
    let hero = DomElement(hero);
    let window = window()?;
    let speed = config.parallax_speed;

    let win = window.clone();
    listen(&window, "scroll", move |_| {
        let offset = parallax_offset(scroll_y(&win), speed);
        if let Err(err) = hero.set_style("transform", &translate_y(offset)) {
            log::warn!("parallax update failed: {err}");
        }
    })
}

/// Mark nav links that point at the current page.
pub fn wire_active_page_link(document: &Document, _config: &SiteConfig) -> Result<(), SiteError> {
    let pathname = window()?.location().pathname()?;
    let links = query_all(document, NAV_LINK_SELECTOR)?;
    let page = current_page(&pathname);
    let marked = mark_current_page(&links, page);
    log::debug!("{marked} nav links active for {page}");
    Ok(())
}

/// Fill `.current-year` elements with this year.
pub fn wire_current_year(document: &Document, _config: &SiteConfig) -> Result<(), SiteError> {
    let year = js_sys::Date::new_0().get_full_year().to_string();
    for element in query_all(document, CURRENT_YEAR_SELECTOR)? {
        element.set_text(&year);
    }
    Ok(())
}

/// Log clicks on the floating WhatsApp button.
pub fn wire_whatsapp_clicks(document: &Document, _config: &SiteConfig) -> Result<(), SiteError> {
    let Some(button) = document.query_selector(WHATSAPP_FLOAT_SELECTOR)? else {
        return Ok(());
    };
    listen(&button, "click", |_| log::info!("{WHATSAPP_CLICK_LOG}"))
}
