//! `IntersectionObserver` wiring for reveal effects and lazy images.

use js_sys::{Array, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::SiteConfig;
use crate::dom::element::{DomElement, query_all, query_within, window};
use crate::error::SiteError;
use crate::util::lazy::{self, LAZY_IMAGE_SELECTOR};
use crate::util::page::stagger_delay;
use crate::util::reveal::{CARD_REVEAL_SELECTOR, RevealPolicy, STAGGER_GROUP_SELECTOR};
use crate::util::target::VisibilityEntry;

/// Observe `elements`, handing each batch to `on_batch`.
///
/// Whatever `on_batch` returns is unobserved.
fn observe<F>(
    elements: &[DomElement],
    threshold: Option<f64>,
    root_margin: Option<&str>,
    mut on_batch: F,
) -> Result<IntersectionObserver, SiteError>
where
    F: FnMut(Vec<VisibilityEntry<DomElement>>) -> Vec<DomElement> + 'static,
{
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let batch = entries
                .iter()
                .flat_map(<JsValue as JsCast>::dyn_into::<IntersectionObserverEntry>)
                .map(|entry| VisibilityEntry::new(DomElement(entry.target()), entry.is_intersecting()))
                .collect::<Vec<_>>();
            for done in on_batch(batch) {
                observer.unobserve(&done.0);
            }
        },
    );

    let init = IntersectionObserverInit::new();
    if let Some(threshold) = threshold {
        init.set_threshold(&JsValue::from_f64(threshold));
    }
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for element in elements {
        observer.observe(&element.0);
    }
    Ok(observer)
}

/// Add `class_name` (default `animate-in`) to each element as it scrolls in.
pub fn animate_on_scroll(
    elements: &[DomElement],
    class_name: Option<&str>,
) -> Result<IntersectionObserver, SiteError> {
    let policy = RevealPolicy::animate_in(class_name);
    let threshold = policy.threshold;
    observe(elements, Some(threshold), None, move |batch| policy.apply(batch))
}

/// Reveal `.card-reveal` elements once each.
pub fn wire_card_reveal(document: &Document, config: &SiteConfig) -> Result<(), SiteError> {
    let cards = query_all(document, CARD_REVEAL_SELECTOR)?;
    if cards.is_empty() {
        return Ok(());
    }
    let policy = RevealPolicy::card_reveal(config);
    let threshold = policy.threshold;
    let margin = policy.root_margin.clone();
    observe(&cards, Some(threshold), margin.as_deref(), move |batch| policy.apply(batch))?;
    log::debug!("observing {} reveal cards", cards.len());
    Ok(())
}

/// Stagger the reveal transition of cards within each grid.
pub fn wire_card_stagger(document: &Document, config: &SiteConfig) -> Result<(), SiteError> {
    for group in query_all(document, STAGGER_GROUP_SELECTOR)? {
        for (index, card) in query_within(&group, CARD_REVEAL_SELECTOR)?.iter().enumerate() {
            card.set_style("transition-delay", &stagger_delay(index, config.stagger_step_secs))?;
        }
    }
    Ok(())
}

/// Load `img[data-src]` images as they approach the viewport.
pub fn wire_lazy_images(document: &Document, _config: &SiteConfig) -> Result<(), SiteError> {
    let images = query_all(document, LAZY_IMAGE_SELECTOR)?;
    if images.is_empty() {
        return Ok(());
    }
    let window = window()?;
    let supported = Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))?;
    if !supported {
        let loaded = lazy::load_all(images);
        log::debug!("no IntersectionObserver; loaded {loaded} images eagerly");
        return Ok(());
    }
    observe(&images, None, None, lazy::on_entries)?;
    Ok(())
}
