//! `web_sys` adapters for the `util` traits, plus query and listener helpers.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlImageElement, Node, NodeList, Window};

use crate::error::SiteError;
use crate::util::geometry::{LayoutBox, OffsetNode, Rect, Viewport};
use crate::util::lazy::{DATA_SRC_ATTR, LazyImage};
use crate::util::scroll::Section;
use crate::util::target::{ClassTarget, NavLink, filter_members};

/// A DOM element seen through the `util` traits.
#[derive(Debug, Clone, PartialEq)]
pub struct DomElement(pub Element);

impl DomElement {
    fn html(&self) -> Option<&HtmlElement> {
        self.0.dyn_ref::<HtmlElement>()
    }

    /// Set one inline style property. Non-HTML elements are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Js`] when the browser rejects the property.
    pub fn set_style(&self, property: &str, value: &str) -> Result<(), SiteError> {
        if let Some(html) = self.html() {
            html.style().set_property(property, value)?;
        }
        Ok(())
    }

    pub fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    /// Measure as a scroll-spy section: local offset and rendered height.
    #[must_use]
    pub fn section(&self) -> Section {
        Section {
            id: self.0.get_attribute("id"),
            top: self.local_offset_top(),
            height: self.html().map_or(0.0, |html| f64::from(html.offset_height())),
        }
    }
}

impl LayoutBox for DomElement {
    fn bounding_rect(&self) -> Rect {
        let rect = self.0.get_bounding_client_rect();
        Rect::new(rect.top(), rect.left(), rect.bottom(), rect.right())
    }
}

impl OffsetNode for DomElement {
    fn local_offset_top(&self) -> f64 {
        self.html().map_or(0.0, |html| f64::from(html.offset_top()))
    }

    fn offset_parent(&self) -> Option<Self> {
        self.html().and_then(HtmlElement::offset_parent).map(DomElement)
    }
}

impl ClassTarget for DomElement {
    fn add_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().add_1(class) {
            log::warn!("add class {class} failed: {err:?}");
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().remove_1(class) {
            log::warn!("remove class {class} failed: {err:?}");
        }
    }
}

impl NavLink for DomElement {
    fn href(&self) -> Option<String> {
        self.0.get_attribute("href")
    }
}

impl LazyImage for DomElement {
    fn deferred_src(&self) -> Option<String> {
        self.0.get_attribute(DATA_SRC_ATTR)
    }

    fn set_src(&self, src: &str) {
        if let Some(img) = self.0.dyn_ref::<HtmlImageElement>() {
            img.set_src(src);
        } else if let Err(err) = self.0.set_attribute("src", src) {
            log::warn!("set src failed: {err:?}");
        }
    }

    fn clear_deferred_src(&self) {
        if let Err(err) = self.0.remove_attribute(DATA_SRC_ATTR) {
            log::warn!("remove {DATA_SRC_ATTR} failed: {err:?}");
        }
    }
}

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::NoDocument)
}

/// Elements of a `NodeList`, skipping non-element nodes.
#[must_use]
pub fn elements_of(list: &NodeList) -> Vec<DomElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .flat_map(<Node as JsCast>::dyn_into::<Element>)
        .map(DomElement)
        .collect()
}

/// Elements of any iterable collection: a `NodeList`, an array, a `Set`.
/// Non-element members are skipped.
pub fn elements_in(collection: &JsValue) -> Result<Vec<DomElement>, SiteError> {
    let Some(members) = js_sys::try_iter(collection)? else {
        return Err(SiteError::Js("expected an iterable collection of elements".to_owned()));
    };
    Ok(filter_members(members, |member: JsValue| member.dyn_into::<Element>().map(DomElement))?)
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<DomElement>, SiteError> {
    Ok(elements_of(&document.query_selector_all(selector)?))
}

pub fn query_within(root: &DomElement, selector: &str) -> Result<Vec<DomElement>, SiteError> {
    Ok(elements_of(&root.0.query_selector_all(selector)?))
}

fn window_extent(extent: Result<JsValue, JsValue>, axis: &str) -> Option<f64> {
    match extent {
        Ok(value) => value.as_f64(),
        Err(err) => {
            log::warn!("window inner {axis} unavailable: {err:?}");
            None
        }
    }
}

/// Layout viewport size, falling back to the root element's client size.
#[must_use]
pub fn viewport(window: &Window) -> Viewport {
    let inner = (
        window_extent(window.inner_width(), "width"),
        window_extent(window.inner_height(), "height"),
    );
    let client = window
        .document()
        .and_then(|doc| doc.document_element())
        .map(|root| (f64::from(root.client_width()), f64::from(root.client_height())));
    Viewport::from_extents(inner, client)
}

#[must_use]
pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Attach a listener for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), SiteError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
