//! `FormSurface` over an `HtmlFormElement`.

use std::rc::Rc;

use pacing::TimeoutScheduler;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, FormData, HtmlButtonElement, HtmlFormElement};

use crate::config::SiteConfig;
use crate::dom::element::{DomElement, listen};
use crate::error::SiteError;
use crate::util::forms::{
    FormKind, FormSurface, MESSAGE_SELECTOR, SUBMIT_BUTTON_SELECTOR, SUCCESS_MESSAGE_CLASS, simulate_submission,
};

struct DomForm {
    form: HtmlFormElement,
    document: Document,
    fade_secs: f64,
}

impl DomForm {
    fn submit_button(&self) -> Option<HtmlButtonElement> {
        match self.form.query_selector(SUBMIT_BUTTON_SELECTOR) {
            Ok(Some(element)) => match element.dyn_into::<HtmlButtonElement>() {
                Ok(button) => Some(button),
                Err(other) => {
                    log::warn!("submit control is a <{}>, not a button", other.tag_name());
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                log::warn!("submit button lookup failed: {err:?}");
                None
            }
        }
    }

    fn remove_existing_message(&self) {
        match self.form.query_selector(MESSAGE_SELECTOR) {
            Ok(Some(existing)) => existing.remove(),
            Ok(None) => {}
            Err(err) => log::warn!("message lookup failed: {err:?}"),
        }
    }

    fn build_message(&self, text: &str) -> Result<Element, SiteError> {
        let message = self.document.create_element("div")?;
        message.set_class_name(SUCCESS_MESSAGE_CLASS);
        message.set_text_content(Some(text));
        self.form.append_child(&message)?;
        Ok(message)
    }
}

impl FormSurface for DomForm {
    type Message = Element;

    fn fields(&self) -> Vec<(String, String)> {
        let data = match FormData::new_with_form(&self.form) {
            Ok(data) => data,
            Err(err) => {
                log::warn!("form data unavailable: {err:?}");
                return Vec::new();
            }
        };
        let entries = match js_sys::try_iter(&data) {
            Ok(Some(entries)) => entries,
            Ok(None) => return Vec::new(),
            Err(err) => {
                log::warn!("form data not iterable: {err:?}");
                return Vec::new();
            }
        };
        entries
            .flatten()
            .filter_map(|pair| {
                let pair = js_sys::Array::from(&pair);
                Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
            })
            .collect()
    }

    fn submit_label(&self) -> Option<String> {
        self.submit_button().map(|button| button.text_content().unwrap_or_default())
    }

    fn set_submit(&self, label: &str, disabled: bool) {
        if let Some(button) = self.submit_button() {
            button.set_text_content(Some(label));
            button.set_disabled(disabled);
        }
    }

    fn reset(&self) {
        self.form.reset();
    }

    fn show_message(&self, text: &str) -> Option<Element> {
        self.remove_existing_message();
        match self.build_message(text) {
            Ok(message) => Some(message),
            Err(err) => {
                log::warn!("form message failed: {err}");
                None
            }
        }
    }

    fn fade_message(&self, message: &Element) {
        let message = DomElement(message.clone());
        let transition = format!("opacity {}s ease", self.fade_secs);
        let faded = message
            .set_style("opacity", "0")
            .and_then(|()| message.set_style("transition", &transition));
        if let Err(err) = faded {
            log::warn!("message fade failed: {err}");
        }
    }

    fn remove_message(&self, message: &Element) {
        message.remove();
    }
}

/// Intercept the enquiry forms and simulate their submission.
pub fn wire_forms(document: &Document, config: &SiteConfig) -> Result<(), SiteError> {
    let timing = config.submission_timing();
    let scheduler = TimeoutScheduler::new();

    for kind in FormKind::ALL {
        let Some(element) = document.get_element_by_id(kind.form_id()) else {
            continue;
        };
        let Ok(form) = element.dyn_into::<HtmlFormElement>() else {
            log::warn!("#{} is not a form", kind.form_id());
            continue;
        };

        let surface = Rc::new(DomForm {
            form: form.clone(),
            document: document.clone(),
            fade_secs: timing.fade.as_secs_f64(),
        });
        let scheduler = scheduler.clone();
        listen(&form, "submit", move |event| {
            event.prevent_default();
            simulate_submission(Rc::clone(&surface), kind, timing, &scheduler);
        })?;
        log::debug!("{kind} form wired");
    }
    Ok(())
}
