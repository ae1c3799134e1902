//! `VisionSphereUtils` for inline page scripts.
//!
//! Exported as a class of static methods so scripts call
//! `VisionSphereUtils.debounce(fn, 250)` as before. Wrapped functions keep
//! the caller's `this` and every argument.

use std::time::Duration;

use js_sys::{Array, Function};
use pacing::TimeoutScheduler;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use crate::dom::element::{DomElement, elements_in, viewport, window};
use crate::dom::observer;
use crate::util::geometry::{is_in_viewport, offset_top};

/// Receiver and argument list of one call to a wrapped function.
type Invocation = (JsValue, Array);

/// Body of a JS factory that turns `inner(receiver, args)` into a plain
/// variadic function.
const FORWARD_CALLS: &str = "return function (...args) { inner(this, args); };";

#[wasm_bindgen]
pub struct VisionSphereUtils;

fn apply(func: &Function, (receiver, args): Invocation) {
    if let Err(err) = func.apply(&receiver, &args) {
        log::warn!("wrapped callback threw: {err:?}");
    }
}

fn forward_calls(inner: Closure<dyn Fn(JsValue, Array)>) -> Result<Function, JsValue> {
    let factory = Function::new_with_args("inner", FORWARD_CALLS);
    factory.call1(&JsValue::NULL, &inner.into_js_value())?.dyn_into::<Function>()
}

fn millis(ms: u32) -> Duration {
    Duration::from_millis(u64::from(ms))
}

#[wasm_bindgen]
impl VisionSphereUtils {
    /// Wrap `func` so it runs once, `wait` ms after the last call, with that
    /// call's `this` and arguments.
    pub fn debounce(func: Function, wait: u32) -> Result<Function, JsValue> {
        let debounced =
            pacing::debounce(move |call: Invocation| apply(&func, call), millis(wait), TimeoutScheduler::new());
        forward_calls(Closure::new(move |receiver: JsValue, args: Array| debounced.call((receiver, args))))
    }

    /// Wrap `func` so it runs at most once per `limit` ms; extra calls are dropped.
    pub fn throttle(func: Function, limit: u32) -> Result<Function, JsValue> {
        let throttled =
            pacing::throttle(move |call: Invocation| apply(&func, call), millis(limit), TimeoutScheduler::new());
        forward_calls(Closure::new(move |receiver: JsValue, args: Array| throttled.call((receiver, args))))
    }

    #[wasm_bindgen(js_name = getOffsetTop)]
    pub fn get_offset_top(element: Option<Element>) -> f64 {
        offset_top(element.map(DomElement).as_ref())
    }

    #[wasm_bindgen(js_name = isInViewport)]
    pub fn is_in_viewport(element: &Element) -> Result<bool, JsValue> {
        let viewport = viewport(&window()?);
        Ok(is_in_viewport(&DomElement(element.clone()), viewport))
    }

    /// `elements` may be any iterable: a `NodeList`, an array or a `Set`.
    #[wasm_bindgen(js_name = animateOnScroll)]
    pub fn animate_on_scroll(elements: &JsValue, class_name: Option<String>) -> Result<(), JsValue> {
        observer::animate_on_scroll(&elements_in(elements)?, class_name.as_deref())?;
        Ok(())
    }
}
