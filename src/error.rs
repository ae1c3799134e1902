//! Error type for page wiring.
//!
//! Only the browser host can fail: the core utilities have no error paths.
//! A wiring step that fails is logged and skipped; the rest of the page still
//! gets wired.

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("browser window is unavailable")]
    NoWindow,
    #[error("document is unavailable")]
    NoDocument,
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("dom call failed: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(feature = "hydrate")]
impl From<SiteError> for wasm_bindgen::JsValue {
    fn from(err: SiteError) -> Self {
        Self::from_str(&err.to_string())
    }
}
