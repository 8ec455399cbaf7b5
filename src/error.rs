use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Error, Debug)]
pub enum UiError {
    #[error("element #{id} not found on the page")]
    MissingElement { id: String },

    #[error("editor widget `{widget}` is not loaded")]
    EditorUnavailable { widget: String },

    #[error("invalid ui config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("browser call failed: {0}")]
    Js(String),
}

impl UiError {
    pub fn missing(id: &str) -> Self {
        Self::MissingElement { id: id.to_string() }
    }

    pub fn js(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|err| String::from(err.message()))
            })
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Js(message)
    }
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
