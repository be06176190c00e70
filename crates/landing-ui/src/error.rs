use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("No window available")]
    NoWindow,
    #[error("Unable to create resize observer: {0}")]
    Observer(String),
    #[error("Unable to update style: {0}")]
    Style(String),
}

impl LayoutError {
    pub fn observer(err: JsValue) -> Self {
        Self::Observer(describe(&err))
    }

    pub fn style(err: JsValue) -> Self {
        Self::Style(describe(&err))
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
