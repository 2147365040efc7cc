//! Setup failures at the browser boundary

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("element #{id} is not a {expected}")]
    WrongElement { id: String, expected: &'static str },
    #[error("2D canvas context unavailable")]
    NoContext,
    #[error("invalid start options: {0}")]
    Options(String),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl ClientError {
    pub fn js(err: JsValue) -> Self {
        ClientError::Js(format!("{:?}", err))
    }
}

impl From<ClientError> for JsValue {
    fn from(err: ClientError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
