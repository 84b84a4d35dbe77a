//! Error type shared by the configuration loader and the DOM installers.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum SitewireError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("dom call failed: {0}")]
    Js(String),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid config value for {field}: {reason}")]
    ConfigValue { field: &'static str, reason: String },
    #[error("counter target is not an integer: {0:?}")]
    CounterTarget(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for SitewireError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub type Result<T, E = SitewireError> = std::result::Result<T, E>;
