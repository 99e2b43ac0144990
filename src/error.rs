use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures of the browser capabilities the site depends on.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("{api} failed: {message}")]
    Js { api: &'static str, message: String },
}

impl PlatformError {
    /// Adapter for `map_err` on calls that throw a JS exception or on failed
    /// casts, which hand back the original object.
    pub fn js<V: Into<JsValue>>(api: &'static str) -> impl FnOnce(V) -> Self {
        move |value| {
            let value = value.into();
            PlatformError::Js {
                api,
                message: value
                    .as_string()
                    .unwrap_or_else(|| format!("{:?}", value)),
            }
        }
    }
}

pub fn document() -> Result<web_sys::Document, PlatformError> {
    web_sys::window()
        .ok_or(PlatformError::NoWindow)?
        .document()
        .ok_or(PlatformError::NoDocument)
}

pub fn body() -> Result<web_sys::HtmlElement, PlatformError> {
    document()?.body().ok_or(PlatformError::NoBody)
}

#[cfg(test)]
mod tests {
    use super::*;
    use web_sys::js_sys::Object;

    fn accepts<V, F: FnOnce(V) -> PlatformError>(_: F) {}

    #[test]
    fn js_adapter_takes_thrown_values_and_failed_casts() {
        accepts::<JsValue, _>(PlatformError::js("setAttribute"));
        accepts::<Object, _>(PlatformError::js("CanvasRenderingContext2d"));
    }

    #[test]
    fn js_errors_name_the_failing_api() {
        let err = PlatformError::Js {
            api: "getContext",
            message: "2d context unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "getContext failed: 2d context unavailable");
    }
}
