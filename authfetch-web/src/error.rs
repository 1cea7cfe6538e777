use wasm_bindgen::{JsCast, JsValue};

/// Failures of the browser bindings. Both variants keep the value JavaScript
/// threw, and converting back to a `JsValue` returns that exact value.
#[derive(Debug, derive_more::Display)]
pub enum Error {
    /// `fetch` rejected, or the `Request` could not be built.
    #[display("Fetch failed: {}", describe(_0))]
    Fetch(JsValue),
    /// Reading the caller's options threw.
    #[display("Bad request options: {}", describe(_0))]
    Options(JsValue),
}

fn describe(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

impl std::error::Error for Error {}

impl From<Error> for JsValue {
    fn from(e: Error) -> JsValue {
        match e {
            Error::Fetch(value) | Error::Options(value) => value,
        }
    }
}
