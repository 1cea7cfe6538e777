use crate::error::Error;

use authfetch_core::{Headers, RequestOptions};

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// The global `String`, which is how `fetch` turns header values into
    /// text.
    #[wasm_bindgen(js_name = String)]
    fn js_string(value: &JsValue) -> String;
}

/// Options as a page script hands them to `authenticatedFetch`.
///
/// Only `headers` is read, with the same own-enumerable-properties walk as an
/// object spread. The caller's object is kept whole as the pass-through part,
/// so `body`, `method`, `signal` and the rest reach `fetch` as they are.
pub fn from_js(raw: JsValue) -> Result<RequestOptions<JsValue>, Error> {
    if !raw.is_object() {
        return Ok(RequestOptions::default());
    }
    let headers = Reflect::get(&raw, &"headers".into()).map_err(Error::Options)?;
    Ok(RequestOptions {
        method: None,
        headers: headers_from_js(&headers),
        body: None,
        extra: raw,
    })
}

fn headers_from_js(value: &JsValue) -> Headers {
    if value.is_undefined() || value.is_null() {
        return Headers::new();
    }
    Object::entries(value.unchecked_ref::<Object>())
        .iter()
        .map(|entry| {
            let pair: Array = entry.unchecked_into();
            (js_string(&pair.get(0)), js_string(&pair.get(1)))
        })
        .collect()
}
