use crate::error::Error;

use authfetch_core::{Headers, RequestOptions, Transport};

use async_trait::async_trait;
use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// The browser's `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

enum Field<'a> {
    Text(&'a str),
    Headers(&'a Headers),
}

/// Fields written over the copy of the pass-through options, in write
/// order. `headers` is always last: the merged headers replace whatever the
/// caller's object carried.
fn computed_fields<X>(options: &RequestOptions<X>) -> Vec<(&'static str, Field<'_>)> {
    let mut fields = Vec::new();
    if let Some(method) = &options.method {
        fields.push(("method", Field::Text(method)));
    }
    if let Some(body) = &options.body {
        fields.push(("body", Field::Text(body)));
    }
    fields.push(("headers", Field::Headers(&options.headers)));
    fields
}

/// `{...extra, <computed fields>}`, like a spread in a script would build it.
fn request_init(options: &RequestOptions<JsValue>) -> Result<web_sys::RequestInit, JsValue> {
    let init = Object::new();
    if options.extra.is_object() {
        Object::assign(&init, options.extra.unchecked_ref());
    }
    for (key, field) in computed_fields(options) {
        let value = match field {
            Field::Text(text) => JsValue::from_str(text),
            Field::Headers(headers) => {
                let raw = web_sys::Headers::new()?;
                for (name, value) in headers.iter() {
                    raw.set(name, value)?;
                }
                raw.into()
            }
        };
        Reflect::set(&init, &JsValue::from_str(key), &value)?;
    }
    Ok(init.unchecked_into())
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    type Response = Response;
    type Error = Error;
    type Extra = JsValue;

    async fn send(&self, url: &str, options: RequestOptions<JsValue>) -> Result<Response, Error> {
        let init = request_init(&options).map_err(Error::Fetch)?;
        let request =
            web_sys::Request::new_with_str_and_init(url, &init).map_err(Error::Fetch)?;
        let response = JsFuture::from(gloo_utils::window().fetch_with_request(&request))
            .await
            .map_err(Error::Fetch)?;
        Ok(response.unchecked_into())
    }

    fn status(response: &Response) -> u16 {
        response.status()
    }

    async fn text(&self, response: Response) -> Result<String, Error> {
        let text = JsFuture::from(response.text().map_err(Error::Fetch)?)
            .await
            .map_err(Error::Fetch)?;
        Ok(text.as_string().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys<X>(options: &RequestOptions<X>) -> Vec<&'static str> {
        computed_fields(options).into_iter().map(|(key, _)| key).collect()
    }

    #[test]
    fn headers_are_written_last() {
        let options = RequestOptions::new()
            .header("Authorization", "Bearer abc123")
            .body("{}")
            .method("POST");
        assert_eq!(keys(&options), vec!["method", "body", "headers"]);
    }

    #[test]
    fn script_options_only_override_headers() {
        let options = RequestOptions {
            method: None,
            headers: [("Authorization", "Bearer abc123")].into_iter().collect(),
            body: None,
            extra: (),
        };
        assert_eq!(keys(&options), vec!["headers"]);
        match &computed_fields(&options)[0].1 {
            Field::Headers(headers) => {
                assert_eq!(headers.get("authorization"), Some("Bearer abc123"))
            }
            Field::Text(_) => panic!("headers expected"),
        }
    }
}
