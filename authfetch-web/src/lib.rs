mod error;
mod navigation;
mod options;
mod settings;
mod storage;
mod transport;

pub use error::Error;
pub use navigation::WindowNavigator;
pub use settings::load_settings;
pub use storage::LocalTokenStore;
pub use transport::FetchTransport;

use authfetch_core::{AuthenticatedClient, Outcome, Settings, SignInRequest, SignUpRequest};

use serde::Serialize;
use std::sync::OnceLock;
use wasm_bindgen::prelude::*;

pub type WebClient = AuthenticatedClient<LocalTokenStore, WindowNavigator, FetchTransport>;

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// A client bound to `localStorage`, `window.location` and `fetch`, using
/// the settings given to `init` (or the defaults).
pub fn client() -> WebClient {
    let settings = SETTINGS.get().cloned().unwrap_or_default();
    let store = LocalTokenStore::new(settings.token_key.clone());
    AuthenticatedClient::new(settings, store, WindowNavigator, FetchTransport)
}

fn init_logging() {
    use tracing_subscriber::prelude::*;
    console_error_panic_hook::set_once();
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(tracing_web::MakeWebConsoleWriter::new());
    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    Ok(value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

/// Transport failures keep the value `fetch` rejected with. Everything else
/// becomes a JS `Error`.
fn auth_error(e: authfetch_core::Error<Error>) -> JsValue {
    match e {
        authfetch_core::Error::Transport(e) => e.into(),
        e => js_sys::Error::new(&e.to_string()).into(),
    }
}

/// Sets up logging and settings. Without an argument, settings are read
/// from `settings.json`.
#[wasm_bindgen]
pub async fn init(settings: JsValue) -> Result<(), JsValue> {
    init_logging();
    let settings = if settings.is_undefined() || settings.is_null() {
        load_settings().await
    } else {
        serde_wasm_bindgen::from_value(settings)?
    };
    if SETTINGS.set(settings).is_err() {
        tracing::warn!("settings were already initialized");
    }
    Ok(())
}

/// `fetch` with the session token. Resolves to the `Response`, or to
/// `undefined` when the page is being sent to the login view. Network
/// failures reject with whatever `fetch` rejected with.
#[wasm_bindgen(js_name = authenticatedFetch)]
pub async fn authenticated_fetch(url: String, options: JsValue) -> Result<JsValue, JsValue> {
    let options = crate::options::from_js(options)?;
    match client().request(&url, options).await? {
        Outcome::Completed(response) => Ok(response.into()),
        Outcome::Redirected(_) => Ok(JsValue::UNDEFINED),
    }
}

#[wasm_bindgen(js_name = signIn)]
pub async fn sign_in(email: String, password: String) -> Result<JsValue, JsValue> {
    let auth = client()
        .sign_in(&SignInRequest { email, password })
        .await
        .map_err(auth_error)?;
    to_js(&auth)
}

#[wasm_bindgen(js_name = signUp)]
pub async fn sign_up(
    email: String,
    password: String,
    full_name: String,
) -> Result<JsValue, JsValue> {
    let request = SignUpRequest {
        email,
        password,
        full_name,
    };
    let auth = client()
        .sign_up(&request)
        .await
        .map_err(auth_error)?;
    to_js(&auth)
}

#[wasm_bindgen(js_name = logOut)]
pub fn log_out() {
    client().log_out()
}

#[wasm_bindgen(js_name = isSignedIn)]
pub fn is_signed_in() -> bool {
    client().is_signed_in()
}
