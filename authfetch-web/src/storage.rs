use authfetch_core::{Token, TokenStore};

use gloo_storage::{LocalStorage, Storage};

/// The session token as a raw `localStorage` item.
///
/// Values are plain strings, not JSON, so tokens written by any other script
/// on the page with `localStorage.setItem` are read back as is.
#[derive(Clone, Debug)]
pub struct LocalTokenStore {
    key: String,
}

impl LocalTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl TokenStore for LocalTokenStore {
    fn get(&self) -> Option<Token> {
        LocalStorage::raw()
            .get_item(&self.key)
            .ok()
            .flatten()
            .and_then(Token::parse)
    }

    fn set(&self, token: &Token) {
        if let Err(e) = LocalStorage::raw().set_item(&self.key, token.as_str()) {
            tracing::error!("failed to store the session token: {:?}", e);
        }
    }

    fn remove(&self) {
        if let Err(e) = LocalStorage::raw().remove_item(&self.key) {
            tracing::error!("failed to remove the session token: {:?}", e);
        }
    }
}
