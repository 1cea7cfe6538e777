//! The three things the client needs from its host: somewhere the session
//! token lives, a way to leave the page, and a way to send requests.

use crate::{RequestOptions, Token};

use async_trait::async_trait;

/// Persistent storage holding the session token under one fixed key.
pub trait TokenStore {
    /// The stored token, if any. An empty stored value is no token.
    fn get(&self) -> Option<Token>;
    fn set(&self, token: &Token);
    fn remove(&self);
}

/// Page-level navigation.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// A fetch-style HTTP client.
///
/// Futures are not required to be `Send`: browser promises are not.
#[async_trait(?Send)]
pub trait Transport {
    type Response;
    type Error;
    /// Pass-through part of the request options, handed over untouched.
    type Extra: Default;

    /// Sends `options` to `url` as is. Implementations must not add or drop
    /// headers.
    async fn send(
        &self,
        url: &str,
        options: RequestOptions<Self::Extra>,
    ) -> Result<Self::Response, Self::Error>;

    fn status(response: &Self::Response) -> u16;

    async fn text(&self, response: Self::Response) -> Result<String, Self::Error>;
}
