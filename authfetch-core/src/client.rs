use crate::capabilities::{Navigator, TokenStore, Transport};
use crate::consts::{APPLICATION_JSON, AUTHORIZATION, CONTENT_TYPE, UNAUTHORIZED};
use crate::{Headers, Outcome, RedirectReason, RequestOptions, Settings, Token};

/// Wraps a transport with the session token and sends the user back to the
/// login view once the session is gone.
///
/// The client reads the token on every call and removes it when the server
/// answers 401. It never writes one: that is the job of `sign_in` and
/// `sign_up`.
pub struct AuthenticatedClient<S, N, T> {
    pub(crate) settings: Settings,
    pub(crate) store: S,
    pub(crate) navigator: N,
    pub(crate) transport: T,
}

/// Default headers of an authenticated request: the bearer credential and a
/// JSON content type.
pub fn default_headers(token: &Token) -> Headers {
    [
        (AUTHORIZATION.to_string(), token.bearer()),
        (CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string()),
    ]
    .into_iter()
    .collect()
}

impl<S: TokenStore, N: Navigator, T: Transport> AuthenticatedClient<S, N, T> {
    pub fn new(settings: Settings, store: S, navigator: N, transport: T) -> Self {
        Self {
            settings,
            store,
            navigator,
            transport,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub(crate) fn redirect(&self, reason: RedirectReason) -> Outcome<T::Response> {
        tracing::debug!(
            "redirecting to {} because {}",
            self.settings.login_path,
            reason
        );
        self.navigator.navigate(&self.settings.login_path);
        Outcome::Redirected(reason)
    }

    /// Sends an authenticated request.
    ///
    /// Without a stored token nothing is sent and the user is redirected. A
    /// 401 answer removes the token and redirects. Any other answer, error
    /// statuses included, is returned untouched. Transport errors are passed
    /// through as they are.
    pub async fn request(
        &self,
        url: &str,
        options: RequestOptions<T::Extra>,
    ) -> Result<Outcome<T::Response>, T::Error> {
        let Some(token) = self.store.get() else {
            return Ok(self.redirect(RedirectReason::MissingToken));
        };

        if options.headers.contains(AUTHORIZATION) {
            tracing::warn!(
                "request to {} overrides the session's {} header",
                url,
                AUTHORIZATION
            );
        }
        let headers = default_headers(&token).overlay(&options.headers);
        let options = RequestOptions { headers, ..options };

        tracing::trace!(
            "sending {} {}",
            options.method.as_deref().unwrap_or("GET"),
            url
        );
        let response = self.transport.send(url, options).await?;

        if T::status(&response) == UNAUTHORIZED {
            self.store.remove();
            return Ok(self.redirect(RedirectReason::Unauthorized));
        }
        Ok(Outcome::Completed(response))
    }

    pub async fn get(&self, url: &str) -> Result<Outcome<T::Response>, T::Error> {
        self.request(url, RequestOptions::default()).await
    }
}
