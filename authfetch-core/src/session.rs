use crate::auth::{SIGN_IN_PATH, SIGN_UP_PATH};
use crate::capabilities::{Navigator, TokenStore, Transport};
use crate::consts::{APPLICATION_JSON, CONTENT_TYPE};
use crate::error::Error;
use crate::{
    AuthResponse, AuthenticatedClient, RequestOptions, SignInRequest, SignUpRequest, Token,
};

use serde::Serialize;

impl<S: TokenStore, N: Navigator, T: Transport> AuthenticatedClient<S, N, T> {
    pub fn is_signed_in(&self) -> bool {
        self.store.get().is_some()
    }

    pub async fn sign_in(
        &self,
        request: &SignInRequest,
    ) -> Result<AuthResponse, Error<T::Error>> {
        self.authenticate(SIGN_IN_PATH, request).await
    }

    pub async fn sign_up(
        &self,
        request: &SignUpRequest,
    ) -> Result<AuthResponse, Error<T::Error>> {
        self.authenticate(SIGN_UP_PATH, request).await
    }

    /// Forgets the session and goes to the login view.
    pub fn log_out(&self) {
        self.store.remove();
        self.navigator.navigate(&self.settings.login_path);
    }

    /// Posts credentials to an auth endpoint and stores the token it hands
    /// back. The request carries no bearer header.
    async fn authenticate<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<AuthResponse, Error<T::Error>> {
        let url = self.settings.endpoint(path);
        let options = RequestOptions::<T::Extra>::default()
            .method("POST")
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .json(body)?;
        let response = self
            .transport
            .send(&url, options)
            .await
            .map_err(Error::Transport)?;

        let status = T::status(&response);
        if !(200..300).contains(&status) {
            tracing::debug!("{} answered {}", url, status);
            return Err(Error::Rejected(status));
        }

        let text = self
            .transport
            .text(response)
            .await
            .map_err(Error::Transport)?;
        let auth: AuthResponse = serde_json::from_str(&text)?;
        let token = Token::parse(auth.token.as_str()).ok_or(Error::EmptyToken)?;
        self.store.set(&token);
        tracing::debug!("signed in as {}", auth.email);
        Ok(auth)
    }
}
