mod client;
mod session;
#[cfg(test)]
mod testing;

pub mod capabilities;
pub mod error;
pub mod memory;

pub use authfetch_types::{
    auth, consts, AuthResponse, Headers, Outcome, RedirectReason, RequestOptions, Settings,
    SignInRequest, SignUpRequest, Token,
};

pub use capabilities::{Navigator, TokenStore, Transport};
pub use client::{default_headers, AuthenticatedClient};
pub use error::Error;
