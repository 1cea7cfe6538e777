/// Failures of the session helpers (`sign_in`, `sign_up`).
///
/// `AuthenticatedClient::request` does not use this type: its transport
/// errors reach the caller unwrapped.
#[derive(Debug, derive_more::Display)]
pub enum Error<E> {
    #[display("Transport error: {_0}")]
    Transport(E),
    #[display("Authentication was rejected with status {_0}")]
    Rejected(u16),
    #[display("Bad authentication payload: {_0}")]
    Json(serde_json::Error),
    #[display("Authentication succeeded without a session token")]
    EmptyToken,
}

impl<E: std::fmt::Debug + std::fmt::Display> std::error::Error for Error<E> {}

impl<E> From<serde_json::Error> for Error<E> {
    fn from(e: serde_json::Error) -> Error<E> {
        Error::Json(e)
    }
}

impl<E> Error<E> {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Error::Rejected(_))
    }
}
