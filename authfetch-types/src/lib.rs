mod helpers;

pub use helpers::Headers;

/// Header names and values the authenticated client writes.
pub mod consts {
    pub const AUTHORIZATION: &str = "Authorization";
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const APPLICATION_JSON: &str = "application/json";
    pub const BEARER_PREFIX: &str = "Bearer ";

    /// The only status the client intercepts.
    pub const UNAUTHORIZED: u16 = 401;
}

pub mod token {
    use serde::{Deserialize, Serialize};

    /// An opaque session credential, as persisted by the login flow.
    ///
    /// A token is never empty: an empty stored string counts as no token at
    /// all, the same way the browser treats it as falsy.
    #[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(try_from = "String", into = "String")]
    pub struct Token(String);

    impl Token {
        pub fn parse(raw: impl Into<String>) -> Option<Self> {
            let raw = raw.into();
            if raw.is_empty() {
                None
            } else {
                Some(Token(raw))
            }
        }

        pub fn as_str(&self) -> &str {
            &self.0
        }

        /// Value of the `Authorization` header carrying this token.
        pub fn bearer(&self) -> String {
            format!("{}{}", crate::consts::BEARER_PREFIX, self.0)
        }
    }

    impl std::fmt::Debug for Token {
        fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("Token(<redacted>)")
        }
    }

    impl TryFrom<String> for Token {
        type Error = &'static str;
        fn try_from(raw: String) -> Result<Self, Self::Error> {
            Token::parse(raw).ok_or("empty session token")
        }
    }

    impl From<Token> for String {
        fn from(token: Token) -> String {
            token.0
        }
    }
}

pub mod options {
    use crate::Headers;
    use serde::{Deserialize, Serialize};
    use serde_json::{Map, Value};

    /// Options of a single request, in the shape of a `fetch` init object.
    ///
    /// `method`, `headers` and `body` are the fields the client looks at.
    /// Everything else lives in `extra` and is handed to the transport as
    /// is. Its type belongs to the transport: a JSON map by default, the raw
    /// caller object in the browser.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    pub struct RequestOptions<X = Map<String, Value>> {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub method: Option<String>,
        #[serde(default, skip_serializing_if = "Headers::is_empty")]
        pub headers: Headers,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub body: Option<String>,
        #[serde(flatten)]
        pub extra: X,
    }

    impl RequestOptions {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
            self.extra.insert(key.into(), value.into());
            self
        }
    }

    impl<X> RequestOptions<X> {
        pub fn method(mut self, method: impl Into<String>) -> Self {
            self.method = Some(method.into());
            self
        }

        pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
            self.headers.insert(name, value);
            self
        }

        pub fn body(mut self, body: impl Into<String>) -> Self {
            self.body = Some(body.into());
            self
        }

        pub fn json<T: Serialize>(self, value: &T) -> Result<Self, serde_json::Error> {
            Ok(self.body(serde_json::to_string(value)?))
        }
    }
}

pub mod outcome {
    /// Why the client sent the user to the login view instead of returning a
    /// response.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display)]
    pub enum RedirectReason {
        #[display("no session token is stored")]
        MissingToken,
        #[display("the server rejected the session token")]
        Unauthorized,
    }

    /// Result of an authenticated request that reached no transport error.
    #[derive(Debug)]
    pub enum Outcome<R> {
        /// The session is gone and the login view was requested. There is no
        /// response to look at.
        Redirected(RedirectReason),
        /// The server answered with something other than 401.
        Completed(R),
    }

    impl<R> Outcome<R> {
        pub fn completed(self) -> Option<R> {
            match self {
                Outcome::Completed(response) => Some(response),
                Outcome::Redirected(_) => None,
            }
        }

        pub fn redirect_reason(&self) -> Option<RedirectReason> {
            match self {
                Outcome::Redirected(reason) => Some(*reason),
                Outcome::Completed(_) => None,
            }
        }

        pub fn is_redirected(&self) -> bool {
            matches!(self, Outcome::Redirected(_))
        }

        pub fn map<S>(self, f: impl FnOnce(R) -> S) -> Outcome<S> {
            match self {
                Outcome::Completed(response) => Outcome::Completed(f(response)),
                Outcome::Redirected(reason) => Outcome::Redirected(reason),
            }
        }
    }
}

pub mod settings {
    use serde::{Deserialize, Serialize};

    /// Where the session lives and where to send the user when it is gone.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Settings {
        /// Storage key of the session token.
        pub token_key: String,
        /// Page the user is sent to when there is no valid session.
        pub login_path: String,
        /// Prefix of the auth endpoints, e.g. `https://example.org`.
        pub api_root: String,
    }

    impl Default for Settings {
        fn default() -> Self {
            Self {
                token_key: "token".into(),
                login_path: "/login.html".into(),
                api_root: "".into(),
            }
        }
    }

    impl Settings {
        pub fn endpoint(&self, path: &str) -> String {
            format!("{}{}", self.api_root.trim_end_matches('/'), path)
        }
    }
}

pub mod auth {
    use serde::{Deserialize, Serialize};

    pub const SIGN_IN_PATH: &str = "/api/auth/signin";
    pub const SIGN_UP_PATH: &str = "/api/auth/signup";

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct SignInRequest {
        pub email: String,
        pub password: String,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SignUpRequest {
        pub email: String,
        pub password: String,
        pub full_name: String,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct AuthResponse {
        pub token: String,
        pub email: String,
        #[serde(default)]
        pub full_name: Option<String>,
    }
}

pub use auth::{AuthResponse, SignInRequest, SignUpRequest};
pub use options::RequestOptions;
pub use outcome::{Outcome, RedirectReason};
pub use settings::Settings;
pub use token::Token;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_token_is_no_token() {
        assert!(Token::parse("").is_none());
        assert_eq!(Token::parse("abc123").unwrap().bearer(), "Bearer abc123");
    }

    #[test]
    fn token_debug_is_redacted() {
        let token = Token::parse("secret").unwrap();
        assert!(!format!("{:?}", token).contains("secret"));
    }

    #[test]
    fn options_keep_unknown_fields() {
        let options: RequestOptions = serde_json::from_value(json!({
            "method": "POST",
            "headers": { "X-Trace": "1" },
            "body": "{}",
            "credentials": "include",
            "mode": "cors",
        }))
        .unwrap();
        assert_eq!(options.method.as_deref(), Some("POST"));
        assert_eq!(options.headers.get("x-trace"), Some("1"));
        assert_eq!(options.body.as_deref(), Some("{}"));
        assert_eq!(options.extra.len(), 2);
        assert_eq!(options.extra["credentials"], json!("include"));
    }

    #[test]
    fn header_values_are_coerced_like_fetch() {
        let options: RequestOptions = serde_json::from_value(json!({
            "headers": { "X-Count": 5, "X-Flag": true, "X-List": ["a", 1, null] },
        }))
        .unwrap();
        assert_eq!(options.headers.get("X-Count"), Some("5"));
        assert_eq!(options.headers.get("X-Flag"), Some("true"));
        assert_eq!(options.headers.get("X-List"), Some("a,1,"));
    }

    #[test]
    fn null_headers_are_no_headers() {
        let options: RequestOptions =
            serde_json::from_value(json!({ "headers": null, "mode": "cors" })).unwrap();
        assert!(options.headers.is_empty());
        assert_eq!(options.extra["mode"], json!("cors"));
    }

    #[test]
    fn empty_options_deserialize() {
        let options: RequestOptions = serde_json::from_value(json!({})).unwrap();
        assert_eq!(options, RequestOptions::default());
    }

    #[test]
    fn settings_fill_missing_fields() {
        let settings: Settings =
            serde_json::from_value(json!({ "api_root": "https://example.org/" })).unwrap();
        assert_eq!(settings.token_key, "token");
        assert_eq!(settings.login_path, "/login.html");
        assert_eq!(
            settings.endpoint(auth::SIGN_IN_PATH),
            "https://example.org/api/auth/signin"
        );
    }

    #[test]
    fn auth_response_is_camel_case() {
        let response: AuthResponse = serde_json::from_value(json!({
            "token": "t",
            "email": "a@b.c",
            "fullName": "Ada",
        }))
        .unwrap();
        assert_eq!(response.full_name.as_deref(), Some("Ada"));
        let request = SignUpRequest {
            email: "a@b.c".into(),
            password: "pw".into(),
            full_name: "Ada".into(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "email": "a@b.c", "password": "pw", "fullName": "Ada" })
        );
    }

    #[test]
    fn outcome_helpers() {
        let outcome: Outcome<u16> = Outcome::Completed(200);
        assert_eq!(outcome.map(|s| s + 1).completed(), Some(201));
        let outcome: Outcome<u16> = Outcome::Redirected(RedirectReason::Unauthorized);
        assert!(outcome.is_redirected());
        assert_eq!(outcome.redirect_reason(), Some(RedirectReason::Unauthorized));
    }
}
