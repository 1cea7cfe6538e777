use crate::capabilities::Transport;
use crate::memory::{MemoryTokenStore, RecordingNavigator};
use crate::{AuthenticatedClient, RequestOptions, Settings, Token};

use async_trait::async_trait;
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display)]
#[display("connection refused")]
pub struct Refused;

/// Answers every request with the same response (or error) and keeps what
/// it was sent.
pub struct MockTransport {
    reply: Result<MockResponse, Refused>,
    sent: RefCell<Vec<(String, RequestOptions)>>,
}

impl MockTransport {
    pub fn replying(status: u16, body: &str) -> Self {
        Self {
            reply: Ok(MockResponse {
                status,
                body: body.to_string(),
            }),
            sent: RefCell::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: Err(Refused),
            sent: RefCell::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<(String, RequestOptions)> {
        self.sent.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    type Response = MockResponse;
    type Error = Refused;
    type Extra = serde_json::Map<String, serde_json::Value>;

    async fn send(&self, url: &str, options: RequestOptions) -> Result<MockResponse, Refused> {
        self.sent.borrow_mut().push((url.to_string(), options));
        self.reply.clone()
    }

    fn status(response: &MockResponse) -> u16 {
        response.status
    }

    async fn text(&self, response: MockResponse) -> Result<String, Refused> {
        Ok(response.body)
    }
}

pub type TestClient = AuthenticatedClient<MemoryTokenStore, RecordingNavigator, MockTransport>;

pub fn client(token: Option<&str>, transport: MockTransport) -> TestClient {
    let store = match token.and_then(Token::parse) {
        Some(token) => MemoryTokenStore::with_token(token),
        None => MemoryTokenStore::new(),
    };
    AuthenticatedClient::new(
        Settings::default(),
        store,
        RecordingNavigator::new(),
        transport,
    )
}
