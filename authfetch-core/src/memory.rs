//! In-memory capabilities, for hosts without a browser and for tests.

use crate::capabilities::{Navigator, TokenStore};
use crate::Token;

use std::cell::RefCell;

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<Token>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: Token) -> Self {
        Self {
            token: RefCell::new(Some(token)),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<Token> {
        self.token.borrow().clone()
    }
    fn set(&self, token: &Token) {
        *self.token.borrow_mut() = Some(token.clone());
    }
    fn remove(&self) {
        self.token.borrow_mut().take();
    }
}

/// Records every navigation instead of leaving.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visits: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visits.borrow_mut().push(path.to_string());
    }
}
