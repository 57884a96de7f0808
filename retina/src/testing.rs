//! Test doubles for the transport and storage seams.
//!
//! Compiled for this crate's tests and, behind the `testing` feature, for
//! downstream crates that want to drive the core without a browser.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ApiError;
use crate::http::{ApiRequest, ApiResponse, Transport};
use crate::storage::{BrowserStores, MemoryCookies, MemoryStore, SessionVault};

/// Replays queued responses in order and records every request it sees.
/// Once the queue is empty every send fails with a transport error.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(responses: impl IntoIterator<Item = Result<ApiResponse, ApiError>>) -> Self {
        Self { responses: RefCell::new(responses.into_iter().collect()), requests: RefCell::default() }
    }

    /// Queue a JSON response.
    pub fn push_json(&self, status: u16, body: &Value) {
        self.responses.borrow_mut().push_back(Ok(ApiResponse::new(status, body.to_string())));
    }

    /// Queue a transport failure.
    pub fn push_failure(&self, reason: &str) {
        self.responses.borrow_mut().push_back(Err(ApiError::Transport(reason.to_owned())));
    }

    #[must_use]
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".to_owned())))
    }
}

/// In-memory stores with typed handles kept for assertions.
pub struct TestStores {
    pub local: Rc<MemoryStore>,
    pub session: Rc<MemoryStore>,
    pub cookies: Rc<MemoryCookies>,
}

impl TestStores {
    #[must_use]
    pub fn new() -> Self {
        Self {
            local: Rc::new(MemoryStore::new()),
            session: Rc::new(MemoryStore::new()),
            cookies: Rc::new(MemoryCookies::default()),
        }
    }

    #[must_use]
    pub fn stores(&self) -> BrowserStores {
        BrowserStores::new(self.local.clone(), self.session.clone(), self.cookies.clone())
    }

    #[must_use]
    pub fn vault(&self) -> SessionVault {
        SessionVault::new(self.stores())
    }
}

impl Default for TestStores {
    fn default() -> Self {
        Self::new()
    }
}
