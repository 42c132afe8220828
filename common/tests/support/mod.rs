//! Recording transport for driving the client without a network.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use inventory_common::api::{ApiClient, ApiError, ApiRequest, ApiResponse, HttpTransport, Method};
use inventory_common::config::ClientConfig;
use serde_json::Value;

pub const BASE: &str = "http://api.test";

type Reply = Result<ApiResponse, ApiError>;

#[derive(Clone, Default)]
pub struct MockTransport {
    replies: Rc<RefCell<HashMap<(Method, String), VecDeque<Reply>>>>,
    requests: Rc<RefCell<Vec<ApiRequest>>>,
}

impl MockTransport {
    /// Queues a reply for `method path`. Replies are consumed in order; the
    /// last one queued keeps answering once the others are used up.
    pub fn reply(&self, method: Method, path: &str, reply: Reply) -> &Self {
        self.replies
            .borrow_mut()
            .entry((method, format!("{}{}", BASE, path)))
            .or_default()
            .push_back(reply);
        self
    }

    pub fn json(&self, method: Method, path: &str, body: Value) -> &Self {
        self.reply(
            method,
            path,
            Ok(ApiResponse {
                status: 200,
                body: body.to_string(),
            }),
        )
    }

    pub fn status(&self, method: Method, path: &str, status: u16) -> &Self {
        self.reply(
            method,
            path,
            Ok(ApiResponse {
                status,
                body: String::new(),
            }),
        )
    }

    pub fn offline(&self, method: Method, path: &str) -> &Self {
        self.reply(method, path, Err(ApiError::Transport("connection refused".into())))
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    /// `"METHOD path"` for every request sent, base URL stripped.
    pub fn calls(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|r| format!("{} {}", r.method, r.url.trim_start_matches(BASE)))
            .collect()
    }

    pub fn last_body(&self) -> Option<Value> {
        self.requests
            .borrow()
            .last()
            .and_then(|r| r.body.as_deref())
            .and_then(|b| serde_json::from_str(b).ok())
    }

    pub fn clear(&self) {
        self.requests.borrow_mut().clear();
    }
}

impl HttpTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request.clone());
        let mut replies = self.replies.borrow_mut();
        let Some(queue) = replies.get_mut(&(request.method, request.url.clone())) else {
            return Err(ApiError::Transport(format!("no reply stubbed for {} {}", request.method, request.url)));
        };
        match queue.len() {
            0 => Err(ApiError::Transport("reply queue empty".into())),
            1 => queue
                .front()
                .cloned()
                .unwrap_or_else(|| Err(ApiError::Transport("reply queue empty".into()))),
            _ => queue
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Transport("reply queue empty".into()))),
        }
    }
}

pub fn client() -> (ApiClient<MockTransport>, MockTransport) {
    init_logging();
    let transport = MockTransport::default();
    let client = ApiClient::new(transport.clone(), ClientConfig::new(BASE));
    (client, transport)
}

pub fn client_with(config: ClientConfig) -> (ApiClient<MockTransport>, MockTransport) {
    init_logging();
    let transport = MockTransport::default();
    (ApiClient::new(transport.clone(), config), transport)
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
