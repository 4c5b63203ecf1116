//! In-memory transport for unit tests

use async_trait::async_trait;
use senwork_transport::{HttpRequest, HttpResponse, Result, Transport, TransportError};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

type Responder = dyn Fn(&HttpRequest) -> Result<HttpResponse> + Send + Sync;

/// Records every request and answers with a caller-supplied closure.
pub(crate) struct MockTransport {
    responder: Box<Responder>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub(crate) fn new<F>(responder: F) -> Arc<Self>
    where
        F: Fn(&HttpRequest) -> Result<HttpResponse> + Send + Sync + 'static,
    {
        Arc::new(Self {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Always answer `status` with `body` serialized as JSON.
    pub(crate) fn json(status: u16, body: Value) -> Arc<Self> {
        Self::new(move |_| Ok(json_response(status, &body)))
    }

    /// Always answer `status` with a plain-text body.
    pub(crate) fn text(status: u16, body: &'static str) -> Arc<Self> {
        Self::new(move |_| Ok(text_response(status, body)))
    }

    /// Always fail before a response arrives.
    pub(crate) fn unreachable() -> Arc<Self> {
        Self::new(|_| Err(TransportError::Connection("connection refused".to_string())))
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

pub(crate) fn text_response(status: u16, body: impl Into<String>) -> HttpResponse {
    HttpResponse::new(status, HashMap::new(), body.into().into_bytes())
}

pub(crate) fn json_response(status: u16, body: &Value) -> HttpResponse {
    let mut headers = HashMap::new();
    headers.insert("content-type".to_string(), "application/json".to_string());
    HttpResponse::new(status, headers, serde_json::to_vec(body).unwrap())
}

#[async_trait]
impl Transport for MockTransport {
    async fn send_http(&self, request: HttpRequest) -> Result<HttpResponse> {
        let response = (self.responder)(&request);
        self.requests.lock().unwrap().push(request);
        response
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
