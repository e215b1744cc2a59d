//! Scripted in-process transport

use ai_lib_lite::transport::{HttpRequest, HttpResponse, Transport, TransportError};
use std::sync::{Arc, Mutex};

/// Returns a fixed reply for every request and records what was sent.
pub struct FakeTransport {
    reply: Reply,
    requests: Mutex<Vec<HttpRequest>>,
}

enum Reply {
    Response(HttpResponse),
    Fail(String),
}

impl FakeTransport {
    pub fn respond(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Response(HttpResponse {
                status,
                body: body.to_string(),
            }),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn fail(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Fail(message.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The only request sent, with its body parsed as JSON.
    pub fn single_request(&self) -> (HttpRequest, serde_json::Value) {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        let request = requests.into_iter().next().unwrap();
        let body = serde_json::from_str(&request.body).expect("request body is JSON");
        (request, body)
    }
}

impl Transport for FakeTransport {
    fn post(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        match &self.reply {
            Reply::Response(resp) => Ok(resp.clone()),
            Reply::Fail(message) => Err(TransportError::Other(message.clone())),
        }
    }
}
