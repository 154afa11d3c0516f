use cors_gate::{Request, Response};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Downstream handler stand-in that records how often it ran.
#[derive(Clone)]
pub struct Downstream {
    calls: Arc<AtomicUsize>,
    status: u16,
    headers: Vec<(String, String)>,
}

impl Downstream {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            status: 200,
            headers: Vec::new(),
        }
    }

    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn respond(&self, _request: Request) -> Response {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.headers.iter().fold(
            <Response as cors_gate::CorsResponse>::with_status(self.status),
            |response, (name, value)| response.with_header(name.as_str(), value.as_str()),
        )
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}
