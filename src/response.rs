use crate::constants::status;
use crate::headers::Headers;
use http::header::{HeaderName, HeaderValue};
use tracing::warn;

/// Response the gate can create and stamp headers on.
pub trait CorsResponse {
    /// Builds an empty response carrying `status`.
    fn with_status(status: u16) -> Self
    where
        Self: Sized;

    fn status(&self) -> u16;

    fn set_status(&mut self, status: u16);

    fn header(&self, name: &str) -> Option<&str>;

    /// Replaces every existing value of `name`.
    fn set_header(&mut self, name: &str, value: &str);

    fn append_header(&mut self, name: &str, value: &str);

    /// Overwrites each header in `headers`; others are left as they are.
    fn apply_headers(&mut self, headers: &Headers) {
        for (name, value) in headers.iter() {
            self.set_header(name, value);
        }
    }
}

/// Owned response value. Defaults to `200` with no headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: u16,
    headers: Headers,
}

impl Default for Response {
    fn default() -> Self {
        Self {
            status: status::OK,
            headers: Headers::new(),
        }
    }
}

impl Response {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.set(name, value);
        self
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    pub fn into_headers(self) -> Headers {
        self.headers
    }
}

impl CorsResponse for Response {
    fn with_status(status: u16) -> Self {
        Self {
            status,
            headers: Headers::new(),
        }
    }

    fn status(&self) -> u16 {
        self.status
    }

    fn set_status(&mut self, status: u16) {
        self.status = status;
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    fn set_header(&mut self, name: &str, value: &str) {
        self.headers.set(name, value);
    }

    fn append_header(&mut self, name: &str, value: &str) {
        self.headers.append(name, value);
    }
}

impl<B: Default> CorsResponse for http::Response<B> {
    fn with_status(status: u16) -> Self {
        let mut response = http::Response::new(B::default());
        CorsResponse::set_status(&mut response, status);
        response
    }

    fn status(&self) -> u16 {
        http::Response::status(self).as_u16()
    }

    fn set_status(&mut self, status: u16) {
        match http::StatusCode::from_u16(status) {
            Ok(code) => *self.status_mut() = code,
            Err(_) => warn!(status, "ignoring invalid response status"),
        }
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers()
            .get(name)
            .and_then(|value| std::str::from_utf8(value.as_bytes()).ok())
    }

    fn set_header(&mut self, name: &str, value: &str) {
        if let Some((name, value)) = encode_header(name, value) {
            self.headers_mut().insert(name, value);
        }
    }

    fn append_header(&mut self, name: &str, value: &str) {
        if let Some((name, value)) = encode_header(name, value) {
            self.headers_mut().append(name, value);
        }
    }
}

fn encode_header(name: &str, value: &str) -> Option<(HeaderName, HeaderValue)> {
    match (HeaderName::try_from(name), HeaderValue::from_bytes(value.as_bytes())) {
        (Ok(name), Ok(value)) => Some((name, value)),
        _ => {
            warn!(header = name, "skipping header that cannot be encoded");
            None
        }
    }
}

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;
