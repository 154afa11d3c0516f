use crate::headers::Headers;

/// Read-only view of an incoming request.
pub trait CorsRequest {
    fn method(&self) -> &str;

    /// Looks up a header by name, ignoring ASCII case. Values that are not
    /// valid UTF-8 are reported as `None`.
    fn header(&self, name: &str) -> Option<&str>;

    /// Whether the header is present at all, readable or not.
    fn has_header(&self, name: &str) -> bool {
        self.header(name).is_some()
    }
}

/// Minimal owned request, useful for tests and non-`http` transports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: String,
    headers: Headers,
}

impl Request {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            headers: Headers::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.set(name, value);
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }
}

impl CorsRequest for Request {
    fn method(&self) -> &str {
        &self.method
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }
}

impl<B> CorsRequest for http::Request<B> {
    fn method(&self) -> &str {
        http::Request::method(self).as_str()
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers()
            .get(name)
            .and_then(|value| std::str::from_utf8(value.as_bytes()).ok())
    }

    fn has_header(&self, name: &str) -> bool {
        self.headers().contains_key(name)
    }
}

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;
