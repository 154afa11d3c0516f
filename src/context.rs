use crate::constants::{header, method};
use crate::request::CorsRequest;

/// State of the request's `Origin` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginHeader<'a> {
    Missing,
    /// Present, but the value is not valid UTF-8.
    Unreadable,
    Value(&'a str),
}

impl<'a> OriginHeader<'a> {
    pub fn from_request<R>(request: &'a R) -> Self
    where
        R: CorsRequest + ?Sized,
    {
        match request.header(header::ORIGIN) {
            Some(value) => Self::Value(value),
            None if request.has_header(header::ORIGIN) => Self::Unreadable,
            None => Self::Missing,
        }
    }

    pub fn value(&self) -> Option<&'a str> {
        match *self {
            Self::Value(value) => Some(value),
            Self::Missing | Self::Unreadable => None,
        }
    }
}

impl<'a> From<Option<&'a str>> for OriginHeader<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(Self::Missing, Self::Value)
    }
}

/// The parts of a request the gate reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: OriginHeader<'a>,
    pub access_control_request_method: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn from_request<R>(request: &'a R) -> Self
    where
        R: CorsRequest + ?Sized,
    {
        Self {
            method: request.method(),
            origin: OriginHeader::from_request(request),
            access_control_request_method: request.header(header::ACCESS_CONTROL_REQUEST_METHOD),
        }
    }

    /// Method names are case-sensitive; only `OPTIONS` starts a preflight.
    pub fn is_preflight(&self) -> bool {
        self.method == method::OPTIONS
    }
}
