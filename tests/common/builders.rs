use cors_gate::constants::{header, method};
use cors_gate::{
    AllowedHeaders, AllowedMethods, AllowedOrigins, Cors, CorsDecision, CorsOptions, Request,
    RequestContext,
};

#[derive(Default)]
pub struct CorsBuilder {
    origins: Option<AllowedOrigins>,
    methods: Option<AllowedMethods>,
    headers: Option<AllowedHeaders>,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origins = Some(AllowedOrigins::list(origins));
        self
    }

    pub fn any_origin(mut self) -> Self {
        self.origins = Some(AllowedOrigins::any());
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = Some(AllowedMethods::list(methods));
        self
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = Some(AllowedHeaders::list(headers));
        self
    }

    pub fn build(self) -> Cors {
        let CorsOptions {
            origins: default_origins,
            methods: default_methods,
            headers: default_headers,
        } = CorsOptions::default();

        Cors::new(CorsOptions {
            origins: self.origins.unwrap_or(default_origins),
            methods: self.methods.unwrap_or(default_methods),
            headers: self.headers.unwrap_or(default_headers),
        })
    }
}

pub struct SimpleRequestBuilder {
    method: String,
    origin: Option<String>,
}

impl SimpleRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        let ctx = RequestContext {
            method: &self.method,
            origin: self.origin.as_deref().into(),
            access_control_request_method: None,
        };
        cors.check(&ctx)
    }

    pub fn build(self) -> Request {
        let request = Request::new(self.method);
        match self.origin {
            Some(origin) => request.with_header(header::ORIGIN, origin),
            None => request,
        }
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    origin: Option<String>,
    request_method: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        let ctx = RequestContext {
            method: method::OPTIONS,
            origin: self.origin.as_deref().into(),
            access_control_request_method: self.request_method.as_deref(),
        };
        cors.check(&ctx)
    }

    pub fn build(self) -> Request {
        let mut request = Request::new(method::OPTIONS);
        if let Some(origin) = self.origin {
            request = request.with_header(header::ORIGIN, origin);
        }
        if let Some(requested) = self.request_method {
            request = request.with_header(header::ACCESS_CONTROL_REQUEST_METHOD, requested);
        }
        request
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn simple_request() -> SimpleRequestBuilder {
    SimpleRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
