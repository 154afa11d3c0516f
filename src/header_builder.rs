use crate::constants::header;
use crate::headers::Headers;
use crate::options::CorsOptions;
use crate::origin::OriginDecision;

pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    /// All three CORS headers for an admitted origin.
    pub(crate) fn build(&self, decision: OriginDecision<'_>) -> Headers {
        let mut headers = Headers::with_capacity(3);
        headers.extend(self.build_origin_header(decision));
        headers.extend(self.build_methods_header());
        headers.extend(self.build_allowed_headers());
        headers
    }

    pub(crate) fn build_origin_header(&self, decision: OriginDecision<'_>) -> Headers {
        let mut headers = Headers::with_capacity(1);
        headers.set(header::ACCESS_CONTROL_ALLOW_ORIGIN, decision.header_value());
        headers
    }

    pub(crate) fn build_methods_header(&self) -> Headers {
        let mut headers = Headers::with_capacity(1);
        headers.set(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            self.options.methods.header_value(),
        );
        headers
    }

    pub(crate) fn build_allowed_headers(&self) -> Headers {
        let mut headers = Headers::with_capacity(1);
        headers.set(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            self.options.headers.header_value(),
        );
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
